/* 📖 # Why have greet_base as a core library?
greet_base provides the foundational error handling and tracing setup used across all crates.
This ensures consistency in error handling and prevents circular dependencies between crates.
*/

pub mod error;
pub mod tracing;

// Re-export commonly used types for convenience
pub use error::{ErrorKind, GreetError, GreetResult, ResultExt};
