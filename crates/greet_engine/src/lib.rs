pub mod greeting;

pub use greeting::{GREETING_PREFIX, Name, greet, write_greeting};
