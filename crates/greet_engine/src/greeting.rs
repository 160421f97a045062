/* 📖 # Why a dedicated Name type?

The greeting function only makes sense for character sequences. Wrapping the
name in a newtype moves that contract into the type system: a call site that
tries to pass a number (`greet(&1)`) is rejected by the compiler, never at
runtime.

This mirrors the separation elsewhere in the workspace:
- **Data model** (Name): what a greeting is built from
- **Pure formatting** (greet): builds the greeting string, no I/O
- **Output** (write_greeting): writes the greeting to a caller-supplied writer

Keeping `greet` pure means the caller decides where the greeting goes, and
tests can assert on the exact bytes without capturing stdout.
*/

use std::fmt;
use std::io::Write;

use tracing::debug;

use greet_base::{ErrorKind, GreetError, GreetResult, ResultExt};

/// The fixed text every greeting starts with.
pub const GREETING_PREFIX: &str = "Hello, ";

/// A person's name to be greeted.
///
/// A name is an arbitrary sequence of characters. There is no validation and
/// no lifecycle: construct it once, greet with it as often as you like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Name(s.to_string())
    }
}

impl From<String> for Name {
    fn from(s: String) -> Self {
        Name(s)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Build a greeting string for the given name.
///
/// The result is always `"Hello, "` immediately followed by the name's
/// characters verbatim. The function is pure: no side effects, no failure
/// path, and equal inputs produce equal outputs.
///
/// # Examples
/// ```
/// use greet_engine::{Name, greet};
///
/// let name = Name::from("Riyaz");
/// assert_eq!(greet(&name), "Hello, Riyaz");
/// ```
pub fn greet(name: &Name) -> String {
    format!("{}{}", GREETING_PREFIX, name)
}

/// Write the greeting for `name`, followed by a newline, to `out`.
///
/// This is the seam between the pure formatting logic and the outside world.
/// Write failures are propagated as `ErrorKind::Io`.
pub fn write_greeting(out: &mut impl Write, name: &Name) -> GreetResult<()> {
    let greeting = greet(name);
    debug!(name = %name, "writing greeting");
    writeln!(out, "{}", greeting)
        .map_err(|source| Box::new(GreetError::new(ErrorKind::Io { source })))
        .with_context(|| format!("failed to write greeting for {}", name))
}
