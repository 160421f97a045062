/* 📖 # Why is the CLI minimal and hardcoded?

The CLI is intentionally kept minimal with no argument parsing or configuration
options. This approach:

1. **Reduces complexity**: No clap or similar dependency needed
2. **Simplifies testing**: Just run `greet`
3. **Clear conventions**: The greeted name is a compile-time constant
4. **Fast iteration**: Can add arguments later when use cases emerge

The workflow is straightforward:
1. Run `greet`
2. One line is written to standard output

Exit codes:
- 0: Success (greeting written)
- 1: Error (writing to standard output failed)
*/

use std::io;
use std::process;

use greet_base::tracing::init_tracing;
use greet_engine::{write_greeting, Name};
use tracing::debug;

/// The name greeted by the shipped binary.
const USER: &str = "Riyaz";

fn main() {
    init_tracing().unwrap();

    let name = Name::from(USER);

    // A numeric argument would not compile: Name is only constructible from
    // character sequences, so the type checker rejects the call before the
    // program runs.
    // let name = Name::from(1);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_greeting(&mut out, &name) {
        eprintln!("Error: Failed to write greeting: {}", e);
        process::exit(1);
    }

    debug!("greeting written");
}
