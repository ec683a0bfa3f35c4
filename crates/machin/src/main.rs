//! Pi calculator entry point
//!
//! Prints one line to stdout and exits 0. Takes no arguments and reads no
//! environment; the only way this can fail is a failed stdout write (broken
//! pipe and the like), which exits non-zero with a note on stderr.

use std::io::{self, Write};
use std::process;

fn run() -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", machin::report_line())?;
    stdout.flush()
}

fn main() {
    if let Err(e) = run() {
        eprintln!("machin: {e}");
        process::exit(1);
    }
}
