//! Interactive prompt for the root path.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Prompt shown before reading the root path.
pub const PROMPT: &str = "Enter the directory path: ";

/// Print the prompt and read one line as the root path.
///
/// The trailing line terminator is stripped; end of input yields an empty
/// path, which the caller reports as invalid.
pub fn read_root_path(mut reader: impl BufRead, mut writer: impl Write) -> io::Result<PathBuf> {
    writeln!(writer, "{PROMPT}")?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(PathBuf::from(line.trim_end_matches(['\r', '\n'])))
}
