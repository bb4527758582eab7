//! Input helpers for interactive commands.

use std::io::BufRead;

/// Reads one line and trims it; `None` on EOF or read error.
///
/// ```rust
/// use std::io::Cursor;
/// # use wildcard_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new(b"  3 red \n".to_vec());
/// assert_eq!(read_stdin_line(&mut input).as_deref(), Some("3 red"));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}
