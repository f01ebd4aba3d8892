//! Line-oriented I/O for the CLI
//!
//! - Input: one JSON request per line; blank lines are skipped
//! - Output: one JSON response per line
//! - A line that is not UTF-8 is handed back as such, not as a read failure

use std::io::{BufRead, Write};
use std::iter;
use std::string::FromUtf8Error;

use crate::api::Response;
use crate::schema::Record;

use super::errors::{CliError, CliResult};

/// Iterate non-blank request lines from a reader.
///
/// The outer result is a read failure and ends the stream for the caller.
/// The inner result is the line's decoding.
pub fn read_requests<R: BufRead>(
    mut reader: R,
) -> impl Iterator<Item = CliResult<Result<String, FromUtf8Error>>> {
    let mut buf = Vec::new();
    iter::from_fn(move || loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => return None,
            Ok(_) => {
                let line = strip_line_ending(&buf);
                if line.iter().all(u8::is_ascii_whitespace) {
                    continue;
                }
                return Some(Ok(String::from_utf8(line.to_vec())));
            }
            Err(e) => return Some(Err(CliError::from(e))),
        }
    })
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Write one response line and flush
pub fn write_response<W: Write>(writer: &mut W, response: &Response) -> CliResult<()> {
    writeln!(writer, "{}", response.to_json())?;
    writer.flush()?;
    Ok(())
}

/// Write records one per line, in order
pub fn write_records<W: Write>(writer: &mut W, records: &[Record]) -> CliResult<()> {
    for record in records {
        writeln!(writer, "{}", record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_requests_skips_blank_lines() {
        let input = Cursor::new("{\"op\":\"list_tables\"}\n\n   \n{\"op\":\"list_tables\"}\n");
        let lines: Vec<_> = read_requests(input).collect::<CliResult<_>>().unwrap();
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_read_requests_keeps_going_past_bad_utf8() {
        let input = Cursor::new(b"first\r\n\xff\xfe\nlast".to_vec());
        let lines: Vec<_> = read_requests(input).collect::<CliResult<_>>().unwrap();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].as_deref(), Ok("first"));
        assert!(lines[1].is_err());
        assert_eq!(lines[2].as_deref(), Ok("last"));
    }

    #[test]
    fn test_write_response_is_one_line() {
        let mut out = Vec::new();
        write_response(&mut out, &Response::ok()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\"status\":\"ok\",\"data\":null}\n");
    }

    #[test]
    fn test_write_records() {
        let records = vec![
            Record::new().with("id", 1).with("value", "hello"),
            Record::new().with("id", 2).with("value", "world"),
        ];
        let mut out = Vec::new();
        write_records(&mut out, &records).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{id: 1, value: \"hello\"}\n{id: 2, value: \"world\"}\n"
        );
    }
}
