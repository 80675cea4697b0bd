//! Reading source text into logical lines.

use crate::error::{PdfError, Result};
use std::fs;
use std::path::Path;

/// Reads a UTF-8 text file and splits it into lines.
///
/// Any failure to open or decode the file is reported as
/// [`PdfError::InputUnavailable`] carrying the path.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| PdfError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let lines = split_lines(&text);
    tracing::debug!(path = %path.display(), lines = lines.len(), "read input");
    Ok(lines)
}

/// Splits text on `\n`, `\r\n` and lone `\r`. A leading byte order mark is
/// dropped and a final line terminator does not produce an extra line.
pub fn split_lines(text: &str) -> Vec<String> {
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    if text.contains('\r') {
        text.replace("\r\n", "\n")
            .replace('\r', "\n")
            .lines()
            .map(str::to_string)
            .collect()
    } else {
        text.lines().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_split_line_endings() {
        assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b"]);
        assert_eq!(split_lines("\r\n"), vec![""]);
    }

    #[test]
    fn test_split_empty_text() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_split_drops_byte_order_mark() {
        assert_eq!(split_lines("\u{FEFF}title\nbody"), vec!["title", "body"]);
    }

    #[test]
    fn test_read_lines_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "first\n\n  third  \n").unwrap();

        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["first", "", "  third  "]);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        match read_lines(&missing).unwrap_err() {
            PdfError::InputUnavailable { path, source } => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected InputUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_is_unavailable() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[b'o', b'k', 0xFF, 0xFE]).unwrap();

        let error = read_lines(file.path()).unwrap_err();
        assert!(matches!(error, PdfError::InputUnavailable { .. }));
    }
}
