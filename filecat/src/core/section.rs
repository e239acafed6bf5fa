//! Byte layout of one output section.

use std::path::Path;

/// Written in place of a file's content when it cannot be read or appended.
pub const ERROR_PLACEHOLDER: &str = "# Error reading file content.";

/// Header preceding each file: two newlines, the marker line, one newline.
pub fn header(path: &Path) -> String {
    format!("\n\n=== File: {} ===\n", path.display())
}

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Content lines, each terminated by `\n`. CRLF line endings are normalized.
///
/// Bytes are copied as-is apart from a leading UTF-8 byte order mark, so
/// files in legacy code pages come through unchanged.
pub fn body(content: &[u8]) -> Vec<u8> {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
    let mut out = Vec::with_capacity(content.len() + 1);
    if content.is_empty() {
        return out;
    }
    let content = content.strip_suffix(b"\n").unwrap_or(content);
    for line in content.split(|byte| *byte == b'\n') {
        out.extend_from_slice(line.strip_suffix(b"\r").unwrap_or(line));
        out.push(b'\n');
    }
    out
}

pub fn placeholder() -> String {
    format!("{ERROR_PLACEHOLDER}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_layout() {
        assert_eq!(
            header(Path::new("/r/x.ps1")),
            "\n\n=== File: /r/x.ps1 ===\n"
        );
    }

    #[test]
    fn body_terminates_every_line() {
        assert_eq!(body(b"a\r\nb"), b"a\nb\n");
        assert_eq!(body(b"a\n\nb\n"), b"a\n\nb\n");
        assert_eq!(body(b"\n"), b"\n");
        assert_eq!(body(b""), b"");
    }

    #[test]
    fn body_keeps_non_utf8_bytes() {
        assert_eq!(body(b"echo caf\xe9\r\n"), b"echo caf\xe9\n");
    }

    #[test]
    fn body_strips_leading_bom_only() {
        assert_eq!(body(b"\xef\xbb\xbfecho bom\r\n"), b"echo bom\n");
        assert_eq!(body(b"\xef\xbb\xbf"), b"");
        assert_eq!(body(b"x\n\xef\xbb\xbfy"), b"x\n\xef\xbb\xbfy\n");
    }

    #[test]
    fn placeholder_is_one_line() {
        assert_eq!(placeholder(), "# Error reading file content.\n");
    }
}
