//! Hex text serialization of packed buffers.
//!
//! One byte per line, two uppercase hex digits, `\n` terminated. This is the
//! layout `$readmemh` and most firmware asset loaders accept directly.

use std::fmt::Write as _;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::{EpdError, Result};

/// Write each byte as `XX\n`.
pub fn write_hex<W: Write>(writer: &mut W, bytes: &[u8]) -> io::Result<()> {
    for byte in bytes {
        writeln!(writer, "{byte:02X}")?;
    }
    Ok(())
}

/// Encode bytes into the hex text format in memory.
pub fn encode_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for byte in bytes {
        // Writing to a String cannot fail
        let _ = writeln!(out, "{byte:02X}");
    }
    out
}

/// Write the hex text file at `path`.
///
/// The data goes to a temporary file in the destination directory which is
/// renamed over `path` only after it has been fully written and flushed, so a
/// failed run never leaves a truncated file behind.
pub fn write_hex_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let to_write_error = |source: io::Error| EpdError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let tmp = tempfile::Builder::new()
        .prefix(".epd-hex-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(to_write_error)?;

    {
        let mut writer = BufWriter::new(tmp.as_file());
        write_hex(&mut writer, bytes).map_err(to_write_error)?;
        writer.flush().map_err(to_write_error)?;
    }
    tmp.as_file().sync_all().map_err(to_write_error)?;

    tmp.persist(path).map_err(|e| to_write_error(e.error))?;

    debug!(path = %path.display(), lines = bytes.len(), "Wrote hex file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_hex_format() {
        assert_eq!(encode_hex(&[0x00, 0xAA, 0x0f, 0xFF]), "00\nAA\n0F\nFF\n");
    }

    #[test]
    fn test_encode_hex_empty() {
        assert_eq!(encode_hex(&[]), "");
    }

    #[test]
    fn test_write_hex_matches_encode_hex() {
        let bytes: Vec<u8> = (0..=255).collect();
        let mut out = Vec::new();
        write_hex(&mut out, &bytes).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, encode_hex(&bytes));
        assert_eq!(text.lines().count(), 256);
        assert!(
            text.lines()
                .all(|l| l.len() == 2 && l.chars().all(|c| matches!(c, '0'..='9' | 'A'..='F')))
        );
    }

    #[test]
    fn test_write_hex_file_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image.hex");

        write_hex_file(&path, &[0x12, 0xAB]).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "12\nAB\n");
        // No temporary files left behind
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_write_hex_file_replaces_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image.hex");
        std::fs::write(&path, "stale contents that are longer\n").unwrap();

        write_hex_file(&path, &[0xFF]).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "FF\n");
    }

    #[test]
    fn test_write_hex_file_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("image.hex");

        let err = write_hex_file(&path, &[0x00]).unwrap_err();
        match err {
            EpdError::Write { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected Write, got {other:?}"),
        }
        assert!(!path.exists());
    }
}
