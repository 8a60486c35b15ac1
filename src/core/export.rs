// LaunchPal - core/export.rs
//
// Plain-text and JSON export of the chat transcript.
// Core layer: writes to any Write trait object.

use crate::core::model::TranscriptLine;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Export transcript lines as plain text.
///
/// Writes one `[HH:MM:SS] <display text>` line per transcript line.
pub fn export_text<W: Write>(
    lines: &[TranscriptLine],
    mut writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let io_err = |e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    };

    for line in lines {
        writeln!(
            writer,
            "[{}] {}",
            line.timestamp.format("%H:%M:%S"),
            line.display_text()
        )
        .map_err(io_err)?;
    }
    writer.flush().map_err(io_err)?;

    Ok(lines.len())
}

/// Export transcript lines as a pretty-printed JSON array.
pub fn export_json<W: Write>(
    lines: &[TranscriptLine],
    mut writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(&mut writer, lines).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(lines.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Speaker;

    fn sample() -> Vec<TranscriptLine> {
        vec![
            TranscriptLine::new(Speaker::User, "open paint"),
            TranscriptLine::new(Speaker::Status, "Opening Paint..."),
        ]
    }

    #[test]
    fn test_export_text() {
        let mut buf = Vec::new();
        let count = export_text(&sample(), &mut buf, Path::new("out.txt")).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        let rows: Vec<&str> = output.lines().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].ends_with("] You: open paint"), "row: {}", rows[0]);
        assert!(rows[1].ends_with("] Opening Paint..."), "row: {}", rows[1]);
        assert!(rows[0].starts_with('['));
    }

    #[test]
    fn test_export_json() {
        let mut buf = Vec::new();
        let count = export_json(&sample(), &mut buf, Path::new("out.json")).unwrap();
        assert_eq!(count, 2);

        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let arr = parsed.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0]["speaker"], "user");
        assert_eq!(arr[1]["speaker"], "status");
        assert_eq!(arr[1]["text"], "Opening Paint...");
        assert!(arr[0]["timestamp"].is_string());
        assert!(arr[0].get("is_error").is_none());
    }

    #[test]
    fn test_export_empty_transcript() {
        let mut buf = Vec::new();
        assert_eq!(export_text(&[], &mut buf, Path::new("x")).unwrap(), 0);
        assert!(buf.is_empty());
    }
}
