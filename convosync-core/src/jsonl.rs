//! Line-delimited JSON reading and writing for conversation logs.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{ConvoSyncError, Result};
use crate::models::record::Record;

/// Parse one record per non-blank line. `source` is only used in errors.
///
/// Lines are handled as bytes so invalid UTF-8 is reported as a malformed
/// line rather than a read failure.
pub fn read_records<R: BufRead>(reader: R, source: &Path) -> Result<Vec<Record>> {
    let mut records = Vec::new();

    for (idx, line) in reader.split(b'\n').enumerate() {
        let line = line.map_err(|e| ConvoSyncError::io(source, e))?;
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        let record = serde_json::from_slice(&line).map_err(|e| ConvoSyncError::Malformed {
            path: source.to_path_buf(),
            line: idx + 1,
            source: e,
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Write each record as compact JSON followed by a newline.
pub fn write_records<W: Write>(mut writer: W, records: &[Record]) -> std::io::Result<()> {
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

pub fn load_conversation(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ConvoSyncError::io(path, e))?;
    let records = read_records(BufReader::new(file), path)?;
    tracing::debug!(path = %path.display(), count = records.len(), "Loaded conversation");
    Ok(records)
}

/// Save records to `path`.
///
/// The data goes to a fresh temp file in the same directory which is then
/// persisted over `path`, so `path` is either left as it was or fully
/// replaced.
pub fn save_conversation(path: impl AsRef<Path>, records: &[Record]) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| ConvoSyncError::io(dir, e))?;
    write_records(BufWriter::new(tmp.as_file_mut()), records)
        .map_err(|e| ConvoSyncError::io(tmp.path(), e))?;
    tmp.persist(path)
        .map_err(|e| ConvoSyncError::io(path, e.error))?;

    tracing::debug!(path = %path.display(), count = records.len(), "Saved conversation");
    Ok(())
}
