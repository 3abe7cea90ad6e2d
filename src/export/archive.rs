//! ZIP-Verpackung des Modells als Archiv mit genau einem Eintrag.

use crate::error::RoadError;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::CompressionMethod;

/// Schreibt `content` als einzigen Eintrag `entry_name` nach `archive_path`.
///
/// Das Archiv wird komplett im Speicher aufgebaut, in eine `.part`-Datei
/// daneben geschrieben und erst danach umbenannt. Schlägt ein Schritt vor
/// dem Umbenennen fehl, bleibt eine bestehende Datei am Zielpfad unverändert.
pub fn write_single_entry_archive(
    archive_path: &Path,
    entry_name: &str,
    content: &[u8],
) -> Result<(), RoadError> {
    let bytes = build_archive(entry_name, content).map_err(|source| RoadError::Archive {
        path: archive_path.to_path_buf(),
        source,
    })?;

    let part_path = part_path(archive_path);
    if let Err(source) = std::fs::write(&part_path, &bytes) {
        // Teilweise geschriebene Datei nicht liegen lassen
        let _ = std::fs::remove_file(&part_path);
        return Err(RoadError::ExportIo {
            path: part_path,
            source,
        });
    }

    if let Err(source) = std::fs::rename(&part_path, archive_path) {
        // Teildatei nicht liegen lassen
        let _ = std::fs::remove_file(&part_path);
        return Err(RoadError::ExportIo {
            path: archive_path.to_path_buf(),
            source,
        });
    }

    log::debug!(
        "ZIP '{}' geschrieben ({} Bytes, Eintrag '{}')",
        archive_path.display(),
        bytes.len(),
        entry_name
    );
    Ok(())
}

/// Baut das ZIP-Archiv in-memory.
fn build_archive(entry_name: &str, content: &[u8]) -> zip::result::ZipResult<Vec<u8>> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    writer.start_file(entry_name, options)?;
    writer.write_all(content)?;
    Ok(writer.finish()?.into_inner())
}

fn part_path(archive_path: &Path) -> PathBuf {
    let mut name = archive_path.as_os_str().to_os_string();
    name.push(".part");
    PathBuf::from(name)
}
