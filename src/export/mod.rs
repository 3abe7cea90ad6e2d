//! Modell-Export: Serialisierung des Ribbon-Meshes und ZIP-Verpackung.
//!
//! Eine Pipeline, austauschbare Serialisierer pro `ModelFormat`.
//! Alle Indizes in den Textformaten sind 1-basiert.

pub mod archive;
pub mod obj;
pub mod rwx;

use crate::error::RoadError;
use crate::mesh::RibbonMesh;
use crate::shared::{ModelFormat, RoadOptions};
use std::path::PathBuf;

/// Ziel eines Exports: Archivpfad, Format und Material-Angaben.
///
/// Der Pfad wird vom Aufrufer vorgegeben; der Exporter erfindet keine Pfade.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTarget {
    /// Pfad des zu schreibenden ZIP-Archivs
    pub archive_path: PathBuf,
    /// Basisname des Modells (Fallback für den Eintragsnamen)
    pub model_name: String,
    /// Textformat des Archiv-Eintrags
    pub format: ModelFormat,
    /// Textur im RWX-Header
    pub texture: String,
}

impl ExportTarget {
    /// Leitet das Ziel aus den Optionen ab: `<output_dir>/<model_name>.zip`.
    pub fn from_options(options: &RoadOptions) -> Self {
        Self {
            archive_path: options
                .output_dir
                .join(format!("{}.zip", options.model_name)),
            model_name: options.model_name.clone(),
            format: options.format,
            texture: options.texture.clone(),
        }
    }

    /// Name des einzigen Archiv-Eintrags: Basisname + Formatendung.
    pub fn entry_name(&self) -> String {
        let stem = self
            .archive_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.model_name);
        format!("{}.{}", stem, self.format.extension())
    }
}

impl RoadOptions {
    /// Exportziel dieser Optionen (siehe [`ExportTarget::from_options`]).
    pub fn export_target(&self) -> ExportTarget {
        ExportTarget::from_options(self)
    }
}

/// Ergebnis eines erfolgreichen Exports.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportReport {
    pub archive_path: PathBuf,
    pub entry_name: String,
    pub vertex_count: usize,
    pub face_count: usize,
}

/// Serialisiert ein Mesh im gewünschten Format.
pub fn serialize_mesh(mesh: &RibbonMesh, format: ModelFormat, texture: &str) -> String {
    match format {
        ModelFormat::Rwx => rwx::write_rwx(mesh, texture),
        ModelFormat::Obj => obj::write_obj(mesh),
    }
}

/// Serialisiert das Mesh und schreibt es als einzigen Eintrag ins Archiv.
pub fn export_mesh(mesh: &RibbonMesh, target: &ExportTarget) -> Result<ExportReport, RoadError> {
    let content = serialize_mesh(mesh, target.format, &target.texture);
    let entry_name = target.entry_name();

    archive::write_single_entry_archive(&target.archive_path, &entry_name, content.as_bytes())?;

    log::info!(
        "Modell exportiert: {} ({} Vertices, {} Faces) → {}",
        entry_name,
        mesh.vertex_count(),
        mesh.face_count(),
        target.archive_path.display()
    );

    Ok(ExportReport {
        archive_path: target.archive_path.clone(),
        entry_name,
        vertex_count: mesh.vertex_count(),
        face_count: mesh.face_count(),
    })
}

/// Formatiert eine Koordinate mit 6 Nachkommastellen.
pub(crate) fn format_coord(value: f64) -> String {
    format!("{:.6}", normalize_zero(value))
}

/// Formatiert eine Texturkoordinate mit 4 Nachkommastellen.
pub(crate) fn format_uv(value: f64) -> String {
    format!("{:.4}", normalize_zero(value))
}

/// Vermeidet `-0.000000` in der Ausgabe.
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
