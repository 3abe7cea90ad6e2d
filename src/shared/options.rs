//! Zentrale Konfiguration für den Straßen-Generator.
//!
//! `RoadOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::ModelFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Geometrie ───────────────────────────────────────────────────────

/// Standard-Straßenbreite in Welteinheiten.
pub const ROAD_WIDTH: f64 = 1.0;
/// Standard-Texturkachelung entlang der Straße.
pub const UV_SCALE_Y: f64 = 1.0;
/// Standard-Abtastauflösung pro Spline-Segment.
pub const SEGMENTS_PER_SPAN: u32 = 20;

// ── Session ─────────────────────────────────────────────────────────

/// Beschreibungs-Tag, an dem Straßen-Wegpunkte erkannt werden.
pub const ROAD_NODE_TAG: &str = "roadnode";
/// Standard-Modellname (Basisname von Archiv und Eintrag).
pub const MODEL_NAME: &str = "road";
/// Standard-Textur im RWX-Header.
pub const TEXTURE_NAME: &str = "Tile31";

/// Geometrie-Parameter des Ribbon-Meshes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryConfig {
    /// Straßenbreite (> 0)
    pub road_width: f64,
    /// Texturkachelung entlang der Straße (> 0)
    pub uv_scale_y: f64,
    /// Abtastpunkte pro Spline-Segment (≥ 1)
    pub segments_per_span: u32,
    /// Unterseite zusätzlich mit umgekehrter Windung ausgeben
    #[serde(default)]
    pub double_sided: bool,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            road_width: ROAD_WIDTH,
            uv_scale_y: UV_SCALE_Y,
            segments_per_span: SEGMENTS_PER_SPAN,
            double_sided: false,
        }
    }
}

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `roady.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadOptions {
    /// Zielordner für das Modell-Archiv (Modell-Cache)
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Basisname des Modells
    #[serde(default = "default_model_name")]
    pub model_name: String,
    /// Exportformat
    #[serde(default)]
    pub format: ModelFormat,
    /// Textur im RWX-Header
    #[serde(default = "default_texture_name")]
    pub texture: String,
    /// Beschreibungs-Tag für Straßen-Wegpunkte
    #[serde(default = "default_waypoint_tag")]
    pub waypoint_tag: String,
    /// Geometrie des Ribbon-Meshes
    #[serde(default)]
    pub geometry: GeometryConfig,
}

impl Default for RoadOptions {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            model_name: default_model_name(),
            format: ModelFormat::default(),
            texture: default_texture_name(),
            waypoint_tag: default_waypoint_tag(),
            geometry: GeometryConfig::default(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_model_name() -> String {
    MODEL_NAME.to_string()
}

fn default_texture_name() -> String {
    TEXTURE_NAME.to_string()
}

fn default_waypoint_tag() -> String {
    ROAD_NODE_TAG.to_string()
}

impl RoadOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("roady"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("roady.toml")
    }
}
