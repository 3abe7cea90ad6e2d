use serde::{Deserialize, Serialize};

/// Textformat des exportierten Modells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelFormat {
    /// RenderWare-Script (Standard für die Vorschau in der Welt)
    #[default]
    Rwx,
    /// Wavefront OBJ
    Obj,
}

impl ModelFormat {
    /// Dateiendung ohne Punkt.
    pub fn extension(self) -> &'static str {
        match self {
            ModelFormat::Rwx => "rwx",
            ModelFormat::Obj => "obj",
        }
    }
}
