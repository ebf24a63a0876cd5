use crate::command::TitleAction;
use serde::{Deserialize, Serialize};

/// External tool names, overridable for nonstandard installs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Metadata inspector invoked at scan time
    pub inspector: String,
    /// Property editor named in the generated commands, never executed
    pub editor: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            inspector: "mkvmerge".to_string(),
            editor: "mkvpropedit".to_string(),
        }
    }
}

/// Command output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Container title handling
    pub title_action: TitleAction,
}

/// File grid configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// One line per track in the grid summaries instead of a single
    /// comma-joined line
    pub multi_line: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { multi_line: true }
    }
}
