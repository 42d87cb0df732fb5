pub mod project;

pub use project::Config;

use serde::{Deserialize, Serialize};

/// Exam pages updated when no list is configured or given on the command line.
pub const DEFAULT_TARGETS: &[&str] = &[
    "schreiben2_b2.html",
    "schreiben03_b2.html",
    "schreiben4_b2.html",
    "schreiben5_b2.html",
    "schreiben6_b2.html",
    "schreiben7_b2.html",
    "schreiben8_b2.html",
    "schreiben9_b2.html",
    "schreiben10_b2.html",
    "schreiben11_b2.html",
    "schreiben12_b2.html",
    "schreiben13_b2.html",
    "schreiben14_b2.html",
    "schreiben15_b2.html",
    "schreiben16_b2.html",
    "schreiben17_b2.html",
    "schreiben18_b2.html",
    "schreiben19_b2.html",
    "schreiben20_b2.html",
];

pub const CONFIG_FILE_NAME: &str = "exampatch.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigData {
    pub files: Vec<String>,
    pub assets: AssetConfig,
}

/// Shared assets the rewritten pages link to, relative to the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub stylesheet: String,
    pub script: String,
}

impl Default for ConfigData {
    fn default() -> Self {
        Self {
            files: DEFAULT_TARGETS.iter().map(|name| name.to_string()).collect(),
            assets: AssetConfig::default(),
        }
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            stylesheet: "exam-styles.css".to_string(),
            script: "exam-script.js".to_string(),
        }
    }
}
