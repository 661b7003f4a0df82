use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub links: LinksConfig,
    pub code: CodeConfig,
    pub text: TextConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct LinksConfig {
    pub new_tab: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CodeConfig {
    pub class_prefix: String,
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self {
            class_prefix: "language-".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub rule_width: usize,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self { rule_width: 40 }
    }
}

impl Config {
    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}
