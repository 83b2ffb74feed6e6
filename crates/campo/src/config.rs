// File: src/config.rs
// Purpose: Configuration parsing from campo.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Client configuration for the registration availability API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Origin the API lives on, e.g. "http://localhost:5000". Empty means
    /// the endpoint paths are used as-is, the same-origin case.
    #[serde(default)]
    pub base_url: String,

    #[serde(default = "default_verificar_email")]
    pub verificar_email_path: String,

    #[serde(default = "default_verificar_telefono")]
    pub verificar_telefono_path: String,

    #[serde(default = "default_verificar_nombre")]
    pub verificar_nombre_path: String,
}

impl Config {
    /// Loads configuration from the given file, falling back to defaults
    /// when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            verificar_email_path: default_verificar_email(),
            verificar_telefono_path: default_verificar_telefono(),
            verificar_nombre_path: default_verificar_nombre(),
        }
    }
}

fn default_verificar_email() -> String {
    "/registro/api/verificar-email".to_string()
}

fn default_verificar_telefono() -> String {
    "/registro/api/verificar-telefono".to_string()
}

fn default_verificar_nombre() -> String {
    "/registro/api/verificar-nombre".to_string()
}
