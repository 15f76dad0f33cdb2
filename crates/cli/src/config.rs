use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "assembly.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub output: OutputConfig,
    pub decode: DecodeConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
    pub collection: String,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            collection: assembly_core::Assignment::COLLECTION.to_string(),
        }
    }
}

impl Config {
    /// Loads `path`, or the default file when none is given; a missing default
    /// file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_CONFIG_FILE), false),
        };
        if !required && !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.log.filter, "info");
        assert!(config.output.pretty);
        assert_eq!(config.decode.collection, "assignments/assignment");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::parse("[log]\nfilter = \"assembly_core=debug\"\n\n[output]\npretty = false\n")
            .unwrap();
        assert_eq!(config.log.filter, "assembly_core=debug");
        assert!(!config.output.pretty);
        assert_eq!(config.decode.collection, "assignments/assignment");
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(Config::parse("[output]\npretty = \"yes\"\n").is_err());
    }
}
