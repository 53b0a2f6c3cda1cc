//! Loading template configurations from JSON or YAML documents

use crate::config::template::TemplateConfig;
use crate::constants::{TEMPLATE_CONFIG_EXTENSIONS, TEMPLATE_CONFIG_SUFFIX};
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Structured document codec, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigFormat {
    Json,
    #[default]
    Yaml,
}

impl ConfigFormat {
    /// `.json` is JSON; `.yml`, `.yaml` and anything else is YAML, which also
    /// accepts JSON documents.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            ConfigFormat::Yaml => "yml",
        }
    }

    pub fn parse<T: DeserializeOwned>(&self, content: &str) -> Result<T> {
        Ok(match self {
            ConfigFormat::Json => serde_json::from_str(content)?,
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        })
    }

    pub fn serialize<T: Serialize>(&self, value: &T) -> Result<String> {
        Ok(match self {
            ConfigFormat::Json => serde_json::to_string_pretty(value)?,
            ConfigFormat::Yaml => serde_yaml::to_string(value)?,
        })
    }
}

impl TemplateConfig {
    /// Reads and parses a template configuration. Any structural problem in
    /// the document, unknown enum tokens included, is a `MalformedConfig`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        ConfigFormat::from_path(path).parse(&content).map_err(|e| match e {
            Error::JSONParseError(e) => {
                Error::MalformedConfig(format!("{}: {e}", path.display()))
            }
            Error::YAMLParseError(e) => {
                Error::MalformedConfig(format!("{}: {e}", path.display()))
            }
            other => other,
        })
    }

    /// Finds `<scope>-template-config.{json,yml,yaml}` inside `template_dir`.
    pub fn locate<P: AsRef<Path>>(template_dir: P, scope: &str) -> Result<PathBuf> {
        let template_dir = template_dir.as_ref();
        let candidates: Vec<String> = TEMPLATE_CONFIG_EXTENSIONS
            .iter()
            .map(|ext| format!("{scope}{TEMPLATE_CONFIG_SUFFIX}.{ext}"))
            .collect();

        candidates
            .iter()
            .map(|name| template_dir.join(name))
            .find(|path| path.is_file())
            .ok_or_else(|| Error::TemplateConfigNotFound {
                template_dir: template_dir.display().to_string(),
                config_files: candidates.join(", "),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::TransformationKind;

    #[test]
    fn test_format_from_path() {
        assert_eq!(ConfigFormat::from_path("a/b.json"), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path("a/b.JSON"), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path("a/b.yml"), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path("a/b.yaml"), ConfigFormat::Yaml);
    }

    #[test]
    fn test_from_file_json_and_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("project-template-config.json");
        std::fs::write(
            &json_path,
            r#"{"variables": [{"name": "v", "value": 1}],
                "prompts": [{"name": "artifact_id", "text": "Artifact id",
                  "transformations": [{"name": "artifact_id_snake", "transformation": "SNAKE"}]}]}"#,
        )
        .unwrap();
        let config = TemplateConfig::from_file(&json_path).unwrap();
        assert_eq!(config.variables[0].name, "v");
        assert_eq!(
            config.prompts[0].transformations[0].transformation,
            TransformationKind::Snake
        );

        let yaml_path = dir.path().join("project-template-config.yml");
        std::fs::write(
            &yaml_path,
            "prompts:\n  - name: group_id\n    text: Group id\nmappings:\n  - template: a.txt\n    destination: b.txt\n",
        )
        .unwrap();
        let config = TemplateConfig::from_file(&yaml_path).unwrap();
        assert_eq!(config.prompts[0].name, "group_id");
        assert_eq!(config.mappings[0].destination, PathBuf::from("b.txt"));
    }

    #[test]
    fn test_from_file_unknown_transformation_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"prompts": [{"name": "a", "text": "A",
                "transformations": [{"name": "b", "transformation": "UPSIDE_DOWN"}]}]}"#,
        )
        .unwrap();
        let err = TemplateConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::MalformedConfig(_)));
        assert!(err.to_string().contains("UPSIDE_DOWN"));
    }

    #[test]
    fn test_locate_prefers_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("project-template-config.yml"), "").unwrap();
        std::fs::write(dir.path().join("project-template-config.json"), "{}").unwrap();
        let found = TemplateConfig::locate(dir.path(), "project").unwrap();
        assert_eq!(found, dir.path().join("project-template-config.json"));
    }

    #[test]
    fn test_locate_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = TemplateConfig::locate(dir.path(), "project").unwrap_err();
        assert!(matches!(err, Error::TemplateConfigNotFound { .. }));
    }
}
