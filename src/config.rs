//! Hooks configuration, loaded from JSON.
//!
//! ```json
//! {
//!   "string_types": ["OrderNumber", "Email"],
//!   "list_wrappers": ["HashSet", "BTreeSet", "IndexSet"],
//!   "download": { "endpoint": "http://localhost:8080/graphql/schema", "output": "schema.graphqls" }
//! }
//! ```
//!
//! Every field is optional; missing fields take the defaults below.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::TypeDescriptor;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HooksConfig {
    /// Map `Uuid` to the `UUID` scalar.
    pub uuid_scalar: bool,
    /// Map `RangeInclusive<NaiveDate>` to the `Period` scalar.
    pub period_scalar: bool,
    /// Rewrite `@custom` into literal arguments and wire its fetcher.
    pub custom_directive: bool,
    /// Value classes exposed as the built-in `String` scalar, in descriptor syntax.
    pub string_types: Vec<String>,
    /// Single-value async wrappers resolved to their argument.
    pub unwrap_wrappers: Vec<String>,
    /// Set-like wrappers resolved to a list of their argument.
    pub list_wrappers: Vec<String>,
    pub download: Option<DownloadConfig>,
}

impl Default for HooksConfig {
    fn default() -> Self {
        Self {
            uuid_scalar: true,
            period_scalar: true,
            custom_directive: true,
            string_types: Vec::new(),
            unwrap_wrappers: vec!["Future".into()],
            list_wrappers: vec!["HashSet".into(), "BTreeSet".into()],
            download: None,
        }
    }
}

/// Where the SDL document is fetched from and written to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DownloadConfig {
    pub endpoint: String,
    pub output: PathBuf,
}

impl HooksConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded hooks config");
        Ok(config)
    }

    /// Parsed `string_types`; a malformed entry is a configuration error.
    pub fn string_type_descriptors(&self) -> Result<Vec<TypeDescriptor>> {
        self.string_types
            .iter()
            .map(|s| {
                s.parse::<TypeDescriptor>()
                    .map_err(|e| Error::Config(format!("string_types entry '{s}': {e}")))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(HooksConfig::from_json_str("{}").unwrap(), HooksConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = HooksConfig::from_json_str(
            r#"{"period_scalar": false, "string_types": ["OrderNumber", "Tagged<Email>"]}"#,
        )
        .unwrap();
        assert!(config.uuid_scalar);
        assert!(!config.period_scalar);
        assert_eq!(
            config.string_type_descriptors().unwrap(),
            vec![
                TypeDescriptor::named("OrderNumber"),
                TypeDescriptor::generic("Tagged", [TypeDescriptor::named("Email")]),
            ],
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = HooksConfig::from_json_str(r#"{"uuid": true}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_bad_descriptor_is_config_error() {
        let config = HooksConfig { string_types: vec!["Vec<".into()], ..Default::default() };
        assert!(matches!(config.string_type_descriptors(), Err(Error::Config(_))));
    }

    #[test]
    fn test_download_section() {
        let config = HooksConfig::from_json_str(
            r#"{"download": {"endpoint": "http://localhost/schema", "output": "out/schema.graphqls"}}"#,
        )
        .unwrap();
        let download = config.download.unwrap();
        assert_eq!(download.endpoint, "http://localhost/schema");
        assert_eq!(download.output, PathBuf::from("out/schema.graphqls"));
    }

    #[test]
    fn test_from_missing_file_is_io_error() {
        let err = HooksConfig::from_json_file("/nonexistent/hooks.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
