// crates/infra/src/manifest.rs
use std::path::Path;

use envstamp_ports::manifest::ManifestReader;
use envstamp_shared_kernel::{DeclaredVersion, InputError, InputResult};
use serde_json::Value;

use crate::persistence::FileReader;

/// Manifest syntax, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Json,
    Yaml,
}

impl ManifestFormat {
    /// `.yaml` / `.yml` are YAML; everything else (`package.json`, ...) is JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }

    fn parse(self, text: &str) -> Result<Value, String> {
        match self {
            Self::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
        }
    }
}

/// Reads the top-level `version` string from a JSON or YAML manifest.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuredManifestReader;

impl ManifestReader for StructuredManifestReader {
    fn declared_version(&self, path: &Path) -> InputResult<DeclaredVersion> {
        let text = FileReader::read_to_string(path).map_err(|source| InputError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        let format = ManifestFormat::from_path(path);
        let parse_error = |details: String| InputError::ManifestParse {
            path: path.to_path_buf(),
            format: format.name().to_string(),
            details,
        };

        let document = format.parse(&text).map_err(parse_error)?;
        let fields = match document {
            Value::Object(fields) => fields,
            other => {
                let found = type_name(&other);
                let details = format!("expected an object at the top level, found {found}");
                return Err(parse_error(details));
            }
        };

        match fields.get("version") {
            None => Err(InputError::MissingVersion {
                path: path.to_path_buf(),
            }),
            Some(Value::String(raw)) => {
                DeclaredVersion::parse(raw).map_err(|err| InputError::InvalidVersion {
                    path: path.to_path_buf(),
                    reason: err.to_string(),
                })
            }
            Some(other) => Err(InputError::VersionNotString {
                path: path.to_path_buf(),
                found: type_name(other).to_string(),
            }),
        }
    }
}

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
