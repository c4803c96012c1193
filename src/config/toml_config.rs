use crate::domain::model::{Principle, Variant};
use crate::principles::dip::DatabaseKind;
use crate::principles::srp::Invoice;
use crate::utils::error::{Result, SolidError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file. Every section and key may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub run: Option<RunSection>,
    pub srp: Option<SrpSection>,
    pub ocp: Option<OcpSection>,
    pub dip: Option<DipSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunSection {
    pub principles: Option<Vec<Principle>>,
    pub variant: Option<Variant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SrpSection {
    pub invoice: Invoice,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OcpSection {
    pub total_price: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DipSection {
    pub databases: Option<Vec<DatabaseKind>>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| SolidError::ConfigError {
            message: format!("cannot read '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SolidError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn principles(&self) -> Option<&[Principle]> {
        self.run.as_ref()?.principles.as_deref()
    }

    pub fn variant(&self) -> Option<Variant> {
        self.run.as_ref()?.variant
    }

    pub fn total_price(&self) -> Option<f64> {
        self.ocp.as_ref()?.total_price
    }

    pub fn databases(&self) -> Option<&[DatabaseKind]> {
        self.dip.as_ref()?.databases.as_deref()
    }

    pub fn invoice(&self) -> Option<&Invoice> {
        self.srp.as_ref().map(|srp| &srp.invoice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[run]
principles = ["ocp", "dip"]
variant = "legacy"

[srp.invoice]
number = "INV-7"
issued_on = "2023-11-02"

[[srp.invoice.items]]
description = "Desk"
quantity = 1
unit_price = 320.0

[ocp]
total_price = 42.5

[dip]
databases = ["postgres"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.principles(), Some(&[Principle::Ocp, Principle::Dip][..]));
        assert_eq!(config.variant(), Some(Variant::Legacy));
        assert_eq!(config.total_price(), Some(42.5));
        assert_eq!(config.databases(), Some(&[DatabaseKind::Postgres][..]));

        let invoice = config.invoice().unwrap();
        assert_eq!(invoice.number, "INV-7");
        assert_eq!(invoice.issued_on.to_string(), "2023-11-02");
        assert_eq!(invoice.items.len(), 1);
    }

    #[test]
    fn test_empty_toml_config_has_no_overrides() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config, TomlConfig::default());
        assert!(config.principles().is_none());
        assert!(config.invoice().is_none());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result = TomlConfig::from_toml_str("[ocp]\ntotal = 10.0\n");
        assert!(matches!(result, Err(SolidError::ConfigError { .. })));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[ocp]\ntotal_price = 99.0").unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.total_price(), Some(99.0));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = TomlConfig::from_file("/definitely/not/here.toml");
        assert!(matches!(result, Err(SolidError::ConfigError { .. })));
    }
}
