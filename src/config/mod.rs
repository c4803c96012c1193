#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, PrincipleArgs};
pub use toml_config::TomlConfig;

use crate::domain::model::{Principle, Variant};
use crate::principles::dip::DatabaseKind;
use crate::principles::srp::Invoice;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_amount, validate_non_empty_list, validate_not_empty, validate_positive_number,
    Validate,
};

pub const DEFAULT_TOTAL_PRICE: f64 = 100.0;

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoSettings {
    pub principles: Vec<Principle>,
    pub variant: Variant,
    pub total_price: f64,
    pub databases: Vec<DatabaseKind>,
    pub invoice: Invoice,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            principles: Principle::ALL.to_vec(),
            variant: Variant::Fixed,
            total_price: DEFAULT_TOTAL_PRICE,
            databases: DatabaseKind::ALL.to_vec(),
            invoice: Invoice::sample(),
        }
    }
}

impl DemoSettings {
    /// Defaults with any values present in the file applied on top.
    pub fn from_toml(config: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            principles: config
                .principles()
                .map(<[Principle]>::to_vec)
                .unwrap_or(defaults.principles),
            variant: config.variant().unwrap_or(defaults.variant),
            total_price: config.total_price().unwrap_or(defaults.total_price),
            databases: config
                .databases()
                .map(<[DatabaseKind]>::to_vec)
                .unwrap_or(defaults.databases),
            invoice: config.invoice().cloned().unwrap_or(defaults.invoice),
        }
    }
}

impl Validate for DemoSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("run.principles", &self.principles)?;
        validate_amount("ocp.total_price", self.total_price)?;
        validate_non_empty_list("dip.databases", &self.databases)?;

        validate_not_empty("srp.invoice.number", &self.invoice.number)?;
        for (index, item) in self.invoice.items.iter().enumerate() {
            validate_not_empty(
                &format!("srp.invoice.items[{}].description", index),
                &item.description,
            )?;
            validate_positive_number(
                &format!("srp.invoice.items[{}].quantity", index),
                item.quantity,
                1,
            )?;
            validate_amount(
                &format!("srp.invoice.items[{}].unit_price", index),
                item.unit_price,
            )?;
        }

        Ok(())
    }
}
