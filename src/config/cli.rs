use crate::config::{DemoSettings, TomlConfig};
use crate::domain::model::{Principle, Variant};
use crate::principles::dip::DatabaseKind;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "solid-lld")]
#[command(about = "Legacy and fixed demonstrations of the SOLID design principles")]
pub struct CliConfig {
    /// Principles to demonstrate, in order (default: all five)
    #[arg(long = "principle", value_enum, value_delimiter = ',')]
    pub principles: Vec<Principle>,

    /// Run the legacy variant that violates each principle (same as --variant legacy)
    #[arg(long, conflicts_with = "variant")]
    pub legacy: bool,

    /// Variant to run; overrides the settings file
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,

    /// Total price used by the OCP discount demonstration
    #[arg(long)]
    pub price: Option<f64>,

    /// Databases injected by the DIP demonstration
    #[arg(long = "database", value_enum, value_delimiter = ',')]
    pub databases: Vec<DatabaseKind>,

    /// Optional TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the settings file, if any, then applies command-line overrides.
    pub fn resolve(&self) -> Result<DemoSettings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::debug!("loading settings from {}", path.display());
                DemoSettings::from_toml(&TomlConfig::from_file(path)?)
            }
            None => DemoSettings::default(),
        };

        if !self.principles.is_empty() {
            settings.principles = self.principles.clone();
        }
        if let Some(variant) = self.variant {
            settings.variant = variant;
        } else if self.legacy {
            settings.variant = Variant::Legacy;
        }
        if let Some(price) = self.price {
            settings.total_price = price;
        }
        if !self.databases.is_empty() {
            settings.databases = self.databases.clone();
        }

        settings.validate()?;
        Ok(settings)
    }
}

/// Arguments shared by the single-principle binaries.
#[derive(Debug, Clone, Parser)]
pub struct PrincipleArgs {
    /// Run the legacy variant that violates the principle (same as --variant legacy)
    #[arg(long, conflicts_with = "variant")]
    pub legacy: bool,

    /// Variant to run; overrides the settings file
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,

    /// Optional TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl PrincipleArgs {
    pub fn into_cli_config(self, principle: Principle) -> CliConfig {
        CliConfig {
            principles: vec![principle],
            legacy: self.legacy,
            variant: self.variant,
            price: None,
            databases: Vec::new(),
            config: self.config,
            verbose: self.verbose,
        }
    }
}
