#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod principles;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, PrincipleArgs};

pub use config::{DemoSettings, TomlConfig};
pub use self::core::engine::DemoEngine;
pub use domain::model::{Principle, Variant};
pub use domain::ports::Demonstration;
pub use utils::error::{Result, SolidError};
