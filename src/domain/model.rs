use serde::{Deserialize, Serialize};
use std::fmt;

/// The five SOLID principles, in the order they are demonstrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Principle {
    Srp,
    Ocp,
    Lsp,
    Isp,
    Dip,
}

impl Principle {
    pub const ALL: [Principle; 5] = [
        Principle::Srp,
        Principle::Ocp,
        Principle::Lsp,
        Principle::Isp,
        Principle::Dip,
    ];

    pub fn acronym(self) -> &'static str {
        match self {
            Principle::Srp => "SRP",
            Principle::Ocp => "OCP",
            Principle::Lsp => "LSP",
            Principle::Isp => "ISP",
            Principle::Dip => "DIP",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Principle::Srp => "Single Responsibility Principle",
            Principle::Ocp => "Open/Closed Principle",
            Principle::Lsp => "Liskov Substitution Principle",
            Principle::Isp => "Interface Segregation Principle",
            Principle::Dip => "Dependency Inversion Principle",
        }
    }
}

impl fmt::Display for Principle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.acronym(), self.title())
    }
}

/// Which half of a demonstration to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// The design that violates the principle.
    Legacy,
    #[default]
    Fixed,
}

impl Variant {
    pub fn from_legacy_flag(legacy: bool) -> Self {
        if legacy {
            Variant::Legacy
        } else {
            Variant::Fixed
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Legacy => f.write_str("legacy"),
            Variant::Fixed => f.write_str("fixed"),
        }
    }
}
