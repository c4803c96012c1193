use crate::config::DemoSettings;
use crate::domain::model::{Principle, Variant};
use crate::domain::ports::Demonstration;
use crate::principles::{DipDemo, IspDemo, LspDemo, OcpDemo, SrpDemo};
use crate::utils::error::Result;
use std::io::Write;

pub struct DemoEngine {
    demos: Vec<Box<dyn Demonstration>>,
    variant: Variant,
}

impl DemoEngine {
    pub fn new(demos: Vec<Box<dyn Demonstration>>, variant: Variant) -> Self {
        Self { demos, variant }
    }

    pub fn from_settings(settings: &DemoSettings) -> Self {
        let demos = settings
            .principles
            .iter()
            .map(|principle| build_demo(*principle, settings))
            .collect();
        Self::new(demos, settings.variant)
    }

    pub fn principles(&self) -> Vec<Principle> {
        self.demos.iter().map(|demo| demo.principle()).collect()
    }

    /// Runs every demonstration in order and stops at the first failure.
    /// Returns how many demonstrations completed.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<usize> {
        tracing::info!(
            "Running {} demonstration(s), {} variant",
            self.demos.len(),
            self.variant
        );

        for (index, demo) in self.demos.iter().enumerate() {
            let principle = demo.principle();
            if index > 0 {
                writeln!(out)?;
            }
            writeln!(out, "== {} ({}) ==", principle, self.variant)?;

            if let Err(e) = demo.run(self.variant, out) {
                tracing::error!(
                    "{} {} demonstration failed: {}",
                    principle.acronym(),
                    self.variant,
                    e
                );
                return Err(e);
            }
            tracing::debug!("{} demonstration finished", principle.acronym());
        }

        out.flush()?;
        Ok(self.demos.len())
    }
}

fn build_demo(principle: Principle, settings: &DemoSettings) -> Box<dyn Demonstration> {
    match principle {
        Principle::Srp => Box::new(SrpDemo::new(settings.invoice.clone())),
        Principle::Ocp => Box::new(OcpDemo::new(settings.total_price)),
        Principle::Lsp => Box::new(LspDemo),
        Principle::Isp => Box::new(IspDemo),
        Principle::Dip => Box::new(DipDemo::new(settings.databases.clone())),
    }
}
