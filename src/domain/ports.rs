use crate::domain::model::{Principle, Variant};
use crate::utils::error::Result;
use std::io::Write;

/// A paired legacy/fixed illustration of one principle.
pub trait Demonstration {
    fn principle(&self) -> Principle;

    fn run_legacy(&self, out: &mut dyn Write) -> Result<()>;

    fn run_fixed(&self, out: &mut dyn Write) -> Result<()>;

    fn run(&self, variant: Variant, out: &mut dyn Write) -> Result<()> {
        match variant {
            Variant::Legacy => self.run_legacy(out),
            Variant::Fixed => self.run_fixed(out),
        }
    }
}
