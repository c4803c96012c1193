//! Single Responsibility Principle.
//!
//! The legacy `Invoice` computes its total, prints itself and saves itself, so
//! it has three reasons to change. The fixed design gives each of those jobs
//! to its own type.

use crate::domain::model::Principle;
use crate::domain::ports::Demonstration;
use crate::utils::error::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl LineItem {
    pub fn new(description: impl Into<String>, quantity: u32, unit_price: f64) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
        }
    }

    pub fn amount(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub number: String,
    pub issued_on: NaiveDate,
    pub items: Vec<LineItem>,
}

impl Invoice {
    pub fn sample() -> Self {
        Self {
            number: "INV-1001".to_string(),
            issued_on: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
            items: vec![
                LineItem::new("Keyboard", 2, 49.99),
                LineItem::new("Monitor", 1, 189.0),
                LineItem::new("USB cable", 3, 4.5),
            ],
        }
    }
}

fn write_invoice(invoice: &Invoice, out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "Invoice {} issued {}", invoice.number, invoice.issued_on)?;
    for item in &invoice.items {
        writeln!(
            out,
            "  {} x {} @ {:.2} = {:.2}",
            item.quantity,
            item.description,
            item.unit_price,
            item.amount()
        )?;
    }
    Ok(())
}

pub mod legacy {
    use super::write_invoice;
    use crate::utils::error::Result;
    use std::io::Write;

    /// Calculation, formatting and storage all live here.
    #[derive(Debug, Clone)]
    pub struct Invoice {
        details: super::Invoice,
        saved_rows: Vec<String>,
    }

    impl Invoice {
        pub fn new(details: super::Invoice) -> Self {
            Self {
                details,
                saved_rows: Vec::new(),
            }
        }

        pub fn calculate_total(&self) -> f64 {
            self.details.items.iter().map(|item| item.amount()).sum()
        }

        pub fn print_invoice(&self, out: &mut dyn Write) -> Result<()> {
            write_invoice(&self.details, out)?;
            Ok(())
        }

        pub fn save_invoice_to_db(&mut self) -> Result<()> {
            let row = serde_json::to_string(&self.details)?;
            tracing::debug!(invoice = %self.details.number, "legacy invoice saving itself");
            self.saved_rows.push(row);
            Ok(())
        }

        pub fn saved_rows(&self) -> &[String] {
            &self.saved_rows
        }
    }
}

pub mod fixed {
    use super::{write_invoice, Invoice};
    use crate::utils::error::Result;
    use std::io::Write;

    #[derive(Debug, Clone, Copy, Default)]
    pub struct InvoiceCalculator;

    impl InvoiceCalculator {
        pub fn calculate_total(&self, invoice: &Invoice) -> f64 {
            invoice.items.iter().map(|item| item.amount()).sum()
        }
    }

    #[derive(Debug, Clone, Copy, Default)]
    pub struct InvoicePrinter;

    impl InvoicePrinter {
        pub fn print_invoice(&self, invoice: &Invoice, out: &mut dyn Write) -> Result<()> {
            write_invoice(invoice, out)?;
            Ok(())
        }
    }

    /// In-memory stand-in for an invoice table; rows are JSON documents.
    #[derive(Debug, Clone, Default)]
    pub struct InvoicePersistence {
        rows: Vec<String>,
    }

    impl InvoicePersistence {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn save_invoice(&mut self, invoice: &Invoice) -> Result<()> {
            let row = serde_json::to_string(invoice)?;
            tracing::debug!(invoice = %invoice.number, bytes = row.len(), "invoice persisted");
            self.rows.push(row);
            Ok(())
        }

        pub fn rows(&self) -> &[String] {
            &self.rows
        }
    }
}

pub struct SrpDemo {
    invoice: Invoice,
}

impl SrpDemo {
    pub fn new(invoice: Invoice) -> Self {
        Self { invoice }
    }
}

impl Demonstration for SrpDemo {
    fn principle(&self) -> Principle {
        Principle::Srp
    }

    fn run_legacy(&self, out: &mut dyn Write) -> Result<()> {
        let mut invoice = legacy::Invoice::new(self.invoice.clone());
        invoice.print_invoice(out)?;
        writeln!(out, "Total: {:.2}", invoice.calculate_total())?;
        invoice.save_invoice_to_db()?;
        writeln!(
            out,
            "Invoice saved itself ({} row(s) stored)",
            invoice.saved_rows().len()
        )?;
        Ok(())
    }

    fn run_fixed(&self, out: &mut dyn Write) -> Result<()> {
        let calculator = fixed::InvoiceCalculator;
        let printer = fixed::InvoicePrinter;
        let mut persistence = fixed::InvoicePersistence::new();

        printer.print_invoice(&self.invoice, out)?;
        writeln!(out, "Total: {:.2}", calculator.calculate_total(&self.invoice))?;
        persistence.save_invoice(&self.invoice)?;
        writeln!(
            out,
            "Saved invoice {} ({} row(s) stored)",
            self.invoice.number,
            persistence.rows().len()
        )?;
        Ok(())
    }
}
