//! Menu loop: read a selection, run one ledger operation, repeat.

use std::io::{self, BufRead, Write};

use chrono::Utc;

use stockledger_core::{DomainError, ProductId};
use stockledger_inventory::{AddProduct, Ledger, RecordSale, RestockProduct, SortCriterion};

use crate::menu::MenuChoice;
use crate::prompt::{PromptError, Prompter};
use crate::render;

/// What the loop does after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Interactive shell bound to one ledger.
pub struct Shell<'a, R, W> {
    ledger: &'a mut Ledger,
    prompter: Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(ledger: &'a mut Ledger, input: R, output: W) -> Self {
        Self {
            ledger,
            prompter: Prompter::new(input, output),
        }
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Run until the operator exits or input ends.
    ///
    /// Only terminal I/O failures escape; every domain or input error is
    /// reported on the console and the loop carries on.
    pub fn run(&mut self) -> io::Result<()> {
        tracing::info!(threshold = self.ledger.low_stock_threshold(), "inventory shell started");
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(PromptError::Eof) => {
                    tracing::info!("input closed; leaving menu");
                    break;
                }
                Err(PromptError::InvalidNumber { input, details }) => {
                    tracing::warn!(%input, %details, "operation abandoned on invalid input");
                    writeln!(self.prompter.output(), "Invalid input.")?;
                }
                Err(PromptError::Io(e)) => return Err(e),
            }
        }
        tracing::info!(transactions = self.ledger.transactions().len(), "inventory shell stopped");
        Ok(())
    }

    /// Show the menu and run one selection.
    pub fn step(&mut self) -> Result<Flow, PromptError> {
        render::write_menu(self.prompter.output())?;
        let raw = self.prompter.token("Enter choice: ")?;
        let choice = match raw.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(e) => {
                self.prompter.discard_pending();
                self.report(&e)?;
                return Ok(Flow::Continue);
            }
        };

        match choice {
            MenuChoice::AddProduct => self.add_product()?,
            MenuChoice::ViewProducts => {
                render::write_inventory(self.prompter.output(), self.ledger.view_products())?
            }
            MenuChoice::RecordSale => self.record_sale()?,
            MenuChoice::RestockProduct => self.restock_product()?,
            MenuChoice::LowStockReport => render::write_low_stock_report(
                self.prompter.output(),
                &self.ledger.low_stock_report(),
                self.ledger.low_stock_threshold(),
            )?,
            MenuChoice::SortProducts => self.sort_products()?,
            MenuChoice::Exit => {
                writeln!(self.prompter.output(), "Exiting system...")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn report(&mut self, err: &DomainError) -> io::Result<()> {
        writeln!(self.prompter.output(), "{}", render::describe_error(err))
    }

    fn add_product(&mut self) -> Result<(), PromptError> {
        let product_id: ProductId = self.prompter.number("Enter Product ID: ")?;
        let name = self.prompter.line("Enter Name: ")?;
        let price: f64 = self.prompter.number("Enter Price: ")?;
        let quantity: u32 = self.prompter.number("Enter Quantity: ")?;
        let supplier = self.prompter.line("Enter Supplier: ")?;

        let cmd = AddProduct {
            product_id,
            name,
            price,
            quantity,
            supplier,
            occurred_at: Utc::now(),
        };
        match self.ledger.add_product(cmd) {
            Ok(()) => writeln!(self.prompter.output(), "Product added successfully!")?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn record_sale(&mut self) -> Result<(), PromptError> {
        let product_id: ProductId = self.prompter.number("Enter Product ID: ")?;
        let quantity: u32 = self.prompter.number("Enter Quantity Sold: ")?;

        let cmd = RecordSale {
            product_id,
            quantity,
            occurred_at: Utc::now(),
        };
        match self.ledger.record_sale(cmd) {
            Ok(()) => writeln!(self.prompter.output(), "Sale recorded successfully!")?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn restock_product(&mut self) -> Result<(), PromptError> {
        let product_id: ProductId = self.prompter.number("Enter Product ID: ")?;
        let quantity: u32 = self.prompter.number("Enter Quantity to Add: ")?;

        let cmd = RestockProduct {
            product_id,
            quantity,
            occurred_at: Utc::now(),
        };
        match self.ledger.restock_product(cmd) {
            Ok(()) => writeln!(self.prompter.output(), "Product restocked successfully!")?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn sort_products(&mut self) -> Result<(), PromptError> {
        render::write_sort_menu(self.prompter.output())?;
        let raw = self.prompter.token("Enter choice: ")?;
        let criterion = match raw.parse::<SortCriterion>() {
            Ok(criterion) => criterion,
            Err(e) => {
                self.prompter.discard_pending();
                self.report(&e)?;
                return Ok(());
            }
        };

        let sorted = self.ledger.sort_listing(criterion);
        render::write_sorted(self.prompter.output(), sorted)?;
        Ok(())
    }
}

/// Run an interactive session against `ledger`.
pub fn run<R: BufRead, W: Write>(ledger: &mut Ledger, input: R, output: W) -> io::Result<()> {
    Shell::new(ledger, input, output).run()
}
