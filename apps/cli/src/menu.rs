//! # Text Menu
//!
//! The interactive loop. Generic over the input and output streams so a
//! whole session can be scripted in tests.
//!
//! ## Menu Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. List all products in store ──► Store::list_active + describe        │
//! │  2. Show total amount in store ──► Store::total_quantity                │
//! │  3. Make an order ───────────────► collect lines ──► Store::place_order │
//! │  4. Quit                                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, BufRead, Write};

use shopfront_core::{ItemId, OrderLine, Store};
use thiserror::Error;
use tracing::{info, warn};

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListProducts,
    ShowTotal,
    MakeOrder,
    Quit,
}

/// Maps a typed menu number to its entry.
pub fn parse_choice(input: &str) -> Option<MenuChoice> {
    match input.trim() {
        "1" => Some(MenuChoice::ListProducts),
        "2" => Some(MenuChoice::ShowTotal),
        "3" => Some(MenuChoice::MakeOrder),
        "4" => Some(MenuChoice::Quit),
        _ => None,
    }
}

/// Bad keyboard input while building an order.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("product # must be between 1 and {max}")]
    NoSuchProduct { max: usize },
}

/// Parses a 1-based product number against a listing of `listed` items.
///
/// Empty input means the customer is done and yields `Ok(None)`.
pub fn parse_product_number(input: &str, listed: usize) -> Result<Option<usize>, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let number: usize = input
        .parse()
        .map_err(|_| InputError::NotANumber(input.to_string()))?;
    if number == 0 || number > listed {
        return Err(InputError::NoSuchProduct { max: listed });
    }
    Ok(Some(number - 1))
}

/// Parses an amount. Range checks are left to the store.
pub fn parse_amount(input: &str) -> Result<i64, InputError> {
    let input = input.trim();
    input
        .parse()
        .map_err(|_| InputError::NotANumber(input.to_string()))
}

/// One interactive session over a store.
pub struct Session<R, W> {
    store: Store,
    title: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(store: Store, title: impl Into<String>, input: R, output: W) -> Self {
        Session {
            store,
            title: title.into(),
            input,
            output,
        }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (Store, W) {
        (self.store, self.output)
    }

    /// Runs until the user quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Please choose a number: ")? else {
                return Ok(());
            };
            match parse_choice(&line) {
                Some(MenuChoice::ListProducts) => {
                    self.list_products()?;
                }
                Some(MenuChoice::ShowTotal) => {
                    writeln!(
                        self.output,
                        "Total of {} items in store",
                        self.store.total_quantity()
                    )?;
                }
                Some(MenuChoice::MakeOrder) => self.make_order()?,
                Some(MenuChoice::Quit) => {
                    writeln!(self.output, "Bye!")?;
                    return Ok(());
                }
                None => writeln!(self.output, "Error with your choice! Try again!")?,
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "   {} Menu", self.title)?;
        writeln!(self.output, "   ----------")?;
        writeln!(self.output, "1. List all products in store")?;
        writeln!(self.output, "2. Show total amount in store")?;
        writeln!(self.output, "3. Make an order")?;
        writeln!(self.output, "4. Quit")
    }

    // `None` on end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prints the active items numbered from 1 and returns their ids in
    /// the same order.
    fn list_products(&mut self) -> io::Result<Vec<ItemId>> {
        let active = self.store.list_active();
        writeln!(self.output, "------")?;
        for (index, item) in active.iter().enumerate() {
            writeln!(self.output, "{}. {}", index + 1, item.describe())?;
        }
        writeln!(self.output, "------")?;
        Ok(active.iter().map(|item| item.id()).collect())
    }

    fn make_order(&mut self) -> io::Result<()> {
        let listed = self.list_products()?;
        writeln!(self.output, "When you want to finish order, enter empty text.")?;

        let mut lines = Vec::new();
        loop {
            let Some(product) = self.prompt("Which product # do you want? ")? else {
                break;
            };
            let index = match parse_product_number(&product, listed.len()) {
                Ok(Some(index)) => index,
                Ok(None) => break,
                Err(err) => {
                    writeln!(self.output, "Error adding product! {}", err)?;
                    continue;
                }
            };

            let Some(amount) = self.prompt("What amount do you want? ")? else {
                break;
            };
            match parse_amount(&amount) {
                Ok(quantity) => {
                    lines.push(OrderLine::new(listed[index], quantity));
                    writeln!(self.output, "Product added to list!")?;
                }
                Err(err) => writeln!(self.output, "Error adding product! {}", err)?,
            }
        }

        if lines.is_empty() {
            return Ok(());
        }

        match self.store.place_order(&lines) {
            Ok(total) => {
                info!(lines = lines.len(), total, "order completed");
                writeln!(self.output, "********")?;
                writeln!(self.output, "Order made! Total payment: ${}", total)?;
            }
            Err(err) => {
                warn!(error = %err, "order failed");
                writeln!(self.output, "Error while making order! {}", err)?;
            }
        }
        Ok(())
    }
}
