//! The terminal collaborator: numbered-menu prompts and tabular display.
//!
//! The session driver talks to a [`Terminal`] trait; the binary plugs in the
//! console implementation, tests plug in a scripted double that replays
//! queued answers and records what was shown.

use std::io;

use orderdesk_core::Cents;

pub mod console;
pub mod scripted;

pub use console::ConsoleTerminal;
pub use scripted::ScriptedTerminal;

/// One row of the product listing: menu index is positional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub name: String,
    pub unit_price: Cents,
    /// Reservation-adjusted units left in this session.
    pub available: u32,
}

/// One row of the cart display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Cents,
    pub subtotal: Cents,
}

/// Blocking console collaborator.
///
/// Prompt methods re-ask until the answer is in range; they only fail on real
/// I/O trouble (EOF on stdin, write failure). Display methods never validate.
pub trait Terminal {
    /// Read a menu index in `0..len`, re-prompting on garbage or
    /// out-of-range input.
    fn prompt_index(&mut self, prompt: &str, len: usize) -> io::Result<usize>;

    /// Read a positive quantity, re-prompting on zero or garbage.
    fn prompt_quantity(&mut self, prompt: &str) -> io::Result<u32>;

    /// Present a small fixed menu of `labels`, read an index into it.
    fn prompt_choice(&mut self, prompt: &str, labels: &[&str]) -> io::Result<usize>;

    /// Tabular product listing (index, name, price, available units).
    fn show_products(&mut self, rows: &[ProductRow]) -> io::Result<()>;

    /// Tabular cart display with the grand total.
    fn show_cart(&mut self, rows: &[CartRow], total: Cents) -> io::Result<()>;

    /// Print one plain message line.
    fn line(&mut self, msg: &str) -> io::Result<()>;
}

impl<T> Terminal for &mut T
where
    T: Terminal + ?Sized,
{
    fn prompt_index(&mut self, prompt: &str, len: usize) -> io::Result<usize> {
        (**self).prompt_index(prompt, len)
    }

    fn prompt_quantity(&mut self, prompt: &str) -> io::Result<u32> {
        (**self).prompt_quantity(prompt)
    }

    fn prompt_choice(&mut self, prompt: &str, labels: &[&str]) -> io::Result<usize> {
        (**self).prompt_choice(prompt, labels)
    }

    fn show_products(&mut self, rows: &[ProductRow]) -> io::Result<()> {
        (**self).show_products(rows)
    }

    fn show_cart(&mut self, rows: &[CartRow], total: Cents) -> io::Result<()> {
        (**self).show_cart(rows, total)
    }

    fn line(&mut self, msg: &str) -> io::Result<()> {
        (**self).line(msg)
    }
}
