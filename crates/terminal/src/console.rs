use std::io::{self, BufRead, Write};

use orderdesk_core::Cents;

use crate::{CartRow, ProductRow, Terminal};

/// Terminal over process stdin/stdout.
///
/// Output goes to stdout; logging is configured onto stderr so the two don't
/// interleave.
#[derive(Debug, Default)]
pub struct ConsoleTerminal {
    _private: (),
}

impl ConsoleTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    /// One line from stdin, trimmed. `UnexpectedEof` when stdin closes.
    fn read_line(&mut self) -> io::Result<String> {
        let mut buf = String::new();
        let n = io::stdin().lock().read_line(&mut buf)?;
        if n == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed",
            ));
        }
        Ok(buf.trim().to_string())
    }

    fn prompt_parsed<F>(&mut self, prompt: &str, accept: F) -> io::Result<u64>
    where
        F: Fn(u64) -> bool,
    {
        loop {
            {
                let mut out = io::stdout().lock();
                write!(out, "{prompt} ")?;
                out.flush()?;
            }
            let answer = self.read_line()?;
            match answer.parse::<u64>() {
                Ok(value) if accept(value) => return Ok(value),
                _ => self.line("Invalid number. Please input a valid option.")?,
            }
        }
    }
}

impl Terminal for ConsoleTerminal {
    fn prompt_index(&mut self, prompt: &str, len: usize) -> io::Result<usize> {
        let value = self.prompt_parsed(prompt, |v| (v as usize) < len)?;
        Ok(value as usize)
    }

    fn prompt_quantity(&mut self, prompt: &str) -> io::Result<u32> {
        let value = self.prompt_parsed(prompt, |v| v >= 1 && v <= u64::from(u32::MAX))?;
        Ok(value as u32)
    }

    fn prompt_choice(&mut self, prompt: &str, labels: &[&str]) -> io::Result<usize> {
        self.line(prompt)?;
        for (i, label) in labels.iter().enumerate() {
            self.line(&format!("  ({i}) {label}"))?;
        }
        self.prompt_index("Select:", labels.len())
    }

    fn show_products(&mut self, rows: &[ProductRow]) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "Products:")?;
        writeln!(out, "  {:>3}  {:<32} {:>10} {:>6}", "#", "name", "price", "qty")?;
        for (i, row) in rows.iter().enumerate() {
            writeln!(
                out,
                "  {:>3}  {:<32} {:>10} {:>6}",
                i, row.name, row.unit_price, row.available
            )?;
        }
        out.flush()
    }

    fn show_cart(&mut self, rows: &[CartRow], total: Cents) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "Your order:")?;
        writeln!(
            out,
            "  {:<32} {:>6} {:>10} {:>10}",
            "name", "qty", "price", "subtotal"
        )?;
        for row in rows {
            writeln!(
                out,
                "  {:<32} {:>6} {:>10} {:>10}",
                row.name, row.quantity, row.unit_price, row.subtotal
            )?;
        }
        writeln!(out, "  total: {total}")?;
        out.flush()
    }

    fn line(&mut self, msg: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{msg}")?;
        out.flush()
    }
}
