use std::io;

use chrono::Utc;
use thiserror::Error;

use orderdesk_catalog::{Customer, Product, StockError, StockView};
use orderdesk_core::{Cents, DomainError, OrderId};
use orderdesk_infra::{CatalogStore, StoreError};
use orderdesk_sales::{resolve_shortage, LineOutcome, OrderDraft, ShortageChoice};
use orderdesk_terminal::{CartRow, ProductRow, Terminal};

/// How one session run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The order was committed: header, lines and stock updates are durable.
    Placed {
        order_id: OrderId,
        line_count: usize,
        total: Cents,
    },
    /// The clerk walked away; nothing was written.
    Aborted,
}

/// Failure of a session run.
///
/// A `Store` failure during commit is fatal for the session: there is no
/// retry and no partial-write recovery. The caller decides whether to offer
/// a fresh session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no customers on file")]
    NoCustomers,

    #[error("storage failure: {0}")]
    Store(#[from] StoreError),

    #[error("terminal failure: {0}")]
    Terminal(#[from] io::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("stock accounting failure: {0}")]
    Stock(#[from] StockError),
}

/// The interactive state machine:
/// `SelectCustomer → BuildOrder (loop) → Review → {Commit, Abort}`.
///
/// Store and terminal are injected at construction; all durable writes happen
/// in the single commit step, so dropping the driver mid-session never leaves
/// partial state behind.
pub struct SessionDriver<S, T> {
    store: S,
    terminal: T,
    attendant: String,
}

impl<S, T> SessionDriver<S, T>
where
    S: CatalogStore,
    T: Terminal,
{
    pub fn new(store: S, terminal: T, attendant: impl Into<String>) -> Self {
        Self {
            store,
            terminal,
            attendant: attendant.into(),
        }
    }

    /// Run one complete session.
    pub fn run(&mut self) -> Result<SessionOutcome, SessionError> {
        let customer = self.select_customer()?;
        tracing::info!(customer_id = %customer.id, name = %customer.name, "session bound to customer");

        // The session works against its own copy of the in-stock listing;
        // reservations stay local until commit.
        let mut stock = StockView::new(self.store.list_in_stock_products()?);
        let mut draft = OrderDraft::new();

        self.build_order(&mut draft, &mut stock)?;
        let total = self.review(&draft)?;

        let decision = self
            .terminal
            .prompt_choice("Place this order?", &["Place order", "Abort"])?;
        if decision == 0 {
            self.commit(&customer, draft, &stock, total)
        } else {
            tracing::info!(customer_id = %customer.id, "session aborted, nothing written");
            self.terminal.line("Order discarded; nothing was written.")?;
            Ok(SessionOutcome::Aborted)
        }
    }

    fn select_customer(&mut self) -> Result<Customer, SessionError> {
        let customers = self.store.list_customers()?;
        if customers.is_empty() {
            return Err(SessionError::NoCustomers);
        }

        self.terminal.line("Customers:")?;
        for (i, customer) in customers.iter().enumerate() {
            self.terminal
                .line(&format!("  ({i}) {}, {}", customer.name, customer.phone))?;
        }
        let index = self
            .terminal
            .prompt_index("Who is ordering? Select number:", customers.len())?;
        // Indexing is safe: prompt_index guarantees the range.
        Ok(customers[index].clone())
    }

    fn build_order(
        &mut self,
        draft: &mut OrderDraft,
        stock: &mut StockView,
    ) -> Result<(), SessionError> {
        loop {
            if stock.is_empty() {
                self.terminal.line("No products in stock.")?;
                return Ok(());
            }

            if !draft.is_empty() {
                self.show_cart(draft)?;
            }

            let rows: Vec<ProductRow> = stock
                .iter()
                .map(|(product, available)| ProductRow {
                    name: product.name.clone(),
                    unit_price: product.unit_list_price,
                    available,
                })
                .collect();
            self.terminal.show_products(&rows)?;

            let index = self
                .terminal
                .prompt_index("Select product:", stock.len())?;
            let (product, available) = match stock.get(index) {
                Some((product, available)) => (product.clone(), available),
                None => continue,
            };

            let requested = self.terminal.prompt_quantity("Enter quantity:")?;

            if requested <= available {
                self.accept_line(draft, stock, &product, requested)?;
            } else {
                self.terminal.line(&format!(
                    "Only {available} of \"{}\" left (you asked for {requested}).",
                    product.name
                ))?;
                let picked = self.terminal.prompt_choice(
                    "Not enough stock. What would you like to do?",
                    &ShortageChoice::LABELS,
                )?;
                let Some(choice) = ShortageChoice::from_index(picked) else {
                    continue;
                };
                match resolve_shortage(available, choice) {
                    LineOutcome::Accepted { quantity } => {
                        self.accept_line(draft, stock, &product, quantity)?;
                        self.terminal
                            .line(&format!("Taking all {quantity} remaining."))?;
                    }
                    LineOutcome::Skipped => {
                        self.terminal.line("Nothing added for that product.")?;
                    }
                    LineOutcome::Aborted => {
                        self.terminal.line("Stopping here.")?;
                        return Ok(());
                    }
                }
            }

            let again = self
                .terminal
                .prompt_choice("Add another product?", &["No", "Yes"])?;
            if again == 0 {
                return Ok(());
            }
        }
    }

    fn accept_line(
        &mut self,
        draft: &mut OrderDraft,
        stock: &mut StockView,
        product: &Product,
        quantity: u32,
    ) -> Result<(), SessionError> {
        stock.reserve(&product.upc, quantity)?;
        draft.add_line(product, quantity)?;
        tracing::debug!(upc = %product.upc, quantity, "line accepted");
        Ok(())
    }

    fn show_cart(&mut self, draft: &OrderDraft) -> Result<Cents, SessionError> {
        let rows: Vec<CartRow> = draft
            .lines()
            .iter()
            .map(|line| {
                Ok(CartRow {
                    name: line.product_name.clone(),
                    quantity: line.quantity,
                    unit_price: line.unit_sale_price,
                    subtotal: line.subtotal()?,
                })
            })
            .collect::<Result<_, DomainError>>()?;
        let total = draft.total()?;
        self.terminal.show_cart(&rows, total)?;
        Ok(total)
    }

    fn review(&mut self, draft: &OrderDraft) -> Result<Cents, SessionError> {
        self.terminal.line("Review your order:")?;
        self.show_cart(draft)
    }

    fn commit(
        &mut self,
        customer: &Customer,
        draft: OrderDraft,
        stock: &StockView,
        total: Cents,
    ) -> Result<SessionOutcome, SessionError> {
        let (order, lines) =
            draft.into_order(customer.id, Utc::now(), self.attendant.clone());
        let line_count = lines.len();

        // One logical batch: header, then lines, then stock updates.
        let written = (|| -> Result<(), SessionError> {
            self.store.insert_order(&order)?;
            for line in &lines {
                self.store.insert_order_line(line)?;
            }
            for (upc, remaining) in stock.dirty() {
                self.store.update_stock(upc, remaining)?;
            }
            Ok(())
        })();
        if let Err(err) = written {
            tracing::error!(order_id = %order.id, error = %err, "commit failed");
            return Err(err);
        }

        tracing::info!(
            order_id = %order.id,
            customer_id = %customer.id,
            lines = line_count,
            total = %total,
            "order placed"
        );
        self.terminal
            .line(&format!("Order placed. Total: {total}"))?;
        Ok(SessionOutcome::Placed {
            order_id: order.id,
            line_count,
            total,
        })
    }
}
