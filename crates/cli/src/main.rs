use std::io;
use std::sync::Arc;

use orderdesk_infra::{seed_catalog, InMemoryCatalogStore, SeedData};
use orderdesk_session::SessionDriver;
use orderdesk_terminal::{ConsoleTerminal, Terminal};

fn main() -> anyhow::Result<()> {
    orderdesk_observability::init();

    let attendant = std::env::var("ORDERDESK_ATTENDANT").unwrap_or_else(|_| {
        tracing::warn!("ORDERDESK_ATTENDANT not set; orders will be sold by \"Shirley\"");
        "Shirley".to_string()
    });

    let store = Arc::new(InMemoryCatalogStore::new());
    let seed = SeedData::default_catalog()?;
    seed_catalog(store.as_ref(), &seed)?;

    let mut terminal = ConsoleTerminal::new();
    loop {
        terminal.line("Starting an order!")?;
        let choice = match terminal.prompt_choice("What now?", &["Begin", "Exit"]) {
            Ok(choice) => choice,
            // Closed stdin is a normal way to leave the outer loop.
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(err) => return Err(err.into()),
        };
        if choice == 1 {
            break;
        }

        let mut driver =
            SessionDriver::new(Arc::clone(&store), &mut terminal, attendant.clone());
        match driver.run() {
            Ok(outcome) => tracing::debug!(?outcome, "session finished"),
            Err(err) if is_eof(&err) => break,
            Err(err) => return Err(err.into()),
        }
    }

    tracing::info!("goodbye");
    Ok(())
}

fn is_eof(err: &orderdesk_session::SessionError) -> bool {
    matches!(
        err,
        orderdesk_session::SessionError::Terminal(io_err)
            if io_err.kind() == io::ErrorKind::UnexpectedEof
    )
}
