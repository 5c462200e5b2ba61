pub mod account;
pub mod capture;
pub mod export;
pub mod import;
pub mod reset;
pub mod settings;
pub mod stats;
pub mod timeline;

use anyhow::{Context, Result};
use std::io::Write;

use cappic::auth::IdentityProvider;
use cappic::config::CappicConfig;
use cappic::coordinator::Coordinator;
use cappic::store::local::LocalStore;
use cappic::store::remote::RemoteStore;

/// Build a coordinator for the current session: open the local store,
/// restore any cached session, and feed the provider's startup emission
/// through the coordinator so it loads from the matching store.
pub(crate) async fn open_coordinator(config: &CappicConfig) -> Result<Coordinator<RemoteStore>> {
    let local = LocalStore::open(config.resolved_db_path())?;

    let session = cappic::auth::load_session(cappic::config::default_session_path())?;
    let token = session.as_ref().map(|s| s.token.clone());
    let provider = IdentityProvider::new(session.map(|s| s.identity));

    let remote = RemoteStore::new(&config.remote.api_url, token);
    let mut coordinator = Coordinator::new(remote, local);

    let rx = provider.subscribe();
    let identity = rx.borrow().clone();
    coordinator.on_identity_changed(identity).await;
    Ok(coordinator)
}

/// Prompt for a line on stdin (used for passwords and confirmations).
pub(crate) fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    std::io::stdout().flush()?;
    let mut input = String::new();
    std::io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;
    Ok(input.trim().to_string())
}
