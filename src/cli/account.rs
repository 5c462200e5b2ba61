//! CLI account commands — signup, login, logout, whoami.

use anyhow::Result;

use cappic::auth::AuthClient;
use cappic::config::{default_session_path, CappicConfig};

/// Create an account and start a session.
pub async fn signup(
    config: &CappicConfig,
    email: &str,
    display_name: Option<String>,
) -> Result<()> {
    let password = super::prompt("Password: ")?;
    let client = AuthClient::new(&config.remote.api_url);
    let session = client
        .sign_up(email, &password, display_name.as_deref())
        .await?;

    cappic::auth::save_session(default_session_path(), &session)?;
    println!("Welcome, {}!", session.identity.display_name.as_deref().unwrap_or(email));
    Ok(())
}

/// Sign in and start a session.
pub async fn login(config: &CappicConfig, email: &str) -> Result<()> {
    let password = super::prompt("Password: ")?;
    let client = AuthClient::new(&config.remote.api_url);
    let session = client.sign_in(email, &password).await?;

    cappic::auth::save_session(default_session_path(), &session)?;
    println!("Signed in as {}.", session.identity.email);
    Ok(())
}

/// End the current session.
pub fn logout() -> Result<()> {
    cappic::auth::clear_session(default_session_path())?;
    println!("Signed out. New moments stay on this device.");
    Ok(())
}

/// Show the current identity state.
pub fn whoami() -> Result<()> {
    match cappic::auth::load_session(default_session_path())? {
        Some(session) => {
            println!("Signed in as {} ({})", session.identity.email, session.identity.uid);
            if let Some(name) = session.identity.display_name {
                println!("Display name: {name}");
            }
        }
        None => println!("Not signed in — moments are stored on this device only."),
    }
    Ok(())
}
