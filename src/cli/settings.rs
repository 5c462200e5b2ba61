//! CLI `settings` command — show and update the user preference record.

use anyhow::{bail, Result};

use cappic::config::CappicConfig;
use cappic::store::local::LocalStore;

/// Print the current settings.
pub fn show(config: &CappicConfig) -> Result<()> {
    let store = LocalStore::open(config.resolved_db_path())?;
    let settings = store.load_settings()?;

    println!("Settings");
    println!("{}", "=".repeat(40));
    println!("  prompt-frequency   {}", settings.prompt_frequency);
    println!("  notifications      {}", on_off(settings.enable_notifications));
    println!("  auto-capture       {}", on_off(settings.auto_capture));
    println!("  theme              {}", settings.theme);
    Ok(())
}

/// Update one settings field and persist the whole record.
pub fn set(config: &CappicConfig, field: &str, value: &str) -> Result<()> {
    let store = LocalStore::open(config.resolved_db_path())?;
    let mut settings = store.load_settings()?;

    match field {
        "prompt-frequency" | "promptFrequency" => {
            settings.prompt_frequency = value.parse().map_err(|e: String| anyhow::anyhow!(e))?;
        }
        "notifications" | "enableNotifications" => {
            settings.enable_notifications = parse_toggle(value)?;
        }
        "auto-capture" | "autoCapture" => {
            settings.auto_capture = parse_toggle(value)?;
        }
        "theme" => {
            settings.theme = value.parse().map_err(|e: String| anyhow::anyhow!(e))?;
        }
        other => bail!(
            "unknown setting: {other}. Supported: prompt-frequency, notifications, auto-capture, theme"
        ),
    }

    store.save_settings(&settings)?;
    println!("Updated {field}.");
    Ok(())
}

fn parse_toggle(value: &str) -> Result<bool> {
    match value {
        "on" | "true" => Ok(true),
        "off" | "false" => Ok(false),
        other => bail!("expected on/off, got: {other}"),
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}
