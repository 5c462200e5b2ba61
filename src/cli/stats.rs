//! CLI `stats` command — summarize the moment collection.

use anyhow::Result;
use chrono::{DateTime, Local};
use std::collections::HashMap;

use cappic::config::CappicConfig;
use cappic::moment::types::mood_label;

/// Display moment statistics for the current identity state.
pub async fn stats(config: &CappicConfig) -> Result<()> {
    let coordinator = super::open_coordinator(config).await?;
    let moments = coordinator.moments();

    println!("Moment Statistics");
    println!("{}", "=".repeat(40));
    println!("  Total moments:   {}", moments.len());
    println!(
        "  Store:           {}",
        if coordinator.is_authenticated() {
            "remote (signed in)"
        } else {
            "local (this device)"
        }
    );

    if moments.is_empty() {
        return Ok(());
    }

    let mut by_mood: HashMap<&str, usize> = HashMap::new();
    let mut by_tag: HashMap<&str, usize> = HashMap::new();
    for moment in moments {
        if let Some(ref mood) = moment.mood {
            *by_mood.entry(mood.as_str()).or_default() += 1;
        }
        for tag in moment.tags.iter().flatten() {
            *by_tag.entry(tag.as_str()).or_default() += 1;
        }
    }

    if !by_mood.is_empty() {
        println!();
        println!("By Mood:");
        let mut moods: Vec<_> = by_mood.into_iter().collect();
        moods.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        for (mood, count) in moods {
            println!("  {mood} {:<12} {count}", mood_label(mood));
        }
    }

    if !by_tag.is_empty() {
        println!();
        println!("By Tag:");
        let mut tags: Vec<_> = by_tag.into_iter().collect();
        tags.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        for (tag, count) in tags {
            println!("  #{:<12} {count}", tag);
        }
    }

    // lists are newest-first
    let newest = moments.first().map(|m| m.timestamp);
    let oldest = moments.iter().map(|m| m.timestamp).min();
    println!();
    if let Some(ts) = oldest {
        println!("Oldest moment:     {}", format_millis(ts));
    }
    if let Some(ts) = newest {
        println!("Newest moment:     {}", format_millis(ts));
    }

    Ok(())
}

fn format_millis(timestamp: i64) -> String {
    DateTime::from_timestamp_millis(timestamp)
        .unwrap_or(DateTime::UNIX_EPOCH)
        .with_timezone(&Local)
        .format("%b %-d, %Y %-I:%M %p")
        .to_string()
}
