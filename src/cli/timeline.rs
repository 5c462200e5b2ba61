//! CLI `timeline` command — browse moments grouped into temporal buckets.

use anyhow::Result;
use chrono::{DateTime, Local};

use cappic::config::CappicConfig;
use cappic::moment::timeline::{filter_and_group, FILTER_ALL};
use cappic::moment::types::mood_label;

/// Print the grouped timeline, optionally narrowed by a search term and a
/// mood/tag filter.
pub async fn timeline(
    config: &CappicConfig,
    search: Option<String>,
    filter: Option<String>,
) -> Result<()> {
    let coordinator = super::open_coordinator(config).await?;
    let moments = coordinator.moments();

    if moments.is_empty() {
        println!("No moments yet. Capture your first with `cappic capture`.");
        return Ok(());
    }

    let search = search.unwrap_or_default();
    let filter = filter.unwrap_or_else(|| FILTER_ALL.to_string());
    let groups = filter_and_group(moments, &search, &filter, Local::now());

    if groups.is_empty() {
        println!("No moments match your filters.");
        return Ok(());
    }

    let total = moments.len();
    println!(
        "{total} moment{} captured",
        if total == 1 { "" } else { "s" }
    );

    for group in &groups {
        println!();
        println!("{}", group.label);
        println!("{}", "-".repeat(group.label.len()));

        for moment in &group.moments {
            let when = DateTime::from_timestamp_millis(moment.timestamp)
                .unwrap_or(DateTime::UNIX_EPOCH)
                .with_timezone(&Local);

            let mut line = format!("  {}", when.format("%b %-d, %Y %-I:%M %p"));
            if let Some(ref mood) = moment.mood {
                line.push_str(&format!("  {mood} ({})", mood_label(mood)));
            }
            println!("{line}");

            if let Some(ref note) = moment.note {
                println!("    {note}");
            }
            if let Some(ref tags) = moment.tags {
                if !tags.is_empty() {
                    let tagged: Vec<String> = tags.iter().map(|t| format!("#{t}")).collect();
                    println!("    {}", tagged.join(" "));
                }
            }
            if let Some(ref url) = moment.image_url {
                println!("    {url}");
            }
        }
    }

    Ok(())
}
