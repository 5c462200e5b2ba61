//! CLI `capture` command — record a new moment.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::warn;

use cappic::config::CappicConfig;
use cappic::moment::types::{mood_label, Moment, MOODS};

/// Capture a moment from an image file plus optional note, mood, and tags.
///
/// Signed in, the image is uploaded to blob storage and the moment stores
/// the returned URL; anonymously (or when the upload fails) the moment
/// references the local file instead.
pub async fn capture(
    config: &CappicConfig,
    image: &Path,
    note: Option<String>,
    mood: Option<String>,
    tags: Vec<String>,
) -> Result<()> {
    let mut coordinator = super::open_coordinator(config).await?;

    let bytes = std::fs::read(image)
        .with_context(|| format!("failed to read image file: {}", image.display()))?;
    let filename = image
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("image.jpg");

    let image_url = match coordinator.identity().cloned() {
        Some(identity) => {
            match coordinator
                .remote()
                .upload_image(&identity.uid, filename, bytes)
                .await
            {
                Ok(url) => url,
                Err(error) => {
                    warn!(%error, "image upload failed, referencing the local file");
                    local_file_url(image)?
                }
            }
        }
        None => local_file_url(image)?,
    };

    let moment = Moment::new(
        chrono::Utc::now().timestamp_millis(),
        Some(image_url),
        note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()),
        mood.map(|m| normalize_mood(&m)),
        if tags.is_empty() { None } else { Some(tags) },
    );

    coordinator.add_moment(moment).await?;

    println!("Moment captured.");
    if !coordinator.is_authenticated() {
        println!("(stored on this device — sign in to sync)");
    }
    Ok(())
}

/// `file://` URL for the canonical path of a local image.
fn local_file_url(image: &Path) -> Result<String> {
    let canonical = image
        .canonicalize()
        .with_context(|| format!("failed to resolve image path: {}", image.display()))?;
    Ok(format!("file://{}", canonical.display()))
}

/// Accept a mood as its emoji or its English label ("happy" → 😊).
/// Anything else passes through unchanged — the data model does not reject
/// arbitrary moods.
fn normalize_mood(input: &str) -> String {
    for emoji in MOODS {
        if emoji == input || mood_label(emoji).eq_ignore_ascii_case(input) {
            return emoji.to_string();
        }
    }
    input.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_names_normalize_to_emoji() {
        assert_eq!(normalize_mood("happy"), "😊");
        assert_eq!(normalize_mood("In Love"), "😍");
        assert_eq!(normalize_mood("😎"), "😎");
        // arbitrary moods pass through
        assert_eq!(normalize_mood("zen"), "zen");
    }
}
