//! Core journaling type definitions.
//!
//! Defines [`Moment`] (one captured entry), [`Settings`] (the user preference
//! record), and the [`PromptFrequency`] / [`Theme`] setting enums. Serialized
//! field names are camelCase so persisted and exported JSON matches the
//! original cappic wire format.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// Owner id assigned to moments captured while no account is signed in.
pub const LOCAL_USER_ID: &str = "local-user";

/// The suggested mood emoji set offered at capture time.
///
/// Suggested only — the data model accepts arbitrary mood strings.
pub const MOODS: [&str; 8] = ["😊", "😢", "😡", "😴", "🤔", "😍", "😎", "😭"];

/// The suggested tag vocabulary. Arbitrary tags are not rejected.
pub const SUGGESTED_TAGS: [&str; 8] = [
    "work", "family", "friends", "travel", "food", "nature", "art", "music",
];

/// English label for a mood emoji from the suggested set.
///
/// Unknown moods fall back to the input unchanged.
pub fn mood_label(mood: &str) -> &str {
    match mood {
        "😊" => "Happy",
        "😢" => "Sad",
        "😡" => "Angry",
        "😴" => "Tired",
        "🤔" => "Thoughtful",
        "😍" => "In Love",
        "😎" => "Cool",
        "😭" => "Crying",
        other => other,
    }
}

/// One captured journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Moment {
    /// Opaque unique id: UUID v7 when client-generated, store id when the
    /// remote collection assigned it.
    pub id: String,
    /// Instant of capture, milliseconds since epoch. Primary ordering key,
    /// descending (newest first).
    pub timestamp: i64,
    /// Inline encoded image or a retrievable URL. The capture flow treats
    /// this as mandatory in practice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Free-text note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Mood emoji, usually drawn from [`MOODS`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    /// Tags, usually drawn from [`SUGGESTED_TAGS`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Owner id — [`LOCAL_USER_ID`] when captured anonymously.
    pub user_id: String,
    /// Server-assigned write timestamp (millis), distinct from `timestamp`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

impl Moment {
    /// Build a new client-side moment with a fresh UUID v7 id, owned by
    /// [`LOCAL_USER_ID`] until a signed-in write reassigns it.
    pub fn new(
        timestamp: i64,
        image_url: Option<String>,
        note: Option<String>,
        mood: Option<String>,
        tags: Option<Vec<String>>,
    ) -> Self {
        Self {
            id: uuid::Uuid::now_v7().to_string(),
            timestamp,
            image_url,
            note,
            mood,
            tags,
            user_id: LOCAL_USER_ID.to_string(),
            created_at: None,
        }
    }
}

/// How often cappic prompts the user to capture a moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptFrequency {
    Daily,
    Weekly,
    Manual,
}

impl PromptFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Manual => "manual",
        }
    }
}

impl std::fmt::Display for PromptFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PromptFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "manual" => Ok(Self::Manual),
            _ => Err(format!("unknown prompt frequency: {s}")),
        }
    }
}

/// Display theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// Follow the system preference.
    Auto,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "auto" => Ok(Self::Auto),
            _ => Err(format!("unknown theme: {s}")),
        }
    }
}

/// User preference record, persisted as a single JSON object under the
/// `cappic-settings` key. No versioning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub prompt_frequency: PromptFrequency,
    pub enable_notifications: bool,
    pub auto_capture: bool,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prompt_frequency: PromptFrequency::Manual,
            enable_notifications: false,
            auto_capture: false,
            theme: Theme::Light,
        }
    }
}
