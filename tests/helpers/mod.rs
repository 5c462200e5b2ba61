#![allow(dead_code)]

use anyhow::Result;
use cappic::auth::Identity;
use cappic::moment::types::Moment;
use cappic::store::local::LocalStore;
use cappic::store::RecordStore;
use chrono::{DateTime, TimeZone, Utc};
use std::cell::RefCell;

/// Open a fresh in-memory local store with the schema applied.
pub fn test_store() -> LocalStore {
    LocalStore::open_in_memory().unwrap()
}

/// Build a moment with the given id/timestamp and optional note, mood, tags.
pub fn moment(
    id: &str,
    timestamp: i64,
    note: Option<&str>,
    mood: Option<&str>,
    tags: &[&str],
) -> Moment {
    Moment {
        id: id.into(),
        timestamp,
        image_url: None,
        note: note.map(Into::into),
        mood: mood.map(Into::into),
        tags: if tags.is_empty() {
            None
        } else {
            Some(tags.iter().map(|t| t.to_string()).collect())
        },
        user_id: "local-user".into(),
        created_at: None,
    }
}

/// Epoch millis for a UTC date and hour.
pub fn millis(year: i32, month: u32, day: u32, hour: u32) -> i64 {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .unwrap()
        .timestamp_millis()
}

/// A fixed "now" for timeline tests: Wednesday 2024-03-13 12:00 UTC.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 13, 12, 0, 0).unwrap()
}

pub fn identity(uid: &str) -> Identity {
    Identity {
        uid: uid.into(),
        email: format!("{uid}@example.com"),
        display_name: None,
        photo_url: None,
    }
}

/// Scripted remote store for coordinator tests: a queue of list results and
/// a switch to make creates fail.
pub struct FakeRemote {
    lists: RefCell<Vec<Result<Vec<Moment>>>>,
    fail_create: bool,
}

impl FakeRemote {
    pub fn with_lists(lists: Vec<Result<Vec<Moment>>>) -> Self {
        Self {
            lists: RefCell::new(lists),
            fail_create: false,
        }
    }

    pub fn failing_create() -> Self {
        Self {
            lists: RefCell::new(vec![Ok(Vec::new())]),
            fail_create: true,
        }
    }
}

impl RecordStore for FakeRemote {
    async fn list_moments(&self, _uid: &str) -> Result<Vec<Moment>> {
        self.lists.borrow_mut().remove(0)
    }

    async fn create_moment(&self, moment: &Moment) -> Result<Moment> {
        if self.fail_create {
            anyhow::bail!("remote unavailable");
        }
        let mut stored = moment.clone();
        stored.id = format!("srv-{}", moment.id);
        stored.created_at = Some(1_710_000_000_000);
        Ok(stored)
    }
}
