//! Timeline filter/group pipeline.
//!
//! [`filter_and_group`] is the single entry point: apply the text search and
//! mood/tag filters (pure predicates, composed by AND), then place each
//! surviving moment in exactly one labeled temporal bucket. Bucket labels are
//! assigned by precedence — Today, then Yesterday, then This Week, then the
//! month-and-year — against an injected `now`, so the pipeline is a pure
//! function of its inputs.
//!
//! Buckets are emitted in canonical chronological order (Today, Yesterday,
//! This Week, then months newest-first). Entry order within a bucket follows
//! the input list; callers supply moments newest-first and the pipeline never
//! re-sorts entries.

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone};

use crate::moment::types::Moment;

/// Sentinel filter value meaning "no mood/tag filter".
pub const FILTER_ALL: &str = "all";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// One labeled temporal bucket of the grouped timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineGroup {
    /// `"Today"`, `"Yesterday"`, `"This Week"`, or e.g. `"March 2024"`.
    pub label: String,
    /// Entries in this bucket, in input order (newest first when the caller
    /// supplied a sorted list).
    pub moments: Vec<Moment>,
}

/// Search predicate: case-insensitive substring match against the note or
/// any tag. An empty search term matches everything.
pub fn matches_search(moment: &Moment, search_term: &str) -> bool {
    if search_term.is_empty() {
        return true;
    }
    let term = search_term.to_lowercase();
    let note_matches = moment
        .note
        .as_ref()
        .is_some_and(|note| note.to_lowercase().contains(&term));
    let tag_matches = moment
        .tags
        .as_ref()
        .is_some_and(|tags| tags.iter().any(|tag| tag.to_lowercase().contains(&term)));
    note_matches || tag_matches
}

/// Category predicate: the moment's mood equals the filter, or its tags
/// contain the filter exactly. The [`FILTER_ALL`] sentinel matches everything.
pub fn matches_filter(moment: &Moment, filter: &str) -> bool {
    if filter == FILTER_ALL {
        return true;
    }
    moment.mood.as_deref() == Some(filter)
        || moment
            .tags
            .as_ref()
            .is_some_and(|tags| tags.iter().any(|tag| tag == filter))
}

/// Filter `moments` by `search_term` and `filter`, then group the survivors
/// into labeled temporal buckets evaluated against `now`.
///
/// Returns buckets in canonical chronological order. Empty input (or filters
/// that eliminate everything) yields an empty vec.
pub fn filter_and_group<Tz: TimeZone>(
    moments: &[Moment],
    search_term: &str,
    filter: &str,
    now: DateTime<Tz>,
) -> Vec<TimelineGroup> {
    let tz = now.timezone();
    let today = now.date_naive();

    let mut groups: Vec<(Bucket, Vec<Moment>)> = Vec::new();
    for moment in moments {
        if !matches_search(moment, search_term) || !matches_filter(moment, filter) {
            continue;
        }
        let date = DateTime::from_timestamp_millis(moment.timestamp)
            .unwrap_or(DateTime::UNIX_EPOCH)
            .with_timezone(&tz)
            .date_naive();
        let bucket = Bucket::for_date(date, today);
        match groups.iter_mut().find(|(b, _)| *b == bucket) {
            Some((_, entries)) => entries.push(moment.clone()),
            None => groups.push((bucket, vec![moment.clone()])),
        }
    }

    groups.sort_by_key(|(bucket, _)| bucket.sort_key());
    groups
        .into_iter()
        .map(|(bucket, moments)| TimelineGroup {
            label: bucket.label(),
            moments,
        })
        .collect()
}

/// Temporal bucket identity, before labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    Today,
    Yesterday,
    ThisWeek,
    Month { year: i32, month: u32 },
}

impl Bucket {
    /// Assign a bucket by precedence: Today, Yesterday, This Week, Month-Year.
    fn for_date(date: NaiveDate, today: NaiveDate) -> Self {
        if date == today {
            Self::Today
        } else if today.pred_opt() == Some(date) {
            Self::Yesterday
        } else if in_current_week(date, today) {
            Self::ThisWeek
        } else {
            Self::Month {
                year: date.year(),
                month: date.month(),
            }
        }
    }

    fn label(&self) -> String {
        match self {
            Self::Today => "Today".to_string(),
            Self::Yesterday => "Yesterday".to_string(),
            Self::ThisWeek => "This Week".to_string(),
            Self::Month { year, month } => {
                format!("{} {}", MONTH_NAMES[(*month - 1) as usize], year)
            }
        }
    }

    /// Canonical ordering: named buckets first, then months newest-first.
    fn sort_key(&self) -> (u8, i64) {
        match self {
            Self::Today => (0, 0),
            Self::Yesterday => (1, 0),
            Self::ThisWeek => (2, 0),
            Self::Month { year, month } => (3, -(*year as i64 * 12 + *month as i64)),
        }
    }
}

/// Current calendar week containing `today`, weeks starting Sunday.
fn in_current_week(date: NaiveDate, today: NaiveDate) -> bool {
    let days_from_sunday = today.weekday().num_days_from_sunday() as u64;
    let week_start = today - Days::new(days_from_sunday);
    date >= week_start && date < week_start + Days::new(7)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn moment(id: &str, timestamp: i64, note: Option<&str>, mood: Option<&str>, tags: &[&str]) -> Moment {
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

    // Wednesday 2024-03-13 12:00 UTC
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 13, 12, 0, 0).unwrap()
    }

    fn millis(year: i32, month: u32, day: u32, hour: u32) -> i64 {
        Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
            .unwrap()
            .timestamp_millis()
    }

    #[test]
    fn search_matches_note_and_tags_case_insensitively() {
        let m = moment("a", 0, Some("Lunch at the park"), None, &["Food"]);
        assert!(matches_search(&m, "lunch"));
        assert!(matches_search(&m, "PARK"));
        assert!(matches_search(&m, "foo"));
        assert!(!matches_search(&m, "meeting"));
    }

    #[test]
    fn search_never_matches_bare_moment() {
        let m = moment("a", 0, None, Some("😊"), &[]);
        assert!(!matches_search(&m, "anything"));
        assert!(matches_search(&m, ""));
    }

    #[test]
    fn filter_matches_mood_or_exact_tag() {
        let m = moment("a", 0, None, Some("😊"), &["work"]);
        assert!(matches_filter(&m, "all"));
        assert!(matches_filter(&m, "😊"));
        assert!(matches_filter(&m, "work"));
        // tag match is exact, unlike search
        assert!(!matches_filter(&m, "wor"));
        assert!(!matches_filter(&m, "😎"));
    }

    #[test]
    fn bucket_precedence_today_yesterday_week_month() {
        let today = now().date_naive();
        assert_eq!(Bucket::for_date(today, today), Bucket::Today);
        assert_eq!(Bucket::for_date(today.pred_opt().unwrap(), today), Bucket::Yesterday);
        // Sunday 2024-03-10 starts the current week
        let sunday = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(Bucket::for_date(sunday, today), Bucket::ThisWeek);
        // Saturday 2024-03-09 is the previous week
        let saturday = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(
            Bucket::for_date(saturday, today),
            Bucket::Month { year: 2024, month: 3 }
        );
    }

    #[test]
    fn month_labels_cover_prior_years() {
        assert_eq!(Bucket::Month { year: 2024, month: 3 }.label(), "March 2024");
        assert_eq!(Bucket::Month { year: 2022, month: 12 }.label(), "December 2022");
    }

    #[test]
    fn groups_come_out_in_canonical_order() {
        // Deliberately scrambled input: old entry first
        let moments = vec![
            moment("old", millis(2023, 11, 2, 9), Some("autumn walk"), None, &[]),
            moment("today", millis(2024, 3, 13, 8), Some("coffee"), None, &[]),
            moment("feb", millis(2024, 2, 20, 9), Some("ski trip"), None, &[]),
            moment("yday", millis(2024, 3, 12, 20), Some("dinner"), None, &[]),
        ];

        let groups = filter_and_group(&moments, "", "all", now());
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Today", "Yesterday", "February 2024", "November 2023"]);
    }

    #[test]
    fn entry_order_within_group_follows_input() {
        let moments = vec![
            moment("a", millis(2024, 3, 13, 11), Some("late morning"), None, &[]),
            moment("b", millis(2024, 3, 13, 8), Some("early morning"), None, &[]),
        ];
        let groups = filter_and_group(&moments, "", "all", now());
        assert_eq!(groups.len(), 1);
        let ids: Vec<&str> = groups[0].moments.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(filter_and_group(&[], "", "all", now()).is_empty());
    }
}
