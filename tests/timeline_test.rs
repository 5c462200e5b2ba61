mod helpers;

use cappic::moment::timeline::{filter_and_group, matches_filter, matches_search, FILTER_ALL};
use helpers::{fixed_now, millis, moment};

#[test]
fn grouped_total_equals_filtered_count() {
    let moments = vec![
        moment("a", millis(2024, 3, 13, 9), Some("lunch at the park"), Some("😊"), &["food"]),
        moment("b", millis(2024, 3, 12, 9), Some("team meeting"), None, &["work"]),
        moment("c", millis(2024, 2, 1, 9), Some("lunch again"), None, &["food"]),
        moment("d", millis(2023, 7, 4, 9), Some("fireworks"), Some("😎"), &[]),
    ];

    let expected = moments
        .iter()
        .filter(|m| matches_search(m, "lunch") && matches_filter(m, "food"))
        .count();

    let groups = filter_and_group(&moments, "lunch", "food", fixed_now());
    let total: usize = groups.iter().map(|g| g.moments.len()).sum();
    assert_eq!(total, expected);
    assert_eq!(total, 2);
}

#[test]
fn every_entry_lands_in_exactly_one_group() {
    let moments = vec![
        moment("today", millis(2024, 3, 13, 8), None, Some("😊"), &[]),
        moment("yday", millis(2024, 3, 12, 8), None, Some("😊"), &[]),
        moment("week", millis(2024, 3, 10, 8), None, Some("😊"), &[]),
        moment("march", millis(2024, 3, 1, 8), None, Some("😊"), &[]),
        moment("old", millis(2022, 6, 15, 8), None, Some("😊"), &[]),
    ];

    let groups = filter_and_group(&moments, "", FILTER_ALL, fixed_now());
    let total: usize = groups.iter().map(|g| g.moments.len()).sum();
    assert_eq!(total, moments.len());

    // no id appears twice
    let mut seen = std::collections::HashSet::new();
    for group in &groups {
        for m in &group.moments {
            assert!(seen.insert(m.id.clone()), "{} grouped twice", m.id);
        }
    }
}

#[test]
fn week_precedence_beats_month_bucket() {
    // Sunday 2024-03-10 starts the current week relative to the fixed
    // Wednesday — still "This Week", not "March 2024".
    let moments = vec![moment("sun", millis(2024, 3, 10, 8), None, None, &[])];
    let groups = filter_and_group(&moments, "", FILTER_ALL, fixed_now());
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].label, "This Week");
}

#[test]
fn today_outranks_every_other_label() {
    let moments = vec![moment("now", fixed_now().timestamp_millis(), None, None, &[])];
    let groups = filter_and_group(&moments, "", FILTER_ALL, fixed_now());
    assert_eq!(groups[0].label, "Today");
}

#[test]
fn lunch_scenario_keeps_only_the_matching_moment() {
    let moments = vec![
        moment("m1", millis(2024, 3, 13, 12), Some("lunch"), None, &["food"]),
        moment("m2", millis(2024, 3, 5, 12), Some("meeting"), None, &["work"]),
    ];

    let groups = filter_and_group(&moments, "lunch", FILTER_ALL, fixed_now());
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].label, "Today");
    assert_eq!(groups[0].moments.len(), 1);
    assert_eq!(groups[0].moments[0].id, "m1");
}

#[test]
fn empty_search_term_is_a_no_op() {
    let moments = vec![
        moment("a", millis(2024, 3, 13, 11), Some("first"), None, &[]),
        moment("b", millis(2024, 3, 13, 8), None, None, &[]),
        moment("c", millis(2024, 3, 12, 8), Some("third"), None, &["work"]),
    ];

    let groups = filter_and_group(&moments, "", FILTER_ALL, fixed_now());
    let flattened: Vec<&str> = groups
        .iter()
        .flat_map(|g| g.moments.iter().map(|m| m.id.as_str()))
        .collect();
    // same content, same relative order
    assert_eq!(flattened, vec!["a", "b", "c"]);
}

#[test]
fn groups_are_labeled_in_canonical_order() {
    // Input deliberately scrambled: oldest entry first.
    let moments = vec![
        moment("nov23", millis(2023, 11, 20, 8), None, None, &[]),
        moment("today", millis(2024, 3, 13, 8), None, None, &[]),
        moment("jan24", millis(2024, 1, 5, 8), None, None, &[]),
        moment("yday", millis(2024, 3, 12, 8), None, None, &[]),
        moment("feb24", millis(2024, 2, 14, 8), None, None, &[]),
    ];

    let groups = filter_and_group(&moments, "", FILTER_ALL, fixed_now());
    let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Today", "Yesterday", "February 2024", "January 2024", "November 2023"]
    );
}

#[test]
fn search_and_filter_compose_by_and() {
    let moments = vec![
        moment("a", millis(2024, 3, 13, 9), Some("lunch"), Some("😊"), &["food"]),
        moment("b", millis(2024, 3, 13, 10), Some("lunch"), Some("😢"), &[]),
        moment("c", millis(2024, 3, 13, 11), Some("dinner"), Some("😊"), &[]),
    ];

    let groups = filter_and_group(&moments, "lunch", "😊", fixed_now());
    let total: usize = groups.iter().map(|g| g.moments.len()).sum();
    assert_eq!(total, 1);
    assert_eq!(groups[0].moments[0].id, "a");
}
