// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use chrono::TimeZone;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn at(ms: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(ms).unwrap()
}

/// Collection with categories "Arrays" (id 1000) and "Graphs" (id 2000).
fn two_categories() -> Collection {
    let mut c = Collection::new();
    c.add_category("Arrays", "", at(1000)).unwrap();
    c.add_category("Graphs", "", at(2000)).unwrap();
    c
}

fn ids(c: &Collection) -> Vec<CategoryId> {
    c.categories().iter().map(|c| c.id).collect()
}

fn problem_ids(c: &Collection, category_id: CategoryId) -> Vec<ProblemId> {
    c.category(category_id)
        .unwrap()
        .problems
        .iter()
        .map(|p| p.id)
        .collect()
}

// Categories

#[test]
fn test_add_category_appends() {
    let mut c = Collection::new();
    let a = c.add_category("Arrays", "  basics ", at(1000)).unwrap().unwrap();
    let b = c.add_category("  Graphs ", "", at(2000)).unwrap().unwrap();

    assert_eq!(ids(&c), vec![a, b]);
    assert_eq!(c.category(a).unwrap().description, "basics");
    assert_eq!(c.category(b).unwrap().name, "Graphs");
    assert!(c.category(b).unwrap().problems.is_empty());
}

#[test]
fn test_add_category_empty_name_is_noop() {
    let mut c = Collection::new();
    assert_eq!(c.add_category("   ", "desc", at(1000)).unwrap(), None);
    assert!(c.is_empty());
}

#[test]
fn test_add_category_duplicate_name_case_insensitive() {
    let mut c = Collection::new();
    c.add_category("arrays", "", at(1000)).unwrap();

    let err = c.add_category("Arrays", "", at(2000)).unwrap_err();
    assert!(matches!(err, Error::DuplicateName(ref n) if n == "Arrays"));
    assert_eq!(c.categories().len(), 1);
}

#[test]
fn test_add_category_ids_unique_within_same_millisecond() {
    let mut c = Collection::new();
    let a = c.add_category("A", "", at(1000)).unwrap().unwrap();
    let b = c.add_category("B", "", at(1000)).unwrap().unwrap();
    assert_ne!(a, b);
    assert!(b > a);
}

#[test]
fn test_add_category_after_max_id() {
    let mut c = Collection::from_parts(vec![Category::new(i64::MAX, "Big", "")], vec![]);

    let id = c.add_category("Other", "", at(1000)).unwrap().unwrap();
    assert_eq!(id, 0);
    assert_eq!(ids(&c), vec![i64::MAX, 0]);
}

#[test]
fn test_delete_category_discards_problems_and_collapsed_flag() {
    let mut c = two_categories();
    c.add_problem(1000, NewProblem::titled("Two Sum"), at(3000)).unwrap();
    c.toggle_category_collapsed(1000);

    assert!(c.delete_category(1000));
    assert_eq!(ids(&c), vec![2000]);
    assert_eq!(c.problem_count(), 0);
    assert!(!c.is_collapsed(1000));
}

#[test]
fn test_delete_category_missing_is_noop() {
    let mut c = two_categories();
    assert!(!c.delete_category(42));
    assert_eq!(ids(&c), vec![1000, 2000]);
}

#[test]
fn test_update_category_renames_and_keeps_description_when_blank() {
    let mut c = Collection::new();
    c.add_category("Arrays", "old", at(1000)).unwrap();

    assert!(c.update_category(1000, "Array Problems", "").unwrap());
    let cat = c.category(1000).unwrap();
    assert_eq!(cat.name, "Array Problems");
    assert_eq!(cat.description, "old");

    assert!(c.update_category(1000, "Array Problems", "new").unwrap());
    assert_eq!(c.category(1000).unwrap().description, "new");
}

#[test]
fn test_update_category_rejects_sibling_name() {
    let mut c = two_categories();
    let err = c.update_category(2000, "ARRAYS", "").unwrap_err();
    assert!(matches!(err, Error::DuplicateName(_)));
    assert_eq!(c.category(2000).unwrap().name, "Graphs");
}

#[test]
fn test_update_category_allows_case_change_of_own_name() {
    let mut c = two_categories();
    assert!(c.update_category(1000, "ARRAYS", "").unwrap());
    assert_eq!(c.category(1000).unwrap().name, "ARRAYS");
}

#[test]
fn test_update_category_missing_or_blank_is_noop() {
    let mut c = two_categories();
    assert!(!c.update_category(42, "New", "").unwrap());
    assert!(!c.update_category(1000, "  ", "").unwrap());
    assert_eq!(c.category(1000).unwrap().name, "Arrays");
}

#[test]
fn test_toggle_category_collapsed_flips_membership() {
    let mut c = two_categories();
    assert!(c.toggle_category_collapsed(1000));
    assert!(c.is_collapsed(1000));
    assert_eq!(c.collapsed(), &[1000]);

    assert!(!c.toggle_category_collapsed(1000));
    assert!(c.collapsed().is_empty());
}

#[test]
fn test_category_by_name_case_insensitive() {
    let c = two_categories();
    assert_eq!(c.category_by_name(" graphs ").unwrap().id, 2000);
    assert!(c.category_by_name("trees").is_none());
}

// Problems

#[test]
fn test_add_problem_defaults() {
    let mut c = two_categories();
    let id = c
        .add_problem(
            1000,
            NewProblem::titled("  Two Sum ").with_number(" 1 ").with_notes(" hash map "),
            at(5000),
        )
        .unwrap()
        .unwrap();

    let p = c.problem(ProblemKey::new(1000, id)).unwrap();
    assert_eq!(p.title, "Two Sum");
    assert_eq!(p.number, "1");
    assert_eq!(p.notes, "hash map");
    assert_eq!(p.difficulty, Difficulty::Medium);
    assert!(!p.solved);
    assert_eq!(p.solved_times, 0);
    assert_eq!(p.solved_at, at(5000));
}

#[test]
fn test_add_problem_blank_title_or_missing_category_is_noop() {
    let mut c = two_categories();
    assert_eq!(c.add_problem(1000, NewProblem::titled("  "), at(5000)).unwrap(), None);
    assert_eq!(c.add_problem(42, NewProblem::titled("A"), at(5000)).unwrap(), None);
    assert_eq!(c.problem_count(), 0);
}

#[test]
fn test_add_problem_duplicate_title_within_category() {
    let mut c = two_categories();
    c.add_problem(1000, NewProblem::titled("Two Sum"), at(5000)).unwrap();

    let err = c
        .add_problem(1000, NewProblem::titled("two sum"), at(6000))
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateTitle { .. }));

    // Same title in another category is fine
    assert!(c
        .add_problem(2000, NewProblem::titled("Two Sum"), at(6000))
        .unwrap()
        .is_some());
}

#[test]
fn test_add_problem_duplicate_number_only_when_non_empty() {
    let mut c = two_categories();
    c.add_problem(1000, NewProblem::titled("A").with_number("1"), at(5000)).unwrap();
    c.add_problem(1000, NewProblem::titled("B"), at(6000)).unwrap();
    c.add_problem(1000, NewProblem::titled("C"), at(7000)).unwrap();

    let err = c
        .add_problem(1000, NewProblem::titled("D").with_number("1"), at(8000))
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateNumber { ref number, .. } if number == "1"));
    assert_eq!(c.category(1000).unwrap().problems.len(), 3);
}

#[test]
fn test_toggle_solved_twice() {
    let mut c = two_categories();
    let id = c.add_problem(1000, NewProblem::titled("A"), at(5000)).unwrap().unwrap();

    assert_eq!(c.toggle_solved(1000, id), Some(true));
    let p = c.problem(ProblemKey::new(1000, id)).unwrap();
    assert!(p.solved);
    assert_eq!(p.solved_times, 1);

    assert_eq!(c.toggle_solved(1000, id), Some(false));
    let p = c.problem(ProblemKey::new(1000, id)).unwrap();
    assert!(!p.solved);
    assert_eq!(p.solved_times, 1);
}

#[test]
fn test_toggle_solved_missing() {
    let mut c = two_categories();
    assert_eq!(c.toggle_solved(1000, 1), None);
    assert_eq!(c.toggle_solved(42, 1), None);
}

#[test]
fn test_toggle_solved_imported_counter_at_limit() {
    let json = r#"[{"id": 1, "name": "Arrays", "problems": [
        {"id": 2, "title": "Two Sum", "solvedTimes": 4294967295}
    ]}]"#;
    let mut c = Collection::from_snapshot(Snapshot::parse(json).unwrap());

    assert_eq!(c.toggle_solved(1, 2), Some(true));
    assert_eq!(c.problem(ProblemKey::new(1, 2)).unwrap().solved_times, u32::MAX);
}

#[test]
fn test_delete_problem() {
    let mut c = two_categories();
    let id = c.add_problem(1000, NewProblem::titled("A"), at(5000)).unwrap().unwrap();
    assert!(!c.delete_problem(2000, id));
    assert!(c.delete_problem(1000, id));
    assert!(!c.delete_problem(1000, id));
}

#[test]
fn test_update_problem_merges_patch() {
    let mut c = two_categories();
    let id = c
        .add_problem(1000, NewProblem::titled("A").with_number("1"), at(5000))
        .unwrap()
        .unwrap();

    let patch = ProblemPatch {
        difficulty: Some(Difficulty::Hard),
        notes: Some(" two pointers ".to_string()),
        ..Default::default()
    };
    assert!(c.update_problem(1000, id, patch).unwrap());

    let p = c.problem(ProblemKey::new(1000, id)).unwrap();
    assert_eq!(p.title, "A");
    assert_eq!(p.number, "1");
    assert_eq!(p.difficulty, Difficulty::Hard);
    assert_eq!(p.notes, "two pointers");
}

#[test]
fn test_update_problem_blank_title_keeps_current() {
    let mut c = two_categories();
    let id = c.add_problem(1000, NewProblem::titled("A"), at(5000)).unwrap().unwrap();
    let patch = ProblemPatch {
        title: Some("  ".to_string()),
        ..Default::default()
    };
    assert!(c.update_problem(1000, id, patch).unwrap());
    assert_eq!(c.problem(ProblemKey::new(1000, id)).unwrap().title, "A");
}

#[test]
fn test_update_problem_rejects_sibling_collision() {
    let mut c = two_categories();
    c.add_problem(1000, NewProblem::titled("A").with_number("1"), at(5000)).unwrap();
    let b = c
        .add_problem(1000, NewProblem::titled("B").with_number("2"), at(6000))
        .unwrap()
        .unwrap();

    let rename = ProblemPatch {
        title: Some("a".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        c.update_problem(1000, b, rename),
        Err(Error::DuplicateTitle { .. })
    ));

    let renumber = ProblemPatch {
        number: Some("1".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        c.update_problem(1000, b, renumber),
        Err(Error::DuplicateNumber { .. })
    ));

    let p = c.problem(ProblemKey::new(1000, b)).unwrap();
    assert_eq!(p.title, "B");
    assert_eq!(p.number, "2");
}

#[test]
fn test_update_problem_missing_is_noop() {
    let mut c = two_categories();
    assert!(!c.update_problem(1000, 1, ProblemPatch::default()).unwrap());
}

// Reordering

#[test]
fn test_reorder_categories_array_move_semantics() {
    let mut c = Collection::new();
    for (i, name) in ["A", "B", "C", "D", "E"].iter().enumerate() {
        c.add_category(name, "", at(i as i64 + 1)).unwrap();
    }

    // Drag A onto D: A takes D's slot, B..D shift left
    assert!(c.reorder_categories(1, 4));
    assert_eq!(ids(&c), vec![2, 3, 4, 1, 5]);

    // Drag E onto B: E takes B's slot, everything after shifts right
    assert!(c.reorder_categories(5, 2));
    assert_eq!(ids(&c), vec![5, 2, 3, 4, 1]);
}

#[test]
fn test_reorder_categories_preserves_id_multiset_and_relative_order() {
    let mut c = Collection::new();
    for i in 1..=6 {
        c.add_category(&format!("C{}", i), "", at(i)).unwrap();
    }
    let moves = [(1, 6), (4, 2), (6, 1), (3, 5), (2, 2), (9, 1)];

    for (dragged, target) in moves {
        let before = ids(&c);
        c.reorder_categories(dragged, target);
        let after = ids(&c);

        let mut sorted_before = before.clone();
        let mut sorted_after = after.clone();
        sorted_before.sort();
        sorted_after.sort();
        assert_eq!(sorted_before, sorted_after);

        let untouched = |v: &[CategoryId]| -> Vec<CategoryId> {
            v.iter().copied().filter(|&id| id != dragged).collect()
        };
        assert_eq!(untouched(before.as_slice()), untouched(after.as_slice()));
    }
}

#[test]
fn test_reorder_categories_noop_cases() {
    let mut c = two_categories();
    assert!(!c.reorder_categories(1000, 1000));
    assert!(!c.reorder_categories(1000, 42));
    assert!(!c.reorder_categories(42, 1000));
    assert_eq!(ids(&c), vec![1000, 2000]);
}

#[test]
fn test_reorder_problems_within_category() {
    let mut c = two_categories();
    for (i, title) in ["A", "B", "C"].iter().enumerate() {
        c.add_problem(1000, NewProblem::titled(*title), at(10 + i as i64)).unwrap();
    }

    assert!(c.reorder_problems(1000, 12, 10));
    assert_eq!(problem_ids(&c, 1000), vec![12, 10, 11]);
}

#[test]
fn test_reorder_problems_requires_same_category() {
    let mut c = two_categories();
    c.add_problem(1000, NewProblem::titled("A"), at(10)).unwrap();
    c.add_problem(1000, NewProblem::titled("B"), at(11)).unwrap();
    c.add_problem(2000, NewProblem::titled("C"), at(20)).unwrap();

    assert!(!c.reorder_problems(1000, 10, 20));
    assert!(!c.reorder_problems(42, 10, 11));
    assert_eq!(problem_ids(&c, 1000), vec![10, 11]);
}

// Moving

#[test]
fn test_move_problem_appends_to_target() {
    let mut c = two_categories();
    c.add_problem(1000, NewProblem::titled("A"), at(10)).unwrap();
    c.add_problem(2000, NewProblem::titled("B"), at(20)).unwrap();

    assert_eq!(c.move_problem(10, 1000, 2000).unwrap(), Some(10));
    assert!(problem_ids(&c, 1000).is_empty());
    assert_eq!(problem_ids(&c, 2000), vec![20, 10]);
}

#[test]
fn test_move_problem_round_trip_lands_at_end() {
    let mut c = two_categories();
    for (i, title) in ["A", "B", "C"].iter().enumerate() {
        c.add_problem(1000, NewProblem::titled(*title), at(10 + i as i64)).unwrap();
    }

    c.move_problem(10, 1000, 2000).unwrap();
    c.move_problem(10, 2000, 1000).unwrap();

    assert_eq!(problem_ids(&c, 1000), vec![11, 12, 10]);
    assert!(problem_ids(&c, 2000).is_empty());
}

#[test]
fn test_move_problem_duplicate_title_in_target_leaves_state() {
    let mut c = two_categories();
    c.add_problem(1000, NewProblem::titled("Two Sum"), at(10)).unwrap();
    c.add_problem(2000, NewProblem::titled("TWO SUM"), at(20)).unwrap();
    let before = c.clone();

    let err = c.move_problem(10, 1000, 2000).unwrap_err();
    assert!(matches!(err, Error::DuplicateTitle { ref category, .. } if category == "Graphs"));
    assert_eq!(c, before);
}

#[test]
fn test_move_problem_duplicate_number_in_target_leaves_state() {
    let mut c = two_categories();
    c.add_problem(1000, NewProblem::titled("A").with_number("7"), at(10)).unwrap();
    c.add_problem(2000, NewProblem::titled("B").with_number("7"), at(20)).unwrap();
    let before = c.clone();

    assert!(matches!(
        c.move_problem(10, 1000, 2000),
        Err(Error::DuplicateNumber { .. })
    ));
    assert_eq!(c, before);
}

#[test]
fn test_move_problem_reassigns_colliding_id() {
    let mut c = two_categories();
    c.add_problem(1000, NewProblem::titled("A"), at(10)).unwrap();
    c.add_problem(2000, NewProblem::titled("B"), at(10)).unwrap();

    let new_id = c.move_problem(10, 1000, 2000).unwrap().unwrap();
    assert_ne!(new_id, 10);
    assert_eq!(problem_ids(&c, 2000), vec![10, new_id]);
    assert_eq!(c.problem(ProblemKey::new(2000, new_id)).unwrap().title, "A");
}

#[test]
fn test_move_problem_noop_cases() {
    let mut c = two_categories();
    c.add_problem(1000, NewProblem::titled("A"), at(10)).unwrap();

    assert_eq!(c.move_problem(10, 1000, 1000).unwrap(), None);
    assert_eq!(c.move_problem(10, 1000, 42).unwrap(), None);
    assert_eq!(c.move_problem(99, 1000, 2000).unwrap(), None);
    assert_eq!(problem_ids(&c, 1000), vec![10]);
}

// Snapshots and random pick

#[test]
fn test_snapshot_round_trip_through_collection() {
    let mut c = two_categories();
    c.add_problem(1000, NewProblem::titled("A"), at(10)).unwrap();
    c.toggle_category_collapsed(2000);

    let restored = Collection::from_snapshot(c.to_snapshot());
    assert_eq!(restored, c);
}

#[test]
fn test_replace_installs_wholesale() {
    let mut c = two_categories();
    let mut other = Collection::new();
    other.add_category("Trees", "", at(9)).unwrap();

    c.replace(other.to_snapshot());
    assert_eq!(c, other);
}

#[test]
fn test_random_problem_empty() {
    let c = two_categories();
    let mut rng = StdRng::seed_from_u64(7);
    assert!(c.random_problem(&mut rng, false).is_none());
}

#[test]
fn test_random_problem_unsolved_only() {
    let mut c = two_categories();
    c.add_problem(1000, NewProblem::titled("A"), at(10)).unwrap();
    c.add_problem(2000, NewProblem::titled("B"), at(20)).unwrap();
    c.toggle_solved(1000, 10);

    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let (category, problem) = c.random_problem(&mut rng, true).unwrap();
        assert_eq!(category.id, 2000);
        assert_eq!(problem.title, "B");
    }
}
