//! Tag aggregation over the validated leaderboard data.

use std::collections::{BTreeMap, BTreeSet};

use crate::data::Leaderboard;

/// Derived tag aggregates: the global tag set plus the tag set per
/// leaderboard, each sorted lexicographically.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct TagSummary {
    /// Unique tags across every leaderboard, sorted ascending.
    pub all_tags: Vec<String>,
    /// Leaderboard name to its sorted unique tags.
    pub leaderboard_tags: BTreeMap<String, Vec<String>>,
}

/// Collect tag aggregates from the leaderboard sequence.
///
/// Pure and deterministic: duplicate tags collapse, entries without tags
/// contribute nothing, and the output ordering is independent of input
/// ordering.
pub fn collect_tags(leaderboards: &[Leaderboard]) -> TagSummary {
    let mut all: BTreeSet<String> = BTreeSet::new();
    let mut per_board: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for board in leaderboards {
        let tags = per_board.entry(board.name.clone()).or_default();
        for entry in &board.results {
            for tag in &entry.tags {
                tags.insert(tag.clone());
                all.insert(tag.clone());
            }
        }
    }

    TagSummary {
        all_tags: all.into_iter().collect(),
        leaderboard_tags: per_board
            .into_iter()
            .map(|(name, tags)| (name, tags.into_iter().collect()))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Entry;

    fn entry(tags: &[&str]) -> Entry {
        Entry {
            name: "agent".to_string(),
            logo: vec![],
            site: String::new(),
            folder: String::new(),
            cost: 0.0,
            resolved_full: 0.0,
            resolved_oss: 0.0,
            date: "2024-01-01".to_string(),
            logs: String::new(),
            trajs: String::new(),
            checked: false,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            warning: None,
        }
    }

    fn board(name: &str, tag_sets: &[&[&str]]) -> Leaderboard {
        Leaderboard {
            name: name.to_string(),
            results: tag_sets.iter().map(|t| entry(t)).collect(),
        }
    }

    #[test]
    fn unions_tags_across_leaderboards() {
        let boards = vec![board("A", &[&["x", "y"]]), board("B", &[&["y", "z"]])];

        let summary = collect_tags(&boards);

        assert_eq!(summary.all_tags, ["x", "y", "z"]);
        assert_eq!(summary.leaderboard_tags["A"], ["x", "y"]);
        assert_eq!(summary.leaderboard_tags["B"], ["y", "z"]);
    }

    #[test]
    fn insensitive_to_order_and_duplicates() {
        let forward = vec![board("A", &[&["x", "y"]]), board("B", &[&["y", "z"]])];
        let shuffled = vec![
            board("B", &[&["z", "y", "y"]]),
            board("A", &[&["y"], &["x", "x"]]),
        ];

        assert_eq!(collect_tags(&forward), collect_tags(&shuffled));
    }

    #[test]
    fn empty_tags_contribute_nothing() {
        let boards = vec![board("A", &[&[], &["solo"]])];

        let summary = collect_tags(&boards);

        assert_eq!(summary.all_tags, ["solo"]);
        assert_eq!(summary.leaderboard_tags["A"], ["solo"]);
    }

    #[test]
    fn leaderboard_without_entries_gets_empty_tag_list() {
        let boards = vec![board("empty", &[])];

        let summary = collect_tags(&boards);

        assert!(summary.all_tags.is_empty());
        assert_eq!(summary.leaderboard_tags["empty"], Vec::<String>::new());
    }
}
