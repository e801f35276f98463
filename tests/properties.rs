//! Property-based tests for the ranking and knockout invariants.

use football_tournament_web::{
    qualifiers, record_round_results, BracketNode, GroupTable, Knockout, Round, TournamentError,
};
use proptest::prelude::*;
use std::collections::HashSet;

// Strategy: a group size and a list of matches (team index, goals, team index, goals).
fn group_with_matches() -> impl Strategy<Value = (usize, Vec<(usize, u32, usize, u32)>)> {
    (3usize..=6).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0u32..6, 0..n, 0u32..6), 0..30),
        )
    })
}

fn build_group(name: &str, n: usize, matches: &[(usize, u32, usize, u32)]) -> GroupTable {
    let mut g = GroupTable::new(name);
    for i in 0..n {
        g.add_team(format!("{name}{i}"));
    }
    for &(i, g1, j, g2) in matches {
        if i != j {
            g.record_match(&format!("{name}{i}"), g1, &format!("{name}{j}"), g2)
                .unwrap();
        }
    }
    g
}

fn total_points(g: &GroupTable) -> u32 {
    g.teams.iter().map(|t| t.points).sum()
}

proptest! {
    #[test]
    fn each_match_awards_two_or_three_points(g1 in 0u32..10, g2 in 0u32..10) {
        let mut g = build_group("A", 2, &[]);
        g.record_match("A0", g1, "A1", g2).unwrap();
        let (a, b) = (g.team("A0").unwrap().points, g.team("A1").unwrap().points);
        let total = a + b;
        if g1 == g2 {
            prop_assert_eq!((a, b), (1, 1));
            prop_assert_eq!(total, 2);
        } else {
            prop_assert!((a, b) == (3, 0) || (a, b) == (0, 3));
            prop_assert_eq!(total, 3);
        }
    }

    #[test]
    fn standings_are_sorted_and_repeatable((n, matches) in group_with_matches()) {
        let g = build_group("A", n, &matches);
        let first = g.standings();
        prop_assert_eq!(&first, &g.standings());
        prop_assert_eq!(first.len(), n);
        for pair in first.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(
                a.points > b.points
                    || (a.points == b.points && a.goals_for > b.goals_for)
                    || (a.points == b.points
                        && a.goals_for == b.goals_for
                        && a.goals_against <= b.goals_against)
            );
        }
        let played = matches.iter().filter(|(i, _, j, _)| i != j).count() as u32;
        let draws = matches.iter().filter(|(i, g1, j, g2)| i != j && g1 == g2).count() as u32;
        prop_assert_eq!(total_points(&g), 3 * played - draws);
    }

    #[test]
    fn qualifier_count_is_two_per_group_plus_four(
        groups in prop::collection::vec(group_with_matches(), 4..=8)
    ) {
        let tables: Vec<_> = groups
            .iter()
            .enumerate()
            .map(|(i, (n, matches))| build_group(&format!("G{i}_"), *n, matches))
            .collect();
        let q = qualifiers(&tables).unwrap();
        let names: Vec<_> = q.names().collect();
        prop_assert_eq!(names.len(), 2 * tables.len() + 4);
        let unique: HashSet<_> = names.iter().collect();
        prop_assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn drawn_knockout_scores_never_produce_a_winner(
        node in 0usize..8,
        goals in 0u32..6,
        others in prop::collection::vec((0u32..6, 0u32..6).prop_filter("decisive", |(a, b)| a != b), 8)
    ) {
        let nodes = (0..8)
            .map(|i| BracketNode::new(format!("H{i}"), format!("A{i}"), Round::RoundOf16))
            .collect();
        let mut k = Knockout::new(nodes).unwrap();
        let before = k.clone();
        let mut results = others;
        results[node] = (goals, goals);
        let err = record_round_results(&mut k, &results).unwrap_err();
        prop_assert!(matches!(err, TournamentError::NoWinner { .. }), "expected NoWinner error");
        prop_assert_eq!(k, before);
    }
}
