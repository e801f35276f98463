//! Integration tests for qualification: direct qualifiers and best third-placed teams.

mod common;

use common::{euro_group_stage, play_group};
use football_tournament_web::{
    qualifiers, qualifiers_with_thirds, rank_third_placed, GroupTable, TeamRecord, Tournament,
    TournamentError,
};

fn thirds(q: &football_tournament_web::QualifierSet) -> Vec<&str> {
    q.third_placed.iter().map(|t| t.team.as_str()).collect()
}

#[test]
fn six_groups_give_sixteen_qualifiers() {
    let t = euro_group_stage();
    let q = qualifiers(&t.groups).unwrap();
    assert_eq!(q.len(), 16);
    assert_eq!(q.names().count(), 16);
    let a = q.group("A").unwrap();
    assert_eq!((a.winner.as_str(), a.runner_up.as_str()), ("A1", "A2"));
    assert_eq!(thirds(&q), ["F3", "E3", "D3", "A3"]);
    assert_eq!(q.third_placed[0].group, "F");
}

#[test]
fn four_groups_of_four_select_all_four_thirds() {
    let mut t = Tournament::new();
    for (group, margin) in ["A", "B", "C", "D"].into_iter().zip([3, 1, 2, 1]) {
        play_group(&mut t, group, margin);
    }
    let q = qualifiers(&t.groups).unwrap();
    assert_eq!(q.groups.len(), 4);
    assert_eq!(q.len(), 12);
    assert_eq!(thirds(&q), ["A3", "C3", "B3", "D3"]);
}

#[test]
fn group_with_one_team_is_rejected_by_name() {
    let mut t = euro_group_stage();
    t.add_group("G").unwrap();
    t.add_team("G", "Lonely").unwrap();
    assert_eq!(
        qualifiers(&t.groups),
        Err(TournamentError::InsufficientTeams { group: "G".into() })
    );
}

#[test]
fn two_team_groups_contribute_no_third() {
    let mut groups = Vec::new();
    for name in ["A", "B", "C", "D"] {
        let mut g = GroupTable::new(name);
        g.add_team(format!("{name}1"));
        g.add_team(format!("{name}2"));
        if name != "D" {
            g.add_team(format!("{name}3"));
        }
        groups.push(g);
    }
    assert_eq!(
        qualifiers(&groups),
        Err(TournamentError::InsufficientQualifiers { found: 3, required: 4 })
    );
    let q = qualifiers_with_thirds(&groups, 3).unwrap();
    assert_eq!(thirds(&q), ["A3", "B3", "C3"]);
}

#[test]
fn third_place_ranking_uses_raw_goals_against_not_difference() {
    let record = |name: &str, points, goals_for, goals_against| TeamRecord {
        name: name.into(),
        points,
        goals_for,
        goals_against,
        games_played: 3,
    };
    let candidates = vec![
        ("A".to_string(), record("wide", 4, 6, 5)),
        ("B".to_string(), record("tight", 4, 5, 0)),
        ("C".to_string(), record("low", 3, 9, 0)),
        ("D".to_string(), record("twin", 4, 6, 5)),
        ("E".to_string(), record("best", 4, 6, 4)),
    ];
    let ranked = rank_third_placed(candidates, 4).unwrap();
    let names: Vec<_> = ranked.iter().map(|t| t.team.as_str()).collect();
    // Goals for outranks a far better goal difference; ties keep group order.
    assert_eq!(names, ["best", "wide", "twin", "tight"]);
}
