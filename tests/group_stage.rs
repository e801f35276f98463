//! Integration tests for the group stage: recording matches and standings.

use football_tournament_web::{GroupTable, Tournament, TournamentError, TournamentPhase};

fn names(group: &GroupTable) -> Vec<String> {
    group.standings().into_iter().map(|t| t.name).collect()
}

#[test]
fn three_team_group_ranks_by_points_then_goals_for() {
    let mut g = GroupTable::new("A");
    for team in ["X", "Y", "Z"] {
        g.add_team(team);
    }
    g.record_match("X", 2, "Y", 0).unwrap();
    g.record_match("Y", 1, "Z", 1).unwrap();
    g.record_match("X", 3, "Z", 1).unwrap();

    let standings = g.standings();
    assert_eq!(names(&g), ["X", "Z", "Y"]);
    let x = &standings[0];
    assert_eq!((x.points, x.goals_for, x.goals_against, x.games_played), (6, 5, 1, 2));
    let z = &standings[1];
    assert_eq!((z.points, z.goals_for, z.goals_against), (1, 2, 4));
    let y = &standings[2];
    assert_eq!((y.points, y.goals_for, y.goals_against), (1, 1, 3));
}

#[test]
fn goals_against_breaks_remaining_ties_ascending() {
    let mut g = GroupTable::new("B");
    for team in ["P", "Q", "R", "S"] {
        g.add_team(team);
    }
    // P and Q both: 3 pts, 2 GF; P concedes 1, Q concedes 0.
    g.record_match("P", 2, "R", 1).unwrap();
    g.record_match("Q", 2, "S", 0).unwrap();
    assert_eq!(names(&g), ["Q", "P", "R", "S"]);
}

#[test]
fn unknown_team_is_rejected_without_mutation() {
    let mut g = GroupTable::new("C");
    g.add_team("Spain");
    g.add_team("Italy");
    let before = g.clone();
    assert!(matches!(
        g.record_match("Spain", 1, "Croatia", 0),
        Err(TournamentError::Validation(_))
    ));
    assert!(matches!(
        g.record_match("Albania", 1, "Italy", 0),
        Err(TournamentError::Validation(_))
    ));
    assert_eq!(g, before);
}

#[test]
fn re_adding_a_team_is_a_no_op() {
    let mut g = GroupTable::new("D");
    g.add_team("France");
    g.record_match("France", 0, "France", 0).unwrap_err();
    g.add_team("Austria");
    g.record_match("France", 1, "Austria", 1).unwrap();
    g.add_team("France");
    assert_eq!(g.teams.len(), 2);
    assert_eq!(g.team("France").unwrap().points, 1);
}

#[test]
fn standings_are_recomputed_each_call() {
    let mut g = GroupTable::new("E");
    g.add_team("Belgium");
    g.add_team("Romania");
    assert_eq!(names(&g), ["Belgium", "Romania"]);
    g.record_match("Belgium", 0, "Romania", 2).unwrap();
    assert_eq!(names(&g), ["Romania", "Belgium"]);
    assert_eq!(g.standings(), g.standings());
}

#[test]
fn tournament_group_management_errors() {
    let mut t = Tournament::new();
    t.add_group("A").unwrap();
    assert_eq!(t.add_group(" A "), Err(TournamentError::DuplicateGroup("A".into())));
    assert!(matches!(t.add_group("  "), Err(TournamentError::Validation(_))));
    assert!(matches!(t.add_team("A", ""), Err(TournamentError::Validation(_))));
    assert_eq!(
        t.add_team("Z", "Spain"),
        Err(TournamentError::GroupNotFound("Z".into()))
    );

    t.add_team("A", "Germany").unwrap();
    t.add_group("B").unwrap();
    assert!(matches!(t.add_team("B", "Germany"), Err(TournamentError::Validation(_))));
    t.add_team("A", "Germany").unwrap();
    assert_eq!(t.group("A").unwrap().teams.len(), 1);
}

#[test]
fn tournament_records_matches_per_group() {
    let mut t = Tournament::new();
    t.add_group("A").unwrap();
    t.add_team("A", "Germany").unwrap();
    t.add_team("A", "Scotland").unwrap();
    t.record_match("A", "Germany", 5, "Scotland", 1).unwrap();

    let standings = t.standings("A").unwrap();
    assert_eq!(standings[0].name, "Germany");
    assert_eq!(standings[0].points, 3);
    assert_eq!(standings[1].goals_against, 5);
    assert_eq!(
        t.record_match("B", "Germany", 1, "Scotland", 0),
        Err(TournamentError::GroupNotFound("B".into()))
    );
    assert_eq!(t.phase, TournamentPhase::GroupStage);
}

#[test]
fn overflowing_score_is_rejected_and_group_unchanged() {
    let mut t = Tournament::new();
    t.add_group("A").unwrap();
    t.add_team("A", "X").unwrap();
    t.add_team("A", "Y").unwrap();
    t.record_match("A", "X", u32::MAX, "Y", 0).unwrap();
    let before = t.group("A").unwrap().clone();

    assert!(matches!(
        t.record_match("A", "X", 1, "Y", 0),
        Err(TournamentError::Validation(_))
    ));
    assert!(matches!(
        t.record_match("A", "Y", 0, "X", 1),
        Err(TournamentError::Validation(_))
    ));
    assert_eq!(t.group("A").unwrap(), &before);

    // Scores that keep totals in range still go through.
    t.record_match("A", "X", 0, "Y", 2).unwrap();
    assert_eq!(t.group("A").unwrap().team("Y").unwrap().points, 3);
}
