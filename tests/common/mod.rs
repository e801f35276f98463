//! Shared fixtures for integration tests.
#![allow(dead_code)]

use football_tournament_web::Tournament;

pub const EURO_GROUPS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

/// Add a group of four teams named `<group>1`..`<group>4` and play it out so the
/// final order is 1, 2, 3, 4. The third-placed team beats the fourth by `third_margin`-0.
pub fn play_group(t: &mut Tournament, group: &str, third_margin: u32) {
    t.add_group(group).unwrap();
    let team = |i: u32| format!("{group}{i}");
    for i in 1..=4 {
        t.add_team(group, team(i)).unwrap();
    }
    t.record_match(group, &team(1), 1, &team(2), 0).unwrap();
    t.record_match(group, &team(1), 1, &team(3), 0).unwrap();
    t.record_match(group, &team(1), 1, &team(4), 0).unwrap();
    t.record_match(group, &team(2), 1, &team(3), 0).unwrap();
    t.record_match(group, &team(2), 1, &team(4), 0).unwrap();
    t.record_match(group, &team(3), third_margin, &team(4), 0).unwrap();
}

/// Six groups A-F; third-placed margins 1,1,1,2,3,4 so the best thirds are F3, E3, D3, A3.
pub fn euro_group_stage() -> Tournament {
    let mut t = Tournament::new();
    for (group, margin) in EURO_GROUPS.iter().zip([1, 1, 1, 2, 3, 4]) {
        play_group(&mut t, group, margin);
    }
    t
}
