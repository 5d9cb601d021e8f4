//! Ranking engine
//!
//! Derives a total ordering over teams from committed state, recomputed in
//! full on every call. Sort key: final score descending; ties broken by the
//! earliest timestamp at which the team reached its current final score (the
//! team that got there first ranks higher); remaining ties fall back to a
//! stable order by team id.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::TeamSnapshot;

/// One scoreboard row
#[derive(Debug, Clone, Serialize)]
pub struct RankedTeam {
    pub rank: u32,
    pub team_id: Uuid,
    pub team_name: String,
    pub final_score: i64,
    /// When the team first reached its current final score; `None` for a
    /// team with no score history
    pub tie_breaker: Option<DateTime<Utc>>,
}

/// Earliest timestamp at which the cumulative score equals the final score.
///
/// A plain prefix-sum scan: with signed deltas the final value can be hit
/// earlier than the last event, and the first hit is the one that counts.
fn reached_final_at(snapshot: &TeamSnapshot) -> Option<DateTime<Utc>> {
    let mut cumulative = 0i64;
    for event in &snapshot.events {
        cumulative += event.points;
        if cumulative == snapshot.final_score {
            return Some(event.time);
        }
    }
    None
}

/// Compute the scoreboard from team snapshots.
///
/// Deterministic: identical committed state yields identical output. A team
/// with no events ranks above a team that reached the same score through
/// events (it held that score from the start).
pub fn rank_teams(snapshots: impl IntoIterator<Item = TeamSnapshot>) -> Vec<RankedTeam> {
    let mut rows: Vec<(TeamSnapshot, Option<DateTime<Utc>>)> = snapshots
        .into_iter()
        .map(|snapshot| {
            let reached = reached_final_at(&snapshot);
            (snapshot, reached)
        })
        .collect();

    rows.sort_by(|(a, a_reached), (b, b_reached)| {
        b.final_score
            .cmp(&a.final_score)
            .then_with(|| a_reached.cmp(b_reached))
            .then_with(|| a.id.cmp(&b.id))
    });

    rows.into_iter()
        .enumerate()
        .map(|(index, (snapshot, reached))| RankedTeam {
            rank: index as u32 + 1,
            team_id: snapshot.id,
            team_name: snapshot.name,
            final_score: snapshot.final_score,
            tie_breaker: reached,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScoreEvent;
    use crate::utils::time::parse_datetime;

    fn team(name: &str, events: Vec<(i64, &str)>) -> TeamSnapshot {
        let events: Vec<ScoreEvent> = events
            .into_iter()
            .map(|(points, time)| ScoreEvent {
                time: parse_datetime(time).unwrap(),
                points,
                challenge_id: Uuid::new_v4(),
            })
            .collect();
        let final_score = events.iter().map(|e| e.points).sum();
        TeamSnapshot {
            id: Uuid::new_v4(),
            name: name.to_string(),
            events,
            final_score,
        }
    }

    #[test]
    fn test_sorted_by_score_descending() {
        let ranked = rank_teams(vec![
            team("Low", vec![(50, "2026-08-25T10:00:00Z")]),
            team("High", vec![(300, "2026-08-25T10:30:00Z")]),
            team("Mid", vec![(100, "2026-08-25T09:00:00Z")]),
        ]);

        let names: Vec<_> = ranked.iter().map(|r| r.team_name.as_str()).collect();
        assert_eq!(names, ["High", "Mid", "Low"]);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[2].rank, 3);
    }

    #[test]
    fn test_tie_broken_by_earliest_reach_time() {
        // Beta reaches 100 at 09:30, Alpha at 10:00: Beta ranks higher
        let alpha = team("Alpha", vec![(100, "2026-08-25T10:00:00Z")]);
        let beta = team("Beta", vec![(100, "2026-08-25T09:30:00Z")]);

        let ranked = rank_teams(vec![alpha, beta]);
        assert_eq!(ranked[0].team_name, "Beta");
        assert_eq!(ranked[1].team_name, "Alpha");
        assert_eq!(ranked[0].final_score, ranked[1].final_score);
    }

    #[test]
    fn test_tie_break_scans_cumulative_history() {
        // Both end at 150, but Slow held 150 earlier than Fast's last event
        let fast = team(
            "Fast",
            vec![(100, "2026-08-25T09:00:00Z"), (50, "2026-08-25T11:00:00Z")],
        );
        let slow = team(
            "Slow",
            vec![(50, "2026-08-25T09:30:00Z"), (100, "2026-08-25T10:00:00Z")],
        );

        let ranked = rank_teams(vec![fast, slow]);
        assert_eq!(ranked[0].team_name, "Slow");
        assert_eq!(
            ranked[0].tie_breaker,
            parse_datetime("2026-08-25T10:00:00Z")
        );
    }

    #[test]
    fn test_signed_deltas_use_first_time_final_score_was_hit() {
        // 100 -> 120 -> 100: the current final score (100) was first reached
        // at the earliest event
        let snapshot = team(
            "Swings",
            vec![
                (100, "2026-08-25T09:00:00Z"),
                (20, "2026-08-25T09:30:00Z"),
                (-20, "2026-08-25T10:00:00Z"),
            ],
        );

        assert_eq!(
            reached_final_at(&snapshot),
            parse_datetime("2026-08-25T09:00:00Z")
        );
    }

    #[test]
    fn test_exact_tie_falls_back_to_team_id_order() {
        let mut a = team("A", vec![(100, "2026-08-25T10:00:00Z")]);
        let mut b = team("B", vec![(100, "2026-08-25T10:00:00Z")]);
        a.id = Uuid::from_u128(1);
        b.id = Uuid::from_u128(2);

        let ranked = rank_teams(vec![b.clone(), a.clone()]);
        assert_eq!(ranked[0].team_id, a.id);
        assert_eq!(ranked[1].team_id, b.id);
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let teams = vec![
            team("Alpha", vec![(100, "2026-08-25T10:00:00Z")]),
            team("Beta", vec![(100, "2026-08-25T09:30:00Z")]),
            team("Gamma", vec![]),
        ];

        let first = rank_teams(teams.clone());
        let second = rank_teams(teams);

        let key = |rows: &[RankedTeam]| -> Vec<(u32, Uuid, i64)> {
            rows.iter()
                .map(|r| (r.rank, r.team_id, r.final_score))
                .collect()
        };
        assert_eq!(key(&first), key(&second));
    }

    #[test]
    fn test_team_without_events_has_no_tie_breaker() {
        let ranked = rank_teams(vec![team("Fresh", vec![])]);
        assert_eq!(ranked[0].final_score, 0);
        assert!(ranked[0].tie_breaker.is_none());
    }
}
