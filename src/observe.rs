//! Line-delimited JSON observations for scripted drivers.
//!
//! One object per processed input:
//!
//! ```text
//! {"type":"observation","seq":1,"command":2,"outcome":{"type":"reserved","piece":{"kind":"T","id":0}},
//!  "queue":[{"kind":"O","id":1},...],"reserve":[{"kind":"T","id":0}],"next_id":6,...}
//! ```

use anyhow::Result;
use serde::Serialize;

use crate::core::{GameSnapshot, Stats};
use crate::types::{Outcome, Piece};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PieceView {
    pub kind: char,
    pub id: u64,
}

impl From<&Piece> for PieceView {
    fn from(p: &Piece) -> Self {
        Self {
            kind: p.kind.symbol(),
            id: p.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObservedOutcome {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub piece: Option<PieceView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
}

impl ObservedOutcome {
    /// A line that parsed as neither a number nor a command name.
    pub fn invalid_input(text: &str) -> Self {
        Self {
            kind: "invalidInput",
            piece: None,
            command: None,
            reason: None,
            input: Some(text.to_string()),
        }
    }
}

impl From<&Outcome> for ObservedOutcome {
    fn from(outcome: &Outcome) -> Self {
        let (command, reason) = match outcome {
            Outcome::Rejected { command, reason } => {
                (Some(command.as_str()), Some(reason.to_string()))
            }
            _ => (None, None),
        };
        Self {
            kind: outcome.as_str(),
            piece: outcome.piece().as_ref().map(PieceView::from),
            command,
            reason,
            input: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsView {
    pub played: u32,
    pub reserved: u32,
    pub used: u32,
    pub swaps: u32,
    pub triple_swaps: u32,
    pub rejected: u32,
    pub invalid: u32,
}

impl From<Stats> for StatsView {
    fn from(s: Stats) -> Self {
        Self {
            played: s.played,
            reserved: s.reserved,
            used: s.used,
            swaps: s.swaps,
            triple_swaps: s.triple_swaps,
            rejected: s.rejected,
            invalid: s.invalid,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Observation {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub seq: u64,
    pub command: Option<i64>,
    pub outcome: Option<ObservedOutcome>,
    /// Front first.
    pub queue: Vec<PieceView>,
    /// Top first.
    pub reserve: Vec<PieceView>,
    pub next_id: u64,
    pub seed: u32,
    pub randomizer: &'static str,
    pub stats: StatsView,
}

impl Observation {
    pub fn new(
        seq: u64,
        command: Option<i64>,
        outcome: Option<ObservedOutcome>,
        snap: &GameSnapshot,
    ) -> Self {
        Self {
            kind: "observation",
            seq,
            command,
            outcome,
            queue: snap.queue.iter().map(PieceView::from).collect(),
            reserve: snap.reserve.iter().map(PieceView::from).collect(),
            next_id: snap.next_id,
            seed: snap.seed,
            randomizer: snap.randomizer.as_str(),
            stats: snap.stats.into(),
        }
    }
}

/// Serialize one observation followed by a newline.
pub fn to_json_line(
    seq: u64,
    command: Option<i64>,
    outcome: Option<ObservedOutcome>,
    snap: &GameSnapshot,
) -> Result<String> {
    let mut line = serde_json::to_string(&Observation::new(seq, command, outcome, snap))?;
    line.push('\n');
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;
    use crate::types::{Command, PieceKind, Rejection};
    use serde_json::{json, Value};

    #[test]
    fn test_initial_observation_shape() {
        let mut state = GameState::new(9);
        state.start();
        let line = to_json_line(0, None, None, &state.snapshot()).unwrap();
        assert!(line.ends_with('\n'));

        let v: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(v["type"], "observation");
        assert_eq!(v["seq"], 0);
        assert_eq!(v["command"], Value::Null);
        assert_eq!(v["outcome"], Value::Null);
        assert_eq!(v["queue"].as_array().unwrap().len(), 5);
        assert_eq!(v["queue"][0]["id"], 0);
        assert_eq!(v["reserve"], json!([]));
        assert_eq!(v["next_id"], 5);
        assert_eq!(v["randomizer"], "uniform");
    }

    #[test]
    fn test_outcome_views() {
        let played = ObservedOutcome::from(&Outcome::Played(Piece::new(PieceKind::J, 3)));
        assert_eq!(
            serde_json::to_value(&played).unwrap(),
            json!({"type": "played", "piece": {"kind": "J", "id": 3}})
        );

        let rejected = ObservedOutcome::from(&Outcome::Rejected {
            command: Command::SwapTriple,
            reason: Rejection::TripleSwapNeedsThree,
        });
        assert_eq!(
            serde_json::to_value(&rejected).unwrap(),
            json!({
                "type": "rejected",
                "command": "swapTriple",
                "reason": "the queue and the reserve both need 3 pieces for a triple swap"
            })
        );

        let invalid = ObservedOutcome::invalid_input("hold");
        assert_eq!(
            serde_json::to_value(&invalid).unwrap(),
            json!({"type": "invalidInput", "input": "hold"})
        );
    }
}
