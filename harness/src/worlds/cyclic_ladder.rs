//! `CyclicLadder`: rungs `0..=top`, climbing one rung up or down per move.
//!
//! Every edge has a reverse edge, so the state graph is full of two-cycles.
//! Moves are enumerated `Up` then `Down`; a LIFO frontier therefore pops the
//! `Down` successor first and depth-first search without a visited set
//! oscillates between rungs 0 and 1 forever. Breadth-first search finds the
//! top in `top + 1` states.

use traverse_kernel::domain::DomainModelV1;

use crate::contract::SearchWorldV1;

/// A single rung change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LadderStepV1 {
    Up,
    Down,
}

/// The ladder world; start at rung 0, goal at rung `top`.
#[derive(Debug, Clone)]
pub struct CyclicLadder {
    top: i32,
}

const STEPS: [LadderStepV1; 2] = [LadderStepV1::Up, LadderStepV1::Down];

impl CyclicLadder {
    #[must_use]
    pub fn new(top: u16) -> Self {
        Self {
            top: i32::from(top),
        }
    }
}

impl DomainModelV1 for CyclicLadder {
    type State = i32;
    type Move = LadderStepV1;

    #[allow(clippy::unnecessary_literal_bound)]
    fn domain_id(&self) -> &str {
        "cyclic_ladder"
    }

    fn valid_moves(&self) -> &[LadderStepV1] {
        &STEPS
    }

    fn apply(&self, state: &i32, mv: &LadderStepV1) -> i32 {
        match mv {
            LadderStepV1::Up => state + 1,
            LadderStepV1::Down => state - 1,
        }
    }

    fn is_valid(&self, state: &i32) -> bool {
        (0..=self.top).contains(state)
    }

    fn describe_state(&self, state: &i32) -> serde_json::Value {
        serde_json::json!({ "rung": state })
    }
}

impl SearchWorldV1 for CyclicLadder {
    fn start_state(&self) -> i32 {
        0
    }

    fn goal_state(&self) -> i32 {
        self.top
    }

    fn render_state(&self, state: &i32) -> String {
        format!("rung {state}")
    }
}
