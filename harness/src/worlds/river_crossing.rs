//! `RiverCrossing`: two unit types ferried across a river by one boat.
//!
//! Each bank holds some "controlled" units and some "vulnerable" units. A bank
//! is safe when it holds no controlled units, or at least as many controlled
//! units as vulnerable ones. Every crossing carries between one and
//! `capacity` units from the boat's bank to the other bank, and the boat
//! changes sides.
//!
//! The classic instance (3 + 3 units, boat of two) has a shortest solution of
//! 12 states (11 crossings). Bigger instances are new values of this type,
//! never engine changes.

use std::fmt;

use traverse_kernel::domain::DomainModelV1;
use traverse_search::scorer::StateEvaluator;

use crate::contract::SearchWorldV1;

/// Unit counts on one bank. Counts are signed so that `apply` stays total;
/// a negative count is simply an invalid state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BankV1 {
    pub controlled: i32,
    pub vulnerable: i32,
}

impl BankV1 {
    #[must_use]
    pub const fn new(controlled: i32, vulnerable: i32) -> Self {
        Self {
            controlled,
            vulnerable,
        }
    }

    /// Non-negative counts, and vulnerable units are never outnumbered.
    #[must_use]
    pub fn is_safe(&self) -> bool {
        self.controlled >= 0
            && self.vulnerable >= 0
            && (self.controlled == 0 || self.controlled >= self.vulnerable)
    }

    /// Units of both kinds on this bank.
    #[must_use]
    pub fn total(&self) -> i32 {
        self.controlled + self.vulnerable
    }

    fn to_json_value(self) -> serde_json::Value {
        serde_json::json!({
            "controlled": self.controlled,
            "vulnerable": self.vulnerable,
        })
    }
}

impl fmt::Display for BankV1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.controlled, self.vulnerable)
    }
}

/// Which bank the boat is moored at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BoatSideV1 {
    Left,
    Right,
}

impl BoatSideV1 {
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Complete puzzle state: left bank, boat position, right bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CrossingStateV1 {
    pub left: BankV1,
    pub boat: BoatSideV1,
    pub right: BankV1,
}

impl CrossingStateV1 {
    #[must_use]
    pub const fn new(left: BankV1, boat: BoatSideV1, right: BankV1) -> Self {
        Self { left, boat, right }
    }
}

impl fmt::Display for CrossingStateV1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let boat = match self.boat {
            BoatSideV1::Left => "L",
            BoatSideV1::Right => "R",
        };
        write!(f, "{} {boat} {}", self.left, self.right)
    }
}

/// One crossing: how many units of each kind ride in the boat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CrossingMoveV1 {
    pub controlled: i32,
    pub vulnerable: i32,
}

impl CrossingMoveV1 {
    #[must_use]
    pub const fn new(controlled: i32, vulnerable: i32) -> Self {
        Self {
            controlled,
            vulnerable,
        }
    }
}

/// The river-crossing world.
#[derive(Debug, Clone)]
pub struct RiverCrossing {
    units: i32,
    capacity: i32,
    moves: Vec<CrossingMoveV1>,
}

/// Move enumeration of the classic instance.
const CLASSIC_MOVES: [CrossingMoveV1; 5] = [
    CrossingMoveV1::new(2, 0),
    CrossingMoveV1::new(1, 0),
    CrossingMoveV1::new(0, 2),
    CrossingMoveV1::new(0, 1),
    CrossingMoveV1::new(1, 1),
];

impl RiverCrossing {
    /// Three units of each kind, boat of two, classic move order.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            units: 3,
            capacity: 2,
            moves: CLASSIC_MOVES.to_vec(),
        }
    }

    /// `units` of each kind and a boat holding up to `capacity` units.
    ///
    /// Moves are every load of one to `capacity` units, enumerated with the
    /// controlled count descending, then the vulnerable count descending.
    #[must_use]
    pub fn with_capacity(units: u16, capacity: u16) -> Self {
        let capacity = i32::from(capacity);
        let mut moves = Vec::new();
        for controlled in (0..=capacity).rev() {
            for vulnerable in (0..=capacity - controlled).rev() {
                if controlled + vulnerable >= 1 {
                    moves.push(CrossingMoveV1::new(controlled, vulnerable));
                }
            }
        }
        Self {
            units: i32::from(units),
            capacity,
            moves,
        }
    }

    #[must_use]
    pub fn units(&self) -> i32 {
        self.units
    }

    #[must_use]
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Every state that conserves the unit counts, valid or not, in
    /// ascending order.
    #[must_use]
    pub fn conserved_states(&self) -> Vec<CrossingStateV1> {
        let mut states = Vec::new();
        for controlled in 0..=self.units {
            for vulnerable in 0..=self.units {
                for boat in [BoatSideV1::Left, BoatSideV1::Right] {
                    states.push(CrossingStateV1::new(
                        BankV1::new(controlled, vulnerable),
                        boat,
                        BankV1::new(self.units - controlled, self.units - vulnerable),
                    ));
                }
            }
        }
        states.sort_unstable();
        states
    }
}

impl DomainModelV1 for RiverCrossing {
    type State = CrossingStateV1;
    type Move = CrossingMoveV1;

    #[allow(clippy::unnecessary_literal_bound)]
    fn domain_id(&self) -> &str {
        "river_crossing"
    }

    fn valid_moves(&self) -> &[CrossingMoveV1] {
        &self.moves
    }

    fn apply(&self, state: &CrossingStateV1, mv: &CrossingMoveV1) -> CrossingStateV1 {
        let (from, to) = match state.boat {
            BoatSideV1::Left => (state.left, state.right),
            BoatSideV1::Right => (state.right, state.left),
        };
        let from = BankV1::new(from.controlled - mv.controlled, from.vulnerable - mv.vulnerable);
        let to = BankV1::new(to.controlled + mv.controlled, to.vulnerable + mv.vulnerable);
        match state.boat {
            BoatSideV1::Left => CrossingStateV1::new(from, BoatSideV1::Right, to),
            BoatSideV1::Right => CrossingStateV1::new(to, BoatSideV1::Left, from),
        }
    }

    fn is_valid(&self, state: &CrossingStateV1) -> bool {
        state.left.is_safe() && state.right.is_safe()
    }

    fn describe_state(&self, state: &CrossingStateV1) -> serde_json::Value {
        serde_json::json!({
            "boat": state.boat.as_str(),
            "left": state.left.to_json_value(),
            "right": state.right.to_json_value(),
        })
    }
}

impl SearchWorldV1 for RiverCrossing {
    fn start_state(&self) -> CrossingStateV1 {
        CrossingStateV1::new(
            BankV1::new(self.units, self.units),
            BoatSideV1::Left,
            BankV1::new(0, 0),
        )
    }

    fn goal_state(&self) -> CrossingStateV1 {
        CrossingStateV1::new(
            BankV1::new(0, 0),
            BoatSideV1::Right,
            BankV1::new(self.units, self.units),
        )
    }

    fn evaluator(&self) -> &dyn StateEvaluator<CrossingStateV1> {
        &CrossingProgressEvaluator
    }

    fn render_state(&self, state: &CrossingStateV1) -> String {
        state.to_string()
    }
}

/// Units already across minus units still waiting.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossingProgressEvaluator;

impl StateEvaluator<CrossingStateV1> for CrossingProgressEvaluator {
    fn evaluate(&self, state: &CrossingStateV1) -> i64 {
        i64::from(state.right.total()) - i64::from(state.left.total())
    }

    #[allow(clippy::unnecessary_literal_bound)]
    fn evaluator_id(&self) -> &str {
        "crossing_progress"
    }
}
