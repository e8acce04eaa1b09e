//! Small integer domain shared by the unit tests.

use traverse_kernel::domain::DomainModelV1;

/// Positions `0..=top`; each move adds a signed step.
///
/// `Ladder::new(3, &[1, -1])` is a path graph with back edges, so any
/// search without a visited set can walk `0 -> 1 -> 0` forever.
pub(crate) struct Ladder {
    top: i32,
    steps: Vec<i32>,
}

impl Ladder {
    pub(crate) fn new(top: i32, steps: &[i32]) -> Self {
        Self {
            top,
            steps: steps.to_vec(),
        }
    }

    /// `0..=3` with up/down steps.
    pub(crate) fn up_down() -> Self {
        Self::new(3, &[1, -1])
    }
}

impl DomainModelV1 for Ladder {
    type State = i32;
    type Move = i32;

    #[allow(clippy::unnecessary_literal_bound)]
    fn domain_id(&self) -> &str {
        "ladder"
    }

    fn valid_moves(&self) -> &[i32] {
        &self.steps
    }

    fn apply(&self, state: &i32, mv: &i32) -> i32 {
        state + mv
    }

    fn is_valid(&self, state: &i32) -> bool {
        (0..=self.top).contains(state)
    }
}
