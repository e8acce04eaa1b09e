//! Frontier: the pending-work collection whose discipline defines the algorithm.
//!
//! Entries are node ids into the search's [`crate::node::NodeArena`]. The
//! frontier itself never inspects states; depth bounds, visited sets and
//! successor ordering are applied by the search loop around it.

use std::collections::VecDeque;

/// Order in which pending entries are drained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierDisciplineV1 {
    /// Queue: oldest entry first (breadth-first).
    Fifo,
    /// Stack: newest entry first (depth-first and its variants).
    Lifo,
}

impl FrontierDisciplineV1 {
    /// Stable lowercase name used in reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fifo => "fifo",
            Self::Lifo => "lifo",
        }
    }
}

/// Pending node ids drained under a fixed discipline.
#[derive(Debug, Clone)]
pub struct Frontier {
    discipline: FrontierDisciplineV1,
    entries: VecDeque<u64>,
    high_water: u64,
}

impl Frontier {
    /// Create an empty frontier.
    #[must_use]
    pub fn new(discipline: FrontierDisciplineV1) -> Self {
        Self {
            discipline,
            entries: VecDeque::new(),
            high_water: 0,
        }
    }

    /// The draining discipline.
    #[must_use]
    pub fn discipline(&self) -> FrontierDisciplineV1 {
        self.discipline
    }

    /// Add a node id.
    pub fn push(&mut self, node_id: u64) {
        self.entries.push_back(node_id);
        let size = self.entries.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Remove the next node id according to the discipline.
    #[must_use]
    pub fn pop(&mut self) -> Option<u64> {
        match self.discipline {
            FrontierDisciplineV1::Fifo => self.entries.pop_front(),
            FrontierDisciplineV1::Lifo => self.entries.pop_back(),
        }
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}
