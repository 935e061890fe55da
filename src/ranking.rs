use crate::bitboard::Bitboard;
use crate::direction::{KnightMove, Target, MOVE_COUNT};
use crate::topology::Topology;

/// One jump slot of the square being expanded, scored for move ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub direction: KnightMove,
    pub target: Target,
    /// Unvisited squares reachable from `target`; `None` when the slot is
    /// off the board or already visited. `None` orders before every score.
    pub score: Option<u32>,
}

impl Candidate {
    pub fn is_real(&self) -> bool {
        self.score.is_some()
    }
}

/// The eight slots of a square sorted by ascending score, with the
/// non-candidates at the front.
#[derive(Clone, Copy, Debug)]
pub struct Ranking {
    entries: [Candidate; MOVE_COUNT],
    real: usize,
}

impl Ranking {
    /// All eight slots, sorted.
    pub fn entries(&self) -> &[Candidate; MOVE_COUNT] {
        &self.entries
    }

    /// Real candidates only, fewest onward options first.
    pub fn candidates(&self) -> &[Candidate] {
        &self.entries[MOVE_COUNT - self.real..]
    }

    pub fn len(&self) -> usize {
        self.real
    }

    pub fn is_empty(&self) -> bool {
        self.real == 0
    }
}

/// Warnsdorff ordering of the jumps out of square `from`, given the squares
/// `visited` so far. Ties keep slot order.
#[hotpath::measure]
pub fn rank_candidates(topology: &Topology, visited: Bitboard, from: usize) -> Ranking {
    let unvisited = !visited;
    let mut real = 0;
    let mut entries = [Candidate {
        direction: KnightMove::UpLeft,
        target: Target::OffBoard,
        score: None,
    }; MOVE_COUNT];

    for (slot, (direction, target)) in KnightMove::ALL
        .iter()
        .zip(topology.targets(from).iter())
        .enumerate()
    {
        let score = match target {
            Target::OnBoard(idx) if !visited.get(*idx) => {
                real += 1;
                Some((unvisited & topology.reachable(*idx)).count())
            }
            _ => None,
        };
        entries[slot] = Candidate {
            direction: *direction,
            target: *target,
            score,
        };
    }

    entries.sort_by_key(|c| c.score);

    Ranking { entries, real }
}
