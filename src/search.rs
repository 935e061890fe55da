use log::{debug, trace};

use crate::bitboard::Bitboard;
use crate::direction::Target;
use crate::error::TourError;
use crate::ranking::rank_candidates;
use crate::square::Square;
use crate::status::TourStatus;
use crate::topology::Topology;
use crate::tour::VisitOrder;

/// The squares on the current path and the step at which each was entered.
///
/// A `TourPath` is a plain `Copy` value. Every recursive call extends its
/// own copy, so a subtree that ends in a dead end leaves its caller's path
/// untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TourPath {
    visited: Bitboard,
    steps: [u8; Bitboard::WIDTH],
}

impl TourPath {
    pub fn new() -> Self {
        TourPath {
            visited: Bitboard::empty(),
            steps: [0; Bitboard::WIDTH],
        }
    }

    pub fn visited(&self) -> Bitboard {
        self.visited
    }

    pub fn len(&self) -> usize {
        self.visited.count() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.visited.get(index)
    }

    /// 1-based step at which square `index` was entered.
    pub fn step(&self, index: usize) -> Option<u8> {
        if self.contains(index) {
            Some(self.steps[index])
        } else {
            None
        }
    }

    /// Append square `index` to the path and return its step number.
    pub fn visit(&mut self, index: usize) -> Result<u8, TourError> {
        if index >= Bitboard::WIDTH {
            return Err(TourError::IndexOutOfBounds {
                index,
                area: Bitboard::WIDTH,
            });
        }
        if self.contains(index) {
            return Err(TourError::AlreadyVisited { index });
        }
        Ok(self.push(index))
    }

    /// `visit` without the checks; `index` must be in range and unvisited.
    fn push(&mut self, index: usize) -> u8 {
        debug_assert!(!self.contains(index), "square {} visited twice", index);
        self.visited.set(index);
        let step = self.visited.count() as u8;
        self.steps[index] = step;
        step
    }

    fn to_order(&self, size: usize) -> VisitOrder {
        VisitOrder::from_steps(size, self.steps[..size * size].to_vec())
    }
}

impl Default for TourPath {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Squares entered, counting every re-entry after a backtrack.
    pub nodes: u64,
    /// Subtrees abandoned without completing the tour.
    pub dead_ends: u64,
    /// Longest path reached.
    pub max_depth: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TourReport {
    pub start: Square,
    pub status: TourStatus,
    /// Present exactly when `status` is `Complete`.
    pub order: Option<VisitOrder>,
    pub stats: SearchStats,
}

/// Depth-first knight's tour search with Warnsdorff move ordering.
pub struct KnightTour<'a> {
    topology: &'a Topology,
    stats: SearchStats,
    solution: Option<TourPath>,
}

impl<'a> KnightTour<'a> {
    pub fn new(topology: &'a Topology) -> Self {
        KnightTour {
            topology,
            stats: SearchStats::default(),
            solution: None,
        }
    }

    pub fn standard() -> KnightTour<'static> {
        KnightTour::new(Topology::standard())
    }

    pub fn topology(&self) -> &Topology {
        self.topology
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Visit order of the last completed tour.
    pub fn solution(&self) -> Option<VisitOrder> {
        self.solution
            .as_ref()
            .map(|path| path.to_order(self.topology.size()))
    }

    /// Search for a full tour starting at `start`.
    pub fn find(&mut self, start: Square) -> Result<TourReport, TourError> {
        if !self.topology.contains(&start) {
            return Err(TourError::SquareOutOfBounds {
                square: start,
                size: self.topology.size(),
            });
        }

        self.stats = SearchStats::default();
        self.solution = None;

        let size = self.topology.size();
        debug!("searching {size}x{size} knight's tour from {start}");

        let index = self.topology.index_of(&start);
        let status = self.descend(TourPath::new(), index);

        debug!(
            "{} from {}: {} nodes, {} dead ends, max depth {}",
            status, start, self.stats.nodes, self.stats.dead_ends, self.stats.max_depth
        );

        Ok(TourReport {
            start,
            status,
            order: self.solution(),
            stats: self.stats,
        })
    }

    /// Step onto square `index` from `path` and search on from there.
    ///
    /// `path` is taken by value; the caller's copy is never modified. On
    /// `Complete` the finished path is kept and returned by `solution`.
    /// Fails if `index` or any square of `path` is off the board, or if
    /// `index` is already in `path`.
    pub fn explore(&mut self, path: TourPath, index: usize) -> Result<TourStatus, TourError> {
        let area = self.topology.area();
        if index >= area {
            return Err(TourError::IndexOutOfBounds { index, area });
        }
        let off_board = path.visited() & !self.topology.board_mask();
        if let Some(stray) = off_board.lowest_bit_index() {
            return Err(TourError::IndexOutOfBounds { index: stray, area });
        }
        if path.contains(index) {
            return Err(TourError::AlreadyVisited { index });
        }
        Ok(self.descend(path, index))
    }

    fn descend(&mut self, mut path: TourPath, index: usize) -> TourStatus {
        debug_assert!(index < self.topology.area());

        self.stats.nodes += 1;
        let depth = path.push(index) as usize;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        if path.visited() == self.topology.board_mask() {
            self.solution = Some(path);
            return TourStatus::Complete;
        }

        let ranking = rank_candidates(self.topology, path.visited(), index);
        for candidate in ranking.candidates() {
            if let Target::OnBoard(next) = candidate.target {
                if self.descend(path, next).is_complete() {
                    return TourStatus::Complete;
                }
            }
        }

        self.stats.dead_ends += 1;
        trace!(
            "dead end at {} after {} steps",
            self.topology.square_at(index),
            depth
        );
        TourStatus::DeadEnd
    }
}

/// Search the standard 8×8 board for a tour starting at `start`.
#[hotpath::measure]
pub fn find_knight_tour(start: Square) -> Result<TourReport, TourError> {
    KnightTour::standard().find(start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use paste::paste;
    use rand::prelude::IndexedRandom;
    use rand::SeedableRng;

    fn assert_complete_tour(report: &TourReport, size: usize) {
        assert_eq!(report.status, TourStatus::Complete, "from {}", report.start);
        let order = report.order.as_ref().expect("complete tour has an order");
        assert_eq!(order.size(), size);
        assert_eq!(order.step(&report.start), Some(1));
        assert!(order.is_knights_tour(), "invalid tour from {}:\n{}", report.start, order);
        assert_eq!(report.stats.max_depth, size * size);
        assert!(report.stats.nodes >= (size * size) as u64);
    }

    macro_rules! tours_from {
        ($($row:literal $col:literal),* $(,)?) => {
            paste! {
                $(
                    #[test]
                    fn [<test_tour_from_ $row _ $col>]() {
                        let report = find_knight_tour(Square::new($row, $col))
                            .expect("square is on the board");
                        assert_complete_tour(&report, 8);
                    }
                )*
            }
        };
    }

    tours_from!(
        0 0, 0 1, 0 2, 0 3, 0 4, 0 5, 0 6, 0 7,
        1 0, 1 1, 1 2, 1 3, 1 4, 1 5, 1 6, 1 7,
        2 0, 2 1, 2 2, 2 3, 2 4, 2 5, 2 6, 2 7,
        3 0, 3 1, 3 2, 3 3, 3 4, 3 5, 3 6, 3 7,
        4 0, 4 1, 4 2, 4 3, 4 4, 4 5, 4 6, 4 7,
        5 0, 5 1, 5 2, 5 3, 5 4, 5 5, 5 6, 5 7,
        6 0, 6 1, 6 2, 6 3, 6 4, 6 5, 6 6, 6 7,
        7 0, 7 1, 7 2, 7 3, 7 4, 7 5, 7 6, 7 7,
    );

    #[test]
    fn test_corner_tour_needs_no_backtracking() {
        let report = find_knight_tour(Square::new(0, 0)).expect("on board");
        assert_complete_tour(&report, 8);
        assert_eq!(report.stats.dead_ends, 0);
        assert_eq!(report.stats.nodes, 64);
    }

    #[test]
    fn test_center_tour() {
        let report = find_knight_tour(Square::new(3, 3)).expect("on board");
        assert_complete_tour(&report, 8);
        let order = report.order.expect("complete");
        let mut steps: Vec<u8> = order.to_rows().concat();
        steps.sort_unstable();
        assert_eq!(steps, (1..=64).collect::<Vec<u8>>());
    }

    #[test]
    fn test_out_of_bounds_start_is_rejected() {
        assert_eq!(
            find_knight_tour(Square::new(8, 0)),
            Err(TourError::SquareOutOfBounds {
                square: Square::new(8, 0),
                size: 8
            })
        );
        let topo = Topology::new(5).expect("5x5 is supported");
        let mut engine = KnightTour::new(&topo);
        assert!(engine.find(Square::new(2, 5)).is_err());
        assert_eq!(engine.stats(), SearchStats::default());
    }

    #[test]
    fn test_single_square_board() {
        let topo = Topology::new(1).expect("1x1 is supported");
        let report = KnightTour::new(&topo)
            .find(Square::new(0, 0))
            .expect("on board");
        assert_complete_tour(&report, 1);
        assert_eq!(report.order.expect("complete").to_rows(), vec![vec![1]]);
    }

    #[test]
    fn test_small_boards_dead_end_everywhere() {
        for size in 2..=4 {
            let topo = Topology::new(size).expect("supported size");
            let mut engine = KnightTour::new(&topo);
            for idx in 0..topo.area() {
                let start = topo.square_at(idx);
                let report = engine.find(start).expect("on board");
                assert_eq!(report.status, TourStatus::DeadEnd, "{size}x{size} from {start}");
                assert!(report.order.is_none());
                assert!(engine.solution().is_none());
                assert!(report.stats.dead_ends >= 1);
                assert!(report.stats.max_depth < size * size);
            }
        }
    }

    #[test]
    fn test_3x3_search_counts() {
        let topo = Topology::new(3).expect("3x3 is supported");
        let mut engine = KnightTour::new(&topo);

        // The centre has no jumps at all.
        let center = engine.find(Square::new(1, 1)).expect("on board");
        assert_eq!(center.stats.nodes, 1);
        assert_eq!(center.stats.dead_ends, 1);
        assert_eq!(center.stats.max_depth, 1);

        // From a corner the knight walks the 8-square ring both ways.
        let corner = engine.find(Square::new(0, 0)).expect("on board");
        assert_eq!(corner.status, TourStatus::DeadEnd);
        assert_eq!(corner.stats.max_depth, 8);
        assert_eq!(corner.stats.nodes, 15);
    }

    #[test]
    fn test_5x5_corner_tour() {
        let topo = Topology::new(5).expect("5x5 is supported");
        let report = KnightTour::new(&topo)
            .find(Square::new(0, 0))
            .expect("on board");
        assert_complete_tour(&report, 5);
    }

    #[test]
    fn test_6x6_random_starts() {
        let topo = Topology::new(6).expect("6x6 is supported");
        let squares: Vec<Square> = (0..topo.area()).map(|i| topo.square_at(i)).collect();
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let mut engine = KnightTour::new(&topo);
        for _ in 0..12 {
            let start = *squares.choose(&mut rng).expect("non-empty");
            let report = engine.find(start).expect("on board");
            assert_complete_tour(&report, 6);
        }
    }

    #[test]
    fn test_dead_end_leaves_caller_path_untouched() {
        let topo = Topology::new(3).expect("3x3 is supported");
        let mut engine = KnightTour::new(&topo);

        let mut path = TourPath::new();
        let corner = topo.index_of(&Square::new(0, 0));
        path.visit(corner).expect("empty path");
        let before = path;

        let ranking = rank_candidates(&topo, path.visited(), corner);
        assert_eq!(ranking.len(), 2);
        for candidate in ranking.candidates() {
            let next = candidate.target.index().expect("on board");
            assert_eq!(engine.explore(path, next), Ok(TourStatus::DeadEnd));
            // Sibling branches start from the same state.
            assert_eq!(path, before);
            assert_eq!(path.visited(), Bitboard::single(corner));
            assert_eq!(path.step(next), None);
        }
        assert_eq!(rank_candidates(&topo, path.visited(), corner).len(), 2);
        assert!(engine.solution().is_none());
    }

    #[test]
    fn test_explore_continues_partial_path() {
        let topo = Topology::standard();
        let mut engine = KnightTour::new(topo);
        let mut path = TourPath::new();
        let start = topo.index_of(&Square::new(0, 0));
        path.visit(start).expect("empty path");

        let status = engine
            .explore(path, topo.index_of(&Square::new(2, 1)))
            .expect("valid continuation");
        assert!(status.is_complete());
        let order = engine.solution().expect("complete");
        assert!(order.is_knights_tour());
        assert_eq!(order.step(&Square::new(0, 0)), Some(1));
        assert_eq!(order.step(&Square::new(2, 1)), Some(2));
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_repeated_searches_start_fresh() {
        let mut engine = KnightTour::standard();
        let first = engine.find(Square::new(0, 0)).expect("on board");
        let second = engine.find(Square::new(4, 6)).expect("on board");
        assert_complete_tour(&first, 8);
        assert_complete_tour(&second, 8);
        let order = second.order.expect("complete");
        assert_eq!(order.step(&Square::new(4, 6)), Some(1));
        assert_ne!(order.step(&Square::new(0, 0)), Some(1));
    }

    #[test]
    fn test_tour_path_steps() {
        let mut path = TourPath::default();
        assert!(path.is_empty());
        assert_eq!(path.visit(10), Ok(1));
        assert_eq!(path.visit(27), Ok(2));
        assert_eq!(path.len(), 2);
        assert_eq!(path.step(27), Some(2));
        assert_eq!(path.step(0), None);
    }

    #[test]
    fn test_tour_path_rejects_revisit_and_overflow() {
        let mut path = TourPath::new();
        path.visit(5).expect("empty path");
        let before = path;
        assert_eq!(path.visit(5), Err(TourError::AlreadyVisited { index: 5 }));
        assert_eq!(
            path.visit(64),
            Err(TourError::IndexOutOfBounds { index: 64, area: 64 })
        );
        assert_eq!(path, before);
        assert_eq!(path.step(5), Some(1));
    }

    #[test]
    fn test_explore_rejects_off_board_index() {
        let topo = Topology::new(5).expect("5x5 is supported");
        let mut engine = KnightTour::new(&topo);
        assert_eq!(
            engine.explore(TourPath::new(), 30),
            Err(TourError::IndexOutOfBounds { index: 30, area: 25 })
        );

        // A path carrying a square beyond the 5x5 area is rejected too.
        let mut path = TourPath::new();
        path.visit(40).expect("fits in the bitboard");
        assert_eq!(
            engine.explore(path, 0),
            Err(TourError::IndexOutOfBounds { index: 40, area: 25 })
        );
        assert_eq!(engine.stats(), SearchStats::default());
    }

    #[test]
    fn test_explore_rejects_visited_square() {
        let topo = Topology::new(5).expect("5x5 is supported");
        let mut engine = KnightTour::new(&topo);
        let mut path = TourPath::new();
        for idx in [0, 7, 4] {
            path.visit(idx).expect("fresh square");
        }

        assert_eq!(
            engine.explore(path, 0),
            Err(TourError::AlreadyVisited { index: 0 })
        );
        assert_eq!(engine.stats(), SearchStats::default());
        assert!(engine.solution().is_none());
        assert_eq!(path.step(0), Some(1));
        assert_eq!(path.len(), 3);
    }
}
