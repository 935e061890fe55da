use std::fmt;

use crate::square::Square;

/// Order-of-visit table of a completed tour: cell `(r, c)` holds the 1-based
/// step at which the knight landed on that square.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VisitOrder {
    size: usize,
    steps: Vec<u8>,
}

impl VisitOrder {
    /// `steps` is row-major, `size * size` long.
    pub(crate) fn from_steps(size: usize, steps: Vec<u8>) -> Self {
        debug_assert_eq!(steps.len(), size * size);
        VisitOrder { size, steps }
    }

    /// Build from rows, as produced by `to_rows`. Returns `None` unless the
    /// rows form a square table.
    pub fn from_rows(rows: &[Vec<u8>]) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return None;
        }
        Some(VisitOrder {
            size,
            steps: rows.concat(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn step(&self, square: &Square) -> Option<u8> {
        if square.is_valid(self.size) {
            Some(self.steps[square.to_index(self.size)])
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.steps.chunks(self.size.max(1))
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    /// Squares in the order they were visited. Unvisited cells (step 0) are
    /// skipped.
    pub fn path(&self) -> Vec<Square> {
        let mut by_step: Vec<(u8, usize)> = self
            .steps
            .iter()
            .enumerate()
            .filter(|&(_, &step)| step != 0)
            .map(|(idx, &step)| (step, idx))
            .collect();
        by_step.sort_unstable();
        by_step
            .into_iter()
            .map(|(_, idx)| Square::from_index(idx, self.size))
            .collect()
    }

    /// True if the steps are a permutation of `1..=size*size` and each pair
    /// of consecutive steps is one knight jump apart.
    pub fn is_knights_tour(&self) -> bool {
        let area = self.size * self.size;
        let mut seen = vec![false; area + 1];
        for &step in &self.steps {
            let step = step as usize;
            if step == 0 || step > area || seen[step] {
                return false;
            }
            seen[step] = true;
        }

        self.path()
            .windows(2)
            .all(|pair| pair[0].is_knight_move_to(&pair[1]))
    }
}

impl fmt::Display for VisitOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for step in row {
                write!(f, "{}\t", step)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A known open tour on a 5x5 board.
    fn tour_5x5() -> VisitOrder {
        VisitOrder::from_rows(&[
            vec![1, 14, 9, 20, 3],
            vec![24, 19, 2, 15, 10],
            vec![13, 8, 25, 4, 21],
            vec![18, 23, 6, 11, 16],
            vec![7, 12, 17, 22, 5],
        ])
        .expect("square table")
    }

    #[test]
    fn test_valid_tour() {
        let order = tour_5x5();
        assert_eq!(order.size(), 5);
        assert!(order.is_knights_tour());
        assert_eq!(order.step(&Square::new(2, 2)), Some(25));
        assert_eq!(order.step(&Square::new(5, 0)), None);
        let path = order.path();
        assert_eq!(path.len(), 25);
        assert_eq!(path[0], Square::new(0, 0));
        assert_eq!(path[24], Square::new(2, 2));
    }

    #[test]
    fn test_rejects_repeated_step() {
        let mut rows = tour_5x5().to_rows();
        rows[0][0] = 2;
        let order = VisitOrder::from_rows(&rows).expect("square table");
        assert!(!order.is_knights_tour());
    }

    #[test]
    fn test_rejects_non_knight_step() {
        let mut rows = tour_5x5().to_rows();
        // Swap steps 1 and 2: (0,0)->(1,2) is fine, but 2->3 is then (0,0)->(0,4).
        rows[0][0] = 2;
        rows[1][2] = 1;
        let order = VisitOrder::from_rows(&rows).expect("square table");
        assert!(!order.is_knights_tour());
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        assert!(VisitOrder::from_rows(&[vec![1, 2], vec![3]]).is_none());
        assert!(VisitOrder::from_rows(&[vec![1, 2]]).is_none());
    }

    #[test]
    fn test_display() {
        let order = VisitOrder::from_rows(&[vec![1]]).expect("square table");
        assert_eq!(order.to_string(), "1\t\n");
        let text = tour_5x5().to_string();
        assert!(text.starts_with("1\t14\t9\t20\t3\t\n\n24\t"));
        assert_eq!(text.lines().filter(|l| l.is_empty()).count(), 4);
    }
}
