#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TourStatus {
    /// Every square was visited exactly once.
    Complete,
    /// No continuation from this square completes the tour.
    DeadEnd,
}

impl TourStatus {
    pub fn is_complete(&self) -> bool {
        matches!(self, TourStatus::Complete)
    }
}

impl std::fmt::Display for TourStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TourStatus::Complete => write!(f, "Complete"),
            TourStatus::DeadEnd => write!(f, "Dead end"),
        }
    }
}
