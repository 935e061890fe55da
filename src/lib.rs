pub mod bitboard;
pub mod direction;
pub mod error;
pub mod ranking;
pub mod search;
pub mod square;
pub mod status;
pub mod topology;
pub mod tour;

#[cfg(feature = "serde")]
pub mod serde_support;

pub use error::TourError;
pub use search::{find_knight_tour, KnightTour, SearchStats, TourPath, TourReport};
pub use square::Square;
pub use status::TourStatus;
pub use topology::Topology;
pub use tour::VisitOrder;

#[cfg(feature = "python")]
extern crate pyo3;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule(gil_used = false)]
fn knights_tour(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use python_bindings::*;
    m.add_class::<PyKnightTour>()?;
    m.add_class::<PySearchStats>()?;
    m.add_function(wrap_pyfunction!(py_find_knight_tour, m)?)?;
    m.add("STANDARD_SIZE", topology::STANDARD_SIZE)?;
    m.add("MAX_SIZE", topology::MAX_SIZE)?;
    Ok(())
}

#[cfg(feature = "python")]
mod python_bindings {
    use super::*;

    fn to_py_err(err: TourError) -> PyErr {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
    }

    fn square_from(row: usize, col: usize, size: usize) -> PyResult<Square> {
        if row >= size || col >= size {
            return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "square ({}, {}) is outside the {}x{} board",
                row, col, size, size
            )));
        }
        Ok(Square::new(row as u8, col as u8))
    }

    // Widened so Python sees lists of ints rather than `bytes`.
    fn rows_of(order: &VisitOrder) -> Vec<Vec<u32>> {
        order
            .rows()
            .map(|row| row.iter().map(|&step| step as u32).collect())
            .collect()
    }

    #[pyclass(name = "SearchStats")]
    #[derive(Clone, Copy)]
    pub struct PySearchStats {
        stats: SearchStats,
    }

    #[pymethods]
    impl PySearchStats {
        #[getter]
        pub fn nodes(&self) -> u64 {
            self.stats.nodes
        }

        #[getter]
        pub fn dead_ends(&self) -> u64 {
            self.stats.dead_ends
        }

        #[getter]
        pub fn max_depth(&self) -> usize {
            self.stats.max_depth
        }

        pub fn __repr__(&self) -> String {
            format!(
                "SearchStats(nodes={}, dead_ends={}, max_depth={})",
                self.stats.nodes, self.stats.dead_ends, self.stats.max_depth
            )
        }
    }

    #[pyclass(name = "KnightTour")]
    pub struct PyKnightTour {
        topology: Topology,
        last_stats: SearchStats,
    }

    #[pymethods]
    impl PyKnightTour {
        #[new]
        #[pyo3(signature = (size = topology::STANDARD_SIZE))]
        pub fn new(size: usize) -> PyResult<Self> {
            Ok(PyKnightTour {
                topology: Topology::new(size).map_err(to_py_err)?,
                last_stats: SearchStats::default(),
            })
        }

        #[getter]
        pub fn size(&self) -> usize {
            self.topology.size()
        }

        /// Rows of the visit order, or `None` when no tour exists from
        /// `(row, col)`.
        pub fn find(&mut self, row: usize, col: usize) -> PyResult<Option<Vec<Vec<u32>>>> {
            let start = square_from(row, col, self.topology.size())?;
            let report = KnightTour::new(&self.topology)
                .find(start)
                .map_err(to_py_err)?;
            self.last_stats = report.stats;
            Ok(report.order.map(|order| rows_of(&order)))
        }

        #[getter]
        pub fn last_stats(&self) -> PySearchStats {
            PySearchStats {
                stats: self.last_stats,
            }
        }

        pub fn __repr__(&self) -> String {
            format!("KnightTour(size={})", self.topology.size())
        }
    }

    #[pyfunction]
    #[pyo3(name = "find_knight_tour")]
    pub fn py_find_knight_tour(row: usize, col: usize) -> PyResult<Option<Vec<Vec<u32>>>> {
        let start = square_from(row, col, topology::STANDARD_SIZE)?;
        let report = find_knight_tour(start).map_err(to_py_err)?;
        Ok(report.order.map(|order| rows_of(&order)))
    }
}
