pub mod traits;
pub mod tolerance;
pub mod dijkstra;
pub mod dag;
pub mod enumerator;
pub mod result;
pub mod engine;

pub use traits::{PredecessorMap, ShortestPathSolver, ShortestPathTree};
pub use tolerance::{Tolerance, DEFAULT_TIE_EPSILON};
pub use result::{RankedPath, ResultSet};
