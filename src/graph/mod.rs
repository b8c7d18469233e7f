// src/graph/mod.rs
//! Directed graph store and structural analysis.
//!
//! `DirectedGraph` owns its nodes and edges and keeps per-node in/out
//! counters in step with every mutation. Analyses (reachability,
//! connectivity, Eulerian checks) are computed on demand from the current
//! state; nothing is cached.

pub mod connectivity;
pub mod degree;
pub mod euler;
pub mod reach;
pub mod store;
pub mod types;

pub use connectivity::Connectivity;
pub use degree::{tally, DegreeBalance, DegreeCount};
pub use reach::Direction;
pub use store::DirectedGraph;
pub use types::{Edge, Node, NodeId};
