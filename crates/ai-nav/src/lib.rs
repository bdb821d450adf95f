//! Graphs for path search: a [`WeightedGraph`] trait plus grid and edge-list implementations.
//!
//! Search itself lives with the caller; this crate answers "who is next to whom" and "what does
//! that step cost".

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod graph;
pub mod grid;

pub use graph::{EdgeGraph, WeightedGraph};
pub use grid::{GridConfig, GridGraph, GridPoint};
