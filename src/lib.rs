// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Linear-time planarity testing and embedding via the Boyer-Myrvold
//! edge-addition method.
//!
//! ```
//! use planarity_embed::{EmbedOutcome, GraphBuilder};
//!
//! let mut g = GraphBuilder::new(3);
//! g.add_edge(0, 1).unwrap();
//! g.add_edge(1, 2).unwrap();
//! g.add_edge(0, 2).unwrap();
//! let mut graph = g.build().unwrap();
//!
//! match graph.embed().unwrap() {
//!     EmbedOutcome::Embedded => println!("planar: {:?}", graph.neighbors(0)),
//!     EmbedOutcome::Nonembeddable(obstruction) => println!("{:?}", obstruction),
//! }
//! ```
//!
//! # Algorithm
//!
//! The engine works in three phases, run once per `Graph::embed` call:
//!
//! 1. **Preprocess** (`preprocess`): number vertices by depth-first index
//!    (`dfs`), sort each vertex's DFS children by lowpoint, and lay out the
//!    trivial one-bicomp-per-tree-edge starting embedding.
//! 2. **Main loop** (`driver`): visit vertices from the highest DFI down to
//!    the lowest. For each, Walkup (`walkup`) marks which bicomps are
//!    pertinent to it, then Walkdown (`walkdown`) descends each pertinent
//!    child bicomp's external face, embedding back edges directly or
//!    merging intervening bicomps (`merge`) to reach them.
//! 3. **Postprocess** (`postprocess`): on success, fix a consistent
//!    orientation across every bicomp and join what remains into one ring
//!    per connected component; on failure, hand off to an
//!    [`ObstructionIsolator`](obstruction::ObstructionIsolator) to recover a
//!    concrete forbidden-minor subdivision.
//!
//! Every step beyond DFS-numbering and construction runs on a single flat
//! [`Arena`](arena::Arena): vertices and half-arcs share one index space, and
//! every linked structure (a vertex's incident-edge ring, the external face,
//! auxiliary lists) is a cycle of indices into it rather than a graph of
//! owning pointers.
//!
//! # Extending the engine
//!
//! [`EmbedderHooks`] names the seven points where the core algorithm can be
//! overridden without forking the main loop — most usefully to plug in an
//! [`ObstructionIsolator`] that walks the arena's state after a
//! `NONEMBEDDABLE` verdict and returns a concrete K5 or K3,3 subdivision,
//! which this crate's default [`NoIsolator`] does not do.

mod arena;
mod dfs;
mod driver;
mod errors;
mod extension;
mod graph;
mod list_pool;
mod merge;
mod obstruction;
mod postprocess;
mod preprocess;
mod walkdown;
mod walkup;

pub use dfs::{DefaultDfs, DfsNumbering, DfsResult};
pub use errors::Error;
pub use extension::{CoreHooks, EmbedderHooks, EngineOutcome, StepResult};
pub use graph::{EmbedOutcome, Graph, GraphBuilder};
pub use obstruction::{NoIsolator, Obstruction, ObstructionIsolator, ObstructionKind};
