// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The obstruction-isolation seam.
//!
//! `spec.md` §1 scopes Kuratowski-subgraph isolation (and outerplanarity
//! obstruction isolation) out as an external collaborator — a real isolator
//! walks the arena's still-stacked bicomp state after Walkdown reports
//! NONEMBEDDABLE and reads off a concrete K5 or K3,3 subdivision. This crate
//! only defines the seam: the result type the rest of the engine commits to
//! returning, and a trait so a caller can plug in an isolator without this
//! crate needing to implement one.

use crate::arena::Arena;
use crate::errors::Error;

/// Which forbidden-minor family an isolated obstruction belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ObstructionKind {
    /// A subdivision of K5.
    K5,
    /// A subdivision of K3,3.
    K33,
    /// Isolation wasn't performed (no isolator installed, or the installed
    /// one declined to classify the subgraph it returned).
    Unknown,
}

/// A forbidden-minor subdivision establishing non-planarity, as a vertex
/// pair list in depth-first-index space (the caller-facing [`crate::Graph`]
/// translates this to original vertex ids before returning it).
#[derive(Clone, Debug, Default)]
pub struct Obstruction {
    /// Which family this subdivision belongs to.
    pub kind: Option<ObstructionKind>,
    /// The edges of the isolated subdivision, as `(dfi_u, dfi_v)` pairs.
    pub edges: Vec<(usize, usize)>,
}

/// An external collaborator that isolates a concrete obstruction subgraph
/// once the core loop has reported NONEMBEDDABLE. Installed on [`crate::Graph`]
/// via `Graph::with_isolator`.
pub trait ObstructionIsolator {
    /// Inspects `arena`'s state as left by the failed iteration `i` and
    /// returns the obstruction it finds, if any.
    fn isolate(&self, arena: &mut Arena, i: usize) -> Result<Obstruction, Error>;
}

/// The default isolator: performs no isolation, reporting only that the
/// graph is non-planar. `gp_embed` still returns NONEMBEDDABLE correctly
/// with this installed; it simply leaves [`Obstruction::edges`] empty.
pub struct NoIsolator;

impl ObstructionIsolator for NoIsolator {
    fn isolate(&self, _arena: &mut Arena, _i: usize) -> Result<Obstruction, Error> {
        Ok(Obstruction {
            kind: None,
            edges: Vec::new(),
        })
    }
}
