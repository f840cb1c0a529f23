// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contains types that describe errors `planarity-embed` methods can
//! return.

use std::error;
use std::fmt;

use Error::*;

/// Error type describing the sorts of errors this crate can return.
///
/// Every variant corresponds to a FAILURE outcome in the sense of the
/// engine's three-outcome contract (OK / NONEMBEDDABLE / FAILURE):
/// NONEMBEDDABLE is not an error at all (it is
/// [`crate::EmbedOutcome::Nonembeddable`]) since it is simply what the
/// engine returns for a non-planar input. `Error` is reserved for cases
/// where a precondition was violated or an internal invariant broke.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The graph had zero vertices; `gp_embed` requires `n >= 1`.
    EmptyGraph,
    /// An edge referred to a vertex index outside `0..n`.
    VertexIndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The number of vertices in the graph.
        n: usize,
    },
    /// More edges were inserted than the arena was sized to hold.
    EdgeCapacityExceeded,
    /// A self-loop or parallel edge was presented to the core loop, which
    /// only accepts simple graphs (§1 Non-goals).
    NotSimple {
        /// One endpoint of the offending edge.
        u: usize,
        /// The other endpoint.
        v: usize,
    },
    /// An arc's twin, read back through the twin-index formula, did not
    /// point at the original arc (invariant 1 in §3).
    TwinMismatch {
        /// The arc that was checked.
        arc: usize,
    },
    /// A ring failed to close into a circular list (invariant 2 in §3).
    RingCorrupted {
        /// The vertex whose ring was found broken.
        vertex: usize,
    },
    /// An internal error occurred within the embedding engine: a
    /// precondition on the arena's link structure, its list pools, or its
    /// stack was violated mid-operation. The arena must be discarded; see
    /// §7 policy.
    EngineInternalError(String),
    /// A hook installed via [`crate::extension::EmbedderHooks`] reported
    /// FAILURE, propagated verbatim to the top per §7 policy.
    HookFailure(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyGraph => write!(f, "graph must have at least one vertex"),
            VertexIndexOutOfRange { index, n } => {
                write!(f, "vertex index {} out of range for a graph of {} vertices", index, n)
            }
            EdgeCapacityExceeded => write!(f, "more edges were inserted than the arena was sized for"),
            NotSimple { u, v } => write!(f, "edge ({}, {}) is a self-loop or a duplicate edge", u, v),
            TwinMismatch { arc } => write!(f, "twin(twin({arc})) != {arc}"),
            RingCorrupted { vertex } => {
                write!(f, "the incident-edge ring at vertex {} is not a closed cycle", vertex)
            }
            EngineInternalError(msg) => write!(f, "internal error in embedding engine: {}", msg),
            HookFailure(msg) => write!(f, "extension hook reported failure: {}", msg),
        }
    }
}

impl error::Error for Error {}
