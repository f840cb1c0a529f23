// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The seven extension hooks.
//!
//! `spec.md` §5 and §9 name seven points at which an extension can swap in
//! different behavior without forking the core loop: merging bicomps,
//! embedding a back edge to a descendant, handling an inactive vertex
//! during Walkdown's descend, building forward-arc lists, building the
//! initial DFS-tree embedding, deciding what to do at the end of an
//! iteration, and deciding what to do at the end of the whole embedding.
//! The Design Notes call for "an explicit dispatch object ... never a
//! globally mutable vtable" — here, an ordinary trait with default methods,
//! the same shape `guppy` uses for pluggable graph behavior (trait objects,
//! not function-pointer structs).
//!
//! Every default method *is* the core algorithm; installing [`CoreHooks`] (or
//! not overriding a method on a custom implementor) reproduces unmodified
//! behavior. An extension overrides exactly the methods it needs to change.

use crate::arena::Arena;
use crate::errors::Error;
use crate::obstruction::{Obstruction, ObstructionIsolator};
use crate::{merge, postprocess, preprocess, walkdown};

/// The three-way outcome of one step of the embedding loop: successfully
/// embedded, or determined non-embeddable. `Err(Error)` (not part of this
/// enum) is reserved for FAILURE — an internal invariant violation — per
/// the outcome contract in `spec.md` §7.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StepResult {
    /// OK: this step succeeded; the loop should continue.
    Ok,
    /// NONEMBEDDABLE: the graph (as embedded so far) cannot be planar.
    Nonembeddable,
}

/// The outcome of the whole engine run, before translation to caller vertex
/// ids: either a completed embedding, or a non-planar verdict carrying
/// whatever obstruction the installed isolator found.
#[derive(Clone, Debug)]
pub enum EngineOutcome {
    /// The graph is planar; the arena now holds a combinatorial embedding.
    Embedded,
    /// The graph is not planar.
    Nonembeddable(Obstruction),
}

/// The extension-hook dispatch object. See the module docs.
pub trait EmbedderHooks {
    /// §4.6: pops `(R, Rout)`/`(Z, ZPrevLink)` pairs off `arena.stack` and
    /// merges each root copy into its DFS parent, until the stack empties.
    /// `i`, `root_vertex`, `w`, `w_prev_link` describe the back edge that
    /// triggered this merge sequence; the default implementation doesn't
    /// need them, but an extension wrapping this hook may.
    fn merge_bicomps(
        &self,
        arena: &mut Arena,
        i: usize,
        root_vertex: usize,
        w: usize,
        w_prev_link: usize,
    ) -> Result<StepResult, Error> {
        let _ = (i, root_vertex, w, w_prev_link);
        merge::merge_bicomps(arena)
    }

    /// §4.5: embeds one back edge `(RootVertex, W)` directly (no merge
    /// needed — `W` is already in `RootVertex`'s bicomp).
    fn embed_back_edge_to_descendant(
        &self,
        arena: &mut Arena,
        root_side: usize,
        root_vertex: usize,
        w: usize,
        w_prev_link: usize,
    ) {
        walkdown::embed_back_edge_to_descendant(arena, root_side, root_vertex, w, w_prev_link)
    }

    /// §4.5: short-circuits past an inactive vertex during descend,
    /// updating `w`/`w_prev_link` in place to the next candidate.
    fn handle_inactive_vertex(
        &self,
        arena: &Arena,
        root_vertex: usize,
        w: &mut usize,
        w_prev_link: &mut usize,
    ) -> Result<(), Error> {
        walkdown::handle_inactive_vertex(arena, root_vertex, w, w_prev_link)
    }

    /// §4.3: detaches the contiguous forward-arc block at the `link[1]`
    /// end of every vertex's ring into `vattr[v].fwd_arc_list`.
    fn create_fwd_arc_lists(&self, arena: &mut Arena) -> Result<(), Error> {
        preprocess::create_fwd_arc_lists(arena)
    }

    /// §4.3: builds the initial one-bicomp-per-tree-edge embedding: each
    /// non-root vertex's parent arc is isolated into its own ring, its
    /// child arc moves to a fresh root copy, and the external face is
    /// cross-linked around the resulting two-vertex bicomp.
    fn create_dfs_tree_embedding(&self, arena: &mut Arena) -> Result<(), Error> {
        preprocess::create_dfs_tree_embedding(arena)
    }

    /// §4.8: runs once per DFI after Walkup/Walkdown for that vertex. The
    /// core algorithm always reports NONEMBEDDABLE here (a nonempty
    /// forward-arc list after Walkdown means some back edge to this vertex
    /// could not be embedded); an extension that wants to keep iterating
    /// regardless (e.g. to search for every obstruction rather than stop at
    /// the first) overrides this.
    fn embed_iteration_postprocess(&self, arena: &mut Arena, i: usize) -> Result<StepResult, Error> {
        let _ = (arena, i);
        Ok(StepResult::Nonembeddable)
    }

    /// §4.7: on success, orients the embedding and joins every remaining
    /// root copy into its DFS parent; on failure, hands off to `isolator`
    /// and reports NONEMBEDDABLE with whatever it finds.
    fn embed_postprocess(
        &self,
        arena: &mut Arena,
        i: usize,
        edge_embedding_result: StepResult,
        isolator: &dyn ObstructionIsolator,
    ) -> Result<EngineOutcome, Error> {
        postprocess::embed_postprocess(arena, i, edge_embedding_result, isolator)
    }
}

/// The unmodified core algorithm, as an installable [`EmbedderHooks`] with
/// no overrides. Equivalent to any other implementor that overrides
/// nothing, but gives callers an explicit, nameable default.
pub struct CoreHooks;

impl EmbedderHooks for CoreHooks {}
