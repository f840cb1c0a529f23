// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Postprocessing: once the main loop finishes, either orient the embedding
//! and join every remaining separated bicomp back into its DFS parent, or
//! hand off to an [`ObstructionIsolator`]. Ported from `_EmbedPostprocess`,
//! `_OrientVerticesInEmbedding`, `_OrientVerticesInBicomp`, and
//! `_JoinBicomps`.

use crate::arena::{ArcType, Arena, NIL};
use crate::errors::Error;
use crate::extension::{EngineOutcome, StepResult};
use crate::merge;
use crate::obstruction::ObstructionIsolator;

pub(crate) fn embed_postprocess(
    arena: &mut Arena,
    i: usize,
    edge_embedding_result: StepResult,
    isolator: &dyn ObstructionIsolator,
) -> Result<EngineOutcome, Error> {
    match edge_embedding_result {
        StepResult::Ok => {
            orient_vertices_in_embedding(arena);
            join_bicomps(arena);
            Ok(EngineOutcome::Embedded)
        }
        StepResult::Nonembeddable => {
            let obstruction = isolator.isolate(arena, i)?;
            Ok(EngineOutcome::Nonembeddable(obstruction))
        }
    }
}

/// Visits every root copy that wasn't erased by a merge and gives its
/// bicomp a consistent orientation, root-copy orientation as ground truth.
pub(crate) fn orient_vertices_in_embedding(arena: &mut Arena) {
    for r in arena.n..arena.edge_offset {
        if arena.link(r, 0) != NIL {
            orient_vertices_in_bicomp(arena, r, false);
        }
    }
}

/// Propagates `bicomp_root`'s orientation down the DFS-child tree within
/// one bicomp: a vertex is flipped iff the product of `edge_flag_inverted`
/// signs on the tree edges between it and the root is negative.
/// `preserve_signs` (used when an obstruction isolator needs to inspect and
/// then restore a bicomp's orientation) performs the inversions without
/// clearing the signs that produced them.
pub(crate) fn orient_vertices_in_bicomp(arena: &mut Arena, bicomp_root: usize, preserve_signs: bool) {
    arena.stack.clear();
    arena.stack.push((bicomp_root, 0));

    while let Some((v, inverted_flag)) = arena.stack.pop() {
        if inverted_flag != 0 {
            arena.invert_vertex(v);
        }

        let mut j = arena.link(v, 0);
        while arena.is_arc(j) {
            if arena.arc_type(j) == ArcType::DfsChild {
                let child = arena.arc_dest(j);
                let flag = inverted_flag ^ (arena.edge_flag_inverted(j) as usize);
                arena.stack.push((child, flag));
                if !preserve_signs {
                    arena.set_edge_flag_inverted(j, false);
                }
            }
            j = arena.link(j, 0);
        }
    }
}

/// Merges every still-live root copy into its DFS parent, with no flip
/// decision (unlike the in-loop merges, a root copy surviving to this point
/// is not opposed by any particular external-face entry path). This is
/// what turns a forest of separated bicomps — one per disconnected
/// component, or one per cut vertex never revisited by a later back edge —
/// into the single combinatorial embedding `gp_embed` returns.
pub(crate) fn join_bicomps(arena: &mut Arena) {
    for r in arena.n..arena.edge_offset {
        if arena.link(r, 0) != NIL {
            let child = arena.root_child(r);
            let parent = arena.vattr[child].dfs_parent;
            merge::merge_vertex(arena, parent, 0, r);
        }
    }
}
