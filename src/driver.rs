// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The top-level embedding loop. Ported from `gp_Embed`: preprocess, then
//! walk vertices from the highest DFI down to the lowest, embedding each
//! one's back edges to its descendants before moving on.

use crate::arena::{Arena, NIL};
use crate::errors::Error;
use crate::extension::{EmbedderHooks, EngineOutcome, StepResult};
use crate::obstruction::ObstructionIsolator;
use crate::{preprocess, walkup};

pub(crate) fn gp_embed(
    arena: &mut Arena,
    hooks: &dyn EmbedderHooks,
    isolator: &dyn ObstructionIsolator,
) -> Result<EngineOutcome, Error> {
    let n = arena.n;

    preprocess::create_sorted_separated_dfs_child_lists(arena);
    hooks.create_fwd_arc_lists(arena)?;
    hooks.create_dfs_tree_embedding(arena)?;

    for v in 0..arena.edge_offset {
        arena.set_visited(v, n);
    }

    let mut last_i = n.saturating_sub(1);
    let mut result = StepResult::Ok;

    for i in (0..n).rev() {
        last_i = i;
        result = StepResult::Ok;

        // Walkup every still-unembedded back edge from a descendant to I.
        let mut j = arena.vattr[i].fwd_arc_list;
        while j != NIL {
            walkup::walk_up(arena, i, j);
            j = arena.link(j, 0);
            if j == arena.vattr[i].fwd_arc_list {
                j = NIL;
            }
        }

        // For each separated DFS child of I with a pertinent bicomp, walk
        // down both sides of the bicomp rooted at that child's root copy.
        let mut child = arena.vattr[i].separated_dfs_child_list;
        while child != NIL {
            if arena.vattr[child].pertinent_bicomp_list != NIL {
                let root_vertex = arena.root_copy(child);
                result = crate::walkdown::walk_down(arena, hooks, i, root_vertex)?;
                if result != StepResult::Ok {
                    break;
                }
            }
            let head = arena.vattr[i].separated_dfs_child_list;
            child = arena.dfs_child_lists.next(head, child).unwrap_or(NIL);
        }

        if result == StepResult::Ok && arena.vattr[i].fwd_arc_list != NIL {
            result = hooks.embed_iteration_postprocess(arena, i)?;
        }

        if result != StepResult::Ok {
            break;
        }
    }

    hooks.embed_postprocess(arena, last_i, result, isolator)
}
