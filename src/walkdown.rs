// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Walkdown: descends from a pertinent bicomp root along both sides of its
//! external face, embedding back edges to descendants and merging child
//! bicomps as needed to reach them. The largest single component of the
//! engine — ported from `_WalkDown`, `_EmbedBackEdgeToDescendant` and
//! `_HandleInactiveVertex`.

use crate::arena::{Arena, NIL};
use crate::errors::Error;
use crate::extension::{EmbedderHooks, StepResult};

/// Whether a vertex still has work pending for the current iteration `I`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ActiveStatus {
    /// Pertinent to `I` but not externally active: must be resolved during
    /// this iteration, since it will never be reachable again.
    Internal,
    /// Has an unembedded connection to some ancestor of `I`: must stay on
    /// the external face for a future iteration.
    External,
    /// Neither: safe to short-circuit past.
    Inactive,
}

/// A vertex is pertinent to the current iteration if Walkup left it with an
/// unembedded back edge (`adjacent_to`) or a registered pertinent child
/// bicomp.
pub(crate) fn is_pertinent(arena: &Arena, w: usize) -> bool {
    arena.vattr[w].adjacent_to != NIL || arena.vattr[w].pertinent_bicomp_list != NIL
}

/// A vertex is externally active w.r.t. `i` if it (or the least-lowpoint
/// member of its separated DFS child list, which is sorted ascending by
/// lowpoint) still has an unembedded connection to a proper ancestor of
/// `i`.
pub(crate) fn is_externally_active(arena: &Arena, w: usize, i: usize) -> bool {
    if arena.vattr[w].least_ancestor < i {
        return true;
    }
    let head = arena.vattr[w].separated_dfs_child_list;
    head != NIL && arena.vattr[head].lowpoint < i
}

pub(crate) fn vertex_active_status(arena: &Arena, w: usize, i: usize) -> ActiveStatus {
    if is_externally_active(arena, w, i) {
        ActiveStatus::External
    } else if is_pertinent(arena, w) {
        ActiveStatus::Internal
    } else {
        ActiveStatus::Inactive
    }
}

/// Descends both sides of the bicomp rooted at `root_vertex` (a root copy),
/// embedding every back edge Walkup marked pertinent to `i` that it can
/// reach, merging child bicomps along the way via `hooks.merge_bicomps`.
///
/// Returns `Nonembeddable` exactly when it halts blocked on both external
/// face paths out of some pertinent child bicomp with stacked merges still
/// pending — the signature of a K3,3 or K5 subdivision.
pub(crate) fn walk_down(
    arena: &mut Arena,
    hooks: &dyn EmbedderHooks,
    i: usize,
    root_vertex: usize,
) -> Result<StepResult, Error> {
    arena.stack.clear();

    for root_side in 0..2 {
        let mut w = arena.ext_face[root_vertex].link[root_side];
        let mut w_prev_link = 1 - root_side;

        while w != root_vertex {
            if arena.vattr[w].adjacent_to != NIL {
                if !arena.stack.is_empty() {
                    let step = hooks.merge_bicomps(arena, i, root_vertex, w, w_prev_link)?;
                    if step != StepResult::Ok {
                        return Ok(step);
                    }
                }
                hooks.embed_back_edge_to_descendant(arena, root_side, root_vertex, w, w_prev_link);
                arena.vattr[w].adjacent_to = NIL;
            }

            if arena.vattr[w].pertinent_bicomp_list != NIL {
                arena.stack.push((w, w_prev_link));

                let child = arena.vattr[w].pertinent_bicomp_list;
                let r = arena.root_copy(child);

                let x = arena.ext_face[r].link[0];
                let mut x_prev_link = if arena.ext_face[x].link[1] == r { 1 } else { 0 };
                let y = arena.ext_face[r].link[1];
                let mut y_prev_link = if arena.ext_face[y].link[0] == r { 0 } else { 1 };

                if x == y && arena.ext_face[x].inversion_flag {
                    x_prev_link = 0;
                    y_prev_link = 1;
                }

                let (next_w, next_w_prev_link) = if vertex_active_status(arena, x, i) == ActiveStatus::Internal {
                    (x, x_prev_link)
                } else if vertex_active_status(arena, y, i) == ActiveStatus::Internal {
                    (y, y_prev_link)
                } else if is_pertinent(arena, x) {
                    (x, x_prev_link)
                } else {
                    (y, y_prev_link)
                };

                let rout = if next_w == x { 0 } else { 1 };
                arena.stack.push((r, rout));

                w = next_w;
                w_prev_link = next_w_prev_link;
            } else if vertex_active_status(arena, w, i) == ActiveStatus::Inactive {
                hooks.handle_inactive_vertex(arena, root_vertex, &mut w, &mut w_prev_link)?;
            } else {
                // W is externally active with nothing left to do for this
                // iteration: a stopping vertex.
                break;
            }
        }

        if !arena.stack.is_empty() {
            return Ok(StepResult::Nonembeddable);
        }

        arena.ext_face[root_vertex].link[root_side] = w;
        arena.ext_face[w].link[w_prev_link] = root_vertex;
        arena.ext_face[w].inversion_flag =
            arena.ext_face[w].link[0] == arena.ext_face[w].link[1] && w_prev_link == root_side;

        if w == root_vertex {
            break;
        }
    }

    Ok(StepResult::Ok)
}

/// Embeds the back edge recorded by Walkup at `w.adjacent_to` directly
/// between `root_vertex` and `w`: the forward arc moves out of its
/// ancestor's forward-arc list and onto `root_vertex`'s ring; the back arc
/// moves onto `w`'s ring; the two become external-face neighbors. Ported
/// from `_EmbedBackEdgeToDescendant`.
pub(crate) fn embed_back_edge_to_descendant(
    arena: &mut Arena,
    root_side: usize,
    root_vertex: usize,
    w: usize,
    w_prev_link: usize,
) {
    let fwd_arc = arena.vattr[w].adjacent_to;
    let back_arc = arena.twin(fwd_arc);

    let parent_copy = arena.vattr[arena.root_child(root_vertex)].dfs_parent;
    if arena.vattr[parent_copy].fwd_arc_list == fwd_arc {
        arena.vattr[parent_copy].fwd_arc_list = if arena.link(fwd_arc, 0) == fwd_arc {
            NIL
        } else {
            arena.link(fwd_arc, 0)
        };
    }

    let before = arena.link(fwd_arc, 0);
    let after = arena.link(fwd_arc, 1);
    arena.set_link(before, 1, after);
    arena.set_link(after, 0, before);

    let other_side = 1 - root_side;
    let tail = arena.link(root_vertex, root_side);
    arena.set_link(fwd_arc, other_side, root_vertex);
    arena.set_link(fwd_arc, root_side, tail);
    arena.set_link(tail, other_side, fwd_arc);
    arena.set_link(root_vertex, root_side, fwd_arc);

    arena.set_arc_dest(back_arc, root_vertex);

    let w_other = 1 - w_prev_link;
    let w_tail = arena.link(w, w_prev_link);
    arena.set_link(back_arc, w_other, w);
    arena.set_link(back_arc, w_prev_link, w_tail);
    arena.set_link(w_tail, w_other, back_arc);
    arena.set_link(w, w_prev_link, back_arc);

    arena.ext_face[root_vertex].link[root_side] = w;
    arena.ext_face[w].link[w_prev_link] = root_vertex;
}

/// Short-circuits past an inactive vertex `w` on the external face, moving
/// the walk directly to the next vertex along the path it was already
/// traveling. Ported from `_HandleInactiveVertex`.
pub(crate) fn handle_inactive_vertex(
    arena: &Arena,
    _root_vertex: usize,
    w: &mut usize,
    w_prev_link: &mut usize,
) -> Result<(), Error> {
    let x = arena.ext_face[*w].link[1 - *w_prev_link];
    *w_prev_link = if arena.ext_face[x].link[0] == *w { 0 } else { 1 };
    *w = x;
    Ok(())
}
