// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The bicomp merge engine.
//!
//! [`merge_bicomps`] drains the `(R, Rout)`/`(Z, ZPrevLink)` pairs Walkdown
//! stacked while descending through pertinent child bicomps, stitching the
//! external face back together at each cut vertex `Z` and folding the
//! bicomp rooted at `R` into `Z` via [`merge_vertex`]. Ported from
//! `_MergeBicomps` and `_MergeVertex`.

use crate::arena::{ArcType, Arena, NIL};
use crate::errors::Error;
use crate::extension::StepResult;

/// Pops and processes every pending merge on `arena.stack`.
///
/// `i`, `root_vertex`, `w`, `w_prev_link` (the back edge that triggered
/// this merge sequence) aren't used by the core algorithm, mirroring the
/// reference implementation's comment that they exist only for extensions
/// wrapping this hook.
pub(crate) fn merge_bicomps(arena: &mut Arena) -> Result<StepResult, Error> {
    while let Some((r, rout)) = arena.stack.pop() {
        let (z, z_prev_link) = arena
            .stack
            .pop()
            .ok_or_else(|| Error::EngineInternalError("merge stack held an R without a matching Z".into()))?;
        let mut rout = rout;

        let ext_face_vertex = arena.ext_face[r].link[1 - rout];
        arena.ext_face[z].link[z_prev_link] = ext_face_vertex;

        if arena.ext_face[ext_face_vertex].link[0] == arena.ext_face[ext_face_vertex].link[1] {
            let idx = rout ^ (arena.ext_face[ext_face_vertex].inversion_flag as usize);
            arena.ext_face[ext_face_vertex].link[idx] = z;
        } else {
            let idx = if arena.ext_face[ext_face_vertex].link[0] == r { 0 } else { 1 };
            arena.ext_face[ext_face_vertex].link[idx] = z;
        }

        // If the path used to enter Z opposes the path used to exit R, the
        // bicomp rooted at R must be flipped: invert it and mark its DFS
        // child edge so descendants are flipped later by orientation
        // propagation.
        if z_prev_link == rout {
            rout = 1 - z_prev_link;

            if arena.link(r, 0) != arena.link(r, 1) {
                arena.invert_vertex(r);
            }

            let mut j = arena.link(r, 0);
            loop {
                if arena.arc_type(j) == ArcType::DfsChild {
                    let inverted = arena.edge_flag_inverted(j);
                    arena.set_edge_flag_inverted(j, !inverted);
                    break;
                }
                j = arena.link(j, 0);
            }
        }

        let root_id = arena.root_child(r);

        let head = arena.vattr[z].pertinent_bicomp_list;
        arena.vattr[z].pertinent_bicomp_list = arena.bicomp_lists.delete(head, root_id);

        let head = arena.vattr[z].separated_dfs_child_list;
        arena.vattr[z].separated_dfs_child_list = arena.dfs_child_lists.delete(head, root_id);

        merge_vertex(arena, z, z_prev_link, r);
    }

    Ok(StepResult::Ok)
}

/// Joins root copy `r` into vertex `w`, which becomes `r`'s replacement
/// everywhere: every arc currently pointing at `r` is redirected to `w`,
/// then `r`'s ring is spliced into `w`'s ring so that `w`'s `link[w_prev_link]`
/// side and `r`'s opposite side become adjacent. `r` is left defunct
/// (`link == [NIL, NIL]`). Ported from `_MergeVertex`.
pub(crate) fn merge_vertex(arena: &mut Arena, w: usize, w_prev_link: usize, r: usize) {
    let mut j = arena.link(r, 0);
    while arena.is_arc(j) {
        let j_twin = arena.twin(j);
        arena.set_arc_dest(j_twin, w);
        j = arena.link(j, 0);
    }

    let e_w = arena.link(w, w_prev_link);
    let e_r = arena.link(r, 1 - w_prev_link);
    let e_ext = arena.link(r, w_prev_link);

    arena.set_link(e_w, 1 - w_prev_link, e_r);
    arena.set_link(e_r, w_prev_link, e_w);

    arena.set_link(w, w_prev_link, e_ext);
    arena.set_link(e_ext, 1 - w_prev_link, w);

    arena.set_link(r, 0, NIL);
    arena.set_link(r, 1, NIL);
}
