// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Walkup: registers which bicomps are pertinent to the current iteration.
//!
//! Given the forward arc `j` from the current vertex `i` to a descendant
//! `w = arc_dest(j)`, Walkup marks `w` pertinent (`adjacent_to = j`) and
//! then walks the external face outward from `w` in both directions at
//! once — "Zig" and "Zag" — until both reach `i`. Landing on a root copy
//! hops both cursors straight to that bicomp's DFS parent (resetting the
//! walk to originate there) and registers the root copy's DFS child in the
//! parent's pertinent-bicomp list: prepended if the child's own lowpoint is
//! `>= i` (internally active — it must be resolved this iteration), appended
//! otherwise (externally active — keep it reachable for a later iteration).
//! Ported from `_WalkUp`.

use crate::arena::Arena;

pub(crate) fn walk_up(arena: &mut Arena, i: usize, j: usize) {
    let w = arena.arc_dest(j);
    arena.vattr[w].adjacent_to = j;

    let mut zig = w;
    let mut zag = w;
    let mut zig_prev_link = 1;
    let mut zag_prev_link = 0;

    while zig != i {
        if arena.visited(zig) == i || arena.visited(zag) == i {
            break;
        }
        arena.set_visited(zig, i);
        arena.set_visited(zag, i);

        let root = if arena.is_root_copy(zig) {
            Some(zig)
        } else if arena.is_root_copy(zag) {
            Some(zag)
        } else {
            None
        };

        if let Some(r) = root {
            let child = arena.root_child(r);
            let parent = arena.vattr[child].dfs_parent;

            if parent != i {
                let head = arena.vattr[parent].pertinent_bicomp_list;
                arena.vattr[parent].pertinent_bicomp_list = if arena.vattr[child].lowpoint < i {
                    arena.bicomp_lists.append(head, child)
                } else {
                    arena.bicomp_lists.prepend(head, child)
                };
            }

            zig = parent;
            zag = parent;
            zig_prev_link = 1;
            zag_prev_link = 0;
        } else {
            let (next_zig, next_zig_link) = arena.next_on_external_face(zig, zig_prev_link);
            zig = next_zig;
            zig_prev_link = next_zig_link;

            let (next_zag, next_zag_link) = arena.next_on_external_face(zag, zag_prev_link);
            zag = next_zag;
            zag_prev_link = next_zag_link;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Arena;

    #[test]
    fn walk_up_stops_immediately_when_w_is_already_i() {
        let mut arena = Arena::new(2, 1);
        // A single tree-edge bicomp: root copy 2 (= n + 0) linked to vertex
        // 1, with a forward arc from 1 to 0 sitting at arc slot
        // edge_offset (4).
        let fwd_arc = arena.alloc_arc_pair();
        arena.set_arc_dest(fwd_arc, 0);
        walk_up(&mut arena, 0, fwd_arc);
        assert_eq!(arena.vattr[0].adjacent_to, fwd_arc);
    }
}
