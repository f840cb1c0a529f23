// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One-time setup run before the main Walkup/Walkdown loop: sorting each
//! vertex's separated DFS children by lowpoint, detaching forward-arc
//! blocks, and building the initial one-bicomp-per-tree-edge embedding.

use crate::arena::{ArcType, Arena, NIL};
use crate::errors::Error;

/// Bucket-sorts every vertex's DFS children by lowpoint (ties broken by
/// descending DFI, i.e. original adjacency order within a bucket) and
/// records the result as each parent's `separated_dfs_child_list`. Linear
/// time: one bucket per possible lowpoint value, one pass to fill buckets,
/// one pass to drain them in ascending order.
pub(crate) fn create_sorted_separated_dfs_child_lists(arena: &mut Arena) {
    let n = arena.n;
    let mut buckets = vec![NIL; n];
    for c in (1..n).rev() {
        let lp = arena.vattr[c].lowpoint;
        buckets[lp] = arena.dfs_child_lists.prepend(buckets[lp], c);
    }

    let mut sorted = Vec::with_capacity(n.saturating_sub(1));
    for &head in &buckets {
        if head == NIL {
            continue;
        }
        let mut cur = head;
        sorted.push(cur);
        while let Some(nx) = arena.dfs_child_lists.next(head, cur) {
            sorted.push(nx);
            cur = nx;
        }
    }

    for c in sorted {
        let p = arena.vattr[c].dfs_parent;
        let head = arena.vattr[p].separated_dfs_child_list;
        arena.vattr[p].separated_dfs_child_list = arena.dfs_child_lists.append(head, c);
    }
}

/// Detaches the contiguous block of `Forward`-typed arcs that sits at the
/// `link[1]` end of every vertex's ring (an invariant the edge-labeling
/// step in `graph.rs` maintains) into its own circular list, recorded at
/// `vattr[v].fwd_arc_list`. Ported from `_CreateFwdArcLists`.
pub(crate) fn create_fwd_arc_lists(arena: &mut Arena) -> Result<(), Error> {
    for v in 0..arena.n {
        let first = arena.link(v, 1);
        if !arena.is_arc(first) || arena.arc_type(first) != ArcType::Forward {
            continue;
        }
        let mut next = first;
        while arena.is_arc(next) && arena.arc_type(next) == ArcType::Forward {
            next = arena.link(next, 1);
        }
        let last = arena.link(next, 0);

        arena.set_link(next, 0, v);
        arena.set_link(v, 1, next);

        arena.set_link(first, 0, last);
        arena.set_link(last, 1, first);
        arena.vattr[v].fwd_arc_list = first;
    }
    Ok(())
}

/// Builds the initial embedding: one trivial two-vertex bicomp per DFS-tree
/// edge. For tree edge `(p, c)`: the arc in `p`'s ring pointing at `c` is
/// moved onto a fresh root copy `root_copy(c)`, and the arc in `c`'s ring
/// pointing back at `p` is redirected to point at that root copy instead.
/// The external face of the resulting two-vertex bicomp is cross-linked.
/// Ported from `_CreateDFSTreeEmbedding`.
pub(crate) fn create_dfs_tree_embedding(arena: &mut Arena) -> Result<(), Error> {
    for c in 1..arena.n {
        let p = arena.vattr[c].dfs_parent;

        let mut j = p;
        loop {
            j = arena.link(j, 0);
            if arena.is_arc(j) && arena.arc_type(j) == ArcType::DfsChild && arena.arc_dest(j) == c {
                break;
            }
        }
        arena.ring_unlink(j);
        let r = arena.root_copy(c);
        arena.set_link(r, 0, j);
        arena.set_link(r, 1, j);
        arena.set_link(j, 0, r);
        arena.set_link(j, 1, r);

        let mut k = c;
        loop {
            k = arena.link(k, 0);
            if arena.is_arc(k) && arena.arc_type(k) == ArcType::DfsParent && arena.arc_dest(k) == p {
                break;
            }
        }
        arena.set_arc_dest(k, r);

        // Strip every other arc (in particular, any Back arcs to c's own
        // descendants) out of c's ring: c receives only its parent arc.
        arena.set_link(c, 0, k);
        arena.set_link(c, 1, k);
        arena.set_link(k, 0, c);
        arena.set_link(k, 1, c);

        arena.ext_face[r].link = [c, c];
        arena.ext_face[c].link = [r, r];
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    #[test]
    fn separated_child_lists_are_sorted_by_lowpoint() {
        // Star: 0 is parent of 1, 2, 3; no back edges, so every child's
        // lowpoint equals its own DFI.
        let mut g = GraphBuilder::new(4);
        g.add_edge(0, 1).unwrap();
        g.add_edge(0, 2).unwrap();
        g.add_edge(0, 3).unwrap();
        let mut graph = g.build().unwrap();
        create_sorted_separated_dfs_child_lists(&mut graph.arena);
        let head = graph.arena.vattr[0].separated_dfs_child_list;
        let mut order = vec![head];
        let mut cur = head;
        while let Some(nx) = graph.arena.dfs_child_lists.next(head, cur) {
            order.push(nx);
            cur = nx;
        }
        assert_eq!(order, vec![1, 2, 3]);
    }
}
