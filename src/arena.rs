// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The flat arena and its link primitives.
//!
//! Every vertex and every half-arc lives in one `Vec<GraphNode>`, indexed by
//! plain `usize`. There are no owning pointers anywhere in the engine: a
//! "cyclic pointer graph" (a vertex ring, the external face, a list) is just
//! a cycle of indices into this array. See [`Arena`] for the index-space
//! layout.

use crate::list_pool::ListPool;

/// Sentinel for "no such index". Mirrors the C reference implementation's
/// `NIL`.
pub(crate) const NIL: usize = usize::MAX;

/// One slot of the arena. The same layout backs vertex slots and arc slots;
/// which fields are meaningful depends on `kind`, exactly as the C reference
/// implementation reuses one `GraphNode` struct for both.
#[derive(Clone, Debug)]
pub(crate) struct GraphNode {
    /// Ring membership: for a vertex, the incident-edge ring; for an arc,
    /// its position in one vertex's ring.
    pub link: [usize; 2],
    /// Arc-only: the current destination vertex. Rewritten in place during
    /// merges (§4.6): once an edge is redirected from a root copy to a
    /// parent copy it is never redirected again, so the total redirection
    /// work is linear in the number of edges.
    pub v: usize,
    pub kind: NodeKind,
    /// Ephemeral "processed during iteration I" stamp. Meaningful on
    /// vertex/root-copy slots only.
    pub visited: usize,
    /// Arc-only, `DfsChild` arcs only: pending-flip sign consumed by
    /// orientation reconciliation (§4.7).
    pub edge_flag_inverted: bool,
}

impl GraphNode {
    fn vertex() -> Self {
        GraphNode {
            link: [NIL, NIL],
            v: NIL,
            kind: NodeKind::Vertex,
            visited: NIL,
            edge_flag_inverted: false,
        }
    }

    fn arc() -> Self {
        GraphNode {
            link: [NIL, NIL],
            v: NIL,
            kind: NodeKind::Arc(ArcType::Back),
            visited: NIL,
            edge_flag_inverted: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum NodeKind {
    Vertex,
    Arc(ArcType),
}

/// The four roles a half-arc can carry, set once by edge labeling / DFS and
/// read (never recomputed) throughout embedding.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ArcType {
    DfsParent,
    DfsChild,
    Back,
    Forward,
}

/// Per-vertex attributes that aren't ring links. Indexed `0..n` — root
/// copies never carry their own attributes; code that has a root copy `R`
/// recovers the associated DFS child via `R - n` and looks up that child's
/// attributes instead (see [`Arena::root_child`]).
#[derive(Clone, Debug)]
pub(crate) struct VertexAttr {
    pub dfs_parent: usize,
    pub lowpoint: usize,
    pub least_ancestor: usize,
    pub fwd_arc_list: usize,
    pub pertinent_bicomp_list: usize,
    pub separated_dfs_child_list: usize,
    pub adjacent_to: usize,
}

impl VertexAttr {
    fn new() -> Self {
        VertexAttr {
            dfs_parent: NIL,
            lowpoint: 0,
            least_ancestor: 0,
            fwd_arc_list: NIL,
            pertinent_bicomp_list: NIL,
            separated_dfs_child_list: NIL,
            adjacent_to: NIL,
        }
    }
}

/// External-face neighbor links for one vertex (or root copy), plus the
/// orientation bit used for degenerate two-vertex bicomps (§4.5, §4.9 Open
/// Questions).
#[derive(Clone, Debug)]
pub(crate) struct ExtFaceEntry {
    pub link: [usize; 2],
    pub inversion_flag: bool,
}

impl ExtFaceEntry {
    fn new() -> Self {
        ExtFaceEntry {
            link: [NIL, NIL],
            inversion_flag: false,
        }
    }
}

/// The arena: vertex region `[0, 2n)`, arc region `[edge_offset, edge_offset
/// + 2*max_e)`. `edge_offset == 2 * n` always, which is what makes
/// [`Arena::is_vertex`] and [`Arena::is_arc`] a single comparison.
pub(crate) struct Arena {
    pub n: usize,
    pub edge_offset: usize,
    pub max_e: usize,
    nodes: Vec<GraphNode>,
    pub vattr: Vec<VertexAttr>,
    pub ext_face: Vec<ExtFaceEntry>,
    pub bicomp_lists: ListPool,
    pub dfs_child_lists: ListPool,
    next_arc_pair: usize,
    /// The shared LIFO used by Walkdown/the merge engine to record
    /// `(R, Rout)` / `(Z, ZPrevLink)` pairs across a descend (§3, §4.6).
    /// Reused across iterations rather than reallocated.
    pub stack: Vec<(usize, usize)>,
}

impl Arena {
    pub fn new(n: usize, max_e: usize) -> Self {
        assert!(n >= 1, "graph must have at least one vertex");
        let edge_offset = 2 * n;
        let total = edge_offset + 2 * max_e;
        let mut nodes = Vec::with_capacity(total);
        for _ in 0..edge_offset {
            nodes.push(GraphNode::vertex());
        }
        for _ in 0..(2 * max_e) {
            nodes.push(GraphNode::arc());
        }
        Arena {
            n,
            edge_offset,
            max_e,
            nodes,
            vattr: (0..n).map(|_| VertexAttr::new()).collect(),
            ext_face: (0..edge_offset).map(|_| ExtFaceEntry::new()).collect(),
            bicomp_lists: ListPool::new(n),
            dfs_child_lists: ListPool::new(n),
            next_arc_pair: 0,
            stack: Vec::new(),
        }
    }

    #[inline]
    pub fn is_vertex(&self, i: usize) -> bool {
        i < self.edge_offset
    }

    #[inline]
    pub fn is_arc(&self, i: usize) -> bool {
        i >= self.edge_offset
    }

    #[inline]
    pub fn is_root_copy(&self, i: usize) -> bool {
        i >= self.n && i < self.edge_offset
    }

    /// The DFS child associated with root copy `r` (`r - n`). Valid only
    /// when `is_root_copy(r)`.
    #[inline]
    pub fn root_child(&self, r: usize) -> usize {
        debug_assert!(self.is_root_copy(r));
        r - self.n
    }

    #[inline]
    pub fn root_copy(&self, child: usize) -> usize {
        self.n + child
    }

    /// The twin of arc `j`: flips the low bit of its offset within the edge
    /// region.
    #[inline]
    pub fn twin(&self, j: usize) -> usize {
        debug_assert!(self.is_arc(j));
        self.edge_offset + ((j - self.edge_offset) ^ 1)
    }

    #[inline]
    pub fn link(&self, i: usize, dir: usize) -> usize {
        self.nodes[i].link[dir]
    }

    #[inline]
    pub fn set_link(&mut self, i: usize, dir: usize, to: usize) {
        self.nodes[i].link[dir] = to;
    }

    #[inline]
    pub fn arc_dest(&self, j: usize) -> usize {
        self.nodes[j].v
    }

    #[inline]
    pub fn set_arc_dest(&mut self, j: usize, v: usize) {
        self.nodes[j].v = v;
    }

    #[inline]
    pub fn arc_type(&self, j: usize) -> ArcType {
        match self.nodes[j].kind {
            NodeKind::Arc(t) => t,
            NodeKind::Vertex => panic!("arc_type on a vertex slot"),
        }
    }

    #[inline]
    pub fn set_arc_type(&mut self, j: usize, t: ArcType) {
        self.nodes[j].kind = NodeKind::Arc(t);
    }

    #[inline]
    pub fn visited(&self, i: usize) -> usize {
        self.nodes[i].visited
    }

    #[inline]
    pub fn set_visited(&mut self, i: usize, stamp: usize) {
        self.nodes[i].visited = stamp;
    }

    #[inline]
    pub fn edge_flag_inverted(&self, j: usize) -> bool {
        self.nodes[j].edge_flag_inverted
    }

    #[inline]
    pub fn set_edge_flag_inverted(&mut self, j: usize, v: bool) {
        self.nodes[j].edge_flag_inverted = v;
    }

    /// Allocates one fresh pair of twin arc slots, returning the lower one.
    /// The companion is always the next index (see [`Arena::twin`]).
    pub fn alloc_arc_pair(&mut self) -> usize {
        let pair = self.next_arc_pair;
        self.next_arc_pair += 1;
        assert!(pair < self.max_e, "exceeded reserved edge capacity");
        self.edge_offset + 2 * pair
    }

    /// Removes `e` from whichever ring it currently occupies. O(1); does
    /// not touch `e`'s own links, only its former neighbors'.
    pub fn ring_unlink(&mut self, e: usize) {
        let p = self.nodes[e].link[0];
        let nx = self.nodes[e].link[1];
        self.nodes[p].link[1] = nx;
        self.nodes[nx].link[0] = p;
    }

    /// Follows the external face from `cur`, which was entered via
    /// `prev_link`, returning the next vertex and the link that leads back
    /// to `cur` from it.
    ///
    /// Degenerate two-vertex bicomps (where both of a vertex's external-face
    /// links point at the same neighbor) are handled at the call sites that
    /// care, via `ext_face[..].inversion_flag`, not here — this hop is a
    /// plain table lookup, same as every inline use of `extFace` in the
    /// reference implementation's Walkup/Walkdown loops.
    pub fn next_on_external_face(&self, cur: usize, prev_link: usize) -> (usize, usize) {
        let next_vertex = self.ext_face[cur].link[1 - prev_link];
        let new_prev_link = if self.ext_face[next_vertex].link[0] == cur {
            0
        } else {
            1
        };
        (next_vertex, new_prev_link)
    }

    /// Flips the orientation of vertex `v`: every arc in its ring swaps
    /// link[0]/link[1], as does `v`'s external-face entry. Ported from
    /// `_InvertVertex`.
    pub fn invert_vertex(&mut self, v: usize) {
        let mut j = v;
        loop {
            self.nodes[j].link.swap(0, 1);
            j = self.nodes[j].link[0];
            if !self.is_arc(j) {
                break;
            }
        }
        self.ext_face[v].link.swap(0, 1);
    }
}
