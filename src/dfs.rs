// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! DFS tree construction and lowpoint computation.
//!
//! `spec.md` §1 names this an external collaborator — "assumed available
//! as a primitive" — and the reference implementation's version of it
//! (`gp_CreateDFSTree`, `gp_LowpointAndLeastAncestor`) isn't part of the
//! `graphEmbed.c` this crate is grounded on. This module supplies a
//! straightforward default so the engine is runnable end to end, behind a
//! trait so a caller with a different numbering strategy (or a
//! pre-computed one) can substitute it — the same shape as `guppy`
//! accepting a `MetadataCommand` while also allowing `CargoMetadata::parse_json`
//! for callers who already have the data.
//!
//! Disconnected inputs are handled the standard way this family of
//! algorithms handles them: each additional connected component's DFS
//! root is linked into the tree as a synthetic child of the very first
//! root, via a tree arc that carries no back/forward edge of its own.
//! Joining two planar pieces by a single edge can never make the union
//! non-planar, so testing (and embedding) the bridged, connected graph is
//! equivalent to testing the original disconnected one; [`DfsResult::bridges`]
//! reports which vertex pairs were bridged so a caller can filter the
//! synthetic arcs back out of a returned embedding if it cares about the
//! literal input edge set.

use crate::errors::Error;

/// The output of DFS-numbering a graph on `n` vertices: everything the
/// preprocessor (§4.3) needs to build the initial embedding, indexed by
/// depth-first index (DFI), plus the original-vertex bookkeeping needed to
/// translate results back to the caller's vertex numbering.
pub struct DfsResult {
    /// `original_of[dfi]` is the vertex id the caller used for the vertex
    /// now numbered `dfi`.
    pub original_of: Vec<usize>,
    /// `dfi_of[original]` is the inverse of `original_of`.
    pub dfi_of: Vec<usize>,
    /// `dfs_parent[dfi]` is the DFI of that vertex's DFS-tree parent, or
    /// `usize::MAX` for the overall DFS-tree root.
    pub dfs_parent: Vec<usize>,
    /// `lowpoint[dfi]`, per the usual definition: the minimum DFI reachable
    /// from the subtree rooted at `dfi` via at most one back edge.
    pub lowpoint: Vec<usize>,
    /// `least_ancestor[dfi]`: the minimum DFI reachable from `dfi` itself
    /// (not its descendants) via a single back edge, or `n` if none.
    pub least_ancestor: Vec<usize>,
    /// `(parent_dfi, child_dfi)` for every DFS-tree edge, including
    /// synthetic bridges.
    pub tree_edges: Vec<(usize, usize)>,
    /// The synthetic bridge edges among `tree_edges`, in the caller's
    /// original vertex numbering, for transparency.
    pub bridges: Vec<(usize, usize)>,
}

/// A pluggable DFS-numbering strategy. See the module docs for why this
/// exists as a seam rather than a fixed algorithm.
pub trait DfsNumbering {
    /// Numbers the `n`-vertex simple graph described by `edges` (given in
    /// the caller's own vertex numbering).
    fn number(&self, n: usize, edges: &[(usize, usize)]) -> Result<DfsResult, Error>;
}

/// An iterative (non-recursive, so it isn't bounded by native stack depth —
/// the same reasoning `guppy`'s `petgraph_support::scc` gives for preferring
/// `kosaraju_scc` over the recursive `tarjan_scc`) depth-first numbering.
pub struct DefaultDfs;

impl DfsNumbering for DefaultDfs {
    fn number(&self, n: usize, edges: &[(usize, usize)]) -> Result<DfsResult, Error> {
        if n == 0 {
            return Err(Error::EmptyGraph);
        }
        let mut adj: Vec<Vec<usize>> = vec![Vec::new(); n];
        for &(u, v) in edges {
            if u >= n {
                return Err(Error::VertexIndexOutOfRange { index: u, n });
            }
            if v >= n {
                return Err(Error::VertexIndexOutOfRange { index: v, n });
            }
            if u == v {
                return Err(Error::NotSimple { u, v });
            }
            adj[u].push(v);
            adj[v].push(u);
        }

        const UNSET: usize = usize::MAX;
        let mut dfi_of = vec![UNSET; n];
        let mut original_of = vec![UNSET; n];
        let mut parent_orig = vec![UNSET; n];
        // Indexed by original id, but holds a *DFI value* (the usual
        // lowpoint/least-ancestor recurrence is most naturally expressed
        // comparing DFIs, even while we're still visiting original ids).
        let mut low = vec![UNSET; n];
        let mut least_anc = vec![n; n];
        let mut tree_edges_orig = Vec::with_capacity(n.saturating_sub(1));
        let mut bridges = Vec::new();
        let mut dfi_counter = 0usize;
        let mut first_root: Option<usize> = None;

        for start in 0..n {
            if dfi_of[start] != UNSET {
                continue;
            }
            match first_root {
                None => first_root = Some(start),
                Some(root0) => {
                    parent_orig[start] = root0;
                    tree_edges_orig.push((root0, start));
                    bridges.push((root0, start));
                }
            }

            dfi_of[start] = dfi_counter;
            original_of[dfi_counter] = start;
            dfi_counter += 1;
            low[start] = dfi_of[start];

            // Stack frames: (original vertex id, index into its adjacency list).
            let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
            while let Some(&mut (v, ref mut idx)) = stack.last_mut() {
                if *idx < adj[v].len() {
                    let w = adj[v][*idx];
                    *idx += 1;

                    if w == parent_orig[v] || parent_orig[w] == v {
                        // The mirror of an already-used tree edge (simple
                        // graphs carry exactly one instance of it).
                        continue;
                    }

                    if dfi_of[w] == UNSET {
                        parent_orig[w] = v;
                        tree_edges_orig.push((v, w));
                        dfi_of[w] = dfi_counter;
                        original_of[dfi_counter] = w;
                        dfi_counter += 1;
                        low[w] = dfi_of[w];
                        stack.push((w, 0));
                    } else {
                        // Undirected DFS never produces cross edges, so any
                        // non-tree, non-mirror edge reaches a proper
                        // ancestor.
                        debug_assert!(dfi_of[w] < dfi_of[v]);
                        if dfi_of[w] < low[v] {
                            low[v] = dfi_of[w];
                        }
                        if dfi_of[w] < least_anc[v] {
                            least_anc[v] = dfi_of[w];
                        }
                    }
                } else {
                    stack.pop();
                    if let Some(&(p, _)) = stack.last() {
                        if low[v] < low[p] {
                            low[p] = low[v];
                        }
                    }
                }
            }
        }

        debug_assert_eq!(dfi_counter, n);
        debug_assert_eq!(tree_edges_orig.len(), n - 1);

        let mut dfs_parent = vec![UNSET; n];
        let mut lowpoint = vec![0; n];
        let mut least_ancestor = vec![n; n];
        for orig in 0..n {
            let d = dfi_of[orig];
            dfs_parent[d] = if parent_orig[orig] == UNSET {
                UNSET
            } else {
                dfi_of[parent_orig[orig]]
            };
            lowpoint[d] = low[orig];
            least_ancestor[d] = least_anc[orig];
        }
        let tree_edges = tree_edges_orig
            .iter()
            .map(|&(p, c)| (dfi_of[p], dfi_of[c]))
            .collect();

        Ok(DfsResult {
            original_of,
            dfi_of,
            dfs_parent,
            lowpoint,
            least_ancestor,
            tree_edges,
            bridges,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_has_one_root_and_consistent_lowpoints() {
        let r = DefaultDfs.number(3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
        let root_count = r.dfs_parent.iter().filter(|&&p| p == usize::MAX).count();
        assert_eq!(root_count, 1);
        // Every vertex in a single biconnected component has lowpoint 0.
        assert!(r.lowpoint.iter().all(|&lp| lp == 0));
        assert!(r.bridges.is_empty());
    }

    #[test]
    fn disconnected_graph_gets_exactly_one_bridge_per_extra_component() {
        let r = DefaultDfs
            .number(6, &[(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)])
            .unwrap();
        assert_eq!(r.bridges.len(), 1);
        assert_eq!(r.tree_edges.len(), 5);
    }

    #[test]
    fn rejects_self_loops_and_out_of_range() {
        assert!(matches!(
            DefaultDfs.number(2, &[(0, 0)]),
            Err(Error::NotSimple { .. })
        ));
        assert!(matches!(
            DefaultDfs.number(2, &[(0, 5)]),
            Err(Error::VertexIndexOutOfRange { .. })
        ));
    }
}
