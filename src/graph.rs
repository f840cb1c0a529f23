// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The caller-facing construction and embedding API: `GraphBuilder` turns an
//! edge list into a DFS-numbered [`Graph`]; `Graph::embed` runs the engine.
//!
//! Mirrors the shape of `guppy`'s `PackageGraph::from_metadata`/`build`
//! (`graph/build.rs`): a builder collects caller data with validation at
//! each insertion, then a single `build` call does the expensive one-time
//! work (there, parsing `cargo metadata` JSON into a `petgraph::Graph`;
//! here, DFS-numbering an edge list into the initial arena embedding).

use std::collections::HashSet;

use crate::arena::{ArcType, Arena};
use crate::dfs::{DefaultDfs, DfsNumbering};
use crate::driver;
use crate::errors::Error;
use crate::extension::{CoreHooks, EmbedderHooks, EngineOutcome};
use crate::obstruction::{NoIsolator, Obstruction, ObstructionIsolator};

/// The result of [`Graph::embed`], with every vertex id translated back
/// from depth-first index to the id the caller used when building the
/// graph.
#[derive(Clone, Debug)]
pub enum EmbedOutcome {
    /// The graph is planar. The arena now holds a combinatorial embedding;
    /// [`Graph::neighbors`] returns each vertex's rotation (cyclic edge
    /// order).
    Embedded,
    /// The graph is not planar, carrying whatever obstruction the
    /// installed [`ObstructionIsolator`] found, translated to the
    /// caller's original vertex ids.
    Nonembeddable(Obstruction),
}

/// Accumulates an edge list for a simple graph on `n` vertices before
/// handing it to a [`DfsNumbering`] strategy and laying out the initial
/// arena embedding.
pub struct GraphBuilder {
    n: usize,
    edges: Vec<(usize, usize)>,
    seen: HashSet<(usize, usize)>,
}

impl GraphBuilder {
    /// Starts a builder for a graph on `n` vertices, numbered `0..n` in the
    /// caller's own scheme.
    pub fn new(n: usize) -> Self {
        GraphBuilder {
            n,
            edges: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Records one undirected edge. Rejects self-loops and duplicate edges
    /// (§1 Non-goals: the core loop only accepts simple graphs) and vertex
    /// ids outside `0..n`.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), Error> {
        if u >= self.n {
            return Err(Error::VertexIndexOutOfRange { index: u, n: self.n });
        }
        if v >= self.n {
            return Err(Error::VertexIndexOutOfRange { index: v, n: self.n });
        }
        if u == v {
            return Err(Error::NotSimple { u, v });
        }
        let key = if u < v { (u, v) } else { (v, u) };
        if !self.seen.insert(key) {
            return Err(Error::NotSimple { u, v });
        }
        self.edges.push((u, v));
        Ok(())
    }

    /// Builds the graph, numbering it with [`DefaultDfs`].
    pub fn build(self) -> Result<Graph, Error> {
        self.build_with_dfs(&DefaultDfs)
    }

    /// Builds the graph, numbering it with a caller-supplied [`DfsNumbering`]
    /// strategy instead of the default.
    pub fn build_with_dfs(self, dfs: &dyn DfsNumbering) -> Result<Graph, Error> {
        if self.n == 0 {
            return Err(Error::EmptyGraph);
        }
        let dfs_result = dfs.number(self.n, &self.edges)?;
        let n = self.n;

        // Every input edge is either the DFS tree edge between its two
        // endpoints, or a non-tree back edge between an ancestor and a
        // descendant. Simple undirected DFS never produces cross edges, so
        // this partition is exhaustive.
        let mut back_edges = Vec::new();
        for &(u, v) in &self.edges {
            let du = dfs_result.dfi_of[u];
            let dv = dfs_result.dfi_of[v];
            let is_tree_edge = dfs_result.dfs_parent[du] == dv || dfs_result.dfs_parent[dv] == du;
            if is_tree_edge {
                continue;
            }
            let (ancestor, descendant) = if du < dv { (du, dv) } else { (dv, du) };
            back_edges.push((ancestor, descendant));
        }

        let max_e = dfs_result.tree_edges.len() + back_edges.len();
        let mut arena = Arena::new(n, max_e);

        for (dfi, attr) in arena.vattr.iter_mut().enumerate() {
            attr.dfs_parent = dfs_result.dfs_parent[dfi];
            attr.lowpoint = dfs_result.lowpoint[dfi];
            attr.least_ancestor = dfs_result.least_ancestor[dfi];
        }

        let mut forward_arcs: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut other_arcs: Vec<Vec<usize>> = vec![Vec::new(); n];

        for &(p, c) in &dfs_result.tree_edges {
            let j = arena.alloc_arc_pair();
            let jt = arena.twin(j);
            arena.set_arc_type(j, ArcType::DfsChild);
            arena.set_arc_dest(j, c);
            arena.set_arc_type(jt, ArcType::DfsParent);
            arena.set_arc_dest(jt, p);
            other_arcs[p].push(j);
            other_arcs[c].push(jt);
        }

        for &(ancestor, descendant) in &back_edges {
            let j = arena.alloc_arc_pair();
            let jt = arena.twin(j);
            arena.set_arc_type(j, ArcType::Forward);
            arena.set_arc_dest(j, descendant);
            arena.set_arc_type(jt, ArcType::Back);
            arena.set_arc_dest(jt, ancestor);
            forward_arcs[ancestor].push(j);
            other_arcs[descendant].push(jt);
        }

        for v in 0..n {
            let mut ordered = std::mem::take(&mut forward_arcs[v]);
            ordered.extend_from_slice(&other_arcs[v]);
            build_ring(&mut arena, v, &ordered);
        }

        Ok(Graph {
            arena,
            original_of: dfs_result.original_of,
            dfi_of: dfs_result.dfi_of,
            bridges: dfs_result.bridges,
            hooks: Box::new(CoreHooks),
            isolator: Box::new(NoIsolator),
        })
    }
}

/// Lays `owner` followed by `arcs` (in order) out as one circular ring:
/// `owner -> arcs[0] -> arcs[1] -> ... -> arcs[last] -> owner`. An empty
/// `arcs` leaves `owner` in a one-element ring pointing at itself.
fn build_ring(arena: &mut Arena, owner: usize, arcs: &[usize]) {
    let mut cur = owner;
    for &next in arcs {
        arena.set_link(cur, 1, next);
        arena.set_link(next, 0, cur);
        cur = next;
    }
    arena.set_link(cur, 1, owner);
    arena.set_link(owner, 0, cur);
}

/// A DFS-numbered graph with its initial one-bicomp-per-tree-edge
/// embedding built and ready for [`Graph::embed`].
pub struct Graph {
    pub(crate) arena: Arena,
    original_of: Vec<usize>,
    dfi_of: Vec<usize>,
    bridges: Vec<(usize, usize)>,
    hooks: Box<dyn EmbedderHooks>,
    isolator: Box<dyn ObstructionIsolator>,
}

impl Graph {
    /// Installs a custom [`EmbedderHooks`] in place of [`CoreHooks`],
    /// overriding one or more of the seven extension points for this
    /// embed call.
    pub fn with_hooks(mut self, hooks: Box<dyn EmbedderHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    /// Installs a custom [`ObstructionIsolator`] in place of [`NoIsolator`],
    /// to recover a concrete K5/K3,3 subdivision on a non-planar verdict.
    pub fn with_isolator(mut self, isolator: Box<dyn ObstructionIsolator>) -> Self {
        self.isolator = isolator;
        self
    }

    /// Runs the embedding engine to completion. On success the arena's
    /// vertex rings describe a combinatorial planar embedding; on
    /// non-planarity, the installed isolator's findings are returned
    /// translated to the caller's original vertex ids.
    pub fn embed(&mut self) -> Result<EmbedOutcome, Error> {
        match driver::gp_embed(&mut self.arena, self.hooks.as_ref(), self.isolator.as_ref())? {
            EngineOutcome::Embedded => Ok(EmbedOutcome::Embedded),
            EngineOutcome::Nonembeddable(mut obstruction) => {
                for edge in obstruction.edges.iter_mut() {
                    edge.0 = self.original_of[edge.0];
                    edge.1 = self.original_of[edge.1];
                }
                Ok(EmbedOutcome::Nonembeddable(obstruction))
            }
        }
    }

    /// The neighbors of `v` (a caller-original vertex id) in rotation
    /// order, read off `v`'s ring. Meaningful as a planar rotation system
    /// only after a successful [`Graph::embed`]; before that it is simply
    /// `v`'s adjacency list in construction order.
    ///
    /// Synthetic bridge arcs (see [`Graph::bridging_edges`]) never appear
    /// here: they don't correspond to any edge the caller inserted.
    pub fn neighbors(&self, v: usize) -> Vec<usize> {
        let dfi = self.dfi_of[v];
        let mut out = Vec::new();
        let mut j = self.arena.link(dfi, 1);
        while self.arena.is_arc(j) {
            let w = self.original_of[self.arena.arc_dest(j)];
            if !self.is_bridge(v, w) {
                out.push(w);
            }
            j = self.arena.link(j, 1);
        }
        out
    }

    fn is_bridge(&self, u: usize, v: usize) -> bool {
        self.bridges.contains(&(u, v)) || self.bridges.contains(&(v, u))
    }

    /// The number of vertices.
    pub fn len(&self) -> usize {
        self.arena.n
    }

    /// Whether the graph has any vertices. Always `false`: `GraphBuilder`
    /// rejects `n == 0` at `build` time.
    pub fn is_empty(&self) -> bool {
        self.arena.n == 0
    }

    /// Edges synthesized to bridge disconnected components into one DFS
    /// tree (see [`crate::dfs`]), in the caller's original vertex
    /// numbering. Empty for a connected input graph.
    pub fn bridging_edges(&self) -> &[(usize, usize)] {
        &self.bridges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_self_loop_and_duplicate_edge() {
        let mut g = GraphBuilder::new(3);
        assert!(matches!(g.add_edge(0, 0), Err(Error::NotSimple { .. })));
        g.add_edge(0, 1).unwrap();
        assert!(matches!(g.add_edge(1, 0), Err(Error::NotSimple { .. })));
    }

    #[test]
    fn rejects_out_of_range_vertex() {
        let mut g = GraphBuilder::new(2);
        assert!(matches!(
            g.add_edge(0, 7),
            Err(Error::VertexIndexOutOfRange { .. })
        ));
    }

    #[test]
    fn triangle_neighbors_have_degree_two_each() {
        let mut g = GraphBuilder::new(3);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        g.add_edge(0, 2).unwrap();
        let graph = g.build().unwrap();
        for v in 0..3 {
            assert_eq!(graph.neighbors(v).len(), 2);
        }
    }

    #[test]
    fn empty_graph_is_rejected() {
        assert!(matches!(GraphBuilder::new(0).build(), Err(Error::EmptyGraph)));
    }
}
