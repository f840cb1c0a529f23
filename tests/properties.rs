// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Randomized property coverage beyond the literal worked examples: every
//! graph here is connected and generated at random, then checked against
//! invariants a successful embedding must satisfy regardless of input.
#![cfg(feature = "proptest1")]

use planarity_embed::{EmbedOutcome, GraphBuilder};
use proptest::prelude::*;

mod common;
use common::count_faces;

const MAX_N: usize = 7;

/// A connected random graph on `2..=MAX_N` vertices: a spanning path
/// guarantees connectivity (so `Graph::neighbors` never has to filter a
/// synthetic bridge out of a traced face, which needs every rotation entry
/// present to find its way back to the start), plus a random subset of the
/// remaining pairs.
fn connected_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (2..=MAX_N).prop_flat_map(|n| {
        let path: Vec<(usize, usize)> = (0..n - 1).map(|i| (i, i + 1)).collect();
        let extra: Vec<(usize, usize)> = (0..n)
            .flat_map(|u| ((u + 1)..n).map(move |v| (u, v)))
            .filter(|pair| !path.contains(pair))
            .collect();
        let extra_len = extra.len();
        prop::collection::vec(any::<bool>(), extra_len).prop_map(move |mask| {
            let mut edges = path.clone();
            for (include, &pair) in mask.into_iter().zip(extra.iter()) {
                if include {
                    edges.push(pair);
                }
            }
            (n, edges)
        })
    })
}

proptest! {
    /// Spec property 4 (twin invariant), observed through the public API:
    /// every arc's twin appears as the matching vertex's reciprocal
    /// neighbor, so the rotation system is symmetric regardless of whether
    /// the input embeds or not.
    #[test]
    fn neighbor_relation_is_symmetric((n, edges) in connected_graph()) {
        let mut g = GraphBuilder::new(n);
        for &(u, v) in &edges {
            g.add_edge(u, v).unwrap();
        }
        let mut graph = g.build().unwrap();
        let _ = graph.embed();
        for u in 0..n {
            for v in graph.neighbors(u) {
                prop_assert!(graph.neighbors(v).contains(&u));
            }
        }
    }

    /// Spec property 2 (Euler characteristic): a connected planar graph's
    /// combinatorial embedding satisfies V - E + F == 2.
    #[test]
    fn euler_characteristic_holds_when_embedded((n, edges) in connected_graph()) {
        let mut g = GraphBuilder::new(n);
        for &(u, v) in &edges {
            g.add_edge(u, v).unwrap();
        }
        let mut graph = g.build().unwrap();
        if let EmbedOutcome::Embedded = graph.embed().unwrap() {
            let edge_count: usize = (0..n).map(|v| graph.neighbors(v).len()).sum::<usize>() / 2;
            let faces = count_faces(&graph, n);
            prop_assert_eq!(n + faces, edge_count + 2);
        }
    }
}
