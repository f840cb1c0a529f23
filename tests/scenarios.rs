// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end embedding scenarios against the public API, covering the
//! literal inputs and expected outcomes.

use pretty_assertions::assert_eq;

use planarity_embed::EmbedOutcome;

mod common;
use common::{build, count_faces};

#[test]
fn triangle_embeds_with_two_faces() {
    let mut graph = build(3, &[(0, 1), (1, 2), (0, 2)]);
    assert!(matches!(graph.embed().unwrap(), EmbedOutcome::Embedded));
    assert_eq!(count_faces(&graph, 3), 2);
}

#[test]
fn k4_embeds_with_four_faces() {
    let edges = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];
    let mut graph = build(4, &edges);
    assert!(matches!(graph.embed().unwrap(), EmbedOutcome::Embedded));
    assert_eq!(count_faces(&graph, 4), 4);
}

#[test]
fn k5_is_nonembeddable() {
    let edges = [
        (0, 1),
        (0, 2),
        (0, 3),
        (0, 4),
        (1, 2),
        (1, 3),
        (1, 4),
        (2, 3),
        (2, 4),
        (3, 4),
    ];
    let mut graph = build(5, &edges);
    assert!(matches!(
        graph.embed().unwrap(),
        EmbedOutcome::Nonembeddable(_)
    ));
}

#[test]
fn k33_is_nonembeddable() {
    let edges = [
        (0, 3),
        (0, 4),
        (0, 5),
        (1, 3),
        (1, 4),
        (1, 5),
        (2, 3),
        (2, 4),
        (2, 5),
    ];
    let mut graph = build(6, &edges);
    assert!(matches!(
        graph.embed().unwrap(),
        EmbedOutcome::Nonembeddable(_)
    ));
}

#[test]
fn k5_minus_one_edge_embeds() {
    let edges = [
        (0, 1),
        (0, 2),
        (0, 3),
        (0, 4),
        (1, 2),
        (1, 3),
        (1, 4),
        (2, 3),
        (2, 4),
        // (3, 4) dropped
    ];
    let mut graph = build(5, &edges);
    assert!(matches!(graph.embed().unwrap(), EmbedOutcome::Embedded));
}

#[test]
fn two_disjoint_triangles_embed_and_report_one_bridge() {
    let edges = [(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)];
    let mut graph = build(6, &edges);
    assert!(matches!(graph.embed().unwrap(), EmbedOutcome::Embedded));
    assert_eq!(graph.bridging_edges().len(), 1);
    // Each vertex's real neighbors are unaffected by the synthetic bridge
    // used internally to connect the two components into one DFS tree.
    for v in 0..6 {
        assert_eq!(graph.neighbors(v).len(), 2);
    }
}
