// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for the end-to-end and property test suites.

/// Builds a [`planarity_embed::Graph`] from an edge list, panicking on any
/// rejected edge (every caller here hands in a graph it knows is simple).
pub fn build(n: usize, edges: &[(usize, usize)]) -> planarity_embed::Graph {
    let mut g = planarity_embed::GraphBuilder::new(n);
    for &(u, v) in edges {
        g.add_edge(u, v).unwrap();
    }
    g.build().unwrap()
}

/// Counts faces of a combinatorial embedding from its rotation system
/// alone, by tracing each directed edge's face until it returns to its
/// start. Works for any consistent rotation system regardless of which
/// way (clockwise/counterclockwise) it happens to wind.
pub fn count_faces(graph: &planarity_embed::Graph, n: usize) -> usize {
    use std::collections::HashSet;

    let rotations: Vec<Vec<usize>> = (0..n).map(|v| graph.neighbors(v)).collect();
    let next_in_rotation = |u: usize, v: usize| -> usize {
        let rot = &rotations[v];
        let pos = rot.iter().position(|&x| x == u).expect("u must be in v's rotation");
        rot[(pos + 1) % rot.len()]
    };

    let mut visited: HashSet<(usize, usize)> = HashSet::new();
    let mut faces = 0;
    for u in 0..n {
        for &v in &rotations[u] {
            if visited.contains(&(u, v)) {
                continue;
            }
            faces += 1;
            let (mut a, mut b) = (u, v);
            loop {
                visited.insert((a, b));
                let c = next_in_rotation(a, b);
                a = b;
                b = c;
                if (a, b) == (u, v) {
                    break;
                }
            }
        }
    }
    faces
}
