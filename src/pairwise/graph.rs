//! Preference graphs and strongly connected components.

use ndarray::ArrayView2;

use crate::error::{RankError, Result};

/// Directed graph over object indices derived from a pairwise matrix.
///
/// Edge convention: the loser of each pair points at the winner. For each
/// pair (i, j) with i < j,
///
/// - `P[i, j] > P[j, i]` adds the edge j -> i,
/// - `P[i, j] < P[j, i]` adds the edge i -> j,
/// - equality adds both edges, so tied pairs always land in one SCC.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreferenceGraph {
    adjacency: Vec<Vec<usize>>,
}

impl PreferenceGraph {
    /// Build from explicit adjacency lists. Successor indices must be in
    /// bounds.
    pub fn from_adjacency(adjacency: Vec<Vec<usize>>) -> Result<Self> {
        let n = adjacency.len();
        for (node, successors) in adjacency.iter().enumerate() {
            if let Some(&bad) = successors.iter().find(|&&s| s >= n) {
                return Err(RankError::InvalidInput(format!(
                    "successor {bad} of node {node} out of range for {n} nodes"
                )));
            }
        }
        Ok(Self { adjacency })
    }

    /// Build the preference graph induced by a square pairwise matrix.
    pub fn from_pairwise_matrix(matrix: &ArrayView2<f64>) -> Result<Self> {
        let (rows, cols) = matrix.dim();
        if rows != cols {
            return Err(RankError::ShapeMismatch {
                expected: format!("square matrix ({rows}x{rows})"),
                actual: format!("{rows}x{cols}"),
            });
        }

        let mut adjacency = vec![Vec::new(); rows];
        for i in 0..rows {
            for j in (i + 1)..rows {
                let p_ij = matrix[[i, j]];
                let p_ji = matrix[[j, i]];
                if p_ij > p_ji {
                    adjacency[j].push(i);
                } else if p_ij < p_ji {
                    adjacency[i].push(j);
                } else {
                    adjacency[j].push(i);
                    adjacency[i].push(j);
                }
            }
        }
        Ok(Self { adjacency })
    }

    /// Number of nodes.
    #[must_use]
    pub fn n_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// Successors of a node.
    #[must_use]
    pub fn successors(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    /// True if the graph contains an intransitive cycle, i.e. an SCC of
    /// size >= 3.
    #[must_use]
    pub fn is_non_transitive(&self) -> bool {
        strongly_connected_components(self)
            .iter()
            .any(|component| component.len() >= 3)
    }
}

/// Sentinel low-link assigned to nodes whose component has closed, so they
/// never win a min against an open node.
const CLOSED: usize = usize::MAX - 1;
const UNVISITED: usize = usize::MAX;

/// Find the strongly connected components of a graph using Tarjan's
/// low-link algorithm.
///
/// Iterative formulation with an explicit frame stack, so graphs several
/// hundred nodes deep cannot exhaust the call stack. Every node appears in
/// exactly one component; components are emitted in reverse topological
/// order (a component before any component that can reach it).
#[must_use]
pub fn strongly_connected_components(graph: &PreferenceGraph) -> Vec<Vec<usize>> {
    let n = graph.n_nodes();
    let mut low = vec![UNVISITED; n];
    let mut disc = vec![0usize; n];
    let mut stack_pos = vec![0usize; n];
    let mut stack: Vec<usize> = Vec::new();
    let mut components = Vec::new();
    let mut counter = 0usize;

    // DFS frames: (node, index of next successor to visit).
    let mut frames: Vec<(usize, usize)> = Vec::new();

    for start in 0..n {
        if low[start] != UNVISITED {
            continue;
        }
        open_node(start, &mut low, &mut disc, &mut stack_pos, &mut stack, &mut counter);
        frames.push((start, 0));

        while let Some(top) = frames.len().checked_sub(1) {
            let (node, next) = frames[top];
            let successors = graph.successors(node);
            if next < successors.len() {
                let succ = successors[next];
                frames[top].1 += 1;
                if low[succ] == UNVISITED {
                    open_node(succ, &mut low, &mut disc, &mut stack_pos, &mut stack, &mut counter);
                    frames.push((succ, 0));
                } else if low[succ] < low[node] {
                    low[node] = low[succ];
                }
            } else {
                // All successors explored: close the component if this
                // node is its root, then propagate the low-link upward.
                if low[node] == disc[node] {
                    let component = stack.split_off(stack_pos[node]);
                    for &member in &component {
                        low[member] = CLOSED;
                    }
                    components.push(component);
                }
                let child_low = low[node];
                frames.pop();
                if let Some(&(parent, _)) = frames.last() {
                    if child_low < low[parent] {
                        low[parent] = child_low;
                    }
                }
            }
        }
    }

    components
}

fn open_node(
    node: usize,
    low: &mut [usize],
    disc: &mut [usize],
    stack_pos: &mut [usize],
    stack: &mut Vec<usize>,
    counter: &mut usize,
) {
    low[node] = *counter;
    disc[node] = *counter;
    *counter += 1;
    stack_pos[node] = stack.len();
    stack.push(node);
}
