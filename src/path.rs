use tracing::debug;

use crate::{Error, Graph};

/// Shortest distances from one source cave, and the route to the target cave.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    source: usize,
    target: usize,
    distances: Vec<f64>,         // f64::INFINITY for unreachable caves
    parents: Vec<Option<usize>>, // Previous cave on the shortest path
    path: Vec<usize>,            // Empty if target is unreachable
}

impl PathResult {
    pub fn source(&self) -> usize {
        self.source
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    pub fn parents(&self) -> &[Option<usize>] {
        &self.parents
    }

    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Shortest distance from source to target, None if there's no way to target.
    pub fn distance(&self) -> Option<f64> {
        self.distance_to(self.target)
    }

    pub fn distance_to(&self, node: usize) -> Option<f64> {
        self.distances
            .get(node)
            .copied()
            .filter(|distance| distance.is_finite())
    }

    pub fn is_reachable(&self) -> bool {
        self.distance().is_some()
    }

    /// Route from source to any other cave, using the same shortest path tree.
    pub fn path_to(&self, target: usize) -> Result<Vec<usize>, Error> {
        if target >= self.parents.len() {
            return Err(Error::InvalidTarget(target, self.parents.len()));
        }

        Ok(reconstruct_path(&self.parents, self.source, target))
    }
}

/// Dijkstra's search on the dense weight matrix of a graph.
///
/// Nothing is kept between runs, so one engine (or many) can be used for any number of
/// queries on the same graph.
#[derive(Debug, Clone, Copy)]
pub struct ShortestPathEngine<'a> {
    graph: &'a Graph,
}

impl<'a> ShortestPathEngine<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// Search from given source to the last cave.
    pub fn run(&self, source: usize) -> Result<PathResult, Error> {
        self.run_to(source, self.graph.node_count().saturating_sub(1))
    }

    pub fn run_to(&self, source: usize, target: usize) -> Result<PathResult, Error> {
        let node_n = self.graph.node_count();
        if source >= node_n {
            return Err(Error::InvalidSource(source, node_n));
        }
        if target >= node_n {
            return Err(Error::InvalidTarget(target, node_n));
        }

        let mut distances = vec![f64::INFINITY; node_n];
        let mut settled = vec![false; node_n];
        let mut parents = vec![None; node_n];
        distances[source] = 0.0;
        for _ in 1..node_n {
            let Some(nearest) = nearest_unsettled(&distances, &settled) else {
                debug!("No more reachable caves from cave {}.", source);
                break;
            };

            settled[nearest] = true;
            let nearest_distance = distances[nearest];
            debug!(node = nearest, distance = nearest_distance, "Settled cave.");
            for (next, weight) in self.graph.neighbors(nearest) {
                let next_distance = nearest_distance + weight;
                if !settled[next] && next_distance < distances[next] {
                    distances[next] = next_distance;
                    parents[next] = Some(nearest);
                }
            }
        }

        let path = reconstruct_path(&parents, source, target);
        Ok(PathResult {
            source,
            target,
            distances,
            parents,
            path,
        })
    }
}

// Ties go to the lowest index.
fn nearest_unsettled(distances: &[f64], settled: &[bool]) -> Option<usize> {
    distances
        .iter()
        .zip(settled)
        .enumerate()
        .filter(|(_, (distance, is_settled))| !**is_settled && distance.is_finite())
        .fold(None, |nearest: Option<(usize, f64)>, (ind, (distance, _))| {
            match nearest {
                Some((_, min_distance)) if min_distance <= *distance => nearest,
                _ => Some((ind, *distance)),
            }
        })
        .map(|(ind, _)| ind)
}

fn reconstruct_path(parents: &[Option<usize>], source: usize, target: usize) -> Vec<usize> {
    let mut path = vec![target];
    let mut cur_node = target;
    while cur_node != source {
        match parents.get(cur_node).copied().flatten() {
            // A walk longer than the number of caves means a broken parent chain.
            Some(parent) if path.len() < parents.len() => {
                path.push(parent);
                cur_node = parent;
            }
            _ => return Vec::new(),
        }
    }

    path.reverse();
    path
}
