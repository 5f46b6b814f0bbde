#![allow(dead_code)]
use emst::MstEdge;
use rand::{rngs::StdRng, Rng, SeedableRng};

pub fn random_data(n_samples: usize, n_dims: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n_samples)
        .map(|_| (0..n_dims).map(|_| rng.gen_range(-50.0..50.0)).collect())
        .collect()
}

pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Total weight of the minimum spanning tree found by a dense O(n²) Prim's algorithm.
pub fn prims_mst_weight(data: &[Vec<f64>]) -> f64 {
    let n_samples = data.len();
    if n_samples <= 1 {
        return 0.0;
    }
    let mut in_tree = vec![false; n_samples];
    let mut distances = vec![f64::INFINITY; n_samples];
    let mut total = 0.0;
    let mut current = 0;
    in_tree[0] = true;
    for _ in 1..n_samples {
        let mut next = usize::MAX;
        let mut next_dist = f64::INFINITY;
        for i in 0..n_samples {
            if in_tree[i] {
                continue;
            }
            distances[i] = distances[i].min(euclidean(&data[current], &data[i]));
            if distances[i] < next_dist {
                next_dist = distances[i];
                next = i;
            }
        }
        in_tree[next] = true;
        total += next_dist;
        current = next;
    }
    total
}

/// Replays the edges through a fresh disjoint set, checking every edge joins two components and
/// that everything ends up connected.
pub fn assert_spanning_tree(mst: &[MstEdge<f64>], n_samples: usize) {
    assert_eq!(n_samples.saturating_sub(1), mst.len());
    let mut parent: Vec<usize> = (0..n_samples).collect();
    fn find(parent: &mut [usize], mut n: usize) -> usize {
        while parent[n] != n {
            parent[n] = parent[parent[n]];
            n = parent[n];
        }
        n
    }
    for edge in mst {
        assert!(edge.lesser < edge.greater, "edge {edge:?} is not ordered");
        assert!(edge.greater < n_samples);
        let a = find(&mut parent, edge.lesser);
        let b = find(&mut parent, edge.greater);
        assert_ne!(a, b, "edge {edge:?} closes a cycle");
        parent[a] = b;
    }
    for window in mst.windows(2) {
        assert!(window[0].distance <= window[1].distance);
    }
}
