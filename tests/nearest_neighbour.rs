use approx::assert_relative_eq;
use emst::{DualTreeBoruvka, EmstParams};
use kdtree::distance::squared_euclidean;
use kdtree::KdTree;

mod common;

/// Every point's edge to its nearest neighbour is part of the minimum spanning tree, so the
/// shortest tree edge touching a point is exactly its nearest neighbour distance.
fn check_nearest_neighbour_edges(data: &[Vec<f64>], params: EmstParams) {
    let mut tree: KdTree<f64, usize, &Vec<f64>> = KdTree::new(data[0].len());
    data.iter()
        .enumerate()
        .for_each(|(n, datapoint)| tree.add(datapoint, n).expect("Failed to add to KdTree"));

    let mst = DualTreeBoruvka::new(data, params).unwrap().compute_mst();
    let mut shortest_incident = vec![f64::INFINITY; data.len()];
    for edge in &mst {
        for point in [edge.lesser, edge.greater] {
            shortest_incident[point] = shortest_incident[point].min(edge.distance);
        }
    }

    for (n, datapoint) in data.iter().enumerate() {
        let neighbours = tree
            .nearest(datapoint, 2, &squared_euclidean)
            .expect("Failed to find neighbours");
        // The closest result is the point itself
        let (nearest_squared, _) = neighbours[1];
        assert_relative_eq!(
            nearest_squared.sqrt(),
            shortest_incident[n],
            max_relative = 1e-9
        );
    }
}

#[test]
fn nearest_neighbours_are_tree_edges() {
    for n_dims in [2, 4, 8] {
        let data = common::random_data(400, n_dims, n_dims as u64);
        check_nearest_neighbour_edges(&data, EmstParams::default());
        check_nearest_neighbour_edges(&data, EmstParams::builder().leaf_size(12).build());
    }
}

#[test]
fn nearest_neighbours_are_tree_edges_naive() {
    let data = common::random_data(150, 3, 77);
    check_nearest_neighbour_edges(&data, EmstParams::builder().naive(true).build());
}
