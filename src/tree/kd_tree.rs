use super::{HyperRectangle, SpatialTree};
use crate::NodeStatistic;
use num_traits::Float;
use std::ops::Range;

struct KdNode<T> {
    bound: HyperRectangle<T>,
    start: usize,
    count: usize,
    children: Option<(usize, usize)>,
    stat: NodeStatistic<T>,
}

/// A binary space partitioning tree with hyper-rectangle bounds. Nodes live in a flat arena and
/// the root is always node 0.
///
/// Building the tree reorders the rows of the dataset so that every node holds a contiguous
/// range of points. The mapping back to the original order is kept in [`KdTree::old_from_new`].
pub struct KdTree<T> {
    nodes: Vec<KdNode<T>>,
    old_from_new: Vec<usize>,
    n_dims: usize,
}

impl<T: Float> KdTree<T> {
    /// Builds a tree over `data`, permuting its rows in place.
    ///
    /// # Parameters
    /// * `data` - the points, all of the same dimensionality. Rows are reordered during the build.
    /// * `leaf_size` - the maximum number of points in a leaf. A leaf of coincident points may
    ///                 exceed this as it cannot be split further. Values below 1 are treated as 1.
    ///
    /// # Examples
    /// ```
    ///use emst::{KdTree, SpatialTree};
    ///
    ///let original = vec![vec![3.0], vec![0.0], vec![2.0], vec![1.0]];
    ///let mut data = original.clone();
    ///let tree = KdTree::build(&mut data, 1);
    ///assert_eq!(4, tree.n_points());
    ///for (new, &old) in tree.old_from_new().iter().enumerate() {
    ///    assert_eq!(original[old], data[new]);
    ///}
    /// ```
    pub fn build(data: &mut [Vec<T>], leaf_size: usize) -> Self {
        let n_samples = data.len();
        let n_dims = data.first().map_or(0, Vec::len);
        let mut tree = KdTree {
            nodes: Vec::new(),
            old_from_new: (0..n_samples).collect(),
            n_dims,
        };
        let root = tree.add_node(data, 0, n_samples);
        tree.split_node(data, root, leaf_size.max(1));
        tree
    }

    /// For each position of the permuted dataset, the row index it had before the build.
    pub fn old_from_new(&self) -> &[usize] {
        &self.old_from_new
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn bound(&self, node: usize) -> &HyperRectangle<T> {
        &self.nodes[node].bound
    }

    fn add_node(&mut self, data: &[Vec<T>], start: usize, count: usize) -> usize {
        let bound = HyperRectangle::from_points(&data[start..start + count], self.n_dims);
        self.nodes.push(KdNode {
            bound,
            start,
            count,
            children: None,
            stat: NodeStatistic::new(),
        });
        self.nodes.len() - 1
    }

    fn split_node(&mut self, data: &mut [Vec<T>], node: usize, leaf_size: usize) {
        let (start, count) = (self.nodes[node].start, self.nodes[node].count);
        if count <= leaf_size {
            return;
        }
        let Some((dim, width)) = self.nodes[node].bound.widest_dimension() else {
            return;
        };
        if width <= T::zero() {
            return;
        }
        let split = self.nodes[node].bound.midpoint(dim);
        let left_count = self.partition(data, start, count, dim, split);
        // The midpoint can round onto the lower bound when the extent is tiny
        if left_count == 0 || left_count == count {
            return;
        }

        let left = self.add_node(data, start, left_count);
        let right = self.add_node(data, start + left_count, count - left_count);
        self.nodes[node].children = Some((left, right));
        self.split_node(data, left, leaf_size);
        self.split_node(data, right, leaf_size);
    }

    /// Moves points below `split` along `dim` to the front of the range and returns how many
    /// there are.
    fn partition(
        &mut self,
        data: &mut [Vec<T>],
        start: usize,
        count: usize,
        dim: usize,
        split: T,
    ) -> usize {
        let mut left = start;
        let mut right = start + count;
        while left < right {
            if data[left][dim] < split {
                left += 1;
            } else {
                right -= 1;
                data.swap(left, right);
                self.old_from_new.swap(left, right);
            }
        }
        left - start
    }
}

impl<T: Float> SpatialTree<T> for KdTree<T> {
    fn root(&self) -> usize {
        0
    }

    fn children(&self, node: usize) -> Option<(usize, usize)> {
        self.nodes[node].children
    }

    fn point_range(&self, node: usize) -> Range<usize> {
        let node = &self.nodes[node];
        node.start..node.start + node.count
    }

    fn min_distance(&self, node_a: usize, node_b: usize) -> T {
        self.nodes[node_a].bound.min_distance(&self.nodes[node_b].bound)
    }

    fn statistic(&self, node: usize) -> &NodeStatistic<T> {
        &self.nodes[node].stat
    }

    fn statistic_mut(&mut self, node: usize) -> &mut NodeStatistic<T> {
        &mut self.nodes[node].stat
    }

    fn n_points(&self) -> usize {
        self.old_from_new.len()
    }

    fn n_dims(&self) -> usize {
        self.n_dims
    }
}
