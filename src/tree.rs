use crate::NodeStatistic;
use num_traits::Float;
use std::ops::Range;

pub(crate) mod hyper_rectangle;
pub(crate) mod kd_tree;

pub use hyper_rectangle::HyperRectangle;
pub use kd_tree::KdTree;

/// The capabilities the Dual-Tree Boruvka search needs from a spatial index. Nodes are addressed
/// by index, and every node carries a [`NodeStatistic`] slot that the search rewrites each round.
///
/// Implementors must guarantee that a node's points are a contiguous range of the (permuted)
/// dataset, that an internal node's range is the concatenation of its children's ranges, and
/// that `min_distance` never overestimates the squared distance between any two points held by
/// the two nodes.
pub trait SpatialTree<T: Float> {
    /// Index of the root node.
    fn root(&self) -> usize;

    /// The left and right child of a node, or `None` for a leaf.
    fn children(&self, node: usize) -> Option<(usize, usize)>;

    fn is_leaf(&self, node: usize) -> bool {
        self.children(node).is_none()
    }

    /// Indices of the points held under a node.
    fn point_range(&self, node: usize) -> Range<usize>;

    /// Lower bound on the squared Euclidean distance between the bounding volumes of two nodes.
    fn min_distance(&self, node_a: usize, node_b: usize) -> T;

    fn statistic(&self, node: usize) -> &NodeStatistic<T>;

    fn statistic_mut(&mut self, node: usize) -> &mut NodeStatistic<T>;

    /// Number of points the tree was built over.
    fn n_points(&self) -> usize;

    /// Dimensionality of the points the tree was built over.
    fn n_dims(&self) -> usize;
}
