use crate::tree::SpatialTree;
use crate::union_find::UnionFind;
use num_traits::Float;

/// Cached per-node data driving the pruning of the dual tree search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeStatistic<T> {
    max_neighbor_distance: T,
    component_membership: Option<usize>,
}

impl<T: Float> NodeStatistic<T> {
    pub fn new() -> Self {
        NodeStatistic {
            max_neighbor_distance: T::infinity(),
            component_membership: None,
        }
    }

    /// Upper bound on the squared distance from any point under the node to the nearest point
    /// outside its component.
    pub fn max_neighbor_distance(&self) -> T {
        self.max_neighbor_distance
    }

    /// The component shared by every point under the node, or `None` if the points belong to
    /// more than one component.
    pub fn component_membership(&self) -> Option<usize> {
        self.component_membership
    }

    pub(crate) fn set_max_neighbor_distance(&mut self, distance: T) {
        self.max_neighbor_distance = distance;
    }

    fn reset(&mut self, component_membership: Option<usize>) {
        self.max_neighbor_distance = T::infinity();
        self.component_membership = component_membership;
    }
}

impl<T: Float> Default for NodeStatistic<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Clears the neighbour bounds of every node and recomputes which nodes have collapsed into a
/// single component. Runs bottom up from the root.
pub(crate) fn reset_statistics<T, S>(tree: &mut S, union_find: &mut UnionFind)
where
    T: Float,
    S: SpatialTree<T> + ?Sized,
{
    let root = tree.root();
    reset_node(tree, union_find, root);
}

fn reset_node<T, S>(tree: &mut S, union_find: &mut UnionFind, node: usize) -> Option<usize>
where
    T: Float,
    S: SpatialTree<T> + ?Sized,
{
    let membership = match tree.children(node) {
        Some((left, right)) => {
            let left_membership = reset_node(tree, union_find, left);
            let right_membership = reset_node(tree, union_find, right);
            match (left_membership, right_membership) {
                (Some(l), Some(r)) if l == r => Some(l),
                _ => None,
            }
        }
        None => {
            let mut points = tree.point_range(node);
            let first = points.next().map(|point| union_find.find(point));
            first.filter(|&component| points.all(|point| union_find.find(point) == component))
        }
    };
    tree.statistic_mut(node).reset(membership);
    membership
}
