use num_traits::Float;

/// An edge of the minimum spanning tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MstEdge<T> {
    /// The smaller of the two point indices joined by this edge.
    pub lesser: usize,
    /// The larger of the two point indices joined by this edge.
    pub greater: usize,
    /// Euclidean distance between the two points.
    pub distance: T,
}

/// Best edge found so far, in the current round, leaving one component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CandidateEdge<T> {
    pub(crate) in_point: usize,
    pub(crate) out_point: usize,
    pub(crate) squared_distance: T,
}

/// Sums the lengths of a spanning tree's edges.
///
/// # Examples
/// ```
///use emst::{total_weight, MstEdge};
///
///let edges = vec![
///    MstEdge { lesser: 0, greater: 1, distance: 1.0 },
///    MstEdge { lesser: 1, greater: 2, distance: 2.5 },
///];
///assert_eq!(3.5, total_weight(&edges));
/// ```
pub fn total_weight<T: Float>(edges: &[MstEdge<T>]) -> T {
    edges
        .iter()
        .map(|edge| edge.distance)
        .fold(T::zero(), std::ops::Add::add)
}
