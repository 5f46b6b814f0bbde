use num_traits::Float;

/// Squared Euclidean distance. Used throughout the search; the square root is only taken once an
/// edge is accepted into the spanning tree.
pub(crate) fn squared_euclidean<T: Float>(a: &[T], b: &[T]) -> T {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| ((*x) - (*y)) * ((*x) - (*y)))
        .fold(T::zero(), std::ops::Add::add)
}
