use num_traits::Float;

/// Axis aligned bounding box, stored as one `[lo, hi]` interval per dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct HyperRectangle<T> {
    bounds: Vec<(T, T)>,
}

impl<T: Float> HyperRectangle<T> {
    /// The smallest box containing every point. Empty input gives an inverted (empty) box.
    pub fn from_points(points: &[Vec<T>], n_dims: usize) -> Self {
        let mut bounds = vec![(T::infinity(), T::neg_infinity()); n_dims];
        for point in points {
            for ((lo, hi), &x) in bounds.iter_mut().zip(point.iter()) {
                *lo = lo.min(x);
                *hi = hi.max(x);
            }
        }
        HyperRectangle { bounds }
    }

    pub fn n_dims(&self) -> usize {
        self.bounds.len()
    }

    pub fn lo(&self, dim: usize) -> T {
        self.bounds[dim].0
    }

    pub fn hi(&self, dim: usize) -> T {
        self.bounds[dim].1
    }

    /// The dimension with the largest extent and that extent. Ties go to the lowest dimension.
    pub(crate) fn widest_dimension(&self) -> Option<(usize, T)> {
        self.bounds
            .iter()
            .map(|&(lo, hi)| hi - lo)
            .enumerate()
            .fold(None, |widest, (dim, width)| match widest {
                Some((_, max_width)) if max_width >= width => widest,
                _ => Some((dim, width)),
            })
    }

    pub(crate) fn midpoint(&self, dim: usize) -> T {
        let (lo, hi) = self.bounds[dim];
        lo + (hi - lo) / (T::one() + T::one())
    }

    /// Squared distance between the closest pair of points of the two boxes. Zero when they
    /// overlap.
    pub fn min_distance(&self, other: &HyperRectangle<T>) -> T {
        self.bounds
            .iter()
            .zip(other.bounds.iter())
            .map(|(&(a_lo, a_hi), &(b_lo, b_hi))| {
                let gap = (a_lo - b_hi).max(b_lo - a_hi).max(T::zero());
                gap * gap
            })
            .fold(T::zero(), std::ops::Add::add)
    }

    pub fn contains(&self, other: &HyperRectangle<T>) -> bool {
        self.bounds
            .iter()
            .zip(other.bounds.iter())
            .all(|(&(a_lo, a_hi), &(b_lo, b_hi))| a_lo <= b_lo && b_hi <= a_hi)
    }

    pub fn contains_point(&self, point: &[T]) -> bool {
        self.bounds
            .iter()
            .zip(point.iter())
            .all(|(&(lo, hi), &x)| lo <= x && x <= hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(points: &[[f64; 2]]) -> HyperRectangle<f64> {
        let points: Vec<Vec<f64>> = points.iter().map(|p| p.to_vec()).collect();
        HyperRectangle::from_points(&points, 2)
    }

    #[test]
    fn bounds_of_points() {
        let r = rect(&[[1.0, 5.0], [3.0, -1.0], [2.0, 2.0]]);
        assert_eq!((1.0, 3.0), (r.lo(0), r.hi(0)));
        assert_eq!((-1.0, 5.0), (r.lo(1), r.hi(1)));
        assert_eq!(Some((1, 6.0)), r.widest_dimension());
        assert_eq!(2.0, r.midpoint(1));
        assert!(r.contains_point(&[2.0, 0.0]));
        assert!(!r.contains_point(&[0.0, 0.0]));
    }

    #[test]
    fn min_distance_between_boxes() {
        let a = rect(&[[0.0, 0.0], [1.0, 1.0]]);
        let b = rect(&[[4.0, 5.0], [6.0, 6.0]]);
        // gaps of 3 and 4
        assert_eq!(25.0, a.min_distance(&b));
        assert_eq!(25.0, b.min_distance(&a));

        let overlapping = rect(&[[0.5, -3.0], [0.7, 0.5]]);
        assert_eq!(0.0, a.min_distance(&overlapping));
        // gap only along the second dimension
        let above = rect(&[[0.5, 3.0], [2.0, 4.0]]);
        assert_eq!(4.0, a.min_distance(&above));
    }

    #[test]
    fn containment() {
        let outer = rect(&[[0.0, 0.0], [10.0, 10.0]]);
        let inner = rect(&[[1.0, 2.0], [3.0, 4.0]]);
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        assert!(outer.contains(&outer));
    }

    #[test]
    fn degenerate_box_has_zero_width() {
        let r = rect(&[[2.0, 2.0], [2.0, 2.0]]);
        assert_eq!(Some((0, 0.0)), r.widest_dimension());
        assert_eq!(None, HyperRectangle::<f64>::from_points(&[], 0).widest_dimension());
    }
}
