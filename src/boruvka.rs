use crate::data_wrappers::{CandidateEdge, MstEdge};
use crate::distance::squared_euclidean;
use crate::statistic::reset_statistics;
use crate::tree::{KdTree, SpatialTree};
use crate::union_find::UnionFind;
use crate::validation::DataValidator;
use crate::{total_weight, EmstError, EmstParams};
use log::{debug, info};
use num_traits::Float;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::ops::{Deref, DerefMut};

/// Either a tree built (and owned) by the engine or one supplied by the caller.
enum TreeHandle<'a, S> {
    Owned(S),
    Borrowed(&'a mut S),
}

impl<'a, S> Deref for TreeHandle<'a, S> {
    type Target = S;

    fn deref(&self) -> &S {
        match self {
            TreeHandle::Owned(tree) => tree,
            TreeHandle::Borrowed(tree) => &**tree,
        }
    }
}

impl<'a, S> DerefMut for TreeHandle<'a, S> {
    fn deref_mut(&mut self) -> &mut S {
        match self {
            TreeHandle::Owned(tree) => tree,
            TreeHandle::Borrowed(tree) => &mut **tree,
        }
    }
}

/// Euclidean minimum spanning tree computation using the Dual-Tree Boruvka algorithm.
/// Generic over floating point numeric types and over the spatial tree used for the search.
///
/// Each Boruvka round finds, for every component of the spanning forest, the shortest edge to a
/// point of another component, and merges along all of those edges. The nearest neighbour search
/// is a dual tree traversal of the tree against itself, pruned with bounds cached in every node.
pub struct DualTreeBoruvka<'a, T, S = KdTree<T>>
where
    T: Float,
    S: SpatialTree<T>,
{
    data: Cow<'a, [Vec<T>]>,
    tree: TreeHandle<'a, S>,
    old_from_new: Option<Vec<usize>>,
    naive: bool,
    pruning: bool,
}

impl<'a, T: Float> DualTreeBoruvka<'a, T, KdTree<T>> {
    /// Creates an engine over a copy of `data`, building a kd-tree over it.
    ///
    /// # Parameters
    /// * `data` - the points, a collection of vectors of floating point numbers. The vectors must
    ///            all be of the same dimensionality and contain only finite values.
    /// * `params` - the leaf size and naive mode configuration.
    ///
    /// # Returns
    /// * The engine, or an error if the data is malformed.
    ///
    /// # Examples
    /// ```
    ///use emst::{DualTreeBoruvka, EmstParams};
    ///
    ///let data: Vec<Vec<f64>> = vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![5.0, 1.0]];
    ///let params = EmstParams::builder().leaf_size(2).build();
    ///let mut dtb = DualTreeBoruvka::new(&data, params).unwrap();
    ///let mst = dtb.compute_mst();
    ///assert_eq!(2, mst.len());
    /// ```
    pub fn new(data: &[Vec<T>], params: EmstParams) -> Result<Self, EmstError> {
        DataValidator::new(data).validate_input_data()?;

        let mut data_copy = data.to_vec();
        let leaf_size = if params.naive {
            debug!("Naive mode, ignoring leaf size of {}", params.leaf_size);
            data_copy.len()
        } else {
            params.leaf_size
        };
        let tree = KdTree::build(&mut data_copy, leaf_size);
        let old_from_new = tree.old_from_new().to_vec();

        Ok(DualTreeBoruvka {
            data: Cow::Owned(data_copy),
            tree: TreeHandle::Owned(tree),
            old_from_new: Some(old_from_new),
            naive: params.naive,
            pruning: true,
        })
    }

    /// Creates an engine over a copy of `data` using the default parameters.
    ///
    /// # Examples
    /// ```
    ///use emst::DualTreeBoruvka;
    ///
    ///let data: Vec<Vec<f32>> = vec![vec![0.0], vec![1.0], vec![2.0], vec![10.0], vec![11.0]];
    ///let mut dtb = DualTreeBoruvka::default_params(&data).unwrap();
    ///let mst = dtb.compute_mst();
    ///assert_eq!(11.0, mst.iter().map(|edge| edge.distance).sum::<f32>());
    /// ```
    pub fn default_params(data: &[Vec<T>]) -> Result<Self, EmstError> {
        DualTreeBoruvka::new(data, EmstParams::default())
    }
}

impl<'a, T, S> DualTreeBoruvka<'a, T, S>
where
    T: Float,
    S: SpatialTree<T>,
{
    /// Creates an engine from a tree the caller already built. The dataset is not copied, and
    /// must be in the order the tree left it in: edges are reported with indices into `data` as
    /// given here, not into the order before the tree was built.
    ///
    /// # Parameters
    /// * `tree` - the pre-built tree. Its node statistics are overwritten by the computation.
    /// * `data` - the (permuted) dataset the tree was built over.
    ///
    /// # Returns
    /// * The engine, or an error if the data is malformed or does not match the tree.
    ///
    /// # Examples
    /// ```
    ///use emst::{DualTreeBoruvka, KdTree};
    ///
    ///let mut data: Vec<Vec<f64>> = vec![vec![3.0, 0.0], vec![0.0, 0.0], vec![0.0, 4.0]];
    ///let mut tree = KdTree::build(&mut data, 1);
    ///let mut dtb = DualTreeBoruvka::with_tree(&mut tree, &data).unwrap();
    ///let mst = dtb.compute_mst();
    ///assert_eq!(7.0, emst::total_weight(&mst));
    /// ```
    pub fn with_tree(tree: &'a mut S, data: &'a [Vec<T>]) -> Result<Self, EmstError> {
        DataValidator::new(data).validate_against_tree(&*tree)?;
        Ok(DualTreeBoruvka {
            data: Cow::Borrowed(data),
            tree: TreeHandle::Borrowed(tree),
            old_from_new: None,
            naive: false,
            pruning: true,
        })
    }

    /// Iteratively finds the nearest neighbour of each component until the spanning tree is
    /// complete.
    ///
    /// # Returns
    /// * The `n - 1` edges of the minimum spanning tree, sorted by ascending distance. Each edge
    ///   holds the lesser point index, the greater point index and the Euclidean distance between
    ///   the two points. Empty when there are fewer than two points.
    pub fn compute_mst(&mut self) -> Vec<MstEdge<T>> {
        let n_samples = self.data.len();
        if n_samples <= 1 {
            return Vec::new();
        }

        let mut union_find = UnionFind::new(n_samples);
        let mut candidates: Vec<Option<CandidateEdge<T>>> = vec![None; n_samples];
        let mut edges = Vec::with_capacity(n_samples - 1);

        let mut round = 0;
        while union_find.n_components() > 1 {
            round += 1;
            reset_statistics(&mut *self.tree, &mut union_find);
            candidates.fill(None);

            let mut search = NeighbourSearch {
                data: &*self.data,
                tree: &mut *self.tree,
                union_find: &mut union_find,
                candidates: &mut candidates,
                pruning: self.pruning,
            };
            let root = search.tree.root();
            if self.naive {
                let bound = search.base_case(root, root);
                search.tree.statistic_mut(root).set_max_neighbor_distance(bound);
            } else {
                search.recurse(root, root, T::zero());
            }

            let n_added = self.add_all_edges(&candidates, &mut union_find, &mut edges);
            debug!(
                "Round {round}: {} edges found so far, {} components remain",
                edges.len(),
                union_find.n_components()
            );
            // Every component has some point outside it, so a round always merges something
            // unless the tree's distance bounds are wrong
            assert!(n_added > 0, "Boruvka round {round} did not find any edges");
        }

        edges.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal));
        info!(
            "Spanning tree complete after {round} rounds: {} edges, total length {}",
            edges.len(),
            total_weight(&edges).to_f64().unwrap_or(f64::NAN)
        );
        edges
    }

    /// Unions along every candidate edge of the round. Several components may nominate edges
    /// between the same pair of components; only the first of those merges.
    fn add_all_edges(
        &self,
        candidates: &[Option<CandidateEdge<T>>],
        union_find: &mut UnionFind,
        edges: &mut Vec<MstEdge<T>>,
    ) -> usize {
        let mut n_added = 0;
        for candidate in candidates.iter().flatten() {
            if union_find.union(candidate.in_point, candidate.out_point) {
                edges.push(self.make_edge(candidate));
                n_added += 1;
            }
        }
        n_added
    }

    fn make_edge(&self, candidate: &CandidateEdge<T>) -> MstEdge<T> {
        let (a, b) = match &self.old_from_new {
            Some(old_from_new) => (
                old_from_new[candidate.in_point],
                old_from_new[candidate.out_point],
            ),
            None => (candidate.in_point, candidate.out_point),
        };
        MstEdge {
            lesser: a.min(b),
            greater: a.max(b),
            distance: candidate.squared_distance.sqrt(),
        }
    }
}

/// Borrowed state of one Boruvka round's nearest neighbour search.
struct NeighbourSearch<'b, T, S: ?Sized> {
    data: &'b [Vec<T>],
    tree: &'b mut S,
    union_find: &'b mut UnionFind,
    candidates: &'b mut [Option<CandidateEdge<T>>],
    pruning: bool,
}

impl<'b, T, S> NeighbourSearch<'b, T, S>
where
    T: Float,
    S: SpatialTree<T> + ?Sized,
{
    fn recurse(&mut self, query: usize, reference: usize, lower_bound: T) {
        if self.pruning && self.can_prune(query, reference, lower_bound) {
            return;
        }

        match (self.tree.children(query), self.tree.children(reference)) {
            (None, None) => {
                let bound = self.base_case(query, reference);
                self.tree.statistic_mut(query).set_max_neighbor_distance(bound);
            }
            (None, Some((ref_left, ref_right))) => {
                self.recurse_nearest_first(query, ref_left, ref_right);
            }
            (Some((query_left, query_right)), None) => {
                let left_dist = self.tree.min_distance(query_left, reference);
                let right_dist = self.tree.min_distance(query_right, reference);
                self.recurse(query_left, reference, left_dist);
                self.recurse(query_right, reference, right_dist);
                self.update_from_children(query, query_left, query_right);
            }
            (Some((query_left, query_right)), Some((ref_left, ref_right))) => {
                self.recurse_nearest_first(query_left, ref_left, ref_right);
                self.recurse_nearest_first(query_right, ref_left, ref_right);
                self.update_from_children(query, query_left, query_right);
            }
        }
    }

    fn can_prune(&self, query: usize, reference: usize, lower_bound: T) -> bool {
        let query_stat = self.tree.statistic(query);
        if lower_bound > query_stat.max_neighbor_distance() {
            return true;
        }
        // Both nodes lie entirely within one component, so there is no edge to find between them
        match (
            query_stat.component_membership(),
            self.tree.statistic(reference).component_membership(),
        ) {
            (Some(query_component), Some(ref_component)) => query_component == ref_component,
            _ => false,
        }
    }

    fn recurse_nearest_first(&mut self, query: usize, ref_left: usize, ref_right: usize) {
        let left_dist = self.tree.min_distance(query, ref_left);
        let right_dist = self.tree.min_distance(query, ref_right);
        if left_dist <= right_dist {
            self.recurse(query, ref_left, left_dist);
            self.recurse(query, ref_right, right_dist);
        } else {
            self.recurse(query, ref_right, right_dist);
            self.recurse(query, ref_left, left_dist);
        }
    }

    fn update_from_children(&mut self, node: usize, left: usize, right: usize) {
        let left_bound = self.tree.statistic(left).max_neighbor_distance();
        let right_bound = self.tree.statistic(right).max_neighbor_distance();
        self.tree
            .statistic_mut(node)
            .set_max_neighbor_distance(left_bound.max(right_bound));
    }

    /// Compares every query point against every reference point, keeping the best edge out of
    /// each query point's component. Returns the largest best distance over the query points'
    /// components, which is the new bound for the query node.
    fn base_case(&mut self, query: usize, reference: usize) -> T {
        let mut new_upper_bound = T::neg_infinity();
        for query_point in self.tree.point_range(query) {
            let query_component = self.union_find.find(query_point);
            for ref_point in self.tree.point_range(reference) {
                if query_point == ref_point {
                    continue;
                }
                let ref_component = self.union_find.find(ref_point);
                if query_component == ref_component {
                    continue;
                }
                let squared_distance =
                    squared_euclidean(&self.data[query_point], &self.data[ref_point]);
                let best = &mut self.candidates[query_component];
                let improves = best.map_or(true, |edge| squared_distance < edge.squared_distance);
                if improves {
                    *best = Some(CandidateEdge {
                        in_point: query_point,
                        out_point: ref_point,
                        squared_distance,
                    });
                }
            }
            let component_best = self.candidates[query_component]
                .map_or(T::infinity(), |edge| edge.squared_distance);
            new_upper_bound = new_upper_bound.max(component_best);
        }
        new_upper_bound
    }
}
