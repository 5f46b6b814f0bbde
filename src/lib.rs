//! Euclidean minimum spanning trees ("EMST") in Rust, using the Dual-Tree Boruvka algorithm.
//! Generic over floating point numeric types.
//!
//! Boruvka's algorithm grows a spanning forest in rounds: in each round every component finds the
//! shortest edge connecting it to another component, and all of those edges are added at once.
//! The number of components at least halves every round, so there are O(log n) rounds. The
//! expensive part of each round is the nearest out-of-component neighbour search, which is done
//! here as a dual tree traversal of a kd-tree against itself. Each tree node caches an upper bound
//! on the neighbour distance of the points beneath it and whether all of those points already
//! belong to one component; node pairs that cannot improve on the bound, or that lie within a
//! single component, are skipped without looking at their points.
//!
//! # Examples
//! ```
//!use emst::DualTreeBoruvka;
//!
//!let data: Vec<Vec<f64>> = vec![
//!    vec![0.0],
//!    vec![1.0],
//!    vec![2.0],
//!    vec![10.0],
//!    vec![11.0],
//!];
//!let mut dtb = DualTreeBoruvka::default_params(&data).unwrap();
//!let mst = dtb.compute_mst();
//!assert_eq!(4, mst.len());
//!// Edges come sorted by length, the longest joining the two groups of points
//!assert_eq!((2, 3, 8.0), (mst[3].lesser, mst[3].greater, mst[3].distance));
//!assert_eq!(11.0, emst::total_weight(&mst));
//! ```
//!
//! # References
//! * [March, W.B.; Ram, P.; Gray, A.G. Fast Euclidean Minimum Spanning Tree: Algorithm, Analysis, and Applications.](https://dl.acm.org/doi/10.1145/1835804.1835882)

pub use crate::boruvka::DualTreeBoruvka;
pub use crate::data_wrappers::{total_weight, MstEdge};
pub use crate::error::EmstError;
pub use crate::hyper_parameters::{EmstParams, ParamBuilder};
pub use crate::statistic::NodeStatistic;
pub use crate::tree::{HyperRectangle, KdTree, SpatialTree};

mod boruvka;
mod data_wrappers;
mod distance;
mod error;
mod hyper_parameters;
mod statistic;
mod tree;
mod union_find;
mod validation;
