use log::warn;

// Defaults for parameters
const LEAF_SIZE_DEFAULT: usize = 1;
const NAIVE_DEFAULT: bool = false;

// Valid minimums/left bounds of parameters
const LEAF_SIZE_MINIMUM: usize = 1;

/// A wrapper around the parameters of the Dual-Tree Boruvka computation.
/// Only use if you want to tune them. Otherwise use `DualTreeBoruvka::default_params()` to
/// instantiate the engine with default parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct EmstParams {
    pub(crate) leaf_size: usize,
    pub(crate) naive: bool,
}

/// Builder object to set custom parameters.
pub struct ParamBuilder {
    leaf_size: Option<usize>,
    naive: Option<bool>,
}

impl EmstParams {
    /// Enters the builder pattern, allowing custom parameters to be set using various setter
    /// methods.
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn builder() -> ParamBuilder {
        ParamBuilder {
            leaf_size: None,
            naive: None,
        }
    }

    pub fn leaf_size(&self) -> usize {
        self.leaf_size
    }

    pub fn naive(&self) -> bool {
        self.naive
    }
}

impl Default for EmstParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ParamBuilder {
    /// Sets the leaf size - the maximum number of points held by a leaf of the kd-tree built
    /// over the data. Small leaves prune more aggressively; large leaves spend more time in
    /// brute force comparisons. Defaults to 1.
    ///
    /// # Parameters
    /// * leaf_size - the maximum number of points per leaf
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn leaf_size(mut self, leaf_size: usize) -> ParamBuilder {
        let valid_leaf_size =
            ParamBuilder::validate_input_left_bound(leaf_size, LEAF_SIZE_MINIMUM, "leaf_size");
        self.leaf_size = Some(valid_leaf_size);
        self
    }

    /// Sets whether to run in naive mode. Naive mode skips the tree search entirely and compares
    /// every pair of points in each Boruvka round, which is O(n²) per round. Mostly useful as a
    /// reference for checking results. The leaf size is ignored in naive mode.
    /// Defaults to false.
    ///
    /// # Parameters
    /// * naive - whether to use the brute force search
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn naive(mut self, naive: bool) -> ParamBuilder {
        self.naive = Some(naive);
        self
    }

    /// Finishes the building of the parameter configuration.
    ///
    /// # Returns
    /// * The completed parameter configuration.
    pub fn build(self) -> EmstParams {
        EmstParams {
            leaf_size: self.leaf_size.unwrap_or(LEAF_SIZE_DEFAULT),
            naive: self.naive.unwrap_or(NAIVE_DEFAULT),
        }
    }

    fn validate_input_left_bound(input_param: usize, left_bound: usize, param: &str) -> usize {
        if input_param < left_bound {
            warn!("{param} ({input_param}) cannot be lower than {left_bound}. Set to {left_bound}.");
            left_bound
        } else {
            input_param
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = EmstParams::default();
        assert_eq!(1, params.leaf_size());
        assert!(!params.naive());
    }

    #[test]
    fn builder_sets_values() {
        let params = EmstParams::builder().leaf_size(16).naive(true).build();
        assert_eq!(16, params.leaf_size());
        assert!(params.naive());
    }

    #[test]
    fn leaf_size_is_clamped() {
        let params = EmstParams::builder().leaf_size(0).build();
        assert_eq!(1, params.leaf_size());
    }
}
