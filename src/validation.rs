use crate::tree::SpatialTree;
use crate::EmstError;
use num_traits::Float;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DataValidator<'a, T> {
    data: &'a [Vec<T>],
}

impl<'a, T: Float> DataValidator<'a, T> {
    pub(crate) fn new(data: &'a [Vec<T>]) -> Self {
        Self { data }
    }

    pub(crate) fn validate_input_data(&self) -> Result<(), EmstError> {
        // An empty dataset is valid and simply yields an empty spanning tree
        let Some(first) = self.data.first() else {
            return Ok(());
        };
        let dims_0th = first.len();
        for (n, datapoint) in self.data.iter().enumerate() {
            if datapoint.iter().any(|element| !element.is_finite()) {
                return Err(EmstError::NonFiniteCoordinate(format!(
                    "{n}th vector contains non-finite element(s)"
                )));
            }
            let dims_nth = datapoint.len();
            if dims_nth != dims_0th {
                return Err(EmstError::WrongDimension(format!(
                    "0th data point has {dims_0th} dimensions, but {n}th has {dims_nth}"
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn validate_against_tree<S>(&self, tree: &S) -> Result<(), EmstError>
    where
        S: SpatialTree<T> + ?Sized,
    {
        self.validate_input_data()?;
        let n_samples = self.data.len();
        if tree.n_points() != n_samples {
            return Err(EmstError::MismatchedTree(format!(
                "tree holds {} points, but the dataset has {n_samples}",
                tree.n_points()
            )));
        }
        if n_samples == 0 {
            return Ok(());
        }
        let n_dims = self.data[0].len();
        if tree.n_dims() != n_dims {
            return Err(EmstError::WrongDimension(format!(
                "tree was built over {} dimensions, but the dataset has {n_dims}",
                tree.n_dims()
            )));
        }
        let root_range = tree.point_range(tree.root());
        if root_range != (0..n_samples) {
            return Err(EmstError::MismatchedTree(format!(
                "root covers points {root_range:?}, expected 0..{n_samples}"
            )));
        }
        Ok(())
    }
}
