use crate::error::{TreeError, TreeResult};

#[derive(Clone, Debug)]
pub struct TreeParams {
    pub parallel: bool,
    pub parallel_min_rows: usize,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeParams {
    pub fn new() -> Self {
        Self {
            parallel: false,
            parallel_min_rows: 64,
        }
    }

    /// Builds sibling subtrees on the rayon thread pool.
    pub fn set_parallel(&mut self, parallel: bool) {
        self.parallel = parallel;
    }

    /// Partitions smaller than `parallel_min_rows` are built sequentially even
    /// when parallel building is on.
    pub fn set_parallel_min_rows(&mut self, parallel_min_rows: usize) -> TreeResult<()> {
        if parallel_min_rows < 1 {
            return Err(TreeError::invalid(
                "The minimum number of rows for a parallel split must be greater than 0.",
            ));
        }
        self.parallel_min_rows = parallel_min_rows;
        Ok(())
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    pub fn parallel_min_rows(&self) -> usize {
        self.parallel_min_rows
    }

    pub(crate) fn parallel_for(&self, rows: usize) -> bool {
        self.parallel && rows >= self.parallel_min_rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = TreeParams::default();
        assert!(!params.parallel());
        assert_eq!(params.parallel_min_rows(), 64);
        assert!(!params.parallel_for(1000));
    }

    #[test]
    fn test_parallel_for() {
        let mut params = TreeParams::new();
        params.set_parallel(true);
        params.set_parallel_min_rows(10).unwrap();
        assert!(params.parallel_for(10));
        assert!(!params.parallel_for(9));
    }

    #[test]
    fn test_set_parallel_min_rows_zero() {
        let mut params = TreeParams::new();
        assert!(params.set_parallel_min_rows(0).is_err());
        assert_eq!(params.parallel_min_rows(), 64);
    }
}
