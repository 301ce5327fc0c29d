use ::std::num::NonZeroUsize;

use ::rugrid_common::{
    error::{Result, RugridError},
    rand::{self, Rng},
};

/// Two-dimensional `f64` array stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Build a matrix from explicit values.
    /// # Return
    /// - `Ok(Matrix)` when `data.len() == rows * cols`.
    /// - `Err(RugridError::IllegalArgument)` otherwise.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() == rows * cols {
            Ok(Self { rows, cols, data })
        } else {
            Err(RugridError::IllegalArgument(format!(
                "expected {} values for a {}x{} matrix, got {}",
                rows * cols,
                rows,
                cols,
                data.len()
            )))
        }
    }

    /// Build a matrix of uniform random values in `[0, 1)`.
    pub fn random(rows: usize, cols: usize) -> Self {
        let mut rng = rand::thread_rng();
        let data = (0..rows * cols).map(|_| rng.gen::<f64>()).collect();
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Split the matrix into contiguous row-slices of at most `chunk_rows`
    /// rows each. The last chunk holds the remainder when `chunk_rows` does
    /// not divide the row count. Concatenating the chunks in order
    /// reconstructs the matrix.
    pub fn row_chunks(&self, chunk_rows: NonZeroUsize) -> Vec<Chunk> {
        self.data
            .chunks(chunk_rows.get() * self.cols)
            .map(|values| Chunk {
                cols: self.cols,
                data: values.to_vec(),
            })
            .collect()
    }
}

/// A contiguous row-slice of a [Matrix], the unit of parallel work.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    cols: usize,
    data: Vec<f64>,
}

impl Chunk {
    pub fn rows(&self) -> usize {
        self.data.len() / self.cols
    }

    pub fn values(&self) -> &[f64] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::rugrid_common::anyhow::Result;

    fn chunk_rows(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).expect("non-zero")
    }

    #[test]
    fn matrix_rejects_wrong_value_count() {
        let result = Matrix::new(2, 3, vec![1.0; 5]);
        assert!(result.is_err_and(|e| e
            .to_string()
            .starts_with("Illegal Argument error: expected 6 values")));
    }

    #[test]
    fn chunks_concatenate_back_to_matrix() -> Result<()> {
        let matrix = Matrix::new(10, 4, (0..40).map(f64::from).collect())?;
        let chunks = matrix.row_chunks(chunk_rows(3));
        let rebuilt = chunks
            .iter()
            .flat_map(|chunk| chunk.values().iter().copied())
            .collect::<Vec<_>>();
        assert_eq!(rebuilt, matrix.values());
        Ok(())
    }

    #[test]
    fn chunk_count_rounds_up_on_ragged_tail() -> Result<()> {
        let matrix = Matrix::new(10, 4, vec![0.0; 40])?;
        let chunks = matrix.row_chunks(chunk_rows(3));
        // 10 rows in chunks of 3: three full chunks and one single-row tail.
        assert_eq!(chunks.len(), 4);
        assert_eq!(
            chunks.iter().map(Chunk::rows).collect::<Vec<_>>(),
            vec![3, 3, 3, 1]
        );
        Ok(())
    }

    #[test]
    fn even_split_has_no_tail() -> Result<()> {
        let matrix = Matrix::new(10, 4, vec![0.0; 40])?;
        let chunks = matrix.row_chunks(chunk_rows(5));
        assert_eq!(chunks.len(), 2);
        assert!(chunks.iter().all(|chunk| chunk.rows() == 5));
        Ok(())
    }

    #[test]
    fn random_matrix_values_are_in_unit_interval() {
        let matrix = Matrix::random(8, 8);
        assert_eq!(matrix.values().len(), 64);
        assert!(matrix
            .values()
            .iter()
            .all(|value| (0.0..1.0).contains(value)));
    }
}
