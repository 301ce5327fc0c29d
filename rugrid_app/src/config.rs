use ::std::num::NonZeroUsize;

use ::rugrid_common::serde::Deserialize;

/// Configuration for the rugrid demo application.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
#[serde(crate = "rugrid_common::serde")]
pub struct AppConfig {
    /// Number of rows in the generated matrix
    pub rows: NonZeroUsize,
    /// Number of columns in the generated matrix
    pub cols: NonZeroUsize,
    /// Rows per chunk; the last chunk may be smaller
    pub chunk_rows: NonZeroUsize,
    /// Time in milliseconds each task sleeps to simulate work
    pub simulate_work_millis: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rows: NonZeroUsize::new(1000).expect("non-zero"),
            cols: NonZeroUsize::new(1000).expect("non-zero"),
            chunk_rows: NonZeroUsize::new(100).expect("non-zero"),
            simulate_work_millis: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::rugrid_common::{
        anyhow::Result,
        serde_json::{from_value, json},
    };

    #[test]
    fn missing_field_rows() {
        let config = json!(
            {
                "cols": 4,
                "chunk_rows": 2,
                "simulate_work_millis": 0
            }
        );
        let result = from_value::<AppConfig>(config);
        assert_eq!(result.unwrap_err().to_string(), "missing field `rows`");
    }

    #[test]
    fn chunk_rows_cannot_be_zero() {
        let config = json!(
            {
                "rows": 10,
                "cols": 4,
                "chunk_rows": 0,
                "simulate_work_millis": 0
            }
        );
        let result = from_value::<AppConfig>(config);
        assert_eq!(
            result.unwrap_err().to_string(),
            "invalid value: integer `0`, expected a nonzero usize"
        );
    }

    #[test]
    fn deny_unknown_fields() {
        let config = json!(
            {
                "rows": 10,
                "cols": 4,
                "chunk_rows": 2,
                "simulate_work_millis": 0,
                "unknown_field": "unknown"
            }
        );
        let result = from_value::<AppConfig>(config);
        assert_eq!(
            result.unwrap_err().to_string(),
            "unknown field `unknown_field`, expected one of `rows`, `cols`, `chunk_rows`, `simulate_work_millis`"
        );
    }

    #[test]
    fn deserialize_app_config() -> Result<()> {
        let config = json!(
            {
                "rows": 10,
                "cols": 4,
                "chunk_rows": 2,
                "simulate_work_millis": 5
            }
        );
        let result = from_value::<AppConfig>(config)?;
        assert_eq!(
            result,
            AppConfig {
                rows: NonZeroUsize::new(10).expect("non-zero"),
                cols: NonZeroUsize::new(4).expect("non-zero"),
                chunk_rows: NonZeroUsize::new(2).expect("non-zero"),
                simulate_work_millis: 5
            }
        );
        Ok(())
    }

    #[test]
    fn default_config_matches_sample_dimensions() {
        let config = AppConfig::default();
        assert_eq!(config.rows.get(), 1000);
        assert_eq!(config.cols.get(), 1000);
        assert_eq!(config.chunk_rows.get(), 100);
        assert_eq!(config.simulate_work_millis, 100);
    }
}
