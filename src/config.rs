use serde::{Deserialize, Serialize};

use crate::common::ConfigError;

/// Environment variable holding the log level filter.
pub const LOG_ENV_VAR: &str = "CHOCOLATE_LOG";

/// Bar shape and spoiled piece location as entered by the user.
///
/// Coordinates are 1-indexed; the engine converts them to 0-indexed on
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarConfig {
    pub rows: usize,
    pub cols: usize,
    pub spoiled_row: usize,
    pub spoiled_col: usize,
}

impl BarConfig {
    pub const fn new(rows: usize, cols: usize, spoiled_row: usize, spoiled_col: usize) -> Self {
        Self {
            rows,
            cols,
            spoiled_row,
            spoiled_col,
        }
    }

    /// Check dimensions alone, before a spoiled location is known.
    pub fn validate_dimensions(rows: usize, cols: usize) -> Result<(), ConfigError> {
        if rows < 1 || cols < 1 {
            return Err(ConfigError::EmptyBar { rows, cols });
        }
        Ok(())
    }

    /// Check dimensions and that the spoiled piece lies inside the bar.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::validate_dimensions(self.rows, self.cols)?;
        let row_ok = (1..=self.rows).contains(&self.spoiled_row);
        let col_ok = (1..=self.cols).contains(&self.spoiled_col);
        if !row_ok || !col_ok {
            return Err(ConfigError::SpoiledOutOfRange {
                row: self.spoiled_row,
                col: self.spoiled_col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Spoiled coordinates converted to 0-indexed `(row, col)`.
    pub fn spoiled_zero_indexed(&self) -> (usize, usize) {
        (self.spoiled_row - 1, self.spoiled_col - 1)
    }
}
