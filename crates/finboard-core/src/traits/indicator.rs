//! Indicator trait definitions.

use crate::error::IndicatorError;

/// Trait for technical indicators.
///
/// Indicators process price data and produce derived values aligned by
/// position with their input: output `i` describes input `i`, and positions
/// inside the warm-up period are `None`.
pub trait Indicator: Send + Sync {
    /// The output type of the indicator.
    type Output;

    /// Calculate indicator values for the given data.
    ///
    /// # Arguments
    /// * `data` - Input data (typically closes), oldest first
    ///
    /// # Returns
    /// A vector with exactly `data.len()` entries
    fn calculate(&self, data: &[f64]) -> Vec<Option<Self::Output>>;

    /// Get the window length the indicator is configured with.
    fn period(&self) -> usize;

    /// Number of leading positions that are always `None`.
    fn warm_up(&self) -> usize;

    /// Get the column name of the indicator, parameters included.
    fn name(&self) -> &str;
}

/// Multi-output indicator (e.g., Bollinger Bands, MACD).
///
/// Some indicators produce several related lines; each line is aligned with
/// the input just like [`Indicator::calculate`].
pub trait MultiOutputIndicator: Send + Sync {
    /// The output type containing multiple aligned lines.
    type Outputs;

    /// Calculate indicator lines for the given data.
    fn calculate(&self, data: &[f64]) -> Self::Outputs;

    /// Get the longest window the indicator is configured with.
    fn period(&self) -> usize;

    /// Get the name of the indicator, parameters included.
    fn name(&self) -> &str;
}

/// Reject a zero window length.
pub fn require_positive(indicator: &str, param: &str, value: usize) -> Result<(), IndicatorError> {
    if value == 0 {
        return Err(IndicatorError::InvalidConfig(format!(
            "{indicator} {param} must be greater than 0"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestIndicator {
        period: usize,
    }

    impl Indicator for TestIndicator {
        type Output = f64;

        fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
            // Trailing sum for testing
            (0..data.len())
                .map(|i| {
                    (i + 1 >= self.period)
                        .then(|| data[i + 1 - self.period..=i].iter().sum::<f64>())
                })
                .collect()
        }

        fn period(&self) -> usize {
            self.period
        }

        fn warm_up(&self) -> usize {
            self.period - 1
        }

        fn name(&self) -> &str {
            "test"
        }
    }

    #[test]
    fn test_indicator_calculate_is_aligned() {
        let indicator = TestIndicator { period: 3 };
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = indicator.calculate(&data);

        assert_eq!(result.len(), data.len());
        assert_eq!(result.iter().take_while(|v| v.is_none()).count(), indicator.warm_up());
        assert_eq!(result[2], Some(6.0)); // 1+2+3
        assert_eq!(result[4], Some(12.0)); // 3+4+5
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive("SMA", "window", 0).is_err());
        assert!(require_positive("SMA", "window", 1).is_ok());
    }
}
