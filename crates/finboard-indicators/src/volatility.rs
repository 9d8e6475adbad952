//! Bollinger Bands.

use finboard_core::error::IndicatorError;
use finboard_core::traits::MultiOutputIndicator;
use statrs::statistics::Statistics;

/// Bollinger Bands lines, each aligned with the input.
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerLines {
    /// Upper band (middle + k * std dev)
    pub upper: Vec<Option<f64>>,
    /// Middle band (rolling mean)
    pub middle: Vec<Option<f64>>,
    /// Lower band (middle - k * std dev)
    pub lower: Vec<Option<f64>>,
}

/// Bollinger Bands.
///
/// Consists of a middle band (SMA) with upper and lower bands
/// at a specified number of sample standard deviations.
#[derive(Debug, Clone)]
pub struct BollingerBands {
    period: usize,
    std_dev_multiplier: f64,
    suffix: String,
    label: String,
}

impl BollingerBands {
    /// Create Bollinger Bands with custom parameters.
    pub fn with_params(period: usize, std_dev_multiplier: f64) -> Result<Self, IndicatorError> {
        if period < 2 {
            return Err(IndicatorError::InvalidConfig(format!(
                "Bollinger window must be at least 2, got {period}"
            )));
        }
        if !std_dev_multiplier.is_finite() || std_dev_multiplier < 0.0 {
            return Err(IndicatorError::InvalidConfig(format!(
                "Bollinger multiplier must be a non-negative number, got {std_dev_multiplier}"
            )));
        }
        let suffix = format!("{period}_{std_dev_multiplier}");
        Ok(Self {
            period,
            std_dev_multiplier,
            label: format!("BB_{suffix}"),
            suffix,
        })
    }

    pub fn upper_name(&self) -> String {
        format!("BB_UPPER_{}", self.suffix)
    }

    pub fn middle_name(&self) -> String {
        format!("BB_MIDDLE_{}", self.suffix)
    }

    pub fn lower_name(&self) -> String {
        format!("BB_LOWER_{}", self.suffix)
    }
}

impl MultiOutputIndicator for BollingerBands {
    type Outputs = BollingerLines;

    fn calculate(&self, data: &[f64]) -> BollingerLines {
        let len = data.len();
        let mut lines = BollingerLines {
            upper: vec![None; len],
            middle: vec![None; len],
            lower: vec![None; len],
        };

        let period_f64 = self.period as f64;
        for (i, window) in data.windows(self.period).enumerate() {
            let mean = window.iter().sum::<f64>() / period_f64;
            let band = self.std_dev_multiplier * window.iter().std_dev();

            let at = i + self.period - 1;
            lines.upper[at] = Some(mean + band);
            lines.middle[at] = Some(mean);
            lines.lower[at] = Some(mean - band);
        }

        lines
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        &self.label
    }
}
