//! Moving average indicators.

use finboard_core::error::IndicatorError;
use finboard_core::traits::{require_positive, Indicator};

/// Simple Moving Average (SMA).
///
/// Calculates the arithmetic mean of the trailing N closes, window inclusive
/// of the current bar.
#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
    label: String,
}

impl Sma {
    /// Create a new SMA with the specified period.
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        require_positive("SMA", "window", period)?;
        Ok(Self {
            period,
            label: format!("SMA_{period}"),
        })
    }
}

impl Indicator for Sma {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
        let mut result = vec![None; data.len()];
        if data.len() < self.period {
            return result;
        }

        let period_f64 = self.period as f64;

        // Initial sum
        let mut sum: f64 = data[..self.period].iter().sum();
        result[self.period - 1] = Some(sum / period_f64);

        // Sliding window
        for i in self.period..data.len() {
            sum = sum - data[i - self.period] + data[i];
            result[i] = Some(sum / period_f64);
        }

        result
    }

    fn period(&self) -> usize {
        self.period
    }

    fn warm_up(&self) -> usize {
        self.period - 1
    }

    fn name(&self) -> &str {
        &self.label
    }
}

/// Exponential Moving Average (EMA).
///
/// Seeded with the first value and defined from the first bar onward; the
/// average settles after roughly `period` bars.
#[derive(Debug, Clone)]
pub struct Ema {
    period: usize,
    multiplier: f64,
    label: String,
}

impl Ema {
    /// Create a new EMA with smoothing factor `2 / (period + 1)`.
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        require_positive("EMA", "window", period)?;
        Ok(Self {
            period,
            multiplier: 2.0 / (period as f64 + 1.0),
            label: format!("EMA_{period}"),
        })
    }

    /// Raw EMA values, one per input, without warm-up masking.
    pub(crate) fn values(&self, data: &[f64]) -> Vec<f64> {
        let mut result = Vec::with_capacity(data.len());
        let Some(&seed) = data.first() else {
            return result;
        };

        let one_minus_mult = 1.0 - self.multiplier;
        let mut ema = seed;
        result.push(ema);

        for &price in &data[1..] {
            ema = price * self.multiplier + ema * one_minus_mult;
            result.push(ema);
        }

        result
    }
}

impl Indicator for Ema {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
        self.values(data).into_iter().map(Some).collect()
    }

    fn period(&self) -> usize {
        self.period
    }

    fn warm_up(&self) -> usize {
        0
    }

    fn name(&self) -> &str {
        &self.label
    }
}
