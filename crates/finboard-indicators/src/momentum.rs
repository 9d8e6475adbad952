//! Momentum indicators.

use finboard_core::error::IndicatorError;
use finboard_core::traits::{require_positive, Indicator, MultiOutputIndicator};

use crate::moving_average::Ema;

/// Relative Strength Index (RSI).
///
/// Measures the speed and magnitude of recent price changes
/// to evaluate overbought or oversold conditions.
#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
    label: String,
}

impl Rsi {
    /// Create a new RSI indicator.
    ///
    /// Common periods are 14 (default) or 9.
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        require_positive("RSI", "window", period)?;
        Ok(Self {
            period,
            label: format!("RSI_{period}"),
        })
    }

    /// Map average gain and loss onto the 0..=100 scale.
    ///
    /// A window with neither gains nor losses sits at the neutral 50.
    fn index(avg_gain: f64, avg_loss: f64) -> f64 {
        if avg_loss == 0.0 {
            if avg_gain == 0.0 {
                50.0
            } else {
                100.0
            }
        } else {
            100.0 - (100.0 / (1.0 + avg_gain / avg_loss))
        }
    }
}

impl Indicator for Rsi {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
        let mut result = vec![None; data.len()];
        if data.len() <= self.period {
            return result;
        }

        let period_f64 = self.period as f64;
        let split = |i: usize| {
            let change = data[i] - data[i - 1];
            (change.max(0.0), (-change).max(0.0))
        };

        // Initial averages are plain means of the first `period` changes
        let (mut avg_gain, mut avg_loss) = (1..=self.period)
            .map(&split)
            .fold((0.0_f64, 0.0_f64), |(g, l), (gain, loss)| (g + gain, l + loss));
        avg_gain /= period_f64;
        avg_loss /= period_f64;
        result[self.period] = Some(Self::index(avg_gain, avg_loss));

        // Wilder's smoothing: avg = (prev_avg * (period-1) + value) / period
        for i in (self.period + 1)..data.len() {
            let (gain, loss) = split(i);
            avg_gain = (avg_gain * (period_f64 - 1.0) + gain) / period_f64;
            avg_loss = (avg_loss * (period_f64 - 1.0) + loss) / period_f64;
            result[i] = Some(Self::index(avg_gain, avg_loss));
        }

        result
    }

    fn period(&self) -> usize {
        self.period
    }

    fn warm_up(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        &self.label
    }
}

/// MACD lines, each aligned with the input.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdLines {
    /// MACD line (fast EMA - slow EMA)
    pub macd: Vec<Option<f64>>,
    /// Signal line (EMA of MACD)
    pub signal: Vec<Option<f64>>,
    /// Histogram (MACD - Signal)
    pub histogram: Vec<Option<f64>>,
}

/// MACD indicator.
///
/// Uses two EMAs to identify trend direction and momentum. The MACD line is
/// reported once the slow window has filled; the signal line is seeded with
/// the first reported MACD value and reported once its own window has filled.
#[derive(Debug, Clone)]
pub struct Macd {
    fast: Ema,
    slow: Ema,
    signal: Ema,
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
    label: String,
}

impl Macd {
    /// Create a MACD with custom periods.
    pub fn with_periods(fast: usize, slow: usize, signal: usize) -> Result<Self, IndicatorError> {
        require_positive("MACD", "fast window", fast)?;
        require_positive("MACD", "slow window", slow)?;
        require_positive("MACD", "signal window", signal)?;
        if fast >= slow {
            return Err(IndicatorError::InvalidConfig(format!(
                "MACD fast window ({fast}) must be less than slow window ({slow})"
            )));
        }

        Ok(Self {
            fast: Ema::new(fast)?,
            slow: Ema::new(slow)?,
            signal: Ema::new(signal)?,
            fast_period: fast,
            slow_period: slow,
            signal_period: signal,
            label: format!("MACD_{fast}_{slow}_{signal}"),
        })
    }

    pub fn signal_name(&self) -> String {
        format!(
            "MACD_SIGNAL_{}_{}_{}",
            self.fast_period, self.slow_period, self.signal_period
        )
    }

    pub fn histogram_name(&self) -> String {
        format!(
            "MACD_HIST_{}_{}_{}",
            self.fast_period, self.slow_period, self.signal_period
        )
    }

    /// Leading `None` count of the MACD line.
    pub fn line_warm_up(&self) -> usize {
        self.slow_period - 1
    }

    /// Leading `None` count of the signal line and histogram.
    pub fn signal_warm_up(&self) -> usize {
        self.slow_period + self.signal_period - 2
    }
}

impl MultiOutputIndicator for Macd {
    type Outputs = MacdLines;

    fn calculate(&self, data: &[f64]) -> MacdLines {
        let len = data.len();
        let mut lines = MacdLines {
            macd: vec![None; len],
            signal: vec![None; len],
            histogram: vec![None; len],
        };

        let start = self.line_warm_up();
        if len <= start {
            return lines;
        }

        let fast_ema = self.fast.values(data);
        let slow_ema = self.slow.values(data);
        let macd_line: Vec<f64> = fast_ema[start..]
            .iter()
            .zip(&slow_ema[start..])
            .map(|(f, s)| f - s)
            .collect();
        let signal_line = self.signal.values(&macd_line);

        let signal_start = self.signal_warm_up();
        for (offset, (&macd, &signal)) in macd_line.iter().zip(&signal_line).enumerate() {
            let i = start + offset;
            lines.macd[i] = Some(macd);
            if i >= signal_start {
                lines.signal[i] = Some(signal);
                lines.histogram[i] = Some(macd - signal);
            }
        }

        lines
    }

    fn period(&self) -> usize {
        self.slow_period.max(self.signal_period)
    }

    fn name(&self) -> &str {
        &self.label
    }
}
