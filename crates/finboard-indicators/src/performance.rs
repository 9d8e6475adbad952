//! Return and drawdown measures.
//!
//! Every output is a ratio (`-0.0532` for a 5.32% decline); turning it into
//! percentage text is left to the presentation layer.

use finboard_core::traits::Indicator;
use statrs::statistics::Statistics;

pub const DRAWDOWN: &str = "DRAWDOWN";
pub const DAILY_RETURN: &str = "DAILY_RETURN";

/// Decline from the running maximum close, `close / max - 1`.
///
/// Always `<= 0` and exactly `0` on every new running maximum.
#[derive(Debug, Clone, Default)]
pub struct Drawdown;

impl Indicator for Drawdown {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
        let mut peak = f64::NEG_INFINITY;
        data.iter()
            .map(|&close| {
                peak = peak.max(close);
                Some(close / peak - 1.0)
            })
            .collect()
    }

    fn period(&self) -> usize {
        1
    }

    fn warm_up(&self) -> usize {
        0
    }

    fn name(&self) -> &str {
        DRAWDOWN
    }
}

/// Simple one-bar return, `close[i] / close[i-1] - 1`.
///
/// No forward fill: the first bar has no return.
#[derive(Debug, Clone, Default)]
pub struct DailyReturn;

impl Indicator for DailyReturn {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
        let mut result = Vec::with_capacity(data.len());
        if data.is_empty() {
            return result;
        }
        result.push(None);
        result.extend(data.windows(2).map(|w| Some(w[1] / w[0] - 1.0)));
        result
    }

    fn period(&self) -> usize {
        2
    }

    fn warm_up(&self) -> usize {
        1
    }

    fn name(&self) -> &str {
        DAILY_RETURN
    }
}

/// Daily returns without the leading gap.
pub fn returns(closes: &[f64]) -> Vec<f64> {
    closes.windows(2).map(|w| w[1] / w[0] - 1.0).collect()
}

/// Mean daily return, `None` without at least one return.
pub fn mean_return(closes: &[f64]) -> Option<f64> {
    let daily = returns(closes);
    (!daily.is_empty()).then(|| daily.iter().mean())
}

/// Sample standard deviation of daily returns, `None` below two returns.
pub fn volatility(closes: &[f64]) -> Option<f64> {
    let daily = returns(closes);
    (daily.len() >= 2).then(|| daily.iter().std_dev())
}

/// Whole-series `mean(return) / stddev(return)`, not annualized.
///
/// `None` when the deviation is undefined or zero.
pub fn sharpe_ratio(closes: &[f64]) -> Option<f64> {
    let mean = mean_return(closes)?;
    let std_dev = volatility(closes)?;
    (std_dev > 0.0).then(|| mean / std_dev)
}

/// Most negative drawdown over the series; `0` when it only rises.
pub fn max_drawdown(closes: &[f64]) -> Option<f64> {
    Drawdown
        .calculate(closes)
        .into_iter()
        .flatten()
        .reduce(f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawdown_never_positive() {
        let closes = vec![100.0, 110.0, 99.0, 120.0, 60.0, 130.0];
        let result = Drawdown.calculate(&closes);

        assert_eq!(result.len(), closes.len());
        for value in result.iter().flatten() {
            assert!(*value <= 0.0);
        }
        // New running maxima
        assert_eq!(result[0], Some(0.0));
        assert_eq!(result[1], Some(0.0));
        assert_eq!(result[3], Some(0.0));
        assert_eq!(result[5], Some(0.0));
        // 60 / 120 - 1
        assert!((result[4].unwrap() + 0.5).abs() < 1e-12);
        assert!((max_drawdown(&closes).unwrap() + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_daily_return() {
        let result = DailyReturn.calculate(&[100.0, 110.0, 99.0]);

        assert_eq!(result[0], None);
        assert!((result[1].unwrap() - 0.1).abs() < 1e-12);
        assert!((result[2].unwrap() + 0.1).abs() < 1e-12);
        assert!(DailyReturn.calculate(&[]).is_empty());
    }

    #[test]
    fn test_sharpe_ratio() {
        // returns: +10%, -10%, +10%
        let closes = vec![100.0, 110.0, 99.0, 108.9];
        let r = returns(&closes);
        let mean = r.iter().sum::<f64>() / 3.0;
        let var = r.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / 2.0;

        let sharpe = sharpe_ratio(&closes).unwrap();
        assert!((sharpe - mean / var.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_sharpe_undefined() {
        assert_eq!(sharpe_ratio(&[100.0]), None);
        assert_eq!(sharpe_ratio(&[100.0, 101.0]), None);
        // Zero deviation
        assert_eq!(sharpe_ratio(&[100.0, 100.0, 100.0]), None);
    }

    #[test]
    fn test_max_drawdown_rising() {
        assert_eq!(max_drawdown(&[1.0, 2.0, 3.0]), Some(0.0));
        assert_eq!(max_drawdown(&[]), None);
    }
}
