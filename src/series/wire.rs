use serde::Deserialize;

use crate::core::StocksError;
use crate::series::StockPricePoint;

#[derive(Deserialize)]
pub(crate) struct PricePointNode {
    pub(crate) date: String,
    pub(crate) open: f64,
    pub(crate) high: f64,
    pub(crate) low: f64,
    pub(crate) close: f64,
    pub(crate) volume: serde_json::Number,
}

impl PricePointNode {
    pub(crate) fn into_point(self, idx: usize) -> Result<StockPricePoint, StocksError> {
        let volume = volume_count(&self.volume).ok_or_else(|| {
            StocksError::Data(format!("invalid volume {} at index {idx}", self.volume))
        })?;
        Ok(StockPricePoint {
            date: self.date,
            open: self.open,
            high: self.high,
            low: self.low,
            close: self.close,
            volume,
        })
    }
}

// Integral floats such as `1.0e6` are accepted; anything fractional or negative is not.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn volume_count(n: &serde_json::Number) -> Option<u64> {
    if let Some(v) = n.as_u64() {
        return Some(v);
    }
    let f = n.as_f64()?;
    if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 {
        Some(f as u64)
    } else {
        None
    }
}

pub(crate) fn decode_series(body: &str) -> Result<Vec<StockPricePoint>, StocksError> {
    let nodes: Vec<PricePointNode> = serde_json::from_str(body)
        .map_err(|e| StocksError::Data(format!("json parse error: {e}")))?;

    nodes
        .into_iter()
        .enumerate()
        .map(|(idx, node)| node.into_point(idx))
        .collect()
}
