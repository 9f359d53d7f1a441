//! Normal-band scaling for the horizontal bar widget.
//!
//! The bar spans display positions 0–100, but the reference band always
//! occupies the fixed 23–41 sub-range; measurements outside the band extend
//! past it. Positions are deliberately unclamped — an out-of-range value
//! overflows the bar, matching the upstream display.

use somato_core::models::reference::ReferenceRange;

use crate::error::ScaleError;

/// Display position the reference minimum maps to.
pub const BAND_POSITION_MIN: f64 = 23.0;
/// Display position the reference maximum maps to.
pub const BAND_POSITION_MAX: f64 = 41.0;
/// Position used when the band is degenerate (min == max).
pub const NEUTRAL_POSITION: f64 = 50.0;
/// Ticks rendered on the axis below each bar.
pub const DEFAULT_TICK_COUNT: usize = 11;

/// A validated `[min, max]` reference band.
///
/// Construction rejects inverted or non-finite bounds. A degenerate band
/// (`min == max`) is allowed: positions fall back to [`NEUTRAL_POSITION`]
/// and ticks to a constant sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalBand {
    min: f64,
    max: f64,
}

impl NormalBand {
    pub fn new(min: f64, max: f64) -> Result<Self, ScaleError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ScaleError::NonFiniteBand { min, max });
        }
        if min > max {
            return Err(ScaleError::InvertedBand { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn from_range(range: &ReferenceRange) -> Result<Self, ScaleError> {
        let (min, max) = range.bounds().ok_or(ScaleError::IncompleteRange)?;
        Self::new(min, max)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Linear map of `value` onto the bar: `min` lands on position 23,
    /// `max` on 41. Unclamped.
    pub fn position_percent(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return NEUTRAL_POSITION;
        }
        (value - self.min) * (BAND_POSITION_MAX - BAND_POSITION_MIN) / (self.max - self.min)
            + BAND_POSITION_MIN
    }

    /// Axis tick values: `count` ticks at half-band-width steps, laid out so
    /// tick 2 is exactly `min` and tick 4 exactly `max`. Ticks 0–1 extend
    /// below the band and 5 onward above it, giving the axis headroom
    /// proportional to the band width. Degenerate bands yield a constant
    /// sequence.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let step = (self.max - self.min) / 2.0;
        (0..count)
            .map(|i| self.min + (i as f64 - 2.0) * step)
            .collect()
    }
}
