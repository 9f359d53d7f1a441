use serde::{Deserialize, Serialize};

/// A clinically defined `[minimo, maximo]` band considered normal for one
/// measurement kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRange {
    pub minimo: Option<f64>,
    pub maximo: Option<f64>,
}

impl ReferenceRange {
    pub fn new(minimo: f64, maximo: f64) -> Self {
        Self {
            minimo: Some(minimo),
            maximo: Some(maximo),
        }
    }

    /// Both bounds, when the API supplied both.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match (self.minimo, self.maximo) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        }
    }
}
