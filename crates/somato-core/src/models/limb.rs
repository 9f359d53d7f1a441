use serde::{Deserialize, Serialize};

/// The five body segments, in the order the API lists limb records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    RightArm,
    LeftArm,
    Trunk,
    RightLeg,
    LeftLeg,
}

impl Segment {
    pub const ORDERED: [Segment; 5] = [
        Segment::RightArm,
        Segment::LeftArm,
        Segment::Trunk,
        Segment::RightLeg,
        Segment::LeftLeg,
    ];

    /// Index of this segment in `dadosMembros`.
    pub fn index(&self) -> usize {
        Self::ORDERED.iter().position(|s| s == self).unwrap_or(0)
    }
}

/// One limb record from `dadosMembros`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LimbRecord {
    #[serde(rename = "composicaoCorporal", default)]
    pub composicao_corporal: LimbComposition,
}

/// Per-segment composition sub-measurements, kg.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LimbComposition {
    /// Fat-free (lean) mass.
    pub ffm: Option<f64>,
    /// Fat mass.
    pub fm: Option<f64>,
}
