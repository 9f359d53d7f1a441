use serde::{Deserialize, Serialize};

/// Excitation frequencies (kHz) the scale reports impedances for.
pub const FREQUENCIES_KHZ: [u32; 3] = [5, 50, 250];

/// Bioelectrical-impedance readings (ohms) at one excitation frequency,
/// one value per body segment. Display-only, never normalized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImpedanceReading {
    /// Frequency in kHz.
    pub frequency: Option<u32>,
    #[serde(rename = "impedanceRightArm")]
    pub impedance_right_arm: Option<f64>,
    #[serde(rename = "impedanceLeftArm")]
    pub impedance_left_arm: Option<f64>,
    #[serde(rename = "impedanceTrunk")]
    pub impedance_trunk: Option<f64>,
    #[serde(rename = "impedanceRightLeg")]
    pub impedance_right_leg: Option<f64>,
    #[serde(rename = "impedanceLeftLeg")]
    pub impedance_left_leg: Option<f64>,
}
