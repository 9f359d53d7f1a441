use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use super::impedance::ImpedanceReading;
use super::limb::LimbRecord;

/// One timestamped body-composition snapshot ("avaliação").
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Assessment {
    #[serde(
        default,
        deserialize_with = "crate::dates::lenient_datetime::deserialize"
    )]
    pub data: Option<DateTime>,
    /// Body weight in kg.
    pub peso: Option<f64>,
    #[serde(rename = "taxaMetabolicaBasal")]
    pub taxa_metabolica_basal: Option<f64>,
    /// Loosely typed upstream: observed as both a number and a string.
    #[serde(rename = "idadeMetabolica", default)]
    pub idade_metabolica: serde_json::Value,
    #[serde(rename = "dadosCorpo", default)]
    pub dados_corpo: BodyComposition,
    /// Five limb records in fixed order: right arm, left arm, trunk,
    /// right leg, left leg.
    #[serde(rename = "dadosMembros", default)]
    pub dados_membros: Vec<LimbRecord>,
    #[serde(rename = "dadosFrequencia", default)]
    pub dados_frequencia: Vec<ImpedanceReading>,
}

impl Assessment {
    pub fn limb(&self, index: usize) -> Option<&LimbRecord> {
        self.dados_membros.get(index)
    }

    pub fn impedance_at(&self, khz: u32) -> Option<&ImpedanceReading> {
        self.dados_frequencia
            .iter()
            .find(|r| r.frequency == Some(khz))
    }
}

/// Whole-body composition fields of one assessment, with the min/max
/// companion values the scale reports alongside each metric.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BodyComposition {
    pub bmi: Option<f64>,
    /// Fat mass, kg.
    pub fm: Option<f64>,
    /// Fat-free mass, kg.
    pub ffm: Option<f64>,
    #[serde(rename = "fmPercentual")]
    pub fm_percentual: Option<f64>,
    /// Total body water, liters.
    pub tbw: Option<f64>,
    /// Skeletal muscle mass, kg.
    pub ssm: Option<f64>,
    /// Visceral fat level. Loosely typed upstream.
    #[serde(default)]
    pub vfl: serde_json::Value,
    #[serde(rename = "indiceApendicular")]
    pub indice_apendicular: Option<f64>,

    #[serde(rename = "pesoMin")]
    pub peso_min: Option<f64>,
    #[serde(rename = "pesoMax")]
    pub peso_max: Option<f64>,
    #[serde(rename = "fmMinPercentual")]
    pub fm_min_percentual: Option<f64>,
    #[serde(rename = "fmMaxPercentual")]
    pub fm_max_percentual: Option<f64>,
    #[serde(rename = "ssmMin")]
    pub ssm_min: Option<f64>,
    #[serde(rename = "ssmMax")]
    pub ssm_max: Option<f64>,
    #[serde(rename = "tbwMin")]
    pub tbw_min: Option<f64>,
    #[serde(rename = "tbwMax")]
    pub tbw_max: Option<f64>,
}
