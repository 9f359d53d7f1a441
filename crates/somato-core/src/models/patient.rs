use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Sex code used by the scale API: 70 (`'F'`) is female, anything else male.
pub const SEX_CODE_FEMALE: i64 = 70;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Patient {
    pub nome: Option<String>,
    /// Numeric sex code, see [`SEX_CODE_FEMALE`].
    pub sexo: Option<i64>,
    #[serde(rename = "estaturaCm")]
    pub estatura_cm: Option<f64>,
    #[serde(
        rename = "dataNascimento",
        default,
        deserialize_with = "crate::dates::lenient_date::deserialize"
    )]
    pub data_nascimento: Option<Date>,
    pub email: Option<String>,
}

impl Patient {
    pub fn sex(&self) -> Option<Sex> {
        self.sexo.map(|code| {
            if code == SEX_CODE_FEMALE {
                Sex::Female
            } else {
                Sex::Male
            }
        })
    }

    /// Height in meters, when the API supplied a stature.
    pub fn height_m(&self) -> Option<f64> {
        self.estatura_cm.map(|cm| cm / 100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Female => "F",
            Sex::Male => "M",
        }
    }
}
