use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::assessment::Assessment;
use super::patient::Patient;
use super::reference::ReferenceRange;
use crate::error::CoreError;

/// The full JSON document served by `GET {base}/Relatorio/{id}`.
///
/// Unknown fields are ignored; every field the API has been observed to omit
/// is `Option` or defaults to empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportPayload {
    #[serde(default)]
    pub user: Provider,
    #[serde(default)]
    pub paciente: Patient,
    /// Assessments ordered oldest to newest; the current one is the last.
    #[serde(default)]
    pub avaliacoes: Vec<Assessment>,
    /// Clinical reference bands keyed by metric name.
    #[serde(default)]
    pub normalidades: BTreeMap<String, ReferenceRange>,
}

impl ReportPayload {
    pub fn from_json(body: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(body)?)
    }

    /// The most recent assessment. A payload with none cannot be rendered.
    pub fn current_assessment(&self) -> Result<&Assessment, CoreError> {
        self.avaliacoes.last().ok_or(CoreError::NoAssessments)
    }

    pub fn reference_range(&self, metric: &str) -> Option<&ReferenceRange> {
        self.normalidades.get(metric)
    }
}

/// Clinic/provider identity shown in the report header.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Provider {
    #[serde(rename = "clinicaNome")]
    pub clinica_nome: Option<String>,
    #[serde(rename = "nome")]
    pub nome: Option<String>,
    #[serde(rename = "email")]
    pub email: Option<String>,
}

impl Provider {
    /// Display name for the header, with a generic fallback.
    pub fn display_name(&self) -> &str {
        self.clinica_nome
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.nome.as_deref())
            .unwrap_or("Minha Clínica")
    }
}
