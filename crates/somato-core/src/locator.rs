//! Typed form of the operator's input: a full viewer URL with a `#` fragment,
//! or a bare report identifier.

use crate::error::CoreError;

pub const DEFAULT_API_BASE: &str = "https://balancaapi.avanutrionline.com";

/// A validated report identifier extracted from operator input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLocator {
    id: String,
}

impl ReportLocator {
    /// Accepts either a viewer URL (`https://host/page#<id>`, where the id is
    /// everything after the first `#`) or the identifier itself.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let trimmed = input.trim();
        let id = match trimmed.split_once('#') {
            Some((_, fragment)) => fragment.trim(),
            None => trimmed,
        };
        if id.is_empty() {
            return Err(CoreError::EmptyReportId);
        }
        Ok(Self { id: id.to_string() })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The API endpoint serving this report's payload.
    pub fn api_url(&self, base: &str) -> String {
        format!("{}/Relatorio/{}", base.trim_end_matches('/'), self.id)
    }
}
