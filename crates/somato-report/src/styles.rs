use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// Report color palette, injected into the template as CSS variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Palette {
    /// Accent color for labels, highlighted cells, and the chart line.
    pub primary: String,
    /// Page background.
    pub background: String,
    /// Body text and headings.
    pub text: String,
    /// Muted cells, borders, and the normal-band shading.
    pub secondary: String,
}

impl Default for Palette {
    fn default() -> Self {
        // The reference "rosa queimado" scheme.
        Self {
            primary: "#9e747a".to_string(),
            background: "#f5f1f2".to_string(),
            text: "#72464e".to_string(),
            secondary: "#e2d5d7".to_string(),
        }
    }
}

/// Immutable rendering configuration, built once and passed to the renderer.
#[derive(Debug, Clone, Default)]
pub struct ReportStyles {
    pub palette: Palette,
    /// Raw PNG bytes for the header logo; when absent the clinic name is
    /// shown as text instead.
    pub logo_png: Option<Vec<u8>>,
}

impl ReportStyles {
    pub fn with_logo(mut self, png: Vec<u8>) -> Self {
        self.logo_png = Some(png);
        self
    }

    /// The logo as an embeddable `data:` URI.
    pub fn logo_data_uri(&self) -> Option<String> {
        self.logo_png
            .as_ref()
            .map(|bytes| format!("data:image/png;base64,{}", STANDARD.encode(bytes)))
    }
}
