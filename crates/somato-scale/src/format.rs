//! pt-BR display formatting for measurement values.

/// Rendered wherever a value is absent or unusable.
pub const PLACEHOLDER: &str = "-";

/// Fixed-decimal formatting with a comma separator; `None` renders as `-`.
pub fn format_measure(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => decimal_comma(v, decimals),
        None => PLACEHOLDER.to_string(),
    }
}

/// Formats a loosely typed payload value. JSON numbers and numeric strings
/// are coerced and formatted like [`format_measure`]; `null` renders as `-`;
/// anything else renders as its literal string form. Never fails.
pub fn format_loose(value: &serde_json::Value, decimals: usize) -> String {
    match value {
        serde_json::Value::Null => PLACEHOLDER.to_string(),
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(v) => decimal_comma(v, decimals),
            None => n.to_string(),
        },
        serde_json::Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return PLACEHOLDER.to_string();
            }
            match trimmed.replace(',', ".").parse::<f64>() {
                Ok(v) => decimal_comma(v, decimals),
                Err(_) => s.clone(),
            }
        }
        other => other.to_string(),
    }
}

fn decimal_comma(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}").replace('.', ",")
}
