//! TypeScript source emitter
//!
//! Renders the assembled record as a TypeScript data module for direct
//! inclusion in the consuming web application. Output is deterministic:
//! field order follows the record's declaration order and the only varying
//! text is the generation timestamp in the comment header.

use serde_json::Value;

use crate::error::{ConvertError, Result};
use crate::model::GdtAnalysis;

/// Render the record as a TypeScript module exporting `{var_name}Analysis`
pub fn to_typescript(analysis: &GdtAnalysis, var_name: &str, generated_at: &str) -> Result<String> {
    let value = serde_json::to_value(analysis).map_err(ConvertError::Render)?;
    Ok(format!(
        "import {{ GDTAnalysis }} from '@/lib/types';\n\n\
         /**\n\
         \x20* {} GDT Analysis Data\n\
         \x20* Generated: {}\n\
         \x20* Source: GDT output folder\n\
         \x20*/\n\
         export const {}Analysis: GDTAnalysis = {};\n",
        analysis.brand.name,
        generated_at,
        var_name,
        format_value(&value, 0),
    ))
}

/// Default export variable name: the brand slug with separators removed
pub fn default_var_name(brand_id: &str) -> String {
    brand_id.replace('-', "")
}

fn format_value(value: &Value, indent: usize) -> String {
    let spaces = "  ".repeat(indent);
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("'{}'", escape(s)),
        Value::Array(items) => {
            if items.is_empty() {
                return "[]".to_string();
            }
            let formatted: Vec<String> =
                items.iter().map(|item| format_value(item, indent + 1)).collect();
            // Short all-string lists stay on one line
            if items.len() <= 3 && items.iter().all(Value::is_string) {
                return format!("[{}]", formatted.join(", "));
            }
            let body = formatted
                .iter()
                .map(|item| format!("{}  {}", spaces, item))
                .collect::<Vec<_>>()
                .join(",\n");
            format!("[\n{}\n{}]", body, spaces)
        }
        Value::Object(map) => {
            if map.is_empty() {
                return "{}".to_string();
            }
            let body = map
                .iter()
                .map(|(key, val)| format!("{}  {}: {}", spaces, key, format_value(val, indent + 1)))
                .collect::<Vec<_>>()
                .join(",\n");
            format!("{{\n{}\n{}}}", body, spaces)
        }
    }
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}
