use serde_json::Value;
use uuid::Uuid;

use super::domain::ReceiptId;

/// Derive the identifier for a raw receipt document.
///
/// The id is a name-based (v5) UUID over [`canonical_json`], so documents that
/// differ only in key order share an id. Validity is not inspected.
pub fn receipt_id(raw: &Value) -> ReceiptId {
    let canonical = canonical_json(raw);
    Uuid::new_v5(&Uuid::NAMESPACE_DNS, canonical.as_bytes()).into()
}

/// Compact JSON with object keys sorted at every depth. Array order is kept.
pub fn canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Object(fields) => {
            let mut keys: Vec<&String> = fields.keys().collect();
            keys.sort();

            out.push('{');
            for (position, key) in keys.into_iter().enumerate() {
                if position > 0 {
                    out.push(',');
                }
                out.push_str(&Value::String(key.clone()).to_string());
                out.push(':');
                write_canonical(&fields[key.as_str()], out);
            }
            out.push('}');
        }
        Value::Array(entries) => {
            out.push('[');
            for (position, entry) in entries.iter().enumerate() {
                if position > 0 {
                    out.push(',');
                }
                write_canonical(entry, out);
            }
            out.push(']');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}
