//! Response schema declaration and decoding for schema-constrained calls.
//!
//! The schema plays two roles: it is serialized into the provider request
//! (`responseSchema`), and it drives validation of the returned text. Decode
//! is all-or-nothing: a missing or mistyped required field is a
//! `GatewayError::Decode`, never a partial object.

use crate::error::GatewayError;
use crate::types::{ResolutionAnalysis, RiskLevel};
use serde_json::{json, Value};

/// Field kinds the provider schema language supports here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    /// Array with string items.
    StringArray,
}

/// Declared output shape: ordered field list, all required.
#[derive(Debug, Clone)]
pub struct ResponseSchema {
    fields: Vec<(&'static str, FieldKind)>,
}

impl ResponseSchema {
    pub fn new(fields: Vec<(&'static str, FieldKind)>) -> Self {
        Self { fields }
    }

    /// Field names, in declaration order.
    pub fn required(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }

    /// Serialize to the provider's `responseSchema` wire form.
    pub fn to_wire(&self) -> Value {
        let mut properties = serde_json::Map::new();
        for (name, kind) in &self.fields {
            let decl = match kind {
                FieldKind::String => json!({ "type": "STRING" }),
                FieldKind::StringArray => {
                    json!({ "type": "ARRAY", "items": { "type": "STRING" } })
                }
            };
            properties.insert((*name).to_string(), decl);
        }
        json!({
            "type": "OBJECT",
            "properties": properties,
            "required": self.fields.iter().map(|(n, _)| *n).collect::<Vec<_>>(),
        })
    }

    /// Check the parsed value against the declared fields. Returns the first
    /// violation as a decode error.
    pub fn validate(&self, value: &Value) -> Result<(), GatewayError> {
        let obj = value
            .as_object()
            .ok_or_else(|| GatewayError::Decode("response is not a JSON object".into()))?;
        for (name, kind) in &self.fields {
            let field = obj
                .get(*name)
                .ok_or_else(|| GatewayError::Decode(format!("missing required field `{name}`")))?;
            let ok = match kind {
                FieldKind::String => field.is_string(),
                FieldKind::StringArray => field
                    .as_array()
                    .map(|a| a.iter().all(Value::is_string))
                    .unwrap_or(false),
            };
            if !ok {
                return Err(GatewayError::Decode(format!(
                    "field `{name}` does not match declared kind {kind:?}"
                )));
            }
        }
        Ok(())
    }
}

/// Schema for the resolution-analysis call, matching `ResolutionAnalysis`.
pub fn resolution_analysis_schema() -> ResponseSchema {
    ResponseSchema::new(vec![
        ("title", FieldKind::String),
        ("pros", FieldKind::StringArray),
        ("cons", FieldKind::StringArray),
        ("inquiries", FieldKind::StringArray),
        ("riskLevel", FieldKind::String),
        ("complianceNotes", FieldKind::String),
    ])
}

/// Decode the provider's structured text into a `ResolutionAnalysis`.
///
/// `riskLevel` must be exactly one of Low/Medium/High; anything else is a
/// decode failure even if the rest of the object is well-formed.
pub fn decode_resolution_analysis(text: &str) -> Result<ResolutionAnalysis, GatewayError> {
    let value: Value = serde_json::from_str(text)?;
    resolution_analysis_schema().validate(&value)?;

    let str_field = |name: &str| -> String {
        value[name].as_str().unwrap_or_default().to_string()
    };
    let vec_field = |name: &str| -> Vec<String> {
        value[name]
            .as_array()
            .map(|a| {
                a.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    };

    let risk_raw = str_field("riskLevel");
    let risk_level = RiskLevel::parse(&risk_raw)
        .ok_or_else(|| GatewayError::Decode(format!("unknown riskLevel `{risk_raw}`")))?;

    Ok(ResolutionAnalysis {
        title: str_field("title"),
        pros: vec_field("pros"),
        cons: vec_field("cons"),
        inquiries: vec_field("inquiries"),
        risk_level,
        compliance_notes: str_field("complianceNotes"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payload() -> String {
        serde_json::to_string(&json!({
            "title": "Pune EV capex",
            "pros": ["Growth", "Sustainability alignment", "Capacity"],
            "cons": ["Debt load", "Related-party land deal", "Execution risk"],
            "inquiries": ["Valuation basis?", "Debt covenants?", "Timeline?", "RPT approvals?", "Demand projections?"],
            "riskLevel": "Medium",
            "complianceNotes": "RPT requires audit committee approval."
        }))
        .unwrap()
    }

    #[test]
    fn decodes_well_formed_payload() {
        let analysis = decode_resolution_analysis(&sample_payload()).unwrap();
        assert_eq!(analysis.risk_level, RiskLevel::Medium);
        assert_eq!(analysis.inquiries.len(), 5);
        assert_eq!(analysis.title, "Pune EV capex");
    }

    #[test]
    fn rejects_unknown_risk_level() {
        let payload = sample_payload().replace("Medium", "Severe");
        let err = decode_resolution_analysis(&payload).unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));
    }

    #[test]
    fn rejects_missing_required_field() {
        let mut value: Value = serde_json::from_str(&sample_payload()).unwrap();
        value.as_object_mut().unwrap().remove("inquiries");
        let err = decode_resolution_analysis(&value.to_string()).unwrap_err();
        assert!(err.to_string().contains("inquiries"));
    }

    #[test]
    fn rejects_mistyped_field() {
        let mut value: Value = serde_json::from_str(&sample_payload()).unwrap();
        value["pros"] = json!("not an array");
        assert!(decode_resolution_analysis(&value.to_string()).is_err());
    }

    #[test]
    fn rejects_non_json_text() {
        assert!(decode_resolution_analysis("the model apologized instead").is_err());
    }

    #[test]
    fn wire_form_declares_all_fields_required() {
        let wire = resolution_analysis_schema().to_wire();
        assert_eq!(wire["type"], "OBJECT");
        assert_eq!(wire["required"].as_array().unwrap().len(), 6);
        assert_eq!(wire["properties"]["pros"]["type"], "ARRAY");
        assert_eq!(wire["properties"]["pros"]["items"]["type"], "STRING");
    }
}
