use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// ── Request payload ───────────────────────────────────────────────────────────

/// Body of `POST /recommendation/restock`.
///
/// Only a JSON object is accepted. Field values are kept as raw JSON so the
/// response can echo whatever the caller sent; `null` is treated the same as
/// a missing key and unknown keys are ignored.
#[derive(Debug, Clone, Default)]
pub struct RecommendationRequest {
    pub product_name: Option<Value>,
    pub current_stock: Option<Value>,
}

impl RecommendationRequest {
    pub fn from_map(mut map: Map<String, Value>) -> Self {
        let mut take = |key: &str| map.remove(key).filter(|v| !v.is_null());
        Self {
            product_name: take("product_name"),
            current_stock: take("current_stock"),
        }
    }
}

impl<'de> Deserialize<'de> for RecommendationRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Map::deserialize(deserializer).map(Self::from_map)
    }
}

// ── Response payload ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationResponse {
    pub product_name: Value,
    pub current_stock: Value,
    pub recommendation: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: &str) -> Result<RecommendationRequest, serde_json::Error> {
        serde_json::from_str(body)
    }

    #[test]
    fn empty_object_deserializes_to_all_none() {
        let req = parse("{}").unwrap();
        assert!(req.product_name.is_none());
        assert!(req.current_stock.is_none());
    }

    #[test]
    fn explicit_nulls_deserialize_to_none() {
        let req = parse(r#"{ "product_name": null, "current_stock": null }"#).unwrap();
        assert!(req.product_name.is_none());
        assert!(req.current_stock.is_none());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let req = parse(r#"{ "current_stock": 3, "warehouse": "north" }"#).unwrap();
        assert_eq!(req.current_stock, Some(json!(3)));
        assert!(req.product_name.is_none());
    }

    #[test]
    fn wrongly_typed_fields_are_kept_as_sent() {
        let req = parse(r#"{ "product_name": 42, "current_stock": true }"#).unwrap();
        assert_eq!(req.product_name, Some(json!(42)));
        assert_eq!(req.current_stock, Some(json!(true)));
    }

    #[test]
    fn float_stock_keeps_its_text() {
        let req = parse(r#"{ "current_stock": 7.50 }"#).unwrap();
        assert_eq!(req.current_stock.unwrap().to_string(), "7.50");
    }

    #[test]
    fn oversized_integer_keeps_every_digit() {
        let req = parse(r#"{ "current_stock": 100000000000000000000000000000 }"#).unwrap();
        assert_eq!(
            req.current_stock.unwrap().to_string(),
            "100000000000000000000000000000"
        );
    }

    #[test]
    fn arrays_are_rejected() {
        assert!(parse("[]").is_err());
        assert!(parse(r#"["Bolt", 3]"#).is_err());
    }

    #[test]
    fn scalars_are_rejected() {
        assert!(parse("null").is_err());
        assert!(parse("5").is_err());
        assert!(parse(r#""Bolt""#).is_err());
    }

    #[test]
    fn null_stock_serializes_as_null() {
        let resp = RecommendationResponse {
            product_name: json!("Widget"),
            current_stock: Value::Null,
            recommendation: "n/a".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({ "product_name": "Widget", "current_stock": null, "recommendation": "n/a" })
        );
    }
}
