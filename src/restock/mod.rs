use serde_json::{Number, Value};

use crate::models::RecommendationResponse;

/// Stock at or below this level triggers a restock recommendation.
pub const MINIMUM_STOCK: i64 = 10;
/// Quantity suggested whenever a restock is recommended.
pub const RECOMMENDED_QTY: u32 = 50;
/// Substituted when the caller sends no usable product name.
pub const DEFAULT_PRODUCT_NAME: &str = "Product";

/// Evaluates the fixed-threshold restock rule.
///
/// `product_name` falls back to [`DEFAULT_PRODUCT_NAME`] when missing or an
/// empty string. Both inputs are echoed as sent, whatever their JSON type.
/// Only a numeric stock can trigger a restock; a missing stock is not an
/// error, it lands in the "sufficient stock" branch and renders as `null`.
pub fn compute_recommendation(
    product_name: Option<&Value>,
    current_stock: Option<&Value>,
) -> RecommendationResponse {
    let product_name = match product_name {
        Some(Value::String(name)) if name.is_empty() => default_product_name(),
        Some(name) => name.clone(),
        None => default_product_name(),
    };
    let name = render(Some(&product_name));
    let stock = render(current_stock);

    let recommendation = if current_stock.is_some_and(needs_restock) {
        format!(
            "Order restock soon for {name}. Current stock: {stock}. \
             Recommended restock quantity: {RECOMMENDED_QTY} units."
        )
    } else {
        format!("{name} has sufficient stock ({stock}). No restock recommendation at this time.")
    };

    RecommendationResponse {
        product_name,
        current_stock: current_stock.cloned().unwrap_or(Value::Null),
        recommendation,
    }
}

/// Inclusive threshold check. Non-numeric values never need a restock.
pub fn needs_restock(stock: &Value) -> bool {
    match stock {
        Value::Number(n) => number_at_or_below_minimum(n),
        _ => false,
    }
}

/// Integers compare exactly; anything that only fits in a `u64` is above the
/// threshold. Everything else, oversized integers included, goes through `f64`.
fn number_at_or_below_minimum(stock: &Number) -> bool {
    if let Some(n) = stock.as_i64() {
        n <= MINIMUM_STOCK
    } else if stock.is_u64() {
        false
    } else {
        stock
            .as_f64()
            .is_some_and(|n| n <= MINIMUM_STOCK as f64)
    }
}

/// Text of a value as it appears in messages: strings without quotes,
/// everything else as JSON, absent as `null`.
pub fn render(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "null".to_string(),
    }
}

fn default_product_name() -> Value {
    Value::String(DEFAULT_PRODUCT_NAME.to_string())
}
