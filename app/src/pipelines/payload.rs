// grubdash/src/pipelines/payload.rs

//! The request body as the validators see it.
//!
//! Bodies are wrapped as `{ "data": { ...fields } }`. A missing body, a
//! missing `data` key or a `data` value that is not an object all read as an
//! empty field map, so they fail the "missing field" rules instead of the
//! request failing to parse.

use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
  data: Map<String, Value>,
}

impl Payload {
  pub fn from_body(body: Option<Value>) -> Self {
    let data = match body {
      Some(Value::Object(mut envelope)) => match envelope.remove("data") {
        Some(Value::Object(data)) => data,
        _ => Map::new(),
      },
      _ => Map::new(),
    };
    Self { data }
  }

  pub fn from_data(data: Map<String, Value>) -> Self {
    Self { data }
  }

  pub fn get(&self, field: &str) -> Option<&Value> {
    self.data.get(field)
  }

  /// The field as a string, if it is a non-empty JSON string.
  pub fn non_empty_str(&self, field: &str) -> Option<&str> {
    match self.data.get(field) {
      Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
      _ => None,
    }
  }

  /// The body `id` when it is set and names something other than
  /// `route_id`. Falsy ids (`null`, `false`, `0`, `""`) count as unset.
  pub fn conflicting_id(&self, route_id: &str) -> Option<String> {
    let id = self.data.get("id").filter(|v| is_truthy(v))?;
    match id {
      Value::String(s) if s == route_id => None,
      Value::String(s) => Some(s.clone()),
      other => Some(other.to_string()),
    }
  }
}

/// Truthiness as JSON clients expect it: everything except `null`, `false`,
/// `0` and `""` is truthy. Empty arrays and objects are truthy.
pub fn is_truthy(value: &Value) -> bool {
  match value {
    Value::Null => false,
    Value::Bool(b) => *b,
    Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
    Value::String(s) => !s.is_empty(),
    Value::Array(_) | Value::Object(_) => true,
  }
}

/// A JSON number with no fractional part that is strictly greater than 0.
/// Integral values beyond `u64` cannot be stored and are rejected.
pub fn positive_integer(value: Option<&Value>) -> Option<u64> {
  let Some(Value::Number(n)) = value else {
    return None;
  };
  if let Some(u) = n.as_u64() {
    return (u > 0).then_some(u);
  }
  // 2.0 is an integer; 2.5 is not. Negative integers fail here too.
  let f = n.as_f64()?;
  (f > 0.0 && f.fract() == 0.0 && f < u64::MAX as f64).then_some(f as u64)
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn data_envelope_is_unwrapped() {
    let payload = Payload::from_body(Some(json!({"data": {"name": "Soup"}})));
    assert_eq!(payload.non_empty_str("name"), Some("Soup"));
  }

  #[test]
  fn missing_or_malformed_envelope_reads_as_empty() {
    for body in [None, Some(json!({})), Some(json!({"data": "nope"})), Some(json!([1, 2]))] {
      assert_eq!(Payload::from_body(body), Payload::default());
    }
  }

  #[test]
  fn non_string_or_empty_fields_are_missing() {
    let payload = Payload::from_body(Some(json!({"data": {"a": "", "b": 5, "c": null, "d": "x"}})));
    assert_eq!(payload.non_empty_str("a"), None);
    assert_eq!(payload.non_empty_str("b"), None);
    assert_eq!(payload.non_empty_str("c"), None);
    assert_eq!(payload.non_empty_str("d"), Some("x"));
  }

  #[test]
  fn positive_integer_rules() {
    assert_eq!(positive_integer(Some(&json!(3))), Some(3));
    assert_eq!(positive_integer(Some(&json!(3.0))), Some(3));
    assert_eq!(positive_integer(Some(&json!(3.5))), None);
    assert_eq!(positive_integer(Some(&json!(0))), None);
    assert_eq!(positive_integer(Some(&json!(-2))), None);
    assert_eq!(positive_integer(Some(&json!("3"))), None);
    assert_eq!(positive_integer(None), None);
  }

  #[test]
  fn positive_integer_accepts_values_past_i64() {
    let past_i64 = 9_223_372_036_854_775_808u64;
    assert_eq!(positive_integer(Some(&json!(past_i64))), Some(past_i64));
    assert_eq!(positive_integer(Some(&json!(u64::MAX))), Some(u64::MAX));
    assert_eq!(positive_integer(Some(&json!(1e19))), Some(10_000_000_000_000_000_000));
    assert_eq!(positive_integer(Some(&json!(1e20))), None);
  }

  #[test]
  fn conflicting_id_ignores_matching_and_falsy_ids() {
    let with_id = |id: Value| Payload::from_body(Some(json!({"data": {"id": id}})));
    assert_eq!(with_id(json!("7")).conflicting_id("7"), None);
    assert_eq!(with_id(json!("")).conflicting_id("7"), None);
    assert_eq!(with_id(json!(null)).conflicting_id("7"), None);
    assert_eq!(with_id(json!("8")).conflicting_id("7"), Some("8".to_string()));
    assert_eq!(with_id(json!(7)).conflicting_id("7"), Some("7".to_string()));
    assert_eq!(Payload::default().conflicting_id("7"), None);
  }
}
