use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// One retrieved document fragment.
///
/// `content` and `document_id` are required when a result is supplied as
/// request input; the ranking fields may be omitted. Numeric fields also
/// accept numbers sent as strings (`"rank": "1"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SearchResult {
    /// The passage text.
    pub content: String,
    /// Source document identifier.
    pub document_id: String,
    #[serde(default, deserialize_with = "de_opt_i64")]
    pub rank: Option<i64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_i64")]
    pub passage_id: Option<i64>,
}

fn de_opt_i64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    match Value::deserialize(d)? {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("expected an integer, found {}", n))),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("cannot parse '{}' as an integer", s))),
        other => Err(de::Error::custom(format!(
            "expected an integer, found {}",
            other
        ))),
    }
}

fn de_opt_f64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    match Value::deserialize(d)? {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("expected a number, found {}", n))),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("cannot parse '{}' as a number", s))),
        other => Err(de::Error::custom(format!("expected a number, found {}", other))),
    }
}
