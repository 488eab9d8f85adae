//! Decimal columns come back either as JSON numbers or as strings ("12.50")
//! depending on the backend serializer. Both are read into `f64`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

fn to_f64<E: serde::de::Error>(value: NumberOrString) -> Result<f64, E> {
    match value {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| E::custom(format!("invalid decimal '{}'", s))),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    to_f64(NumberOrString::deserialize(deserializer)?)
}

pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(value) => to_f64(value).map(Some),
        None => Ok(None),
    }
}
