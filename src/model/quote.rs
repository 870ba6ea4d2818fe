use serde::{Deserialize, Serialize};

/// One USD/BRL snapshot as the upstream API emits it. The upstream encodes
/// every numeric value as a string and this type keeps that representation
/// verbatim instead of parsing to numeric types. A default instance is the
/// "zero-valued quote" of the lenient decode path.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Quote {
    pub code: String,
    pub codein: String,
    pub name: String,
    pub high: String,
    pub low: String,
    #[serde(rename = "varBid")]
    pub var_bid: String,
    #[serde(rename = "pctChange")]
    pub pct_change: String,
    pub bid: String,
    pub ask: String,
    pub timestamp: String,
    #[serde(rename = "create_date")]
    pub create_date: String,
}
