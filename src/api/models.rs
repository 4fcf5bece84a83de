use serde::Deserialize;
use serde_json::Value;

// The API is not consistent about how it wraps lists:
//
//  [ {...}, {...} ]
//  { "results": [ ... ], "count": 12, "next": null }
//  { "items": [ ... ] }

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Bare(Vec<T>),
    Results { results: Vec<T> },
    Items { items: Vec<T> },
}

impl<T> Envelope<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Envelope::Bare(v) => v,
            Envelope::Results { results } => results,
            Envelope::Items { items } => items,
        }
    }
}

/// Listing records are kept as raw JSON until mapping; field names drift
/// between endpoints (`title`/`name`, `beds`/`bedrooms`, ...).
pub type RawListing = Value;

// FAQ and subscriber records are decoded one at a time from `Value`, so a
// single malformed record is skipped rather than failing the whole list.

#[derive(Debug, Deserialize)]
pub struct RawFaq {
    #[serde(default)]
    pub id: Value,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawSubscriber {
    #[serde(default)]
    pub id: Value,
    pub email: Option<String>,
    pub name: Option<String>,
    pub subscribed_at: Option<String>,
}
