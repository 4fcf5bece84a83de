// One boundary function per endpoint. Nothing past this module sees the
// server's field names.

use crate::api::models::{Envelope, RawFaq, RawListing, RawSubscriber};
use crate::api::ApiError;
use crate::domain::faq::DEFAULT_CATEGORY;
use crate::domain::listing::PLACEHOLDER_IMAGE;
use crate::domain::{Faq, Listing, ListingType, Subscriber};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub fn map_listings(body: &str) -> Result<Vec<Listing>, ApiError> {
    let envelope: Envelope<RawListing> = serde_json::from_str(body)?;

    let mut out = Vec::new();
    for (i, raw) in envelope.into_vec().iter().enumerate() {
        match raw.as_object() {
            Some(obj) => out.push(map_listing(obj)),
            None => tracing::warn!(index = i, "skipping listing record that is not an object"),
        }
    }
    Ok(out)
}

pub fn map_faqs(body: &str) -> Result<Vec<Faq>, ApiError> {
    Ok(decode_records::<RawFaq>(body, "faq")?
        .into_iter()
        .map(|raw| Faq {
            id: id_string(&raw.id),
            question: raw.question.unwrap_or_default(),
            answer: raw.answer.unwrap_or_default(),
            category: raw
                .category
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        })
        .collect())
}

pub fn map_subscribers(body: &str) -> Result<Vec<Subscriber>, ApiError> {
    let mut out = Vec::new();
    for raw in decode_records::<RawSubscriber>(body, "subscriber")? {
        let Some(email) = raw.email.map(|e| e.trim().to_string()).filter(|e| !e.is_empty()) else {
            tracing::warn!(id = %id_string(&raw.id), "skipping subscriber without an email");
            continue;
        };
        out.push(Subscriber {
            id: id_string(&raw.id),
            email,
            name: raw.name.filter(|n| !n.trim().is_empty()),
            subscribed_at: raw
                .subscribed_at
                .as_deref()
                .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
                .map(|dt| dt.with_timezone(&Utc)),
        });
    }
    Ok(out)
}

/// Unwrap the envelope, then decode each record on its own. Records that
/// do not fit `T` are logged and dropped.
fn decode_records<T: DeserializeOwned>(body: &str, kind: &str) -> Result<Vec<T>, ApiError> {
    let envelope: Envelope<Value> = serde_json::from_str(body)?;

    let mut out = Vec::new();
    for (i, raw) in envelope.into_vec().into_iter().enumerate() {
        match serde_json::from_value(raw) {
            Ok(record) => out.push(record),
            Err(e) => tracing::warn!(index = i, kind, error = %e, "skipping malformed record"),
        }
    }
    Ok(out)
}

fn map_listing(obj: &Map<String, Value>) -> Listing {
    let id = first(obj, &["id", "pk"]).map(id_string).unwrap_or_default();
    let listing_type = first_str(obj, &["listing_type", "type"])
        .map(|t| ListingType::parse(&t))
        .unwrap_or(ListingType::Other);

    let slug = first_str(obj, &["slug"])
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| format!("{}-{}", listing_type.as_str(), id));

    Listing {
        title: first_str(obj, &["title", "name", "property_name"])
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "Untitled property".to_string()),
        location: first_str(obj, &["location", "city", "address"]).unwrap_or_default(),
        price: first(obj, &["price", "nightly_rate", "sale_price"])
            .map(price_text)
            .unwrap_or_default(),
        bedrooms: first_int(obj, &["bedrooms", "beds"]),
        bathrooms: first_int(obj, &["bathrooms", "baths"]),
        guests: first_int(obj, &["guests", "max_guests", "guest_capacity"]),
        listing_type,
        amenities: flatten_amenities(obj.get("amenities")),
        image: primary_image(obj),
        rating: first(obj, &["rating"]).and_then(as_f64).unwrap_or(0.0),
        review_count: first_int(obj, &["review_count", "reviews"]),
        slug,
        id,
    }
}

/// First non-null value among `keys`.
fn first<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| obj.get(*k))
        .find(|v| !v.is_null())
}

fn first_str(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    first(obj, keys).and_then(|v| match v {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn first_int(obj: &Map<String, Value>, keys: &[&str]) -> i64 {
    first(obj, keys)
        .and_then(as_f64)
        .map(|f| f.trunc() as i64)
        .unwrap_or(0)
}

fn as_f64(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn id_string(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn price_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

// amenities: ["Pool", "Wifi"]
//        or: { "outdoor": ["Pool", {"name": "Garden"}], "indoor": ["Wifi"] }
fn flatten_amenities(v: Option<&Value>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut push = |name: &str| {
        let name = name.trim();
        if !name.is_empty() && !out.iter().any(|a| a == name) {
            out.push(name.to_string());
        }
    };

    fn collect<'a>(v: &'a Value, names: &mut Vec<&'a str>) {
        match v {
            Value::String(s) => names.push(s.as_str()),
            Value::Array(items) => items.iter().for_each(|i| collect(i, names)),
            Value::Object(obj) => match obj.get("name").and_then(Value::as_str) {
                Some(name) => names.push(name),
                None => obj.values().for_each(|group| collect(group, names)),
            },
            _ => {}
        }
    }

    if let Some(v) = v {
        let mut names = Vec::new();
        collect(v, &mut names);
        names.into_iter().for_each(&mut push);
    }
    out
}

fn primary_image(obj: &Map<String, Value>) -> String {
    let url_of = |v: &Value| -> Option<String> {
        match v {
            Value::String(s) => Some(s.trim().to_string()),
            Value::Object(o) => o
                .get("url")
                .or_else(|| o.get("image"))
                .and_then(Value::as_str)
                .map(|s| s.trim().to_string()),
            _ => None,
        }
    };

    first(obj, &["image", "main_image", "cover_image"])
        .and_then(url_of)
        .or_else(|| {
            obj.get("images")
                .and_then(Value::as_array)
                .and_then(|imgs| imgs.first())
                .and_then(url_of)
        })
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
}
