// src/query.rs
// Query strings and urlencoded bodies <-> the types the pages use.

use crate::domain::filter::{parse_price, FilterCriteria, Threshold};
use std::collections::HashMap;
use url::form_urlencoded;

/// Decode `a=1&b=two+words`. Later duplicates win.
pub fn parse_pairs(raw: &[u8]) -> HashMap<String, String> {
    form_urlencoded::parse(raw).into_owned().collect()
}

pub fn parse_query(req: &astra::Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| parse_pairs(q.as_bytes()))
        .unwrap_or_default()
}

fn param<'a>(params: &'a HashMap<String, String>, key: &str) -> &'a str {
    params.get(key).map(String::as_str).unwrap_or("")
}

/// Criteria from the browse form. Anything unparseable means "no constraint".
pub fn criteria_from_params(params: &HashMap<String, String>) -> FilterCriteria {
    FilterCriteria {
        name: param(params, "name").trim().to_string(),
        min_beds: Threshold::parse(param(params, "min_beds")),
        min_baths: Threshold::parse(param(params, "min_baths")),
        min_guests: Threshold::parse(param(params, "min_guests")),
        min_price: parse_price(param(params, "min_price")),
        max_price: parse_price(param(params, "max_price")),
    }
}

pub fn page_from_params(params: &HashMap<String, String>) -> usize {
    param(params, "page").trim().parse().unwrap_or(1)
}

/// Link to `page` of `path` that keeps the applied criteria.
pub fn page_href(path: &str, criteria: &FilterCriteria, page: usize) -> String {
    let mut ser = form_urlencoded::Serializer::new(String::new());
    if !criteria.name.is_empty() {
        ser.append_pair("name", &criteria.name);
    }
    for (key, t) in [
        ("min_beds", criteria.min_beds),
        ("min_baths", criteria.min_baths),
        ("min_guests", criteria.min_guests),
    ] {
        if t != Threshold::Any {
            ser.append_pair(key, &t.form_value());
        }
    }
    if let Some(v) = criteria.min_price {
        ser.append_pair("min_price", &v.to_string());
    }
    if let Some(v) = criteria.max_price {
        ser.append_pair("max_price", &v.to_string());
    }
    ser.append_pair("page", &page.to_string());
    format!("{path}?{}", ser.finish())
}
