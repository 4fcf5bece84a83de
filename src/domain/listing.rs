// src/domain/listing.rs

pub const PLACEHOLDER_IMAGE: &str = "/static/img/placeholder.jpg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingType {
    Sale,
    Rent,
    Other,
}

impl ListingType {
    /// Case-insensitive; anything that is not sale/rent is `Other`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "sale" => ListingType::Sale,
            "rent" => ListingType::Rent,
            _ => ListingType::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ListingType::Sale => "sale",
            ListingType::Rent => "rent",
            ListingType::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ListingType::Sale => "For Sale",
            ListingType::Rent => "For Rent",
            ListingType::Other => "Listing",
        }
    }
}

/// A villa or property as the site sees it, after the API boundary has
/// normalized field names and shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub location: String,

    /// Price exactly as the API sent it, e.g. "$2,850,000" or "4500".
    pub price: String,

    pub bedrooms: i64,
    pub bathrooms: i64,
    pub guests: i64,

    pub listing_type: ListingType,
    pub amenities: Vec<String>,
    pub image: String,

    pub rating: f64,
    pub review_count: i64,

    /// Stable key used as the rendered card's element id.
    pub slug: String,
}

impl Listing {
    pub fn price_value(&self) -> Option<f64> {
        crate::domain::filter::parse_price(&self.price)
    }

    /// "$2,850,000" style display; falls back to the raw text when it doesn't parse.
    pub fn display_price(&self) -> String {
        match self.price_value() {
            Some(v) => format_price(v),
            None if self.price.trim().is_empty() => "Price on request".to_string(),
            None => self.price.clone(),
        }
    }
}

/// Dollar amount with thousands separators, whole dollars only.
pub fn format_price(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    if rounded < 0 {
        format!("-${out}")
    } else {
        format!("${out}")
    }
}

#[cfg(test)]
pub(crate) fn sample_listing(id: u32, listing_type: ListingType) -> Listing {
    Listing {
        id: id.to_string(),
        title: format!("Villa {id}"),
        location: "Marbella".to_string(),
        price: "1000".to_string(),
        bedrooms: 0,
        bathrooms: 0,
        guests: 0,
        listing_type,
        amenities: Vec::new(),
        image: PLACEHOLDER_IMAGE.to_string(),
        rating: 0.0,
        review_count: 0,
        slug: format!("{}-{id}", listing_type.as_str()),
    }
}
