// src/domain/filter.rs

use crate::domain::listing::{Listing, ListingType};

/// A "minimum N" constraint on beds, baths or guests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Threshold {
    #[default]
    Any,
    AtLeast(i64),
}

impl Threshold {
    /// "Any", "", "3" and "3+" are accepted. Anything else is treated as no constraint.
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("any") {
            return Threshold::Any;
        }
        s.trim_end_matches('+')
            .trim()
            .parse::<i64>()
            .map(Threshold::AtLeast)
            .unwrap_or(Threshold::Any)
    }

    pub fn allows(self, value: i64) -> bool {
        match self {
            Threshold::Any => true,
            Threshold::AtLeast(n) => value >= n,
        }
    }

    /// Form value, e.g. "3+" or "" for Any.
    pub fn form_value(self) -> String {
        match self {
            Threshold::Any => String::new(),
            Threshold::AtLeast(n) => format!("{n}+"),
        }
    }
}

/// User-entered filter constraints.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    pub name: String,
    pub min_beds: Threshold,
    pub min_baths: Threshold,
    pub min_guests: Threshold,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        *self == FilterCriteria::default()
    }

    /// Conjunction of every active criterion; short-circuits on the first failure.
    pub fn matches(&self, listing: &Listing) -> bool {
        let needle = self.name.trim();
        if !needle.is_empty()
            && !listing
                .title
                .to_lowercase()
                .contains(&needle.to_lowercase())
        {
            return false;
        }

        if !self.min_beds.allows(listing.bedrooms)
            || !self.min_baths.allows(listing.bathrooms)
            || !self.min_guests.allows(listing.guests)
        {
            return false;
        }

        // Unparseable prices are never excluded by the bounds.
        if let Some(price) = listing.price_value() {
            if self.min_price.is_some_and(|min| price < min) {
                return false;
            }
            if self.max_price.is_some_and(|max| price > max) {
                return false;
            }
        }

        true
    }
}

/// Strip everything but digits, the decimal point and a leading minus, then parse.
///
/// "$2,850,000" -> 2850000.0, "1,000" -> 1000.0, "call us" -> None.
pub fn parse_price(raw: &str) -> Option<f64> {
    let mut cleaned = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '0'..='9' | '.' => cleaned.push(ch),
            '-' if cleaned.is_empty() => cleaned.push(ch),
            _ => {}
        }
    }

    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Pure filter: an ordered subsequence of `master` that satisfies the
/// fixed type restriction (checked first) and every criterion.
pub fn filter_listings(
    master: &[Listing],
    criteria: &FilterCriteria,
    fixed_type: Option<ListingType>,
) -> Vec<Listing> {
    master
        .iter()
        .filter(|l| fixed_type.map_or(true, |t| l.listing_type == t))
        .filter(|l| criteria.matches(l))
        .cloned()
        .collect()
}

/// Filter state for one browse view.
///
/// `draft` follows the inputs as the user types; `results` only change on
/// `submit`, `reset` or a new master list.
#[derive(Debug, Clone)]
pub struct ListingFilter {
    fixed_type: Option<ListingType>,
    draft: FilterCriteria,
    applied: FilterCriteria,
    results: Vec<Listing>,
    resetting: bool,
}

impl ListingFilter {
    pub fn new(fixed_type: Option<ListingType>) -> Self {
        Self {
            fixed_type,
            draft: FilterCriteria::default(),
            applied: FilterCriteria::default(),
            results: Vec::new(),
            resetting: false,
        }
    }

    pub fn draft(&self) -> &FilterCriteria {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut FilterCriteria {
        &mut self.draft
    }

    pub fn applied(&self) -> &FilterCriteria {
        &self.applied
    }

    pub fn results(&self) -> &[Listing] {
        &self.results
    }

    pub fn is_resetting(&self) -> bool {
        self.resetting
    }

    /// Master list changed: recompute with the criteria already applied.
    pub fn master_changed<F>(&mut self, master: &[Listing], on_results: F)
    where
        F: FnOnce(&[Listing]),
    {
        self.recompute(master, on_results);
    }

    /// "Search" pressed: the draft becomes the applied criteria.
    pub fn submit<F>(&mut self, master: &[Listing], on_results: F)
    where
        F: FnOnce(&[Listing]),
    {
        self.applied = self.draft.clone();
        self.recompute(master, on_results);
    }

    /// Clear every criterion and recompute. Raises the cosmetic `resetting`
    /// flag until `settle` is called.
    pub fn reset<F>(&mut self, master: &[Listing], on_results: F)
    where
        F: FnOnce(&[Listing]),
    {
        self.draft = FilterCriteria::default();
        self.applied = FilterCriteria::default();
        self.resetting = true;
        self.recompute(master, on_results);
    }

    pub fn settle(&mut self) {
        self.resetting = false;
    }

    fn recompute<F>(&mut self, master: &[Listing], on_results: F)
    where
        F: FnOnce(&[Listing]),
    {
        self.results = filter_listings(master, &self.applied, self.fixed_type);
        tracing::debug!(
            master = master.len(),
            matched = self.results.len(),
            fixed_type = ?self.fixed_type,
            "listing filter recomputed"
        );
        on_results(&self.results);
    }
}
