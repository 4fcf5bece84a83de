use crate::domain::filter::{FilterCriteria, Threshold};
use maud::{html, Markup};

fn threshold_select(name: &str, label: &str, max: i64, current: Threshold) -> Markup {
    html! {
        label for=(name) { (label) }
        select id=(name) name=(name) {
            option value="Any" selected[current == Threshold::Any] { "Any" }
            @for n in 1..=max {
                option value=(format!("{n}+")) selected[current == Threshold::AtLeast(n)] { (n) "+" }
            }
        }
    }
}

// Raw bound, not the display format: re-submitting the form must not move it.
fn price_value(v: Option<f64>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

/// GET form so the criteria live in the URL; "Search" submits them.
/// `just_reset` adds the one-shot `is-resetting` animation class.
pub fn filter_form(action: &str, criteria: &FilterCriteria, just_reset: bool) -> Markup {
    html! {
        form
            method="get"
            action=(action)
            class=(if just_reset { "filter-form is-resetting" } else { "filter-form" })
        {
            label for="name" { "Name" }
            input type="search" id="name" name="name" value=(criteria.name) placeholder="Villa name";

            (threshold_select("min_beds", "Beds", 8, criteria.min_beds))
            (threshold_select("min_baths", "Baths", 6, criteria.min_baths))
            (threshold_select("min_guests", "Guests", 16, criteria.min_guests))

            label for="min_price" { "Min price" }
            input type="text" id="min_price" name="min_price" inputmode="numeric" value=(price_value(criteria.min_price));
            label for="max_price" { "Max price" }
            input type="text" id="max_price" name="max_price" inputmode="numeric" value=(price_value(criteria.max_price));

            button type="submit" class="primary" { "Search" }
            a class="reset" href=(format!("{action}?reset=1")) { "Reset" }
        }
    }
}
