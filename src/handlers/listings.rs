use crate::app::App;
use crate::domain::{ListingBrowser, ListingType};
use crate::errors::ResultResp;
use crate::query::{criteria_from_params, page_from_params, parse_query};
use crate::responses::html_response;
use crate::session::{CookieSession, SessionAccessor};
use crate::templates::pages::{listings_page, ListingsVm};
use astra::Request;

/// Which slice of the catalogue a listings route shows.
pub struct BrowseRoute {
    pub path: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
    pub fixed_type: Option<ListingType>,
}

pub const ALL: BrowseRoute = BrowseRoute {
    path: "/properties",
    title: "All Properties",
    intro: "Every villa we rent and every home we sell, in one place.",
    fixed_type: None,
};

pub const RENTALS: BrowseRoute = BrowseRoute {
    path: "/rents",
    title: "Villas for Rent",
    intro: "Private villas for holidays and longer stays.",
    fixed_type: Some(ListingType::Rent),
};

pub const SALES: BrowseRoute = BrowseRoute {
    path: "/sales",
    title: "Properties for Sale",
    intro: "Luxury homes currently on the market.",
    fixed_type: Some(ListingType::Sale),
};

pub fn browse(req: &Request, app: &App, route: &BrowseRoute) -> ResultResp {
    let session = CookieSession::from_request(req);
    let params = parse_query(req);

    let mut browser = ListingBrowser::new(route.fixed_type, app.config.page_size);

    let ticket = browser.begin_fetch();
    let error = match app.backend.fetch_listings(&session, route.fixed_type) {
        Ok(listings) => {
            browser.receive(&ticket, listings);
            None
        }
        Err(e) => {
            tracing::warn!(path = route.path, error = %e, "listing fetch failed");
            Some(e.user_message())
        }
    };

    if params.contains_key("reset") {
        browser.reset();
    } else {
        let criteria = criteria_from_params(&params);
        browser.edit_criteria(|draft| *draft = criteria);
        browser.submit();
    }
    browser.go_to_page(page_from_params(&params));

    // The reset signal is shown on this render only.
    let just_reset = browser.filter().is_resetting();
    browser.settle();

    html_response(listings_page(&ListingsVm {
        title: route.title,
        intro: route.intro,
        path: route.path,
        browser: &browser,
        just_reset,
        error,
        role: session.role(),
    }))
}
