use crate::domain::ListingType;
use crate::tests::utils::{
    body_string, card_ids, get, input_value, listing, send, test_app, FakeBackend,
};
use url::form_urlencoded;
use http::header::COOKIE;

fn rentals(n: u32) -> Vec<crate::domain::Listing> {
    (1..=n)
        .map(|i| listing(i, ListingType::Rent, i as i64, "4,500"))
        .collect()
}

#[test]
fn rents_page_only_shows_rentals() {
    let app = test_app(FakeBackend {
        listings: vec![
            listing(1, ListingType::Rent, 3, "4,500"),
            listing(2, ListingType::parse("Sale"), 5, "$2,850,000"),
            listing(3, ListingType::Rent, 2, "3,000"),
        ],
        ..Default::default()
    });

    let resp = send(&app, get("/rents"));
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert_eq!(card_ids(&body), vec!["rent-1", "rent-3"]);
}

#[test]
fn second_page_of_twelve() {
    let app = test_app(FakeBackend {
        listings: rentals(12),
        ..Default::default()
    });

    let body = body_string(send(&app, get("/rents?page=2")));
    assert_eq!(
        card_ids(&body),
        vec!["rent-8", "rent-9", "rent-10", "rent-11", "rent-12"]
    );
    assert!(body.contains("Showing 8–12 of 12 properties"));
}

#[test]
fn min_beds_filter_applies() {
    let app = test_app(FakeBackend {
        listings: vec![
            listing(1, ListingType::Rent, 2, "1000"),
            listing(2, ListingType::Rent, 4, "1000"),
        ],
        ..Default::default()
    });

    let body = body_string(send(&app, get("/properties?min_beds=3%2B")));
    assert_eq!(card_ids(&body), vec!["rent-2"]);
}

#[test]
fn price_above_max_is_hidden() {
    let app = test_app(FakeBackend {
        listings: vec![
            listing(1, ListingType::Sale, 5, "$2,850,000"),
            listing(2, ListingType::Sale, 3, "$9,500"),
        ],
        ..Default::default()
    });

    let body = body_string(send(
        &app,
        get("/sales?min_price=1%2C000&max_price=10%2C000"),
    ));
    assert_eq!(card_ids(&body), vec!["sale-2"]);
}

#[test]
fn resubmitting_the_rendered_form_keeps_price_bounds() {
    let app = test_app(FakeBackend {
        listings: vec![listing(1, ListingType::Rent, 3, "1001")],
        ..Default::default()
    });

    let first = body_string(send(&app, get("/rents?min_price=250.75&max_price=1000.5")));
    assert!(card_ids(&first).is_empty());

    let min = input_value(&first, "min_price").unwrap();
    let max = input_value(&first, "max_price").unwrap();
    assert_eq!((min.as_str(), max.as_str()), ("250.75", "1000.5"));

    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("min_price", &min)
        .append_pair("max_price", &max)
        .finish();
    let again = body_string(send(&app, get(&format!("/rents?{query}"))));
    assert_eq!(card_ids(&again), card_ids(&first));
    assert_eq!(input_value(&again, "max_price").as_deref(), Some("1000.5"));
}

#[test]
fn page_past_the_end_is_clamped() {
    let app = test_app(FakeBackend {
        listings: rentals(20),
        ..Default::default()
    });

    // Page 3 exists for 20 results but not for the 3 with 18+ beds.
    let body = body_string(send(&app, get("/rents?min_beds=18%2B&page=3")));
    assert_eq!(card_ids(&body), vec!["rent-18", "rent-19", "rent-20"]);
    assert!(body.contains("Showing 1–3 of 3 properties"));
}

#[test]
fn pagination_links_keep_criteria() {
    let app = test_app(FakeBackend {
        listings: rentals(20),
        ..Default::default()
    });

    let body = body_string(send(&app, get("/rents?min_beds=2%2B")));
    assert!(body.contains("href=\"/rents?min_beds=2%2B&amp;page=2\""));
}

#[test]
fn reset_clears_criteria_and_flags_form() {
    let app = test_app(FakeBackend {
        listings: rentals(3),
        ..Default::default()
    });

    let body = body_string(send(&app, get("/rents?reset=1&name=nothing")));
    assert_eq!(card_ids(&body).len(), 3);
    assert!(body.contains("filter-form is-resetting"));
    assert_eq!(input_value(&body, "name").as_deref(), Some(""));

    // The signal belongs to that one render.
    let next = body_string(send(&app, get("/rents")));
    assert!(next.contains("class=\"filter-form\""));
    assert!(!next.contains("is-resetting"));
}

#[test]
fn api_failure_is_shown_inline() {
    let app = test_app(FakeBackend {
        fail_status: Some(503),
        ..Default::default()
    });

    let resp = send(&app, get("/rents"));
    assert_eq!(resp.status(), 200, "page stays usable");
    let body = body_string(resp);
    assert!(body.contains("We couldn't load listings"));
    assert!(body.contains("status 503"));
    assert!(body.contains("class=\"filter-form\""));
}

#[test]
fn token_cookie_is_forwarded() {
    let backend = FakeBackend {
        listings: rentals(1),
        ..Default::default()
    };
    let calls = backend.calls.clone();
    let app = test_app(backend);

    let mut req = get("/rents");
    req.headers_mut()
        .insert(COOKIE, "theme=dark; accessToken=xyz".parse().unwrap());
    send(&app, req);

    let mut anon = get("/rents");
    anon.headers_mut().insert(COOKIE, "theme=dark".parse().unwrap());
    send(&app, anon);

    let tokens = &calls.lock().unwrap().tokens;
    assert_eq!(tokens, &vec![Some("xyz".to_string()), None]);
}

#[test]
fn home_shows_featured() {
    let app = test_app(FakeBackend {
        listings: rentals(9),
        ..Default::default()
    });

    // One page's worth.
    let body = body_string(send(&app, get("/")));
    assert_eq!(card_ids(&body).len(), 7);
}

#[test]
fn unknown_path_is_404() {
    let app = test_app(FakeBackend::default());
    let resp = send(&app, get("/nope"));
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));
}
