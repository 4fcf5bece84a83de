use crate::api::{ApiError, Backend};
use crate::app::App;
use crate::config::AppConfig;
use crate::domain::forms::{AgentInvite, Broadcast, ContactMessage, NewsletterSignup};
use crate::domain::listing::PLACEHOLDER_IMAGE;
use crate::domain::{Faq, Listing, ListingType, Subscriber};
use crate::router::handle;
use crate::session::SessionAccessor;
use crate::templates::html_error_response;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;
use std::sync::{Arc, Mutex};

/// What the fake backend was asked to do.
#[derive(Debug, Default)]
pub struct Calls {
    pub posts: Vec<(String, serde_json::Value)>,
    pub tokens: Vec<Option<String>>,
}

#[derive(Default)]
pub struct FakeBackend {
    pub listings: Vec<Listing>,
    pub faqs: Vec<Faq>,
    pub subscribers: Vec<Subscriber>,
    /// When set, every call fails with this status.
    pub fail_status: Option<u16>,
    pub calls: Arc<Mutex<Calls>>,
}

impl FakeBackend {
    fn record(&self, session: &dyn SessionAccessor) -> Result<(), ApiError> {
        self.calls.lock().unwrap().tokens.push(session.token());
        match self.fail_status {
            Some(status) => Err(ApiError::Status {
                status,
                body: "backend down".into(),
            }),
            None => Ok(()),
        }
    }

    fn post<T: serde::Serialize>(
        &self,
        session: &dyn SessionAccessor,
        endpoint: &str,
        body: &T,
    ) -> Result<(), ApiError> {
        self.record(session)?;
        self.calls
            .lock()
            .unwrap()
            .posts
            .push((endpoint.to_string(), serde_json::to_value(body).unwrap()));
        Ok(())
    }
}

impl Backend for FakeBackend {
    fn fetch_listings(
        &self,
        session: &dyn SessionAccessor,
        listing_type: Option<ListingType>,
    ) -> Result<Vec<Listing>, ApiError> {
        self.record(session)?;
        // Like the real API, the type query is only a hint; pages filter again.
        let _ = listing_type;
        Ok(self.listings.clone())
    }

    fn fetch_faqs(&self, session: &dyn SessionAccessor) -> Result<Vec<Faq>, ApiError> {
        self.record(session)?;
        Ok(self.faqs.clone())
    }

    fn fetch_subscribers(&self, session: &dyn SessionAccessor) -> Result<Vec<Subscriber>, ApiError> {
        self.record(session)?;
        Ok(self.subscribers.clone())
    }

    fn submit_contact(&self, session: &dyn SessionAccessor, msg: &ContactMessage) -> Result<(), ApiError> {
        self.post(session, "contact/", msg)
    }

    fn subscribe(&self, session: &dyn SessionAccessor, signup: &NewsletterSignup) -> Result<(), ApiError> {
        self.post(session, "newsletter/subscribe/", signup)
    }

    fn send_broadcast(&self, session: &dyn SessionAccessor, broadcast: &Broadcast) -> Result<(), ApiError> {
        self.post(session, "newsletter/broadcast/", broadcast)
    }

    fn invite_agent(&self, session: &dyn SessionAccessor, invite: &AgentInvite) -> Result<(), ApiError> {
        self.post(session, "agents/invite/", invite)
    }
}

pub fn listing(id: u32, listing_type: ListingType, bedrooms: i64, price: &str) -> Listing {
    Listing {
        id: id.to_string(),
        title: format!("Villa {id}"),
        location: "Mallorca".into(),
        price: price.into(),
        bedrooms,
        bathrooms: 1,
        guests: bedrooms * 2,
        listing_type,
        amenities: vec!["Pool".into()],
        image: PLACEHOLDER_IMAGE.into(),
        rating: 4.5,
        review_count: 3,
        slug: format!("{}-{id}", listing_type.as_str()),
    }
}

pub fn test_app(backend: FakeBackend) -> App {
    App::new(AppConfig::default(), Box::new(backend))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, form: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

/// Run a request the way the server does, errors rendered as pages.
pub fn send(app: &App, req: Request<Body>) -> Response {
    match handle(req, app) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    }
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

/// `value` of the form input called `name`, if it is on the page.
pub fn input_value(html: &str, name: &str) -> Option<String> {
    let doc = scraper::Html::parse_document(html);
    let sel = scraper::Selector::parse(&format!("input[name=\"{name}\"]")).unwrap();
    doc.select(&sel)
        .next()
        .and_then(|el| el.value().attr("value").map(str::to_string))
}

/// Element ids of the rendered listing cards, in page order.
pub fn card_ids(html: &str) -> Vec<String> {
    let doc = scraper::Html::parse_document(html);
    let sel = scraper::Selector::parse("article.listing-card").unwrap();
    doc.select(&sel)
        .filter_map(|el| el.value().attr("id").map(str::to_string))
        .collect()
}
