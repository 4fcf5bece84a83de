// client.rs
use crate::api::mapping::{map_faqs, map_listings, map_subscribers};
use crate::api::ApiError;
use crate::config::AppConfig;
use crate::domain::forms::{AgentInvite, Broadcast, ContactMessage, NewsletterSignup};
use crate::domain::{Faq, Listing, ListingType, Subscriber};
use crate::session::SessionAccessor;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Serialize;
use std::time::Instant;
use url::Url;

const USER_AGENT: &str = concat!("villa_site/", env!("CARGO_PKG_VERSION"));

/// Everything the pages need from the remote API.
pub trait Backend: Send + Sync {
    fn fetch_listings(
        &self,
        session: &dyn SessionAccessor,
        listing_type: Option<ListingType>,
    ) -> Result<Vec<Listing>, ApiError>;

    fn fetch_faqs(&self, session: &dyn SessionAccessor) -> Result<Vec<Faq>, ApiError>;

    fn fetch_subscribers(&self, session: &dyn SessionAccessor) -> Result<Vec<Subscriber>, ApiError>;

    fn submit_contact(
        &self,
        session: &dyn SessionAccessor,
        msg: &ContactMessage,
    ) -> Result<(), ApiError>;

    fn subscribe(
        &self,
        session: &dyn SessionAccessor,
        signup: &NewsletterSignup,
    ) -> Result<(), ApiError>;

    fn send_broadcast(
        &self,
        session: &dyn SessionAccessor,
        broadcast: &Broadcast,
    ) -> Result<(), ApiError>;

    fn invite_agent(
        &self,
        session: &dyn SessionAccessor,
        invite: &AgentInvite,
    ) -> Result<(), ApiError>;
}

/// Blocking JSON-over-HTTPS client. One attempt per call, no retries.
pub struct ApiClient {
    client: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(cfg: &AppConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(cfg.http_timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base: cfg.api_base_url.clone(),
        })
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path)
            .map_err(|e| ApiError::Endpoint(format!("{path}: {e}")))
    }

    fn authorized(&self, req: RequestBuilder, session: &dyn SessionAccessor) -> RequestBuilder {
        match session.token() {
            Some(token) => req.header(AUTHORIZATION, format!("Bearer {token}")),
            None => req,
        }
    }

    fn get_text(&self, url: Url, session: &dyn SessionAccessor) -> Result<String, ApiError> {
        let start = Instant::now();
        let req = self.client.get(url.clone()).header(ACCEPT, "application/json");
        let resp = self.authorized(req, session).send().map_err(|e| {
            tracing::warn!(%url, error = %e, "GET failed");
            ApiError::from(e)
        })?;

        let status = resp.status();
        let text = resp.text()?;
        tracing::info!(%url, status = status.as_u16(), elapsed = ?start.elapsed(), "GET");

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }
        Ok(text)
    }

    fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        session: &dyn SessionAccessor,
    ) -> Result<(), ApiError> {
        let url = self.endpoint(path)?;
        let start = Instant::now();
        let req = self
            .client
            .post(url.clone())
            .header(ACCEPT, "application/json")
            .json(body);
        let resp = self.authorized(req, session).send().map_err(|e| {
            tracing::warn!(%url, error = %e, "POST failed");
            ApiError::from(e)
        })?;

        let status = resp.status();
        tracing::info!(%url, status = status.as_u16(), elapsed = ?start.elapsed(), "POST");

        if !status.is_success() {
            let text = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }
        Ok(())
    }
}

impl Backend for ApiClient {
    fn fetch_listings(
        &self,
        session: &dyn SessionAccessor,
        listing_type: Option<ListingType>,
    ) -> Result<Vec<Listing>, ApiError> {
        let mut url = self.endpoint("listings/")?;
        if let Some(t) = listing_type {
            url.query_pairs_mut().append_pair("listing_type", t.as_str());
        }
        let body = self.get_text(url, session)?;
        map_listings(&body)
    }

    fn fetch_faqs(&self, session: &dyn SessionAccessor) -> Result<Vec<Faq>, ApiError> {
        let body = self.get_text(self.endpoint("faqs/")?, session)?;
        map_faqs(&body)
    }

    fn fetch_subscribers(&self, session: &dyn SessionAccessor) -> Result<Vec<Subscriber>, ApiError> {
        let body = self.get_text(self.endpoint("newsletter/subscribers/")?, session)?;
        map_subscribers(&body)
    }

    fn submit_contact(
        &self,
        session: &dyn SessionAccessor,
        msg: &ContactMessage,
    ) -> Result<(), ApiError> {
        self.post_json("contact/", msg, session)
    }

    fn subscribe(
        &self,
        session: &dyn SessionAccessor,
        signup: &NewsletterSignup,
    ) -> Result<(), ApiError> {
        self.post_json("newsletter/subscribe/", signup, session)
    }

    fn send_broadcast(
        &self,
        session: &dyn SessionAccessor,
        broadcast: &Broadcast,
    ) -> Result<(), ApiError> {
        self.post_json("newsletter/broadcast/", broadcast, session)
    }

    fn invite_agent(
        &self,
        session: &dyn SessionAccessor,
        invite: &AgentInvite,
    ) -> Result<(), ApiError> {
        self.post_json("agents/invite/", invite, session)
    }
}
