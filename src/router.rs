use crate::app::App;
use crate::errors::{ResultResp, ServerError};
use crate::handlers::{admin, agent, listings, site};
use crate::query::parse_pairs;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;

/// Form bodies larger than this are rejected.
const MAX_FORM_BYTES: u64 = 64 * 1024;

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => site::home(&req, app),
        ("GET", "/about") => site::about(&req),
        ("GET", "/privacy") => site::privacy(&req),
        ("GET", "/contact") => site::contact_form(&req),
        ("POST", "/contact") => site::contact_submit(req, app),
        ("POST", "/newsletter/subscribe") => site::newsletter_subscribe(req, app),

        ("GET", "/properties") => listings::browse(&req, app, &listings::ALL),
        ("GET", "/rents") => listings::browse(&req, app, &listings::RENTALS),
        ("GET", "/sales") => listings::browse(&req, app, &listings::SALES),

        ("GET", "/admin/newsletter") => admin::newsletter(&req, app),
        ("POST", "/admin/newsletter") => admin::broadcast(req, app),
        ("GET", "/admin/newsletter/subscribers.xlsx") => admin::export_subscribers(&req, app),
        ("POST", "/admin/agents/invite") => admin::invite_agent(req, app),

        ("GET", "/agent/faqs") => agent::faqs(&req, app),

        _ => Err(ServerError::NotFound),
    }
}

/// Read and decode an `application/x-www-form-urlencoded` body.
pub fn read_form(mut req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut raw = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("Could not read form: {e}")))?;

    if raw.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("Form is too large".into()));
    }
    Ok(parse_pairs(&raw))
}
