use crate::app::App;
use crate::domain::faq::find_by_id;
use crate::errors::ResultResp;
use crate::query::parse_query;
use crate::responses::html_response;
use crate::session::{CookieSession, SessionAccessor};
use crate::templates::pages::{agent_faqs_page, FaqVm};
use astra::Request;

pub fn faqs(req: &Request, app: &App) -> ResultResp {
    let session = CookieSession::from_request(req);
    let params = parse_query(req);

    let (faqs, error) = match app.backend.fetch_faqs(&session) {
        Ok(faqs) => (faqs, None),
        Err(e) => {
            tracing::warn!(error = %e, "faq fetch failed");
            (Vec::new(), Some(e.user_message()))
        }
    };

    let selected = params.get("id").and_then(|id| find_by_id(&faqs, id));
    let category = params
        .get("category")
        .map(|c| c.trim())
        .filter(|c| !c.is_empty());

    html_response(agent_faqs_page(&FaqVm {
        faqs: &faqs,
        selected,
        category,
        error,
        role: session.role(),
    }))
}
