use crate::app::App;
use crate::domain::forms::{ContactMessage, NewsletterSignup};
use crate::errors::ResultResp;
use crate::query::parse_query;
use crate::responses::{html_response, redirect};
use crate::router::read_form;
use crate::session::{CookieSession, SessionAccessor};
use crate::templates::pages::{
    about_page, contact_page, home_page, privacy_page, ContactVm, HomeVm,
};
use astra::Request;

pub fn home(req: &Request, app: &App) -> ResultResp {
    let session = CookieSession::from_request(req);
    let subscribed = parse_query(req).contains_key("subscribed");
    render_home(&session, app, subscribed, None)
}

fn render_home(
    session: &CookieSession,
    app: &App,
    subscribed: bool,
    subscribe_error: Option<String>,
) -> ResultResp {
    let (featured, error) = match app.backend.fetch_listings(session, None) {
        Ok(mut listings) => {
            listings.truncate(app.config.page_size);
            (listings, None)
        }
        Err(e) => {
            tracing::warn!(error = %e, "featured listings fetch failed");
            (Vec::new(), Some(e.user_message()))
        }
    };

    html_response(home_page(&HomeVm {
        featured: &featured,
        error,
        subscribed,
        subscribe_error,
        role: session.role(),
    }))
}

pub fn about(req: &Request) -> ResultResp {
    html_response(about_page(CookieSession::from_request(req).role()))
}

pub fn privacy(req: &Request) -> ResultResp {
    html_response(privacy_page(CookieSession::from_request(req).role()))
}

pub fn contact_form(req: &Request) -> ResultResp {
    html_response(contact_page(&ContactVm {
        form: ContactMessage::default(),
        error: None,
        sent: false,
        role: CookieSession::from_request(req).role(),
    }))
}

pub fn contact_submit(req: Request, app: &App) -> ResultResp {
    let session = CookieSession::from_request(&req);
    let form = ContactMessage::from_form(&read_form(req)?);

    let result = form
        .validated()
        .map_err(|e| e.to_string())
        .and_then(|msg| {
            app.backend.submit_contact(&session, &msg).map_err(|e| {
                tracing::warn!(error = %e, "contact submission failed");
                e.user_message()
            })
        });

    let (sent, error) = match result {
        Ok(()) => {
            tracing::info!("contact message sent");
            (true, None)
        }
        Err(msg) => (false, Some(msg)),
    };

    html_response(contact_page(&ContactVm {
        form,
        error,
        sent,
        role: session.role(),
    }))
}

pub fn newsletter_subscribe(req: Request, app: &App) -> ResultResp {
    let session = CookieSession::from_request(&req);
    let form = read_form(req)?;

    let result = NewsletterSignup::from_form(&form)
        .map_err(|e| e.to_string())
        .and_then(|signup| {
            app.backend.subscribe(&session, &signup).map_err(|e| {
                tracing::warn!(error = %e, "newsletter signup failed");
                e.user_message()
            })
        });

    match result {
        Ok(()) => redirect("/?subscribed=1"),
        Err(msg) => render_home(&session, app, false, Some(msg)),
    }
}
