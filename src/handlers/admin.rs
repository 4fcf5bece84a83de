use crate::app::App;
use crate::domain::forms::{AgentInvite, Broadcast};
use crate::errors::ResultResp;
use crate::responses::html_response;
use crate::router::read_form;
use crate::session::{CookieSession, SessionAccessor};
use crate::spreadsheets::export_subscribers_xlsx;
use crate::templates::pages::{admin_newsletter_page, NewsletterVm};
use astra::Request;

// Access control lives in the API: it rejects these calls without an admin token.

fn with_subscribers(mut vm: NewsletterVm, session: &CookieSession, app: &App) -> ResultResp {
    match app.backend.fetch_subscribers(session) {
        Ok(subs) => vm.subscribers = subs,
        Err(e) => {
            tracing::warn!(error = %e, "subscriber fetch failed");
            vm.load_error = Some(e.user_message());
        }
    }
    html_response(admin_newsletter_page(&vm, session.role()))
}

pub fn newsletter(req: &Request, app: &App) -> ResultResp {
    let session = CookieSession::from_request(req);
    with_subscribers(NewsletterVm::default(), &session, app)
}

pub fn broadcast(req: Request, app: &App) -> ResultResp {
    let session = CookieSession::from_request(&req);
    let form = read_form(req)?;
    let mut vm = NewsletterVm::default();

    match Broadcast::from_form(&form) {
        Ok(broadcast) => match app.backend.send_broadcast(&session, &broadcast) {
            Ok(()) => {
                tracing::info!(subject = %broadcast.subject, "newsletter broadcast sent");
                vm.sent = Some(format!("Broadcast \"{}\" sent.", broadcast.subject));
            }
            Err(e) => {
                tracing::warn!(error = %e, "newsletter broadcast failed");
                vm.send_error = Some(e.user_message());
                vm.subject = broadcast.subject;
                vm.message = broadcast.message;
            }
        },
        Err(e) => {
            vm.send_error = Some(e.to_string());
            vm.subject = form.get("subject").cloned().unwrap_or_default();
            vm.message = form.get("message").cloned().unwrap_or_default();
        }
    }

    with_subscribers(vm, &session, app)
}

pub fn invite_agent(req: Request, app: &App) -> ResultResp {
    let session = CookieSession::from_request(&req);
    let form = read_form(req)?;
    let mut vm = NewsletterVm::default();

    match AgentInvite::from_form(&form) {
        Ok(invite) => match app.backend.invite_agent(&session, &invite) {
            Ok(()) => {
                tracing::info!(email = %invite.email, "agent invited");
                vm.sent = Some(format!("Invitation sent to {}.", invite.email));
            }
            Err(e) => {
                tracing::warn!(error = %e, "agent invite failed");
                vm.send_error = Some(e.user_message());
            }
        },
        Err(e) => vm.send_error = Some(e.to_string()),
    }

    with_subscribers(vm, &session, app)
}

pub fn export_subscribers(req: &Request, app: &App) -> ResultResp {
    let session = CookieSession::from_request(req);
    match app.backend.fetch_subscribers(&session) {
        Ok(subscribers) => {
            tracing::info!(count = subscribers.len(), "exporting subscribers");
            export_subscribers_xlsx(&subscribers)
        }
        Err(e) => {
            // No file to send: fall back to the admin page with the error inline.
            tracing::warn!(error = %e, "subscriber export failed");
            let vm = NewsletterVm {
                load_error: Some(e.user_message()),
                ..Default::default()
            };
            html_response(admin_newsletter_page(&vm, session.role()))
        }
    }
}
