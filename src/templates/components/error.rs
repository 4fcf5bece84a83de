use crate::errors::ServerError;
use crate::session::Role;
use crate::templates::desktop_layout;
use astra::{Body, Response, ResponseBuilder};
use maud::html;

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();
    let message = match &err {
        ServerError::NotFound => "We couldn't find that page.".to_string(),
        ServerError::BadRequest(msg) => msg.clone(),
        ServerError::Api(e) => e.user_message(),
        _ => "Something went wrong on our side.".to_string(),
    };

    if status >= 500 {
        tracing::error!(status, error = %err, "request failed");
    } else {
        tracing::info!(status, error = %err, "request rejected");
    }

    let page = desktop_layout(
        &format!("Error {status}"),
        Role::Guest,
        html! {
            main class="container error-page" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to home" } }
            }
        },
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
