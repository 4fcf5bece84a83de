use maud::{html, Markup};

pub mod error;
pub mod filter_form;
pub mod listing_card;
pub mod newsletter_cta;
pub mod notice;
pub mod pagination;

pub use error::html_error_response;
pub use filter_form::filter_form;
pub use listing_card::listing_card;
pub use newsletter_cta::newsletter_cta_form;
pub use notice::{error_notice, success_notice};
pub use pagination::{pagination_nav, result_summary};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
