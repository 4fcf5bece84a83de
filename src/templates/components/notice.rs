use maud::{html, Markup};

/// Inline error box. The page around it stays usable.
pub fn error_notice(message: &str) -> Markup {
    html! {
        div class="notice notice-error" role="alert" { (message) }
    }
}

pub fn success_notice(message: &str) -> Markup {
    html! {
        div class="notice notice-success" role="status" { (message) }
    }
}
