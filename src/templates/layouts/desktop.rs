use crate::session::Role;
use crate::templates::components::newsletter_cta_form;
use chrono::{Datelike, Utc};
use maud::{html, Markup, DOCTYPE};

pub const SITE_NAME: &str = "Villa Serena Estates";

pub fn desktop_layout(title: &str, role: Role, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | " (SITE_NAME) }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="icon" type="image/svg+xml" href="/static/favicon/favicon.svg";
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="site-header" {
                    a href="/" class="brand" { (SITE_NAME) }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/rents" { "Villas for Rent" } }
                            li { a href="/sales" { "For Sale" } }
                            li { a href="/properties" { "All Properties" } }
                            li { a href="/about" { "About" } }
                            li { a href="/contact" { "Contact" } }
                            @if matches!(role, Role::Agent | Role::Admin) {
                                li { a href="/agent/faqs" { "Agent FAQs" } }
                            }
                            @if role == Role::Admin {
                                li { a href="/admin/newsletter" { "Newsletter" } }
                            }
                        }
                    }
                }

                (content)

                footer class="site-footer" {
                    (newsletter_cta_form())
                    p class="legal" {
                        "© " (Utc::now().year()) " " (SITE_NAME) ". "
                        a href="/privacy" { "Privacy Policy" }
                    }
                }
            }
        }
    }
}
