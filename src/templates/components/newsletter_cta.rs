use maud::{html, Markup};

pub fn newsletter_cta_form() -> Markup {
    html! {
        div class="newsletter-cta-wrapper" {
            form method="post" action="/newsletter/subscribe" class="newsletter-cta" {
                label class="sr-only" for="newsletter-email" { "Email address" }
                input
                    type="email"
                    id="newsletter-email"
                    name="email"
                    placeholder="you@domain.com"
                    autocomplete="email"
                    required;

                button type="submit" class="primary" { "Subscribe" }

                p class="microcopy" {
                    "New villas and seasonal offers, once a month. Unsubscribe any time."
                }
            }
        }
    }
}
