use crate::session::Role;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn privacy_page(role: Role) -> Markup {
    desktop_layout(
        "Privacy Policy",
        role,
        html! {
            main class="container prose" {
                h1 { "Privacy Policy" }

                h2 { "What we collect" }
                p { "When you contact us or subscribe to our newsletter we store your name, "
                    "email address, phone number and message." }

                h2 { "How we use it" }
                p { "We use your details to answer enquiries and, if you subscribed, "
                    "to send our newsletter. We do not sell your data." }

                h2 { "Cookies" }
                p { "We use a session cookie to keep agents and administrators signed in. "
                    "No tracking cookies are set for visitors." }

                h2 { "Your rights" }
                p { "You can ask us to see, correct or delete your data at any time through the "
                    a href="/contact" { "contact form" } "." }
            }
        },
    )
}
