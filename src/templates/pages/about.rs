use crate::session::Role;
use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

pub fn about_page(role: Role) -> Markup {
    desktop_layout(
        "About Us",
        role,
        html! {
            main class="container" {
                h1 { "About us" }
                p {
                    "We are a boutique brokerage for luxury villas: short and long stays, "
                    "and a small portfolio of homes for sale."
                }

                (card("Rentals", html! {
                    p { "Every villa is visited by our agents before it is listed. "
                        "Concierge, housekeeping and transfers can be arranged on request." }
                }))

                (card("Sales", html! {
                    p { "Our agents handle viewings, negotiation and paperwork, "
                        "and stay with you until the keys change hands." }
                }))

                p { "Questions? " a href="/contact" { "Get in touch" } "." }
            }
        },
    )
}
