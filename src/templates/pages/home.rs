// templates/pages/home.rs

use crate::domain::Listing;
use crate::session::Role;
use crate::templates::{
    components::{error_notice, listing_card, success_notice},
    desktop_layout,
};
use maud::{html, Markup};

pub struct HomeVm<'a> {
    pub featured: &'a [Listing],
    pub error: Option<String>,
    pub subscribed: bool,
    pub subscribe_error: Option<String>,
    pub role: Role,
}

pub fn home_page(vm: &HomeVm<'_>) -> Markup {
    desktop_layout(
        "Luxury Villas",
        vm.role,
        html! {
            section class="hero" {
                h1 { "Luxury villas to rent and to own" }
                p { "Hand-picked homes on the coast, managed by people who know them." }
                a class="button primary" href="/rents" { "Browse rentals" }
                a class="button" href="/sales" { "Homes for sale" }
            }

            @if vm.subscribed {
                (success_notice("Thanks for subscribing! Watch your inbox for our next newsletter."))
            }
            @if let Some(err) = &vm.subscribe_error {
                (error_notice(&format!("We couldn't subscribe you: {err}")))
            }

            main class="container" {
                h2 { "Featured properties" }
                @if let Some(err) = &vm.error {
                    (error_notice(&format!("We couldn't load listings: {err}")))
                }
                div class="listing-grid" {
                    @for listing in vm.featured {
                        (listing_card(listing))
                    }
                }
                p { a href="/properties" { "See all properties →" } }
            }
        },
    )
}
