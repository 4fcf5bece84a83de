use crate::domain::Listing;
use maud::{html, Markup};

pub fn listing_card(listing: &Listing) -> Markup {
    html! {
        article class="listing-card" id=(listing.slug) data-type=(listing.listing_type.as_str()) {
            img class="listing-image" src=(listing.image) alt=(listing.title) loading="lazy";
            div class="listing-body" {
                span class="badge" { (listing.listing_type.label()) }
                h3 class="listing-title" { (listing.title) }
                @if !listing.location.is_empty() {
                    p class="listing-location" { (listing.location) }
                }
                p class="listing-facts" {
                    (listing.bedrooms) " beds · "
                    (listing.bathrooms) " baths · "
                    (listing.guests) " guests"
                }
                @if listing.review_count > 0 {
                    p class="listing-rating" {
                        "★ " (format!("{:.1}", listing.rating))
                        " (" (listing.review_count) " reviews)"
                    }
                }
                @if !listing.amenities.is_empty() {
                    ul class="amenities" {
                        @for amenity in listing.amenities.iter().take(4) {
                            li { (amenity) }
                        }
                    }
                }
                p class="listing-price" { (listing.display_price()) }
            }
        }
    }
}
