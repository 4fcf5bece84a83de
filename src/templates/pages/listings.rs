use crate::domain::ListingBrowser;
use crate::session::Role;
use crate::templates::{
    components::{error_notice, filter_form, listing_card, pagination_nav, result_summary},
    desktop_layout,
};
use maud::{html, Markup};

pub struct ListingsVm<'a> {
    pub title: &'a str,
    pub intro: &'a str,
    /// Route the form and page links point back to.
    pub path: &'a str,
    pub browser: &'a ListingBrowser,
    /// This render follows a reset.
    pub just_reset: bool,
    pub error: Option<String>,
    pub role: Role,
}

pub fn listings_page(vm: &ListingsVm<'_>) -> Markup {
    let filter = vm.browser.filter();
    let page = vm.browser.current_page_slice();

    desktop_layout(
        vm.title,
        vm.role,
        html! {
            main class="container listings" {
                h1 { (vm.title) }
                p class="intro" { (vm.intro) }

                (filter_form(vm.path, filter.draft(), vm.just_reset))

                @if let Some(err) = &vm.error {
                    (error_notice(&format!("We couldn't load listings: {err}")))
                }

                (result_summary(&page))

                div class="listing-grid" {
                    @for listing in page.items {
                        (listing_card(listing))
                    }
                }

                (pagination_nav(vm.path, filter.applied(), &page))
            }
        },
    )
}
