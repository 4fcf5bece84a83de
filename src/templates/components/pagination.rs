use crate::domain::filter::FilterCriteria;
use crate::domain::pagination::{page_window, PageSlice};
use crate::domain::Listing;
use crate::query::page_href;
use maud::{html, Markup};

const MAX_PAGE_BUTTONS: usize = 5;

pub fn result_summary(page: &PageSlice<'_, Listing>) -> Markup {
    html! {
        p class="result-summary" {
            @if page.total == 0 {
                "No properties match your search."
            } @else {
                "Showing " (page.first_shown) "–" (page.last_shown)
                " of " (page.total) " properties"
            }
        }
    }
}

pub fn pagination_nav(path: &str, criteria: &FilterCriteria, page: &PageSlice<'_, Listing>) -> Markup {
    html! {
        @if page.total_pages > 1 {
            nav class="pagination" aria-label="Pages" {
                @if page.has_prev() {
                    a class="prev" href=(page_href(path, criteria, page.page - 1)) { "‹ Prev" }
                }
                @for n in page_window(page.page, page.total_pages, MAX_PAGE_BUTTONS) {
                    @if n == page.page {
                        span class="page current" aria-current="page" { (n) }
                    } @else {
                        a class="page" href=(page_href(path, criteria, n)) { (n) }
                    }
                }
                @if page.has_next() {
                    a class="next" href=(page_href(path, criteria, page.page + 1)) { "Next ›" }
                }
            }
        }
    }
}
