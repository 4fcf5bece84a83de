// src/domain/browser.rs

use crate::domain::filter::{FilterCriteria, ListingFilter};
use crate::domain::lifetime::{FetchTicket, ViewLifetime};
use crate::domain::listing::{Listing, ListingType};
use crate::domain::pagination::{clamp_page, paginate, PageSlice};

/// State behind one listings page: master list, filter and current page.
#[derive(Debug)]
pub struct ListingBrowser {
    master: Vec<Listing>,
    filter: ListingFilter,
    page_size: usize,
    current_page: usize,
    lifetime: ViewLifetime,
}

impl ListingBrowser {
    pub fn new(fixed_type: Option<ListingType>, page_size: usize) -> Self {
        Self {
            master: Vec::new(),
            filter: ListingFilter::new(fixed_type),
            page_size: page_size.max(1),
            current_page: 1,
            lifetime: ViewLifetime::new(),
        }
    }

    #[cfg(test)]
    pub fn lifetime(&self) -> &ViewLifetime {
        &self.lifetime
    }

    /// Start a (re)load. Any fetch started earlier is now stale.
    pub fn begin_fetch(&self) -> FetchTicket {
        self.lifetime.teardown();
        self.lifetime.ticket()
    }

    /// Install a fetched master list. Returns false and drops the data if the
    /// ticket is no longer current.
    pub fn receive(&mut self, ticket: &FetchTicket, listings: Vec<Listing>) -> bool {
        if !ticket.is_current() {
            tracing::debug!(count = listings.len(), "discarding stale listings fetch");
            return false;
        }

        self.master = listings;
        let current_page = &mut self.current_page;
        let page_size = self.page_size;
        self.filter
            .master_changed(&self.master, |results| {
                *current_page = clamp_page(1, results.len(), page_size)
            });
        true
    }

    pub fn edit_criteria<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut FilterCriteria),
    {
        edit(self.filter.draft_mut());
    }

    pub fn submit(&mut self) {
        let current_page = &mut self.current_page;
        let page_size = self.page_size;
        self.filter.submit(&self.master, |results| {
            *current_page = clamp_page(1, results.len(), page_size)
        });
    }

    pub fn reset(&mut self) {
        let current_page = &mut self.current_page;
        let page_size = self.page_size;
        self.filter.reset(&self.master, |results| {
            *current_page = clamp_page(1, results.len(), page_size)
        });
    }

    /// Clears the cosmetic in-progress signal raised by `reset`.
    pub fn settle(&mut self) {
        self.filter.settle();
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = clamp_page(page, self.filter.results().len(), self.page_size);
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn current_page_slice(&self) -> PageSlice<'_, Listing> {
        paginate(self.filter.results(), self.page_size, self.current_page)
    }

    pub fn filter(&self) -> &ListingFilter {
        &self.filter
    }

    #[cfg(test)]
    pub fn master(&self) -> &[Listing] {
        &self.master
    }
}
