pub mod browser;
pub mod faq;
pub mod filter;
pub mod forms;
pub mod lifetime;
pub mod listing;
pub mod pagination;
pub mod subscriber;

pub use browser::ListingBrowser;
pub use faq::Faq;
pub use listing::{Listing, ListingType};
pub use subscriber::Subscriber;
