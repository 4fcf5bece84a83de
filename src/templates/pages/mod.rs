pub mod about;
pub mod admin_newsletter;
pub mod agent_faqs;
pub mod contact;
pub mod home;
pub mod listings;
pub mod privacy;

pub use about::about_page;
pub use admin_newsletter::{admin_newsletter_page, NewsletterVm};
pub use agent_faqs::{agent_faqs_page, FaqVm};
pub use contact::{contact_page, ContactVm};
pub use home::{home_page, HomeVm};
pub use listings::{listings_page, ListingsVm};
pub use privacy::privacy_page;
