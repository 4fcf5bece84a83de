mod admin_tests;
mod contact_tests;
mod faq_tests;
mod listings_tests;
