pub mod admin;
pub mod agent;
pub mod listings;
pub mod site;
