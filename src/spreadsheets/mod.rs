pub mod subscribers_xlsx;

pub use subscribers_xlsx::export_subscribers_xlsx;
