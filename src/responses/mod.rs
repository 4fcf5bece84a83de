pub mod html;
pub mod xlsx;

pub use html::{html_response, redirect};
pub use xlsx::xlsx_response;
