use crate::domain::Subscriber;
use crate::errors::{ResultResp, ServerError};
use crate::responses::xlsx_response;
use chrono::{NaiveDate, Utc};
use rust_xlsxwriter::Workbook;

const HEADERS: [&str; 4] = ["ID", "Email", "Name", "Subscribed"];

pub fn subscribers_workbook(subscribers: &[Subscriber]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, sub) in subscribers.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_string(r, 0, &sub.id)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write id: {}", e)))?;

        worksheet
            .write_string(r, 1, &sub.email)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write email: {}", e)))?;

        worksheet
            .write_string(r, 2, sub.name.as_deref().unwrap_or(""))
            .map_err(|e| ServerError::XlsxError(format!("Failed to write name: {}", e)))?;

        worksheet
            .write_string(r, 3, sub.subscribed_on())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write date: {}", e)))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}

pub fn export_subscribers_xlsx(subscribers: &[Subscriber]) -> ResultResp {
    let buffer = subscribers_workbook(subscribers)?;
    xlsx_response(buffer, &export_filename(Utc::now().date_naive()))
}

fn export_filename(day: NaiveDate) -> String {
    format!("newsletter_subscribers_{}.xlsx", day.format("%Y%m%d"))
}
