// src/domain/subscriber.rs

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Subscriber {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub subscribed_at: Option<DateTime<Utc>>,
}

impl Subscriber {
    pub fn subscribed_on(&self) -> String {
        self.subscribed_at
            .map(|ts| ts.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "—".to_string())
    }
}
