// src/domain/forms.rs

use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

/// A form field the visitor has to fix before we call the API.
#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

/// Trim + lowercase, minimal sanity check.
pub fn normalize_email(email: &str) -> Result<String, FormError> {
    let e = email.trim().to_lowercase();
    if e.is_empty() {
        return Err(FormError::Missing("Email"));
    }
    if !e.contains('@') || e.starts_with('@') || e.ends_with('@') {
        return Err(FormError::InvalidEmail(email.trim().to_string()));
    }
    Ok(e)
}

fn field(form: &HashMap<String, String>, key: &str) -> String {
    form.get(key).map(|v| v.trim().to_string()).unwrap_or_default()
}

fn required(form: &HashMap<String, String>, key: &str, label: &'static str) -> Result<String, FormError> {
    let v = field(form, key);
    if v.is_empty() {
        return Err(FormError::Missing(label));
    }
    Ok(v)
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactMessage {
    /// Raw values, kept for re-rendering the form when something fails.
    pub fn from_form(form: &HashMap<String, String>) -> Self {
        Self {
            name: field(form, "name"),
            email: field(form, "email"),
            phone: field(form, "phone"),
            message: field(form, "message"),
        }
    }

    /// Phone is optional; everything else is required.
    pub fn validated(&self) -> Result<Self, FormError> {
        if self.name.is_empty() {
            return Err(FormError::Missing("Name"));
        }
        let email = normalize_email(&self.email)?;
        if self.message.is_empty() {
            return Err(FormError::Missing("Message"));
        }
        Ok(Self {
            email,
            ..self.clone()
        })
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewsletterSignup {
    pub email: String,
}

impl NewsletterSignup {
    pub fn from_form(form: &HashMap<String, String>) -> Result<Self, FormError> {
        Ok(Self {
            email: normalize_email(&field(form, "email"))?,
        })
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Broadcast {
    pub subject: String,
    pub message: String,
}

impl Broadcast {
    pub fn from_form(form: &HashMap<String, String>) -> Result<Self, FormError> {
        Ok(Self {
            subject: required(form, "subject", "Subject")?,
            message: required(form, "message", "Message")?,
        })
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AgentInvite {
    pub name: String,
    pub email: String,
}

impl AgentInvite {
    pub fn from_form(form: &HashMap<String, String>) -> Result<Self, FormError> {
        Ok(Self {
            name: required(form, "name", "Name")?,
            email: normalize_email(&field(form, "email"))?,
        })
    }
}
