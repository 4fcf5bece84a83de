// src/session.rs
use astra::Request;

/// Cookie names the token has lived under over the years, most recent first.
pub const TOKEN_KEYS: [&str; 4] = ["access_token", "accessToken", "auth_token", "token"];
pub const ROLE_KEY: &str = "user_role";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Guest,
    Agent,
    Admin,
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" => Role::Admin,
            "agent" => Role::Agent,
            _ => Role::Guest,
        }
    }
}

/// Whatever the visitor's client has stored about who they are.
pub trait SessionAccessor {
    fn token(&self) -> Option<String>;
    fn role(&self) -> Role;
}

/// Reads the session from the request's `Cookie` header.
#[derive(Debug, Clone, Default)]
pub struct CookieSession {
    cookies: Vec<(String, String)>,
}

impl CookieSession {
    pub fn from_request(req: &Request) -> Self {
        let header = req
            .headers()
            .get_all("cookie")
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect::<Vec<_>>()
            .join("; ");
        Self::from_header(&header)
    }

    pub fn from_header(header: &str) -> Self {
        let cookies = header
            .split(';')
            .filter_map(|pair| {
                let (k, v) = pair.split_once('=')?;
                Some((k.trim().to_string(), v.trim().trim_matches('"').to_string()))
            })
            .collect();
        Self { cookies }
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.cookies
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl SessionAccessor for CookieSession {
    fn token(&self) -> Option<String> {
        TOKEN_KEYS
            .iter()
            .filter_map(|key| self.get(key))
            .find(|v| !v.is_empty())
            .map(str::to_string)
    }

    fn role(&self) -> Role {
        self.get(ROLE_KEY).map(Role::parse).unwrap_or(Role::Guest)
    }
}

/// Fixed session for tests.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct StaticSession {
    pub token: Option<String>,
    pub role: Role,
}

#[cfg(test)]
impl StaticSession {
    pub fn anonymous() -> Self {
        Self {
            token: None,
            role: Role::Guest,
        }
    }
}

#[cfg(test)]
impl SessionAccessor for StaticSession {
    fn token(&self) -> Option<String> {
        self.token.clone()
    }

    fn role(&self) -> Role {
        self.role
    }
}
