//! HTTP vocabulary used by the HTTP concepts exercises.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DrillError;

/// The request methods covered by the curriculum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// Retrieve a resource.
    Get,
    /// Create a resource.
    Post,
    /// Replace a resource.
    Put,
    /// Partially update a resource.
    Patch,
    /// Remove a resource.
    Delete,
    /// Retrieve headers only.
    Head,
    /// Ask which methods a resource supports.
    Options,
}

impl HttpMethod {
    /// Every method, in the order they are usually taught.
    pub const ALL: [HttpMethod; 7] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
        HttpMethod::Head,
        HttpMethod::Options,
    ];

    /// Upper-case method name as sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }

    /// Whether repeating the request leaves the server in the same state.
    pub fn is_idempotent(self) -> bool {
        !matches!(self, HttpMethod::Post | HttpMethod::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DrillError::InvalidMethod(s.to_string()))
    }
}

/// Status code classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    /// 2xx
    Success,
    /// 3xx
    Redirect,
    /// 4xx
    ClientError,
    /// 5xx
    ServerError,
    /// Anything outside 200..=599.
    Unknown,
}

impl StatusCategory {
    /// Snake-case identifier, e.g. `client_error`.
    pub fn as_str(self) -> &'static str {
        match self {
            StatusCategory::Success => "success",
            StatusCategory::Redirect => "redirect",
            StatusCategory::ClientError => "client_error",
            StatusCategory::ServerError => "server_error",
            StatusCategory::Unknown => "unknown",
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a status code means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusInfo {
    /// The numeric code.
    pub code: u16,
    /// Its class.
    pub category: StatusCategory,
    /// Reason phrase, e.g. `Not Found`.
    pub meaning: String,
    /// One-sentence explanation.
    pub description: String,
}

/// A URL broken into the parts taught in the curriculum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlParts {
    /// Scheme without the `://`, e.g. `https`.
    pub protocol: String,
    /// Host name.
    pub domain: String,
    /// Path, always starting with `/`.
    pub path: String,
    /// Query parameters in the order they appear.
    pub parameters: IndexMap<String, String>,
}

/// Header names grouped by purpose.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeaderCategories {
    /// Credentials and API keys.
    pub authentication: Vec<String>,
    /// Content type, length, encoding and language.
    pub content: Vec<String>,
    /// Cache directives and validators.
    pub caching: Vec<String>,
    /// Everything else.
    pub other: Vec<String>,
}

/// The five conventional REST routes for a resource collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestEndpoints {
    /// `GET /resource`
    pub list_all: String,
    /// `GET /resource/{id}`
    pub get_one: String,
    /// `POST /resource`
    pub create: String,
    /// `PUT /resource/{id}`
    pub update: String,
    /// `DELETE /resource/{id}`
    pub delete: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_parse_ignores_case() {
        assert_eq!("get".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("Options".parse::<HttpMethod>().unwrap(), HttpMethod::Options);
        assert!("FETCH".parse::<HttpMethod>().is_err());
        assert!("".parse::<HttpMethod>().is_err());
    }

    #[test]
    fn method_display_is_upper_case() {
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn idempotency() {
        assert!(HttpMethod::Put.is_idempotent());
        assert!(HttpMethod::Delete.is_idempotent());
        assert!(!HttpMethod::Post.is_idempotent());
    }

    #[test]
    fn category_serializes_snake_case() {
        let json = serde_json::to_string(&StatusCategory::ClientError).unwrap();
        assert_eq!(json, "\"client_error\"");
        assert_eq!(StatusCategory::ServerError.to_string(), "server_error");
    }
}
