//! Ajax request descriptors
//!
//! The notification and search endpoints belong to the server. This module
//! only describes the requests; sending them is up to the host.

use serde::Serialize;
use url::Url;

use crate::error::WidgetError;
use crate::Result;

pub const CSRF_COOKIE: &str = "csrftoken";
pub const CSRF_HEADER: &str = "X-CSRFToken";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AjaxRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
}

impl AjaxRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Read the CSRF token from a `Cookie` header value.
///
/// The value is percent-decoded; a literal `+`, `&` or `=` is kept as is.
pub fn csrf_token(cookie_header: &str) -> Option<String> {
    cookie_header
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| name.trim() == CSRF_COOKIE)
        .map(|(_, value)| percent_decode(value.trim()))
        .filter(|token| !token.is_empty())
}

fn percent_decode(value: &str) -> String {
    let escaped = value
        .replace('+', "%2B")
        .replace('&', "%26")
        .replace('=', "%3D");
    url::form_urlencoded::parse(escaped.as_bytes())
        .next()
        .map(|(decoded, _)| decoded.into_owned())
        .unwrap_or_default()
}

/// Server endpoints, resolved against the site root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    pub fn new(base: &str) -> Result<Self> {
        Ok(Self {
            base: Url::parse(base)?,
        })
    }

    /// `POST /accounts/ajax/notification/read/{id}`
    pub fn mark_read(&self, notification_id: u64, csrf: Option<&str>) -> Result<AjaxRequest> {
        self.post(&format!("/accounts/ajax/notification/read/{}", notification_id), csrf)
    }

    /// `POST /accounts/ajax/notification/delete/{id}`
    pub fn delete_notification(
        &self,
        notification_id: u64,
        csrf: Option<&str>,
    ) -> Result<AjaxRequest> {
        self.post(
            &format!("/accounts/ajax/notification/delete/{}", notification_id),
            csrf,
        )
    }

    /// `GET /accounts/ajax/search/?user={query}`
    pub fn search_users(&self, query: &str) -> Result<AjaxRequest> {
        let mut url = self.base.join("/accounts/ajax/search/")?;
        url.query_pairs_mut().append_pair("user", query);

        Ok(AjaxRequest {
            method: Method::Get,
            url,
            headers: Vec::new(),
        })
    }

    fn post(&self, path: &str, csrf: Option<&str>) -> Result<AjaxRequest> {
        let Some(token) = csrf.filter(|t| !t.is_empty()) else {
            tracing::warn!(path, "CSRF token is not set");
            return Err(WidgetError::MissingCsrfToken);
        };

        Ok(AjaxRequest {
            method: Method::Post,
            url: self.base.join(path)?,
            headers: vec![(CSRF_HEADER.to_string(), token.to_string())],
        })
    }
}
