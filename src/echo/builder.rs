//! Request-to-record transformation.
//!
//! # Responsibilities
//! - Extract the proxy-injected identity headers with defaults
//! - Flatten the full header set to one value per name
//! - Assemble an immutable [`ResponseRecord`]
//!
//! # Design Decisions
//! - Header access goes through [`HeaderSource`] so the builder works on an
//!   `http::Request`, a bare `HeaderMap`, or a raw multi-valued table
//! - Non-UTF-8 header bytes are decoded lossily; the builder never fails
//! - Header names are kept exactly as the transport exposes them

use std::borrow::Cow;
use std::collections::BTreeMap;

use axum::http::{HeaderMap, HeaderValue, Request};

use super::record::{AuthFields, ResponseRecord, ServiceIdentity};

/// Authenticated user name set by the reverse proxy.
pub const X_REMOTE_USER: &str = "X-Remote-User";
/// Authentication scheme set by the reverse proxy.
pub const X_AUTH_TYPE: &str = "X-Auth-Type";
/// Time of authentication set by the reverse proxy.
pub const X_AUTHENTICATED_TIME: &str = "X-Authenticated-Time";

/// Reported when `X-Remote-User` is absent or empty.
pub const DEFAULT_USER: &str = "unknown";
/// Reported when `X-Auth-Type` is absent or empty.
pub const DEFAULT_AUTH_METHOD: &str = "none";
/// Reported when `X-Authenticated-Time` is absent or empty.
pub const DEFAULT_AUTH_TIMESTAMP: &str = "unknown";

/// Read access to a request's headers.
pub trait HeaderSource {
    /// First value of `name`, matched case-insensitively.
    fn first_value(&self, name: &str) -> Option<Cow<'_, str>>;

    /// Every header name paired with its first value.
    ///
    /// The value is `None` when a name carries an empty value sequence.
    fn first_values(&self) -> Vec<(Cow<'_, str>, Option<Cow<'_, str>>)>;
}

fn header_text(value: &HeaderValue) -> Cow<'_, str> {
    String::from_utf8_lossy(value.as_bytes())
}

impl HeaderSource for HeaderMap {
    fn first_value(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(header_text)
    }

    fn first_values(&self) -> Vec<(Cow<'_, str>, Option<Cow<'_, str>>)> {
        self.keys()
            .map(|name| (Cow::Borrowed(name.as_str()), self.get(name).map(header_text)))
            .collect()
    }
}

impl<B> HeaderSource for Request<B> {
    fn first_value(&self, name: &str) -> Option<Cow<'_, str>> {
        self.headers().first_value(name)
    }

    fn first_values(&self) -> Vec<(Cow<'_, str>, Option<Cow<'_, str>>)> {
        self.headers().first_values()
    }
}

/// A raw header table: name as received, values in arrival order.
impl HeaderSource for BTreeMap<String, Vec<String>> {
    fn first_value(&self, name: &str) -> Option<Cow<'_, str>> {
        self.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .and_then(|(_, values)| values.first())
            .map(|value| Cow::Borrowed(value.as_str()))
    }

    fn first_values(&self) -> Vec<(Cow<'_, str>, Option<Cow<'_, str>>)> {
        self.iter()
            .map(|(name, values)| {
                (
                    Cow::Borrowed(name.as_str()),
                    values.first().map(|v| Cow::Borrowed(v.as_str())),
                )
            })
            .collect()
    }
}

/// Returns the looked-up value, or `default` when it is absent or empty.
pub fn value_or_default(lookup: Option<&str>, default: &str) -> String {
    match lookup {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => default.to_string(),
    }
}

/// Collapses every header to its first value, keyed by name as received.
pub fn flatten_headers<S: HeaderSource + ?Sized>(source: &S) -> BTreeMap<String, String> {
    source
        .first_values()
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name.into_owned(), v.into_owned())))
        .collect()
}

/// Builds a [`ResponseRecord`] from a request.
///
/// Holds only the fixed service identity, so `build` is a pure function of
/// its input.
#[derive(Debug, Clone, Default)]
pub struct RequestInfoBuilder {
    identity: ServiceIdentity,
}

impl RequestInfoBuilder {
    pub fn new(identity: ServiceIdentity) -> Self {
        Self { identity }
    }

    /// Extract auth fields and flatten headers into a fresh record.
    pub fn build<S: HeaderSource + ?Sized>(&self, request: &S) -> ResponseRecord {
        let auth = AuthFields {
            user: value_or_default(request.first_value(X_REMOTE_USER).as_deref(), DEFAULT_USER),
            method: value_or_default(
                request.first_value(X_AUTH_TYPE).as_deref(),
                DEFAULT_AUTH_METHOD,
            ),
            timestamp: value_or_default(
                request.first_value(X_AUTHENTICATED_TIME).as_deref(),
                DEFAULT_AUTH_TIMESTAMP,
            ),
        };

        ResponseRecord::new(&self.identity, auth, flatten_headers(request))
    }
}
