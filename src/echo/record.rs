//! The per-request response value object.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// Identity strings are configuration; re-export so callers need only `echo`.
pub use crate::config::schema::IdentityConfig as ServiceIdentity;

/// Everything the service reports back about a request.
///
/// Built once by [`RequestInfoBuilder`](super::RequestInfoBuilder) and never
/// mutated afterwards; fields are private and exposed read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRecord {
    message: String,
    service: String,
    language: String,
    authenticated_user: String,
    auth_method: String,
    auth_timestamp: String,
    all_headers: BTreeMap<String, String>,
}

/// The three identity fields injected by the reverse proxy, already defaulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthFields {
    pub user: String,
    pub method: String,
    pub timestamp: String,
}

impl ResponseRecord {
    pub(crate) fn new(
        identity: &ServiceIdentity,
        auth: AuthFields,
        all_headers: BTreeMap<String, String>,
    ) -> Self {
        Self {
            message: identity.message.clone(),
            service: identity.service.clone(),
            language: identity.language.clone(),
            authenticated_user: auth.user,
            auth_method: auth.method,
            auth_timestamp: auth.timestamp,
            all_headers,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Value of `X-Remote-User`, or `"unknown"`.
    pub fn authenticated_user(&self) -> &str {
        &self.authenticated_user
    }

    /// Value of `X-Auth-Type`, or `"none"`.
    pub fn auth_method(&self) -> &str {
        &self.auth_method
    }

    /// Value of `X-Authenticated-Time`, or `"unknown"`.
    pub fn auth_timestamp(&self) -> &str {
        &self.auth_timestamp
    }

    /// Every request header with its first value, ordered by name.
    pub fn all_headers(&self) -> &BTreeMap<String, String> {
        &self.all_headers
    }
}
