//! Request echo subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request (headers only)
//!     → builder.rs (auth field extraction, header flattening)
//!     → record.rs (immutable ResponseRecord)
//!     → serialized by the handler: JSON (serde_json) or HTML (html.rs)
//! ```
//!
//! # Design Decisions
//! - The request is an explicit parameter; nothing is read from ambient state
//! - Missing or empty auth headers resolve to defaults, never to errors
//! - Multi-valued headers collapse to their first value

pub mod builder;
pub mod html;
pub mod record;

pub use builder::{flatten_headers, value_or_default, HeaderSource, RequestInfoBuilder};
pub use record::{ResponseRecord, ServiceIdentity};
