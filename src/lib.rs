//! Authentication header echo service.
//!
//! A demo backend for an authenticating reverse proxy: the proxy injects
//! `X-Remote-User`, `X-Auth-Type` and `X-Authenticated-Time`, and this
//! service reports them back together with every request header.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌──────────────────────────────────────────────┐
//!                       │                  AUTH ECHO                    │
//!                       │                                               │
//!   Proxied Request     │  ┌─────────┐    ┌──────────┐    ┌──────────┐  │
//!   ────────────────────┼─▶│   net   │───▶│   http   │───▶│ handlers │  │
//!                       │  │listener │    │  server  │    │          │  │
//!                       │  └─────────┘    └──────────┘    └────┬─────┘  │
//!                       │                                      │        │
//!                       │                                      ▼        │
//!   Response            │  ┌──────────┐                 ┌────────────┐  │
//!   ◀───────────────────┼──│ response │◀────────────────│    echo    │  │
//!   (JSON / HTML / OK)  │  │          │                 │  builder   │  │
//!                       │  └──────────┘                 └────────────┘  │
//!                       │                                               │
//!                       │  config · lifecycle · observability           │
//!                       └──────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod echo;
pub mod http;
pub mod net;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::schema::EchoConfig;
pub use echo::{RequestInfoBuilder, ResponseRecord, ServiceIdentity};
pub use http::EchoServer;
pub use lifecycle::Shutdown;
