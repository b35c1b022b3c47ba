//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ListenerConfig.bind_address
//!     → listener.rs (parse, bind)
//!     → tokio TcpListener handed to axum::serve
//! ```
//!
//! TLS is terminated by the fronting reverse proxy, never here.

pub mod listener;

pub use listener::{bind, ListenerError};
