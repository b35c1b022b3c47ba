//! Startup orchestration.
//!
//! # Responsibilities
//! - Load configuration (file or defaults)
//! - Apply command-line overrides
//! - Validate the final configuration once, after overrides
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when ready), see `main.rs`

use std::path::Path;

use crate::config::loader::{load_config, ConfigError};
use crate::config::schema::EchoConfig;
use crate::config::validation::validate_config;

/// Resolve the effective configuration from an optional file and overrides.
pub fn resolve_config(
    path: Option<&Path>,
    bind_override: Option<&str>,
) -> Result<EchoConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => EchoConfig::default(),
    };

    if let Some(bind) = bind_override {
        config.listener.bind_address = bind.to_string();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
