//! # CSP Client Configuration
//!
//! Settings for applications embedding the CSP message codec, and the
//! logging bootstrap they share.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use csp_codec::{CspCodec, InMemoryReplayGuard};
//!
//! let settings = csp_config::load_settings(None)?;
//! csp_config::logging::init(&settings.logging)?;
//!
//! let codec = CspCodec::new(settings.codec.clone());
//! let guard = InMemoryReplayGuard::from_settings(&settings.replay);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod logging;
pub mod settings;

pub use logging::LoggingSettings;
pub use settings::{load_settings, ClientSettings, DEFAULT_CONFIG_PATH, ENV_PREFIX};
