//! # knock-observability
//!
//! Structured Logging fuer Knock via tracing-subscriber (Text oder JSON).

pub mod logging;

pub use logging::{
    log_format_aus_env, log_format_gueltig, log_level_aus_env, log_level_gueltig,
    logging_initialisieren,
};
