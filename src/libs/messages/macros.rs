//! Macros for printing messages and debug logging.
//!
//! In normal mode the macros print plain lines (errors go to stderr). When
//! debug mode is on they route through `tracing` instead, so the output picks
//! up the level, timestamp and target from the subscriber installed in `main`.
//!
//! Debug mode is enabled by setting `TODOMASTER_DEBUG` or `RUST_LOG`. The
//! check is done once and cached.
//!
//! ```rust
//! use todomaster::{msg_debug, msg_success};
//! use todomaster::libs::messages::Message;
//!
//! msg_success!(Message::TaskCreated(1));
//! msg_debug!(Message::DatabaseUpToDate); // silent unless debug mode is on
//! ```

use std::sync::OnceLock;

pub const DEBUG_ENV: &str = "TODOMASTER_DEBUG";

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var(DEBUG_ENV).is_ok() || std::env::var("RUST_LOG").is_ok())
}

#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            $crate::tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            $crate::tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            $crate::tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            $crate::tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            $crate::tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            $crate::tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            $crate::tracing::debug!("🔍 {}", $msg);
        }
    };
}
