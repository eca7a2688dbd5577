//! Logging entry points.
//!
//! # Data Flow
//! ```text
//! Cumulative (entry.rs):
//!     with_fields / with_tracing (copy caller data)
//!     → Entry::insert ... → Entry::info(msg) → Logger::emit
//!
//! Stateless (stateless.rs, global.rs):
//!     info(&[..]) / infof(args) / infoft(ctx, args)
//!     → ScratchPool checkout → Logger::emit → cleared, returned
//! ```

pub mod entry;
pub mod global;
pub mod stateless;

pub use entry::Entry;
pub use global::*;

/// Log a formatted message at debug on the global logger.
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => {
        $crate::log::debugf(::std::format_args!($($arg)+))
    };
}

/// Log a formatted message at info on the global logger.
///
/// ```no_run
/// fieldlog::infof!("Sending: {}", "X");
/// ```
#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::log::infof(::std::format_args!($($arg)+))
    };
}

/// Log a formatted message at error on the global logger.
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::log::errorf(::std::format_args!($($arg)+))
    };
}

/// Like [`debugf!`], with `request_id` taken from a carrier.
#[macro_export]
macro_rules! debugft {
    ($carrier:expr, $($arg:tt)+) => {
        $crate::log::debugft($carrier, ::std::format_args!($($arg)+))
    };
}

/// Like [`infof!`], with `request_id` taken from a carrier.
#[macro_export]
macro_rules! infoft {
    ($carrier:expr, $($arg:tt)+) => {
        $crate::log::infoft($carrier, ::std::format_args!($($arg)+))
    };
}

/// Like [`errorf!`], with `request_id` taken from a carrier.
#[macro_export]
macro_rules! errorft {
    ($carrier:expr, $($arg:tt)+) => {
        $crate::log::errorft($carrier, ::std::format_args!($($arg)+))
    };
}
