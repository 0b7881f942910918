//! devinfo
//!
//! Best-effort device hardware and OS metadata.
//!
//! ## Features
//!
//! - **CPU core count**: counted from the sysfs CPU directory, memoized
//! - **Total RAM**: parsed from `/proc/meminfo`, memoized, 0 when unknown
//! - **Descriptors**: OS name/version, manufacturer, model, architecture
//!   through a per-platform [`PlatformInfoProvider`]
//!
//! ## Failure policy
//!
//! Metric readers never return errors. An unreadable CPU directory yields 1
//! core; unreadable or malformed meminfo yields 0 MB. Both are logged at
//! `warn` level through `tracing`.
//!
//! ```no_run
//! use devinfo::SystemMetricsReader;
//!
//! let reader = SystemMetricsReader::global();
//! println!("{} cores, {} MB", reader.cpu_core_count(), reader.total_ram_megabytes());
//! ```

pub mod core;
pub mod platform;

// Re-exports
pub use crate::core::config::ReaderConfig;
pub use crate::core::metrics::{SystemMetricsReader, DEFAULT_CORE_COUNT, UNKNOWN_RAM_MB};
pub use crate::core::report::DeviceReport;
pub use platform::{
    create_provider, PlatformError, PlatformInfoProvider, PlatformResult, UNKNOWN,
};
