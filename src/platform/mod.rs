//! Platform Abstraction Layer for device descriptors
//!
//! This module provides the [`PlatformInfoProvider`] implementations that
//! expose static device metadata, and selects the one for the build target.
//!
//! # Architecture
//!
//! ```text
//! src/platform/
//! +-- mod.rs           <- This file (module definitions, provider selection)
//! +-- traits.rs        <- Error type and provider trait
//! +-- linux/           <- os-release, DMI and uname(2) (cfg(linux))
//! +-- android/         <- system properties via getprop
//! +-- generic.rs       <- sysinfo-backed fallback for other targets
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use devinfo::platform::create_provider;
//! use devinfo::ReaderConfig;
//!
//! let provider = create_provider(&ReaderConfig::default());
//! println!("{} {} on {}", provider.os_name(), provider.os_version(), provider.model());
//! ```
//!
//! # Platform Support
//!
//! | Descriptor | Linux | Android | Other |
//! |------------|-------|---------|-------|
//! | OS version | os-release | SDK level | sysinfo |
//! | Release | uname | build release | sysinfo |
//! | Manufacturer/Model | DMI | product props | unknown |
//! | Hardware | uname machine | ro.hardware | arch |

// Core trait definitions - always available
pub mod traits;

pub mod android;
pub mod generic;

/// Linux-specific implementations.
#[cfg(target_os = "linux")]
pub mod linux;

pub use traits::{
    // Error types
    PlatformError,
    PlatformResult,
    // Descriptor provider
    PlatformInfoProvider,
    or_unknown,
    UNKNOWN,
};

pub use android::{AndroidPlatformInfo, GetpropSource, PropertyMap, PropertySource};
pub use generic::GenericPlatformInfo;

#[cfg(target_os = "linux")]
pub use linux::LinuxPlatformInfo;

use crate::core::config::ReaderConfig;

/// Build the descriptor provider for the current target.
pub fn create_provider(config: &ReaderConfig) -> Box<dyn PlatformInfoProvider> {
    #[cfg(target_os = "android")]
    {
        let _ = config;
        Box::new(AndroidPlatformInfo::new(GetpropSource))
    }

    #[cfg(target_os = "linux")]
    {
        Box::new(LinuxPlatformInfo::new(config))
    }

    #[cfg(not(any(target_os = "android", target_os = "linux")))]
    {
        let _ = config;
        Box::new(GenericPlatformInfo)
    }
}

// ============================================================================
// Cross-Platform Utilities
// ============================================================================

/// Format bytes into a human-readable string.
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if bytes >= TB {
        format!("{:.2} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Format a megabyte count (as returned by the RAM reader).
pub fn format_megabytes(megabytes: i64) -> String {
    let bytes = u64::try_from(megabytes).unwrap_or(0).saturating_mul(1024 * 1024);
    format_bytes(bytes)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1024), "1.00 KB");
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(1024 * 1024), "1.00 MB");
        assert_eq!(format_bytes(1024 * 1024 * 1024), "1.00 GB");
        assert_eq!(format_bytes(1024u64 * 1024 * 1024 * 1024), "1.00 TB");
    }

    #[test]
    fn test_format_megabytes() {
        assert_eq!(format_megabytes(2000), "1.95 GB");
        assert_eq!(format_megabytes(512), "512.00 MB");
        assert_eq!(format_megabytes(0), "0 B");
        assert_eq!(format_megabytes(-1), "0 B");
    }

    #[test]
    fn test_create_provider() {
        let provider = create_provider(&ReaderConfig::default());
        assert!(!provider.os_name().is_empty());
        assert!(!provider.cpu_arch().is_empty());

        #[cfg(target_os = "linux")]
        {
            assert_eq!(provider.platform_name(), "linux");
            assert_eq!(provider.os_name(), "Linux");
        }
    }
}
