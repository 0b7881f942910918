//! Platform Abstraction Traits for Device Metadata
//!
//! This module defines the error type shared by every source reader and the
//! capability trait each platform implements to expose static device
//! descriptors (OS name, version, manufacturer, model, architecture).
//!
//! # Architecture
//!
//! ```text
//! +------------------------+
//! |  PlatformInfoProvider  |  <- This module (defines the interface)
//! +------------------------+
//!          |
//!    +-----+------+---------+
//!    |            |         |
//! +--v--+    +----v---+  +--v------+
//! | Lin |    | Andr.  |  | Generic |  <- Platform-specific implementations
//! +-----+    +--------+  +---------+
//! ```
//!
//! Descriptors are pass-throughs: they are not cached and never fail. A
//! value the platform cannot provide is reported as [`UNKNOWN`].

use std::fmt;
use std::io;

// ============================================================================
// Error Types
// ============================================================================

/// Platform-agnostic error type for source reads.
///
/// Only two failure kinds matter to callers: the source is unavailable
/// (`PermissionDenied`, `NotFound`, `Io`) or its content has an unexpected
/// shape (`InvalidFormat`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// Permission denied while opening a source
    PermissionDenied(String),
    /// Source path does not exist
    NotFound(String),
    /// Any other I/O error
    Io(String),
    /// Content present but not in the expected shape
    InvalidFormat(String),
}

impl PlatformError {
    /// True when the error means the source could not be read at all.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            PlatformError::PermissionDenied(_) | PlatformError::NotFound(_) | PlatformError::Io(_)
        )
    }
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            PlatformError::NotFound(msg) => write!(f, "Not found: {}", msg),
            PlatformError::Io(msg) => write!(f, "I/O error: {}", msg),
            PlatformError::InvalidFormat(msg) => write!(f, "Invalid format: {}", msg),
        }
    }
}

impl std::error::Error for PlatformError {}

impl From<io::Error> for PlatformError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => PlatformError::PermissionDenied(err.to_string()),
            io::ErrorKind::NotFound => PlatformError::NotFound(err.to_string()),
            io::ErrorKind::InvalidData => PlatformError::InvalidFormat(err.to_string()),
            _ => PlatformError::Io(err.to_string()),
        }
    }
}

/// Result type alias for platform operations.
pub type PlatformResult<T> = Result<T, PlatformError>;

// ============================================================================
// Descriptor Provider
// ============================================================================

/// Placeholder reported for any descriptor the platform does not expose.
pub const UNKNOWN: &str = "unknown";

/// Map an optional, possibly blank platform value to a descriptor string.
pub fn or_unknown(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Static device descriptors exposed by the host platform.
///
/// Implementations must be cheap to call from any thread; they read the
/// underlying platform value on every call.
pub trait PlatformInfoProvider: Send + Sync {
    /// Short identifier of the implementation (e.g. "linux").
    fn platform_name(&self) -> &'static str;

    /// Operating system name.
    ///
    /// This is a fixed literal per platform and does not query the system.
    /// Android reports `"Android"` even though the kernel convention would
    /// say `"Linux"`.
    fn os_name(&self) -> &'static str;

    /// OS version (distribution version, or SDK level on Android).
    fn os_version(&self) -> String;

    /// Release string (kernel release, or user-visible release on Android).
    fn os_release(&self) -> String;

    /// Device manufacturer.
    fn manufacturer(&self) -> String;

    /// Device model.
    fn model(&self) -> String;

    /// Hardware identifier (board or machine name).
    fn hardware(&self) -> String;

    /// CPU architecture the binary runs on.
    fn cpu_arch(&self) -> String {
        std::env::consts::ARCH.to_string()
    }

    /// ABI name for the architecture (e.g. "gnu", "arm64-v8a").
    fn cpu_abi(&self) -> String;

    /// Architecture and ABI combined, e.g. `"aarch64 (arm64-v8a)"`.
    fn cpu_arch_abi(&self) -> String {
        format!("{} ({})", self.cpu_arch(), self.cpu_abi())
    }
}
