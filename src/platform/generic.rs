//! Fallback descriptors for targets without a dedicated provider
//!
//! Uses the `sysinfo` crate for OS version and kernel release; vendor and
//! model are not portable and report `unknown`.

use sysinfo::System;

use super::traits::{or_unknown, PlatformInfoProvider, UNKNOWN};

/// sysinfo-backed descriptor provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericPlatformInfo;

impl PlatformInfoProvider for GenericPlatformInfo {
    fn platform_name(&self) -> &'static str {
        "generic"
    }

    fn os_name(&self) -> &'static str {
        std::env::consts::OS
    }

    fn os_version(&self) -> String {
        or_unknown(System::os_version())
    }

    fn os_release(&self) -> String {
        or_unknown(System::kernel_version())
    }

    fn manufacturer(&self) -> String {
        UNKNOWN.to_string()
    }

    fn model(&self) -> String {
        UNKNOWN.to_string()
    }

    fn hardware(&self) -> String {
        std::env::consts::ARCH.to_string()
    }

    fn cpu_abi(&self) -> String {
        std::env::consts::OS.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_descriptors() {
        let info = GenericPlatformInfo;
        assert_eq!(info.platform_name(), "generic");
        assert_eq!(info.os_name(), std::env::consts::OS);
        assert_eq!(info.manufacturer(), UNKNOWN);
        assert_eq!(info.hardware(), std::env::consts::ARCH);
        assert_eq!(
            info.cpu_arch_abi(),
            format!("{} ({})", std::env::consts::ARCH, std::env::consts::OS)
        );
        assert!(!info.os_version().is_empty());
    }
}
