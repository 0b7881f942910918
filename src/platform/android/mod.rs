//! Android Platform Support
//!
//! Device descriptors on Android come from system properties
//! (`ro.product.*`, `ro.build.version.*`). The CPU and memory metrics use
//! the same sysfs/procfs sources as Linux and live in `core::metrics`.
//!
//! The module compiles on every target so the property parsing can be
//! tested off-device; [`create_provider`](super::create_provider) only
//! selects it when building for Android.

mod properties;

pub use properties::{GetpropSource, PropertyMap, PropertySource};

use super::traits::{or_unknown, PlatformInfoProvider};

/// Property keys backing each descriptor.
pub mod keys {
    pub const SDK_INT: &str = "ro.build.version.sdk";
    pub const RELEASE: &str = "ro.build.version.release";
    pub const MANUFACTURER: &str = "ro.product.manufacturer";
    pub const MODEL: &str = "ro.product.model";
    pub const HARDWARE: &str = "ro.hardware";
    pub const CPU_ABI: &str = "ro.product.cpu.abi";
}

/// Android descriptor provider backed by a [`PropertySource`].
#[derive(Debug, Clone)]
pub struct AndroidPlatformInfo<S = GetpropSource> {
    props: S,
}

impl<S: PropertySource> AndroidPlatformInfo<S> {
    pub fn new(props: S) -> Self {
        Self { props }
    }

    fn prop(&self, key: &str) -> String {
        or_unknown(self.props.get(key))
    }
}

impl Default for AndroidPlatformInfo<GetpropSource> {
    fn default() -> Self {
        Self::new(GetpropSource)
    }
}

impl<S: PropertySource> PlatformInfoProvider for AndroidPlatformInfo<S> {
    fn platform_name(&self) -> &'static str {
        "android"
    }

    fn os_name(&self) -> &'static str {
        // Not the kernel's "Linux": the rest of the app keys off "Android".
        "Android"
    }

    fn os_version(&self) -> String {
        self.prop(keys::SDK_INT)
    }

    fn os_release(&self) -> String {
        self.prop(keys::RELEASE)
    }

    fn manufacturer(&self) -> String {
        self.prop(keys::MANUFACTURER)
    }

    fn model(&self) -> String {
        self.prop(keys::MODEL)
    }

    fn hardware(&self) -> String {
        self.prop(keys::HARDWARE)
    }

    fn cpu_abi(&self) -> String {
        self.prop(keys::CPU_ABI)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::UNKNOWN;

    fn pixel() -> PropertyMap {
        PropertyMap::new()
            .with(keys::SDK_INT, "34")
            .with(keys::RELEASE, "14")
            .with(keys::MANUFACTURER, "Google")
            .with(keys::MODEL, "Pixel 8")
            .with(keys::HARDWARE, "shiba")
            .with(keys::CPU_ABI, "arm64-v8a")
    }

    #[test]
    fn test_android_descriptors() {
        let info = AndroidPlatformInfo::new(pixel());
        assert_eq!(info.platform_name(), "android");
        assert_eq!(info.os_name(), "Android");
        assert_eq!(info.os_version(), "34");
        assert_eq!(info.os_release(), "14");
        assert_eq!(info.manufacturer(), "Google");
        assert_eq!(info.model(), "Pixel 8");
        assert_eq!(info.hardware(), "shiba");
        assert_eq!(info.cpu_abi(), "arm64-v8a");
        assert_eq!(
            info.cpu_arch_abi(),
            format!("{} (arm64-v8a)", std::env::consts::ARCH)
        );
    }

    #[test]
    fn test_os_name_ignores_properties() {
        let info = AndroidPlatformInfo::new(PropertyMap::new().with("os.name", "Linux"));
        assert_eq!(info.os_name(), "Android");
    }

    #[test]
    fn test_missing_properties_are_unknown() {
        let info = AndroidPlatformInfo::new(PropertyMap::new());
        assert_eq!(info.model(), UNKNOWN);
        assert_eq!(info.os_version(), UNKNOWN);
        assert_eq!(info.cpu_arch_abi(), format!("{} (unknown)", std::env::consts::ARCH));
    }
}
