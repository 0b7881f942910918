//! Linux Platform Support
//!
//! Device descriptors for desktop and server Linux:
//!
//! - **os_version**: `VERSION_ID` from os-release, else sysinfo
//! - **os_release**: kernel release from `uname(2)`
//! - **manufacturer/model**: DMI `sys_vendor` / `product_name`
//! - **hardware**: machine field from `uname(2)`
//!
//! DMI is absent on most ARM boards and inside some containers; those
//! descriptors then report `unknown`.

use std::collections::HashMap;
use std::ffi::CStr;
use std::path::{Path, PathBuf};

use sysinfo::System;

use super::traits::{or_unknown, PlatformInfoProvider};
use crate::core::config::ReaderConfig;

/// Linux descriptor provider.
#[derive(Debug, Clone)]
pub struct LinuxPlatformInfo {
    dmi_dir: PathBuf,
    os_release_path: PathBuf,
}

impl LinuxPlatformInfo {
    pub fn new(config: &ReaderConfig) -> Self {
        Self {
            dmi_dir: config.dmi_dir.clone(),
            os_release_path: config.os_release_path.clone(),
        }
    }

    fn dmi(&self, name: &str) -> String {
        or_unknown(read_trimmed(&self.dmi_dir.join(name)))
    }
}

impl Default for LinuxPlatformInfo {
    fn default() -> Self {
        Self::new(&ReaderConfig::default())
    }
}

impl PlatformInfoProvider for LinuxPlatformInfo {
    fn platform_name(&self) -> &'static str {
        "linux"
    }

    fn os_name(&self) -> &'static str {
        "Linux"
    }

    fn os_version(&self) -> String {
        let from_file = std::fs::read_to_string(&self.os_release_path)
            .ok()
            .and_then(|content| parse_os_release(&content).remove("VERSION_ID"));
        or_unknown(from_file.or_else(System::os_version))
    }

    fn os_release(&self) -> String {
        or_unknown(uname_field(UtsField::Release).or_else(System::kernel_version))
    }

    fn manufacturer(&self) -> String {
        self.dmi("sys_vendor")
    }

    fn model(&self) -> String {
        self.dmi("product_name")
    }

    fn hardware(&self) -> String {
        or_unknown(uname_field(UtsField::Machine))
    }

    fn cpu_abi(&self) -> String {
        target_abi().to_string()
    }
}

/// ABI of the running binary.
fn target_abi() -> &'static str {
    if cfg!(target_env = "gnu") {
        "gnu"
    } else if cfg!(target_env = "musl") {
        "musl"
    } else {
        "unknown"
    }
}

/// Parse os-release `KEY=value` lines, stripping optional quotes.
pub fn parse_os_release(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
            (key.trim().to_string(), value.to_string())
        })
        .collect()
}

fn read_trimmed(path: &Path) -> Option<String> {
    std::fs::read_to_string(path)
        .ok()
        .map(|s| s.trim().to_string())
}

#[derive(Debug, Clone, Copy)]
enum UtsField {
    Release,
    Machine,
}

/// Read one field of `uname(2)`.
fn uname_field(field: UtsField) -> Option<String> {
    // SAFETY: utsname is plain old data; uname fills it or fails.
    let mut uts: libc::utsname = unsafe { std::mem::zeroed() };
    if unsafe { libc::uname(&mut uts) } != 0 {
        return None;
    }

    let raw = match field {
        UtsField::Release => &uts.release,
        UtsField::Machine => &uts.machine,
    };

    // SAFETY: uname NUL-terminates every field within its buffer.
    let value = unsafe { CStr::from_ptr(raw.as_ptr()) };
    Some(value.to_string_lossy().into_owned())
}
