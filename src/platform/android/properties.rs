//! Android system property access
//!
//! Properties are read through the `getprop` tool. A full `getprop` dump
//! uses one `[key]: [value]` pair per line; a single-key query prints the
//! bare value.

use std::collections::HashMap;
use std::process::Command;

use tracing::debug;

/// Source of Android system properties.
pub trait PropertySource: Send + Sync {
    /// Value of `key`, or `None` if unset or unreadable.
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads properties by running `getprop <key>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetpropSource;

impl PropertySource for GetpropSource {
    fn get(&self, key: &str) -> Option<String> {
        let output = match Command::new("getprop").arg(key).output() {
            Ok(output) => output,
            Err(e) => {
                debug!("getprop {} failed: {}", key, e);
                return None;
            }
        };

        if !output.status.success() {
            return None;
        }

        let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
        (!value.is_empty()).then_some(value)
    }
}

/// In-memory property table, e.g. parsed from a `getprop` dump.
#[derive(Debug, Clone, Default)]
pub struct PropertyMap {
    values: HashMap<String, String>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, returning `self` for chaining.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    /// Parse `getprop` dump output. Lines not in `[key]: [value]` form are
    /// skipped.
    pub fn parse_dump(content: &str) -> Self {
        let values = content.lines().filter_map(parse_dump_line).collect();
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PropertySource for PropertyMap {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).filter(|v| !v.is_empty()).cloned()
    }
}

fn parse_dump_line(line: &str) -> Option<(String, String)> {
    let (key, value) = line.trim().split_once("]: [")?;
    let key = key.strip_prefix('[')?;
    let value = value.strip_suffix(']')?;
    Some((key.to_string(), value.to_string()))
}
