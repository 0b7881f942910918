//! Lazy, best-effort system metric reader
//!
//! Reads the logical CPU count from the sysfs CPU directory and the total
//! RAM from the `MemTotal` line of `/proc/meminfo`. Each value is computed
//! on first use and memoized in an atomic cell.
//!
//! Readers never fail: an unreadable or malformed source is logged and
//! degrades to a sentinel (1 core, 0 MB). Callers must treat those as
//! "unknown", not as measurements.
//!
//! Concurrent first calls may compute the value more than once. Every
//! writer produces the same result for a given device, and the cells are
//! 64-bit atomics, so readers never observe a torn value.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::core::config::ReaderConfig;
use crate::platform::{PlatformError, PlatformResult};

/// Core count reported when the CPU directory cannot be enumerated.
pub const DEFAULT_CORE_COUNT: i64 = 1;

/// RAM size reported when total memory cannot be determined.
pub const UNKNOWN_RAM_MB: i64 = 0;

/// Label of the total-memory line in meminfo.
const MEM_TOTAL_LABEL: &str = "MemTotal";

/// Initial value of both cache cells.
const UNSET: i64 = -1;

static GLOBAL_READER: OnceLock<SystemMetricsReader> = OnceLock::new();

/// Memoizing reader for CPU core count and total RAM.
#[derive(Debug)]
pub struct SystemMetricsReader {
    cpu_dir: PathBuf,
    meminfo_path: PathBuf,
    meminfo_lookahead: usize,
    /// Valid once > 0
    cpu_core_count: AtomicI64,
    /// Valid once >= 0; 0 means unknown
    total_ram_mb: AtomicI64,
}

impl SystemMetricsReader {
    /// Create a reader over the sources named in `config`.
    pub fn new(config: &ReaderConfig) -> Self {
        Self {
            cpu_dir: config.cpu_dir.clone(),
            meminfo_path: config.meminfo_path.clone(),
            meminfo_lookahead: config.lookahead(),
            cpu_core_count: AtomicI64::new(UNSET),
            total_ram_mb: AtomicI64::new(UNSET),
        }
    }

    /// Process-wide reader over the default system paths.
    pub fn global() -> &'static SystemMetricsReader {
        GLOBAL_READER.get_or_init(|| SystemMetricsReader::new(&ReaderConfig::default()))
    }

    /// Number of logical CPUs.
    ///
    /// Returns 1 if the CPU directory cannot be read. A directory with no
    /// `cpuN` entries yields 0, which is not memoized.
    pub fn cpu_core_count(&self) -> i64 {
        let cached = self.cpu_core_count.load(Ordering::Relaxed);
        if cached > 0 {
            return cached;
        }

        let count = match count_cpu_entries(&self.cpu_dir) {
            Ok(count) => {
                debug!("Found {} CPU entries in {}", count, self.cpu_dir.display());
                i64::try_from(count).unwrap_or(i64::MAX)
            }
            Err(e) => {
                warn!(
                    "Could not enumerate {}: {}; assuming {} core",
                    self.cpu_dir.display(),
                    e,
                    DEFAULT_CORE_COUNT
                );
                DEFAULT_CORE_COUNT
            }
        };

        store_once(&self.cpu_core_count, count, |v| v <= 0)
    }

    /// Total RAM in megabytes, or 0 if it cannot be determined.
    pub fn total_ram_megabytes(&self) -> i64 {
        let cached = self.total_ram_mb.load(Ordering::Relaxed);
        if cached >= 0 {
            return cached;
        }

        let megabytes = match read_mem_total_kb(&self.meminfo_path, self.meminfo_lookahead) {
            Ok(Some(kb)) => kb / 1024,
            Ok(None) => {
                debug!(
                    "No {} line in the first {} lines of {}",
                    MEM_TOTAL_LABEL,
                    self.meminfo_lookahead,
                    self.meminfo_path.display()
                );
                UNKNOWN_RAM_MB
            }
            Err(e) if e.is_unavailable() => {
                warn!("Could not read {}: {}", self.meminfo_path.display(), e);
                UNKNOWN_RAM_MB
            }
            Err(e) => {
                warn!("Unexpected content in {}: {}", self.meminfo_path.display(), e);
                UNKNOWN_RAM_MB
            }
        };

        store_once(&self.total_ram_mb, megabytes, |v| v < 0)
    }
}

/// Store `value` unless another caller already stored a valid one.
///
/// Returns whichever value ends up in the cell.
fn store_once(slot: &AtomicI64, value: i64, is_unset: impl Fn(i64) -> bool) -> i64 {
    let mut current = slot.load(Ordering::Relaxed);
    loop {
        if !is_unset(current) {
            return current;
        }
        match slot.compare_exchange_weak(current, value, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return value,
            Err(actual) => current = actual,
        }
    }
}

// ============================================================================
// Source parsers
// ============================================================================

/// True for `cpu` followed by one or more ASCII digits.
pub fn is_cpu_entry_name(name: &str) -> bool {
    name.strip_prefix("cpu")
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// Count `cpuN` entries in `dir`.
pub fn count_cpu_entries(dir: &Path) -> PlatformResult<usize> {
    let mut count = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_name().to_str().is_some_and(is_cpu_entry_name) {
            count += 1;
        }
    }
    Ok(count)
}

/// Scan the first `lookahead` lines of a meminfo file for `MemTotal`.
///
/// Returns `Ok(None)` if the label is not found in the window.
pub fn read_mem_total_kb(path: &Path, lookahead: usize) -> PlatformResult<Option<i64>> {
    let reader = BufReader::new(File::open(path)?);

    for line in reader.lines().take(lookahead.max(1)) {
        let line = line?;
        if line.starts_with(MEM_TOTAL_LABEL) {
            return parse_mem_total_line(&line).map(Some);
        }
    }

    Ok(None)
}

/// Parse `MemTotal: <digits> kB` and return the value in kB.
pub fn parse_mem_total_line(line: &str) -> PlatformResult<i64> {
    let malformed = || PlatformError::InvalidFormat(format!("unexpected meminfo line {:?}", line));

    let rest = line
        .strip_prefix(MEM_TOTAL_LABEL)
        .and_then(|r| r.strip_prefix(':'))
        .ok_or_else(malformed)?;

    // Label must be followed by whitespace before the number.
    if !rest.starts_with(char::is_whitespace) {
        return Err(malformed());
    }

    let mut fields = rest.split_whitespace();
    let (Some(value), Some("kB"), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(malformed());
    };

    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    value.parse::<i64>().map_err(|_| malformed())
}
