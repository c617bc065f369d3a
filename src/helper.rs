//! Environment, device and reproducibility helpers.

use std::fmt;
use std::fs;
use std::path::Path;

use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

/// A snapshot of the runtime environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvironmentInfo {
    pub crate_name: &'static str,
    pub crate_version: &'static str,
    pub os: &'static str,
    pub arch: &'static str,
    pub family: &'static str,
    /// Threads the OS allows this process to run in parallel.
    pub parallelism: usize,
}

impl fmt::Display for EnvironmentInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "=== Environment Information ===")?;
        writeln!(f, "{} version: {}", self.crate_name, self.crate_version)?;
        writeln!(f, "Platform: {}-{} ({})", self.os, self.arch, self.family)?;
        writeln!(f, "Available parallelism: {}", self.parallelism)?;
        write!(f, "===============================")
    }
}

/// Collect information about the environment.
pub fn env() -> EnvironmentInfo {
    let info = EnvironmentInfo {
        crate_name: env!("CARGO_PKG_NAME"),
        crate_version: env!("CARGO_PKG_VERSION"),
        os: std::env::consts::OS,
        arch: std::env::consts::ARCH,
        family: std::env::consts::FAMILY,
        parallelism: std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1),
    };
    info!(
        "{} {} on {}-{}",
        info.crate_name, info.crate_version, info.os, info.arch
    );
    info
}

/// The device computations should run on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Device {
    Cpu,
    Cuda(usize),
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Device::Cpu => write!(f, "cpu"),
            Device::Cuda(ordinal) => write!(f, "cuda:{ordinal}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceInfo {
    pub device: Device,
    pub cuda_available: bool,
    /// NVIDIA kernel driver version, if one is loaded.
    pub driver_version: Option<String>,
    pub device_count: usize,
    /// Model name of the selected GPU.
    pub name: Option<String>,
}

impl fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "=== Device Information ===")?;
        writeln!(f, "CUDA available: {}", self.cuda_available)?;
        if self.cuda_available {
            if let Some(version) = &self.driver_version {
                writeln!(f, "Driver version: {version}")?;
            }
            writeln!(f, "CUDA device count: {}", self.device_count)?;
            if let Some(name) = &self.name {
                writeln!(f, "GPU: {name}")?;
            }
        }
        writeln!(f, "Using device: {}", self.device)?;
        write!(f, "==========================")
    }
}

const NVIDIA_PROC: &str = "/proc/driver/nvidia";

/// Pick the device to compute on: the first CUDA GPU if one is visible,
/// otherwise the CPU.
pub fn dev() -> DeviceInfo {
    let visible = std::env::var("CUDA_VISIBLE_DEVICES").ok();
    let info = probe_devices(Path::new(NVIDIA_PROC), visible.as_deref());
    info!("Using device: {}", info.device);
    info
}

/// Inspect an NVIDIA driver proc tree rooted at `root`.
///
/// `visible` mirrors `CUDA_VISIBLE_DEVICES`: an empty value or `-1` hides
/// every GPU.
fn probe_devices(root: &Path, visible: Option<&str>) -> DeviceInfo {
    let cpu = DeviceInfo {
        device: Device::Cpu,
        cuda_available: false,
        driver_version: None,
        device_count: 0,
        name: None,
    };
    if let Some(v) = visible.map(str::trim) {
        if v.is_empty() || v == "-1" {
            debug!("CUDA_VISIBLE_DEVICES hides all GPUs");
            return cpu;
        }
    }

    let driver_version = match fs::read_to_string(root.join("version")) {
        Ok(text) => parse_driver_version(&text),
        Err(e) => {
            debug!("no NVIDIA driver found: {}", e);
            return cpu;
        }
    };
    let mut gpus: Vec<_> = match fs::read_dir(root.join("gpus")) {
        Ok(entries) => entries.filter_map(|e| e.ok()).map(|e| e.path()).collect(),
        Err(_) => Vec::new(),
    };
    if gpus.is_empty() {
        return cpu;
    }
    gpus.sort();
    let name = fs::read_to_string(gpus[0].join("information"))
        .ok()
        .and_then(|text| parse_model(&text));

    DeviceInfo {
        device: Device::Cuda(0),
        cuda_available: true,
        driver_version,
        device_count: gpus.len(),
        name,
    }
}

// e.g. "NVRM version: NVIDIA UNIX x86_64 Kernel Module  535.104.05  Sat Aug 19 ..."
fn parse_driver_version(text: &str) -> Option<String> {
    let line = text.lines().next()?;
    let rest = line.split("Kernel Module").nth(1)?;
    rest.split_whitespace().next().map(str::to_string)
}

fn parse_model(text: &str) -> Option<String> {
    text.lines()
        .find_map(|line| line.strip_prefix("Model:"))
        .map(|model| model.trim().to_string())
}

/// A seed value and the generators derived from it.
///
/// Nothing global is touched: code that needs randomness asks the source for
/// its own generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SeedSource {
    value: u64,
}

impl SeedSource {
    pub fn value(&self) -> u64 {
        self.value
    }

    /// A fresh generator seeded with this value.
    pub fn rng(&self) -> ChaChaRng {
        ChaChaRng::seed_from_u64(self.value)
    }

    /// An independent stream for worker `worker`, reproducible per worker.
    pub fn worker_rng(&self, worker: u64) -> ChaChaRng {
        let mut rng = self.rng();
        rng.set_stream(worker.wrapping_add(1));
        rng
    }
}

impl fmt::Display for SeedSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Fix the seed used for reproducible runs.
pub fn seed(value: u64) -> SeedSource {
    info!("Seed value: {}", value);
    SeedSource { value }
}

// Backward compatible names.
pub use self::dev as get_device_info;
pub use self::env as print_environment_info;
pub use self::seed as set_all_seeds;
