// LaunchPal - platform/metrics.rs
//
// OS metrics collection for the System Info dialog.
//
// CPU, memory, and disk come from `sysinfo`. Battery state is read from
// sysfs (`/sys/class/power_supply/BAT*`) first, then from the OS battery API
// via `starship-battery`. A machine without a battery reports `None`.

use crate::core::model::{BatteryStatus, SystemSnapshot};
use crate::core::system_info::{percent_of, SystemProbe};
use crate::util::constants;
use starship_battery::units::ratio::percent as battery_percent;
use std::path::{Path, PathBuf};
use sysinfo::{Disks, System};

/// `SystemProbe` backed by a long-lived `sysinfo::System`.
///
/// CPU usage is measured between consecutive refreshes, so the probe keeps
/// its `System` alive and primes it on construction. The first snapshot
/// reports usage since the probe was created.
pub struct SysinfoProbe {
    system: System,
    power_supply_dir: PathBuf,
}

impl SysinfoProbe {
    pub fn new() -> Self {
        let mut system = System::new();
        system.refresh_cpu();
        system.refresh_memory();
        Self {
            system,
            power_supply_dir: PathBuf::from(constants::POWER_SUPPLY_DIR),
        }
    }
}

impl Default for SysinfoProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemProbe for SysinfoProbe {
    fn snapshot(&mut self) -> SystemSnapshot {
        self.system.refresh_cpu();
        self.system.refresh_memory();

        let total_mem = self.system.total_memory();
        let used_mem = self.system.used_memory();

        let disks = Disks::new_with_refreshed_list();
        let usage: Vec<DiskUsage> = disks
            .list()
            .iter()
            .map(|d| DiskUsage {
                mount_point: d.mount_point().to_path_buf(),
                total: d.total_space(),
                available: d.available_space(),
            })
            .collect();
        let system_disk = pick_system_disk(&usage, &system_root());

        let (disk_percent, disk_free_gb) = match system_disk {
            Some(d) => (
                percent_of(d.total.saturating_sub(d.available), d.total),
                d.available / constants::BYTES_PER_GB,
            ),
            None => {
                tracing::debug!("No disks reported; disk usage shown as zero");
                (0.0, 0)
            }
        };

        let snapshot = SystemSnapshot {
            cpu_percent: self.system.global_cpu_info().cpu_usage(),
            cpu_cores: self.system.cpus().len(),
            ram_percent: percent_of(used_mem, total_mem),
            ram_total_mb: total_mem / constants::BYTES_PER_MB,
            disk_percent,
            disk_free_gb,
            battery: read_battery(&self.power_supply_dir).or_else(read_os_battery),
        };

        tracing::debug!(?snapshot, "System snapshot collected");
        snapshot
    }
}

/// Capacity figures for one mounted disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskUsage {
    pub mount_point: PathBuf,
    pub total: u64,
    pub available: u64,
}

/// Mount point of the disk the OS runs from.
fn system_root() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        let drive = std::env::var("SystemDrive").unwrap_or_else(|_| "C:".to_string());
        PathBuf::from(format!("{drive}\\"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        PathBuf::from("/")
    }
}

/// Choose the disk mounted at `root`, or the largest disk if none is.
pub fn pick_system_disk<'a>(disks: &'a [DiskUsage], root: &Path) -> Option<&'a DiskUsage> {
    disks
        .iter()
        .find(|d| d.mount_point == root)
        .or_else(|| disks.iter().max_by_key(|d| d.total))
}

/// Read the first battery under `power_supply_dir`.
///
/// Returns `None` when the directory is missing, no `BAT*` entry exists,
/// or its capacity cannot be parsed.
pub fn read_battery(power_supply_dir: &Path) -> Option<BatteryStatus> {
    let entries = std::fs::read_dir(power_supply_dir).ok()?;

    let mut batteries: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().starts_with("BAT"))
        .map(|e| e.path())
        .collect();
    batteries.sort();

    batteries.iter().find_map(|dir| {
        let capacity = std::fs::read_to_string(dir.join("capacity")).ok()?;
        let status = std::fs::read_to_string(dir.join("status")).unwrap_or_default();
        parse_battery(&capacity, &status)
    })
}

/// Parse sysfs `capacity` and `status` file contents.
///
/// Anything other than "Discharging" counts as plugged in, so "Full" and
/// "Not charging" report as charging.
pub fn parse_battery(capacity: &str, status: &str) -> Option<BatteryStatus> {
    let percent: f32 = capacity.trim().parse().ok()?;
    Some(BatteryStatus {
        percent: percent.clamp(0.0, 100.0),
        charging: status.trim() != "Discharging",
    })
}

/// Query the OS battery API for the first battery it reports.
pub fn read_os_battery() -> Option<BatteryStatus> {
    let manager = match starship_battery::Manager::new() {
        Ok(m) => m,
        Err(e) => {
            tracing::debug!(error = %e, "Battery manager unavailable");
            return None;
        }
    };
    let mut batteries = match manager.batteries() {
        Ok(b) => b,
        Err(e) => {
            tracing::debug!(error = %e, "Battery enumeration failed");
            return None;
        }
    };
    batteries.find_map(|b| match b {
        Ok(battery) => Some(battery_status(
            battery.state(),
            battery.state_of_charge().get::<battery_percent>(),
        )),
        Err(e) => {
            tracing::debug!(error = %e, "Skipping unreadable battery");
            None
        }
    })
}

/// Map an OS battery state and charge percentage to `BatteryStatus`.
///
/// Same rule as sysfs: only a draining battery counts as unplugged.
pub fn battery_status(state: starship_battery::State, charge_percent: f32) -> BatteryStatus {
    BatteryStatus {
        percent: charge_percent.clamp(0.0, 100.0),
        charging: !matches!(
            state,
            starship_battery::State::Discharging | starship_battery::State::Empty
        ),
    }
}
