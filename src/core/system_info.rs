// LaunchPal - core/system_info.rs
//
// System info snapshot seam and display formatting.
// Collection lives in platform::metrics; this module only formats.

use crate::core::model::SystemSnapshot;

/// Source of OS metrics. Polled on demand, once per dialog open or refresh.
pub trait SystemProbe {
    fn snapshot(&mut self) -> SystemSnapshot;
}

/// Format a snapshot as the four display lines of the System Info dialog.
pub fn format_snapshot(snapshot: &SystemSnapshot) -> Vec<String> {
    let battery = match snapshot.battery {
        Some(b) => format!(
            "Battery: {:.0}% ({})",
            b.percent,
            if b.charging { "Charging" } else { "Discharging" }
        ),
        None => "Battery: Data unavailable".to_string(),
    };

    vec![
        format!(
            "CPU: {:.1}% ({} cores)",
            snapshot.cpu_percent, snapshot.cpu_cores
        ),
        format!(
            "RAM: {:.1}% used, {} MB total",
            snapshot.ram_percent, snapshot.ram_total_mb
        ),
        format!(
            "Disk: {:.1}% used, {} GB free",
            snapshot.disk_percent, snapshot.disk_free_gb
        ),
        battery,
    ]
}

/// Percentage of `part` in `total`, 0 when `total` is 0.
pub fn percent_of(part: u64, total: u64) -> f32 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64 * 100.0) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::BatteryStatus;

    fn snapshot(battery: Option<BatteryStatus>) -> SystemSnapshot {
        SystemSnapshot {
            cpu_percent: 12.34,
            cpu_cores: 8,
            ram_percent: 55.0,
            ram_total_mb: 16_384,
            disk_percent: 71.26,
            disk_free_gb: 120,
            battery,
        }
    }

    #[test]
    fn test_format_with_battery() {
        let lines = format_snapshot(&snapshot(Some(BatteryStatus {
            percent: 87.0,
            charging: true,
        })));
        assert_eq!(
            lines,
            vec![
                "CPU: 12.3% (8 cores)",
                "RAM: 55.0% used, 16384 MB total",
                "Disk: 71.3% used, 120 GB free",
                "Battery: 87% (Charging)",
            ]
        );
    }

    #[test]
    fn test_format_discharging() {
        let lines = format_snapshot(&snapshot(Some(BatteryStatus {
            percent: 40.0,
            charging: false,
        })));
        assert_eq!(lines[3], "Battery: 40% (Discharging)");
    }

    #[test]
    fn test_missing_battery_is_not_an_error() {
        let lines = format_snapshot(&snapshot(None));
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], "Battery: Data unavailable");
    }

    #[test]
    fn test_percent_of_handles_zero_total() {
        assert_eq!(percent_of(5, 0), 0.0);
        assert_eq!(percent_of(1, 4), 25.0);
    }
}
