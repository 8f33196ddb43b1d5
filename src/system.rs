//! Host and platform facts reported by the root endpoint.

use serde::Serialize;
use sysinfo::System;

/// Snapshot of host facts, collected per request.
#[derive(Debug, Clone, Serialize)]
pub struct SystemInfo {
    /// Hostname, `None` when the OS lookup fails.
    pub hostname: Option<String>,
    /// Operating system family, e.g. `linux`.
    pub platform: &'static str,
    /// OS release, empty when unknown.
    pub platform_version: String,
    /// CPU architecture, e.g. `x86_64`.
    pub architecture: &'static str,
    /// Logical CPU count.
    pub cpu_count: usize,
}

impl SystemInfo {
    /// Collect host facts. Never fails; lookups that error degrade to
    /// empty values.
    pub fn collect() -> Self {
        Self {
            hostname: System::host_name(),
            platform: std::env::consts::OS,
            platform_version: System::os_version().unwrap_or_default(),
            architecture: std::env::consts::ARCH,
            cpu_count: cpu_count(),
        }
    }
}

/// Logical CPUs available to the process.
pub fn cpu_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_reports_compile_time_platform() {
        let info = SystemInfo::collect();
        assert_eq!(info.platform, std::env::consts::OS);
        assert_eq!(info.architecture, std::env::consts::ARCH);
        assert!(info.cpu_count >= 1);
    }

    #[test]
    fn missing_hostname_serializes_as_null() {
        let info = SystemInfo {
            hostname: None,
            platform: "linux",
            platform_version: String::new(),
            architecture: "x86_64",
            cpu_count: 4,
        };
        let json = serde_json::to_value(&info).unwrap();
        assert!(json["hostname"].is_null());
        assert_eq!(json["cpu_count"], 4);
        assert_eq!(json["platform_version"], "");
    }
}
