//! The capability snapshot produced by one collection pass.
use std::path::PathBuf;

use serde::Serialize;

use crate::cpuset_list::{self, ParseListError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MemoryInfo {
    /// Whether memory limit is supported or not
    pub memory_limit: bool,
    /// Whether swap limit is supported or not
    pub swap_limit: bool,
    /// Whether soft limit (memory.low) is supported or not
    pub memory_reservation: bool,
    /// Whether OOM killer disable is supported or not. Never under v2.
    pub oom_kill_disable: bool,
    /// Whether memory swappiness is supported or not. Never under v2.
    pub memory_swappiness: bool,
    /// Whether kernel memory limit is supported or not. Never under v2.
    pub kernel_memory: bool,
    /// Whether kernel memory TCP limit is supported or not. Never under v2.
    pub kernel_memory_tcp: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CpuInfo {
    /// Whether CPU shares (cpu.weight) is supported or not
    pub cpu_shares: bool,
    /// Whether CFS quota and period (cpu.max) is supported or not
    pub cpu_cfs: bool,
    /// Whether realtime scheduling is supported or not. Never under v2.
    pub cpu_realtime: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BlkioInfo {
    pub blkio_weight: bool,
    pub blkio_weight_device: bool,
    pub blkio_read_bps_device: bool,
    pub blkio_write_bps_device: bool,
    pub blkio_read_iops_device: bool,
    pub blkio_write_iops_device: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CpusetInfo {
    /// Whether cpuset is supported or not
    pub cpuset: bool,
    /// Available cpus, in kernel list format
    pub cpus: String,
    /// Available memory nodes, in kernel list format
    pub mems: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PidsInfo {
    /// Whether pids limit is supported or not
    pub pids_limit: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SysInfo {
    /// True when the snapshot was collected from the unified hierarchy
    pub cgroup_unified: bool,
    /// Scope within the hierarchy the snapshot was collected for
    pub cgroup_path: PathBuf,
    pub memory: MemoryInfo,
    pub cpu: CpuInfo,
    pub blkio: BlkioInfo,
    pub cpuset: CpusetInfo,
    pub pids: PidsInfo,
    /// Whether device cgroup control can be exercised
    pub devices_enabled: bool,
}

impl SysInfo {
    pub(crate) fn unified(cgroup_path: PathBuf) -> Self {
        Self {
            cgroup_unified: true,
            cgroup_path,
            ..Default::default()
        }
    }

    /// Checks whether every cpu in `provided` is in the effective cpuset of
    /// this host.
    pub fn is_cpuset_cpus_available(&self, provided: &str) -> Result<bool, ParseListError> {
        is_cpuset_list_available(provided, &self.cpuset.cpus)
    }

    /// Checks whether every memory node in `provided` is in the effective
    /// memory node set of this host.
    pub fn is_cpuset_mems_available(&self, provided: &str) -> Result<bool, ParseListError> {
        is_cpuset_list_available(provided, &self.cpuset.mems)
    }
}

fn is_cpuset_list_available(provided: &str, available: &str) -> Result<bool, ParseListError> {
    let requested = cpuset_list::parse_uint_list(provided)?;
    let available = match cpuset_list::parse_uint_list(available) {
        Ok(available) => available,
        Err(err) => {
            tracing::debug!("unparsable effective set {:?}: {}", available, err);
            return Ok(false);
        }
    };

    Ok(requested.is_subset(&available))
}
