//! One capability probe per resource subsystem. Each probe looks at the
//! controller set of the pass and fills in its part of the snapshot.
use std::path::PathBuf;

use crate::controller_type::ControllerType;
use crate::loader::Controllers;
use crate::sysinfo::SysInfo;

mod cpu;
mod cpuset;
mod devices;
mod io;
mod memory;
mod pids;

pub use cpu::Cpu;
pub use cpuset::CpuSet;
pub use devices::Devices;
pub use io::Io;
pub use memory::Memory;
pub use pids::Pids;

/// Everything a probe may consult. Fixed before the pass starts.
#[derive(Debug, Clone)]
pub struct ProbeContext {
    pub controllers: Controllers,
    pub cgroup_root: PathBuf,
    pub cgroup_path: PathBuf,
    pub proc_cgroup: PathBuf,
    pub in_user_ns: bool,
}

pub trait Probe {
    /// Updates `info` and returns the warnings for this subsystem.
    fn probe(ctx: &ProbeContext, info: &mut SysInfo) -> Vec<String>;
}

pub type ProbeFn = fn(&ProbeContext, &mut SysInfo) -> Vec<String>;

/// Probes in the order they run. Warnings come out in this order too.
pub const PROBES: &[(&str, ProbeFn)] = &[
    ("memory", Memory::probe),
    ("cpu", Cpu::probe),
    ("io", Io::probe),
    ("cpuset", CpuSet::probe),
    ("pids", Pids::probe),
    ("devices", Devices::probe),
];

pub fn missing_controller(controller: ControllerType) -> String {
    format!("Unable to find {controller} controller")
}
