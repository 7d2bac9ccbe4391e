use super::{Probe, ProbeContext};
use crate::sysinfo::SysInfo;

/// Device access is controlled with eBPF programs under cgroup v2, so there is
/// no controller to look for. Attaching them requires privileges a process in
/// a user namespace does not have.
pub struct Devices {}

impl Probe for Devices {
    fn probe(ctx: &ProbeContext, info: &mut SysInfo) -> Vec<String> {
        info.devices_enabled = !ctx.in_user_ns;
        Vec::new()
    }
}
