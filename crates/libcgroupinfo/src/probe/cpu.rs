use super::{missing_controller, Probe, ProbeContext};
use crate::controller_type::ControllerType;
use crate::sysinfo::SysInfo;

pub struct Cpu {}

impl Probe for Cpu {
    fn probe(ctx: &ProbeContext, info: &mut SysInfo) -> Vec<String> {
        if !ctx.controllers.contains(ControllerType::Cpu) {
            return vec![missing_controller(ControllerType::Cpu)];
        }

        info.cpu.cpu_shares = true;
        info.cpu.cpu_cfs = true;
        // cgroup v2 has no realtime runtime knobs
        info.cpu.cpu_realtime = false;
        Vec::new()
    }
}
