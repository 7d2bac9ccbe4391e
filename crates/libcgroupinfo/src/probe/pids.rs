use super::{missing_controller, Probe, ProbeContext};
use crate::controller_type::ControllerType;
use crate::sysinfo::SysInfo;

pub struct Pids {}

impl Probe for Pids {
    fn probe(ctx: &ProbeContext, info: &mut SysInfo) -> Vec<String> {
        if !ctx.controllers.contains(ControllerType::Pids) {
            return vec![missing_controller(ControllerType::Pids)];
        }

        info.pids.pids_limit = true;
        Vec::new()
    }
}
