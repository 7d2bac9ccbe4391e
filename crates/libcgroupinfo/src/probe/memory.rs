use super::{missing_controller, Probe, ProbeContext};
use crate::controller_type::ControllerType;
use crate::swap;
use crate::sysinfo::SysInfo;

pub struct Memory {}

impl Probe for Memory {
    fn probe(ctx: &ProbeContext, info: &mut SysInfo) -> Vec<String> {
        if !ctx.controllers.contains(ControllerType::Memory) {
            return vec![missing_controller(ControllerType::Memory)];
        }

        info.memory.memory_limit = true;
        info.memory.swap_limit = swap::swap_limit_supported(&ctx.cgroup_root, &ctx.proc_cgroup);
        info.memory.memory_reservation = true;
        // v1 only knobs, the unified hierarchy has no files for them
        info.memory.oom_kill_disable = false;
        info.memory.memory_swappiness = false;
        info.memory.kernel_memory = false;
        info.memory.kernel_memory_tcp = false;
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::test_util::context;
    use crate::swap::CGROUP_MEMORY_SWAP_MAX;
    use crate::sysinfo::MemoryInfo;
    use crate::test::FakeHost;

    #[test]
    fn test_memory_present_without_swap() {
        let mut info = SysInfo::default();
        let warnings = Memory::probe(&context(&[ControllerType::Memory]), &mut info);

        assert!(warnings.is_empty());
        assert_eq!(
            info.memory,
            MemoryInfo {
                memory_limit: true,
                memory_reservation: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_memory_present_with_swap() {
        let host = FakeHost::new()
            .unwrap()
            .with_own_cgroup("0::/engine\n")
            .unwrap()
            .with_file("/engine", CGROUP_MEMORY_SWAP_MAX, "max\n")
            .unwrap();
        let mut ctx = context(&[ControllerType::Memory]);
        ctx.cgroup_root = host.root();
        ctx.proc_cgroup = host.proc_cgroup();

        let mut info = SysInfo::default();
        let warnings = Memory::probe(&ctx, &mut info);

        assert!(warnings.is_empty());
        assert!(info.memory.memory_limit);
        assert!(info.memory.swap_limit);
        assert!(!info.memory.oom_kill_disable);
        assert!(!info.memory.memory_swappiness);
        assert!(!info.memory.kernel_memory);
        assert!(!info.memory.kernel_memory_tcp);
    }

    #[test]
    fn test_memory_absent_skips_swap() {
        let host = FakeHost::new()
            .unwrap()
            .with_own_cgroup("0::/\n")
            .unwrap()
            .with_file("/", CGROUP_MEMORY_SWAP_MAX, "max\n")
            .unwrap();
        let mut ctx = context(&[ControllerType::Cpu, ControllerType::Pids]);
        ctx.cgroup_root = host.root();
        ctx.proc_cgroup = host.proc_cgroup();

        let mut info = SysInfo::default();
        let warnings = Memory::probe(&ctx, &mut info);

        assert_eq!(warnings, vec!["Unable to find memory controller".to_owned()]);
        assert_eq!(info.memory, MemoryInfo::default());
    }
}
