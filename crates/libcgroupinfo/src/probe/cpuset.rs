use std::path::Path;

use super::{missing_controller, Probe, ProbeContext};
use crate::common::{self, PathBufExt};
use crate::controller_type::ControllerType;
use crate::sysinfo::SysInfo;

pub const CGROUP_CPUSET_CPUS_EFFECTIVE: &str = "cpuset.cpus.effective";
pub const CGROUP_CPUSET_MEMS_EFFECTIVE: &str = "cpuset.mems.effective";

pub struct CpuSet {}

impl Probe for CpuSet {
    fn probe(ctx: &ProbeContext, info: &mut SysInfo) -> Vec<String> {
        if !ctx.controllers.contains(ControllerType::CpuSet) {
            return vec![missing_controller(ControllerType::CpuSet)];
        }
        info.cpuset.cpuset = true;

        // The effective values are informational. Failing to read them
        // leaves them empty and is not reported as a warning.
        let scope_path = match ctx.cgroup_root.join_safely(&ctx.cgroup_path) {
            Ok(path) => path,
            Err(err) => {
                tracing::debug!("cannot resolve cpuset scope: {}", err);
                return Vec::new();
            }
        };

        let Some(cpus) = Self::read_effective(&scope_path, CGROUP_CPUSET_CPUS_EFFECTIVE) else {
            return Vec::new();
        };
        info.cpuset.cpus = cpus;

        if let Some(mems) = Self::read_effective(&scope_path, CGROUP_CPUSET_MEMS_EFFECTIVE) {
            info.cpuset.mems = mems;
        }

        Vec::new()
    }
}

impl CpuSet {
    fn read_effective(scope_path: &Path, file: &str) -> Option<String> {
        match common::read_cgroup_file(scope_path.join(file)) {
            Ok(content) => Some(content.trim().to_owned()),
            Err(err) => {
                tracing::debug!("{}", err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::test_util::context;
    use crate::test::FakeHost;

    fn context_for(host: &FakeHost, scope: &str) -> ProbeContext {
        let mut ctx = context(&[ControllerType::CpuSet]);
        ctx.cgroup_root = host.root();
        ctx.cgroup_path = scope.into();
        ctx
    }

    #[test]
    fn test_cpuset_effective_values() {
        let host = FakeHost::new()
            .unwrap()
            .with_file("/", CGROUP_CPUSET_CPUS_EFFECTIVE, "0-7\n")
            .unwrap()
            .with_file("/", CGROUP_CPUSET_MEMS_EFFECTIVE, "0\n")
            .unwrap();

        let mut info = SysInfo::default();
        let warnings = CpuSet::probe(&context_for(&host, "/"), &mut info);

        assert!(warnings.is_empty());
        assert!(info.cpuset.cpuset);
        assert_eq!(info.cpuset.cpus, "0-7");
        assert_eq!(info.cpuset.mems, "0");
    }

    #[test]
    fn test_cpuset_reads_from_scope() {
        let host = FakeHost::new()
            .unwrap()
            .with_file("/", CGROUP_CPUSET_CPUS_EFFECTIVE, "0-7")
            .unwrap()
            .with_file("/engine.slice", CGROUP_CPUSET_CPUS_EFFECTIVE, "2-3")
            .unwrap()
            .with_file("/engine.slice", CGROUP_CPUSET_MEMS_EFFECTIVE, "1")
            .unwrap();

        let mut info = SysInfo::default();
        CpuSet::probe(&context_for(&host, "/engine.slice"), &mut info);

        assert_eq!(info.cpuset.cpus, "2-3");
        assert_eq!(info.cpuset.mems, "1");
    }

    #[test]
    fn test_cpuset_unreadable_cpus_skips_mems() {
        let host = FakeHost::new()
            .unwrap()
            .with_file("/", CGROUP_CPUSET_MEMS_EFFECTIVE, "0")
            .unwrap();

        let mut info = SysInfo::default();
        let warnings = CpuSet::probe(&context_for(&host, "/"), &mut info);

        assert!(warnings.is_empty());
        assert!(info.cpuset.cpuset);
        assert!(info.cpuset.cpus.is_empty());
        assert!(info.cpuset.mems.is_empty());
    }

    #[test]
    fn test_cpuset_unreadable_mems() {
        let host = FakeHost::new()
            .unwrap()
            .with_file("/", CGROUP_CPUSET_CPUS_EFFECTIVE, "0-1")
            .unwrap();

        let mut info = SysInfo::default();
        let warnings = CpuSet::probe(&context_for(&host, "/"), &mut info);

        assert!(warnings.is_empty());
        assert_eq!(info.cpuset.cpus, "0-1");
        assert!(info.cpuset.mems.is_empty());
    }

    #[test]
    fn test_cpuset_absent() {
        let mut info = SysInfo::default();
        let warnings = CpuSet::probe(&context(&[ControllerType::Cpu]), &mut info);

        assert_eq!(warnings, vec!["Unable to find cpuset controller".to_owned()]);
        assert!(!info.cpuset.cpuset);
    }
}
