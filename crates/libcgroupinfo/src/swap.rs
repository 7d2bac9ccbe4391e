use std::path::{Path, PathBuf};

use procfs::{FromRead, ProcessCGroups};

use crate::common::PathBufExt;

pub const CGROUP_MEMORY_SWAP_MAX: &str = "memory.swap.max";

/// Returns the scope of the unified hierarchy entry in a process cgroup
/// mapping file (`/proc/<pid>/cgroup`), i.e. the `0::<path>` line.
pub fn own_unified_scope<P: AsRef<Path>>(proc_cgroup: P) -> Option<PathBuf> {
    let proc_cgroup = proc_cgroup.as_ref();
    let groups = match ProcessCGroups::from_file(proc_cgroup) {
        Ok(groups) => groups,
        Err(err) => {
            tracing::debug!("failed to parse {:?}: {}", proc_cgroup, err);
            return None;
        }
    };

    groups
        .0
        .into_iter()
        .find(|g| g.hierarchy == 0 && g.controllers.iter().all(|c| c.is_empty()))
        .map(|g| g.pathname)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
}

/// Reports whether swap can be limited for the calling process: the
/// `memory.swap.max` file exists in its own scope under `root`. Any failure
/// along the way is reported as unsupported.
pub fn swap_limit_supported<R: AsRef<Path>, P: AsRef<Path>>(root: R, proc_cgroup: P) -> bool {
    let Some(scope) = own_unified_scope(proc_cgroup) else {
        return false;
    };

    match root.as_ref().join_safely(&scope) {
        Ok(scope_path) => scope_path.join(CGROUP_MEMORY_SWAP_MAX).exists(),
        Err(err) => {
            tracing::debug!("invalid own cgroup scope {:?}: {}", scope, err);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{set_fixture, FakeHost};

    #[test]
    fn test_own_scope_unified_entry() {
        let host = FakeHost::new()
            .unwrap()
            .with_own_cgroup("0::/user.slice/user-1000.slice/session-2.scope\n")
            .unwrap();

        assert_eq!(
            own_unified_scope(host.proc_cgroup()),
            Some(PathBuf::from("/user.slice/user-1000.slice/session-2.scope"))
        );
    }

    #[test]
    fn test_own_scope_hybrid_ignores_v1_entries() {
        let host = FakeHost::new()
            .unwrap()
            .with_own_cgroup("12:memory:/docker/abc\n3:cpu,cpuacct:/docker/abc\n0::/docker/abc\n")
            .unwrap();

        assert_eq!(
            own_unified_scope(host.proc_cgroup()),
            Some(PathBuf::from("/docker/abc"))
        );
    }

    #[test]
    fn test_own_scope_v1_only() {
        let host = FakeHost::new()
            .unwrap()
            .with_own_cgroup("4:memory:/user.slice\n2:pids:/user.slice\n")
            .unwrap();

        assert_eq!(own_unified_scope(host.proc_cgroup()), None);
    }

    #[test]
    fn test_swap_supported() {
        let host = FakeHost::new()
            .unwrap()
            .with_own_cgroup("0::/system.slice/engine.service\n")
            .unwrap()
            .with_file("/system.slice/engine.service", CGROUP_MEMORY_SWAP_MAX, "max")
            .unwrap();

        assert!(swap_limit_supported(host.root(), host.proc_cgroup()));
    }

    #[test]
    fn test_swap_file_missing() {
        let host = FakeHost::new()
            .unwrap()
            .with_own_cgroup("0::/system.slice/engine.service\n")
            .unwrap()
            .with_file("/system.slice/engine.service", "memory.max", "max")
            .unwrap();

        assert!(!swap_limit_supported(host.root(), host.proc_cgroup()));
    }

    #[test]
    fn test_swap_lookup_fails() {
        let host = FakeHost::new()
            .unwrap()
            .with_file("/", CGROUP_MEMORY_SWAP_MAX, "max")
            .unwrap();

        // no mapping file at all
        assert!(!swap_limit_supported(host.root(), host.proc_cgroup()));
    }

    #[test]
    fn test_swap_empty_scope() {
        let host = FakeHost::new()
            .unwrap()
            .with_own_cgroup("0::\n")
            .unwrap()
            .with_file("/", CGROUP_MEMORY_SWAP_MAX, "max")
            .unwrap();

        assert!(!swap_limit_supported(host.root(), host.proc_cgroup()));
    }

    #[test]
    fn test_swap_scope_outside_namespace_root() {
        let host = FakeHost::new()
            .unwrap()
            .with_own_cgroup("0::/..\n")
            .unwrap();
        // one level above the mount
        set_fixture(host.dir.path(), CGROUP_MEMORY_SWAP_MAX, "max").unwrap();

        assert!(!swap_limit_supported(host.root(), host.proc_cgroup()));
    }
}
