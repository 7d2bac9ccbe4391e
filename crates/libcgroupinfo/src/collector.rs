//! Runs a collection pass: load the controllers of the scope once, then every
//! probe in order against a fresh snapshot.
use std::path::PathBuf;

use serde::Serialize;

use crate::common::{DEFAULT_CGROUP_ROOT, DEFAULT_PROC_CGROUP, DEFAULT_UID_MAP};
use crate::loader::{self, Controllers};
use crate::probe::{ProbeContext, PROBES};
use crate::sysinfo::SysInfo;
use crate::user_ns;

/// Options of a collection pass.
#[derive(Debug, Clone)]
pub struct CollectOptions {
    /// Mount point of the unified hierarchy
    pub cgroup_root: PathBuf,
    /// Scope within the hierarchy to inspect
    pub cgroup_path: PathBuf,
    /// Cgroup mapping file of the calling process
    pub proc_cgroup: PathBuf,
    /// uid map of the calling process
    pub uid_map: PathBuf,
    /// Overrides user namespace detection when set
    pub in_user_ns: Option<bool>,
    /// Do not log the warnings of the pass
    pub quiet: bool,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            cgroup_root: PathBuf::from(DEFAULT_CGROUP_ROOT),
            cgroup_path: PathBuf::from("/"),
            proc_cgroup: PathBuf::from(DEFAULT_PROC_CGROUP),
            uid_map: PathBuf::from(DEFAULT_UID_MAP),
            in_user_ns: None,
            quiet: false,
        }
    }
}

impl CollectOptions {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_cgroup_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.cgroup_root = root.into();
        self
    }

    pub fn with_cgroup_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.cgroup_path = path.into();
        self
    }

    pub fn with_proc_cgroup<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.proc_cgroup = path.into();
        self
    }

    pub fn with_uid_map<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.uid_map = path.into();
        self
    }

    pub fn with_user_ns(mut self, in_user_ns: bool) -> Self {
        self.in_user_ns = Some(in_user_ns);
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

/// Result of one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collection {
    pub info: SysInfo,
    /// One entry per missing subsystem, in probe order
    pub warnings: Vec<String>,
}

pub fn collect(opts: &CollectOptions) -> Collection {
    let controllers = match loader::load_controllers(&opts.cgroup_root, &opts.cgroup_path) {
        Ok(controllers) => controllers,
        Err(err) => {
            tracing::warn!("{}", err);
            Controllers::default()
        }
    };

    let ctx = ProbeContext {
        controllers,
        cgroup_root: opts.cgroup_root.clone(),
        cgroup_path: opts.cgroup_path.clone(),
        proc_cgroup: opts.proc_cgroup.clone(),
        in_user_ns: opts
            .in_user_ns
            .unwrap_or_else(|| user_ns::running_in_user_ns(&opts.uid_map)),
    };

    let mut info = SysInfo::unified(opts.cgroup_path.clone());
    let mut warnings = Vec::new();
    for (name, probe) in PROBES {
        let found = probe(&ctx, &mut info);
        tracing::debug!("{} probe returned {} warnings", name, found.len());
        warnings.extend(found);
    }

    if !opts.quiet {
        for warning in &warnings {
            tracing::warn!("{}", warning);
        }
    }

    Collection { info, warnings }
}
