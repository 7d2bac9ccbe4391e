//! Enumerates the cgroup v2 controllers attached at a scope of the unified
//! hierarchy.
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use crate::common::{self, JoinSafelyError, PathBufExt, WrappedIoError};
use crate::controller_type::{ControllerType, CONTROLLER_TYPES};

pub const CGROUP_CONTROLLERS: &str = "cgroup.controllers";

#[derive(thiserror::Error, Debug)]
pub enum LoaderError {
    #[error("io error: {0}")]
    WrappedIo(#[from] WrappedIoError),
    #[error("invalid cgroup scope: {0}")]
    JoinSafely(#[from] JoinSafelyError),
    #[error("cannot get available controllers. {0} does not exist")]
    DoesNotExist(PathBuf),
}

/// The set of controllers available at one scope. Built once per collection
/// pass and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Controllers {
    inner: HashSet<ControllerType>,
}

impl Controllers {
    pub fn contains(&self, controller: ControllerType) -> bool {
        self.inner.contains(&controller)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Controllers in a stable order, for display.
    pub fn sorted(&self) -> Vec<ControllerType> {
        CONTROLLER_TYPES
            .iter()
            .copied()
            .filter(|c| self.inner.contains(c))
            .collect()
    }

    /// Parses the whitespace separated content of `cgroup.controllers`.
    /// Controllers this crate does not know about are skipped.
    pub fn parse(content: &str) -> Self {
        let inner = content
            .split_whitespace()
            .filter_map(|name| match name.parse::<ControllerType>() {
                Ok(controller) => Some(controller),
                Err(err) => {
                    tracing::debug!("skipping controller: {}", err);
                    None
                }
            })
            .collect();

        Self { inner }
    }
}

impl FromIterator<ControllerType> for Controllers {
    fn from_iter<I: IntoIterator<Item = ControllerType>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

/// Reads `{root}/{scope}/cgroup.controllers`. The scope is always resolved
/// below the root, even when it is given as an absolute path.
pub fn load_controllers<P: AsRef<Path>, S: AsRef<Path>>(
    root: P,
    scope: S,
) -> Result<Controllers, LoaderError> {
    let scope_path = root.as_ref().join_safely(scope)?;
    let controllers_path = scope_path.join(CGROUP_CONTROLLERS);
    if !controllers_path.exists() {
        return Err(LoaderError::DoesNotExist(controllers_path));
    }

    let content = common::read_cgroup_file(&controllers_path)?;
    let controllers = Controllers::parse(&content);
    tracing::debug!(
        "loaded {} controllers from {:?}",
        controllers.len(),
        controllers_path
    );

    Ok(controllers)
}
