//! Detects which cgroup v2 resource-control features a host supports.
//! The result is a capability table a container engine can consult before
//! accepting resource limits from users. Detection is read-only.
#[cfg(test)]
#[macro_use]
extern crate quickcheck;


pub mod collector;
pub mod common;
pub mod controller_type;
pub mod cpuset_list;
pub mod loader;
pub mod probe;
pub mod swap;
pub mod sysinfo;
pub mod user_ns;

pub use collector::{collect, CollectOptions, Collection};
pub use sysinfo::SysInfo;
