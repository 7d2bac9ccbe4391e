use std::{fmt::Display, str::FromStr};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ControllerType {
    Cpu,
    CpuSet,
    Io,
    Memory,
    HugeTlb,
    Pids,
    Rdma,
    Misc,
}

impl Display for ControllerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let print = match self {
            Self::Cpu => "cpu",
            Self::CpuSet => "cpuset",
            Self::Io => "io",
            Self::Memory => "memory",
            Self::HugeTlb => "hugetlb",
            Self::Pids => "pids",
            Self::Rdma => "rdma",
            Self::Misc => "misc",
        };

        write!(f, "{print}")
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown cgroup v2 controller: {0}")]
pub struct UnknownControllerError(pub String);

impl FromStr for ControllerType {
    type Err = UnknownControllerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cpu" => Ok(Self::Cpu),
            "cpuset" => Ok(Self::CpuSet),
            "io" => Ok(Self::Io),
            "memory" => Ok(Self::Memory),
            "hugetlb" => Ok(Self::HugeTlb),
            "pids" => Ok(Self::Pids),
            "rdma" => Ok(Self::Rdma),
            "misc" => Ok(Self::Misc),
            other => Err(UnknownControllerError(other.to_owned())),
        }
    }
}

pub const CONTROLLER_TYPES: &[ControllerType] = &[
    ControllerType::Cpu,
    ControllerType::CpuSet,
    ControllerType::HugeTlb,
    ControllerType::Io,
    ControllerType::Memory,
    ControllerType::Pids,
    ControllerType::Rdma,
    ControllerType::Misc,
];
