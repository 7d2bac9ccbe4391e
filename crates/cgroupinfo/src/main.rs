//! # cgroupinfo
//! Prints which cgroup v2 resource limits this host can enforce.
mod observability;
mod report;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use libcgroupinfo::{common::DEFAULT_CGROUP_ROOT, CollectOptions};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[clap(version, author = env!("CARGO_PKG_AUTHORS"))]
pub(crate) struct Opts {
    /// mount point of the cgroup v2 hierarchy
    #[clap(long, default_value = DEFAULT_CGROUP_ROOT)]
    root: PathBuf,
    /// scope within the hierarchy to inspect
    #[clap(long, default_value = "/")]
    scope: PathBuf,
    /// do not log the warnings of the collection
    #[clap(short, long)]
    quiet: bool,
    /// output format of the capability table
    #[clap(long, value_enum, default_value = "text")]
    format: OutputFormat,
    /// set the log file to write logs to (default is '/dev/stderr')
    #[clap(short, long)]
    log: Option<PathBuf>,
    /// change log level to debug, but the `log-level` flag takes precedence
    #[clap(long)]
    debug: bool,
    /// set the log level (default is 'warn')
    #[clap(long)]
    log_level: Option<String>,
    /// set the log format ('text' (default), or 'json')
    #[clap(long)]
    log_format: Option<String>,
}

impl From<&Opts> for CollectOptions {
    fn from(opts: &Opts) -> Self {
        CollectOptions::new()
            .with_cgroup_root(&opts.root)
            .with_cgroup_path(&opts.scope)
            .quiet(opts.quiet)
    }
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    if let Err(e) = observability::init(&opts) {
        eprintln!("log init failed: {e:?}");
    }

    tracing::debug!(
        "collecting cgroup v2 capabilities of {:?} under {:?}",
        opts.scope,
        opts.root
    );
    let collection = libcgroupinfo::collect(&CollectOptions::from(&opts));

    let stdout = std::io::stdout();
    match opts.format {
        OutputFormat::Text => report::write_text(stdout.lock(), &collection),
        OutputFormat::Json => report::write_json(stdout.lock(), &collection),
    }
}
