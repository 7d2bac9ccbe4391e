//! Renders a collection pass for humans or machines.
use std::io::Write;

use anyhow::Result;
use libcgroupinfo::{Collection, SysInfo};
use tabwriter::TabWriter;

fn supported(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn feature_rows(info: &SysInfo) -> Vec<(&'static str, String)> {
    let flags = [
        ("memory limit", info.memory.memory_limit),
        ("swap limit", info.memory.swap_limit),
        ("memory reservation", info.memory.memory_reservation),
        ("oom kill disable", info.memory.oom_kill_disable),
        ("memory swappiness", info.memory.memory_swappiness),
        ("kernel memory", info.memory.kernel_memory),
        ("kernel memory tcp", info.memory.kernel_memory_tcp),
        ("cpu shares", info.cpu.cpu_shares),
        ("cpu cfs", info.cpu.cpu_cfs),
        ("cpu realtime", info.cpu.cpu_realtime),
        ("blkio weight", info.blkio.blkio_weight),
        ("blkio weight device", info.blkio.blkio_weight_device),
        ("blkio read bps device", info.blkio.blkio_read_bps_device),
        ("blkio write bps device", info.blkio.blkio_write_bps_device),
        ("blkio read iops device", info.blkio.blkio_read_iops_device),
        ("blkio write iops device", info.blkio.blkio_write_iops_device),
        ("cpuset", info.cpuset.cpuset),
        ("pids limit", info.pids.pids_limit),
        ("devices", info.devices_enabled),
    ];

    let mut rows: Vec<(&'static str, String)> = flags
        .into_iter()
        .map(|(name, flag)| (name, supported(flag).to_owned()))
        .collect();
    rows.push(("cpus", info.cpuset.cpus.clone()));
    rows.push(("mems", info.cpuset.mems.clone()));
    rows
}

pub fn write_text<W: Write>(out: W, collection: &Collection) -> Result<()> {
    let mut tab_writer = TabWriter::new(out);
    writeln!(
        &mut tab_writer,
        "Cgroup path\t{}",
        collection.info.cgroup_path.display()
    )?;
    writeln!(&mut tab_writer, "FEATURE\tSUPPORTED")?;
    for (name, value) in feature_rows(&collection.info) {
        writeln!(&mut tab_writer, "{name}\t{value}")?;
    }
    for warning in &collection.warnings {
        writeln!(&mut tab_writer, "WARNING: {warning}")?;
    }
    tab_writer.flush()?;

    Ok(())
}

pub fn write_json<W: Write>(mut out: W, collection: &Collection) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, collection)?;
    writeln!(out)?;
    Ok(())
}
