use super::{missing_controller, Probe, ProbeContext};
use crate::controller_type::ControllerType;
use crate::sysinfo::{BlkioInfo, SysInfo};

pub struct Io {}

impl Probe for Io {
    fn probe(ctx: &ProbeContext, info: &mut SysInfo) -> Vec<String> {
        if !ctx.controllers.contains(ControllerType::Io) {
            return vec![missing_controller(ControllerType::Io)];
        }

        info.blkio = BlkioInfo {
            blkio_weight: true,
            blkio_weight_device: true,
            blkio_read_bps_device: true,
            blkio_write_bps_device: true,
            blkio_read_iops_device: true,
            blkio_write_iops_device: true,
        };
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::test_util::context;

    #[test]
    fn test_io_present() {
        let mut info = SysInfo::default();
        let warnings = Io::probe(&context(&[ControllerType::Io]), &mut info);

        assert!(warnings.is_empty());
        assert!(info.blkio.blkio_weight);
        assert!(info.blkio.blkio_weight_device);
        assert!(info.blkio.blkio_read_bps_device);
        assert!(info.blkio.blkio_write_bps_device);
        assert!(info.blkio.blkio_read_iops_device);
        assert!(info.blkio.blkio_write_iops_device);
    }

    #[test]
    fn test_io_absent() {
        let mut info = SysInfo::default();
        let warnings = Io::probe(&context(&[]), &mut info);

        assert_eq!(warnings, vec!["Unable to find io controller".to_owned()]);
        assert_eq!(info.blkio, BlkioInfo::default());
    }
}
