use std::{fs, path::Path};

use crate::common::{WrapIoResult, WrappedIoError};

/// Identity mapping of the initial user namespace: every uid maps to itself.
const INITIAL_UID_MAP: [u64; 3] = [0, 0, 4294967295];

/// Reports whether the process owning `uid_map` (usually
/// `/proc/self/uid_map`) runs inside a user namespace. A missing map means
/// the kernel has no user namespace support, so the process cannot be in one.
pub fn running_in_user_ns<P: AsRef<Path>>(uid_map: P) -> bool {
    match read_uid_map(uid_map.as_ref()) {
        Ok(Some(map)) => uid_map_in_user_ns(&map),
        Ok(None) => false,
        Err(err) => {
            tracing::debug!("{}", err);
            false
        }
    }
}

fn read_uid_map(path: &Path) -> Result<Option<String>, WrappedIoError> {
    if !path.exists() {
        return Ok(None);
    }

    fs::read_to_string(path).wrap_read(path).map(Some)
}

/// Only the first line counts, and only its leading numeric fields. The
/// process is outside a user namespace when that line is the identity
/// mapping; a blank or garbled first line counts as a user namespace. An
/// empty map means there is no line to judge, so it does not.
fn uid_map_in_user_ns(content: &str) -> bool {
    let Some(line) = content.lines().next() else {
        return false;
    };

    let fields: Vec<u64> = line
        .split_whitespace()
        .take(INITIAL_UID_MAP.len())
        .map_while(|field| field.parse().ok())
        .collect();
    fields != INITIAL_UID_MAP
}
