//! Parsing of the kernel list format used by `cpuset.cpus` and
//! `cpuset.mems`, e.g. `0-3,7,9-10`.
use std::collections::BTreeSet;

/// Default upper bound on the distinct ids a list may expand to.
pub const MAX_LIST_ENTRIES: usize = 1 << 16;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseListError {
    #[error("invalid list entry {0:?}")]
    InvalidEntry(String),
    #[error("invalid range {start}-{end}: start is greater than end")]
    InvertedRange { start: u32, end: u32 },
    #[error("list expands to too many entries")]
    TooLarge,
}

pub fn parse_uint_list(list: &str) -> Result<BTreeSet<u32>, ParseListError> {
    parse_uint_list_bounded(list, MAX_LIST_ENTRIES)
}

/// Parses `list`, failing once it expands to more than `max_entries`
/// distinct ids.
pub fn parse_uint_list_bounded(
    list: &str,
    max_entries: usize,
) -> Result<BTreeSet<u32>, ParseListError> {
    let mut ids = BTreeSet::new();
    let list = list.trim();
    if list.is_empty() {
        return Ok(ids);
    }

    for entry in list.split(',') {
        let entry = entry.trim();
        let (start, end) = match entry.split_once('-') {
            Some((start, end)) => (parse_id(start, entry)?, parse_id(end, entry)?),
            None => {
                let id = parse_id(entry, entry)?;
                (id, id)
            }
        };

        if start > end {
            return Err(ParseListError::InvertedRange { start, end });
        }
        if u64::from(end - start) >= max_entries as u64 {
            return Err(ParseListError::TooLarge);
        }
        ids.extend(start..=end);
        if ids.len() > max_entries {
            return Err(ParseListError::TooLarge);
        }
    }

    Ok(ids)
}

fn parse_id(value: &str, entry: &str) -> Result<u32, ParseListError> {
    value
        .trim()
        .parse()
        .map_err(|_| ParseListError::InvalidEntry(entry.to_owned()))
}
