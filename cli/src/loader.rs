//! # List Loader
//!
//! Reads a P2P list line by line, collects its ranges in ascending order and
//! builds the lookup table once.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Context;
use iplist_common::{config::Config, network::range::AddressRange};
use iplist_core::{RangeTable, parse_line};
use tracing::{debug, warn};

/// A built table plus what was left out while loading it.
#[derive(Debug)]
pub struct LoadedList {
    pub table: RangeTable,
    /// Blank lines, comments and lines with unparseable addresses.
    pub skipped: usize,
    /// Lines dropped for a format error (only with `skip_errors`).
    pub rejected: usize,
}

pub fn load_file(path: &Path, cfg: &Config) -> anyhow::Result<LoadedList> {
    let file = File::open(path).with_context(|| format!("Failed to open list '{}'", path.display()))?;
    load_ranges(BufReader::new(file), cfg)
        .with_context(|| format!("Failed to load list '{}'", path.display()))
}

pub fn load_ranges<R: BufRead>(reader: R, cfg: &Config) -> anyhow::Result<LoadedList> {
    let mut ranges: Vec<AddressRange> = Vec::new();
    let mut skipped: usize = 0;
    let mut rejected: usize = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("Failed to read line {line_no}"))?;

        match parse_line(&line) {
            Ok(Some(range)) => ranges.push(range),
            Ok(None) => skipped += 1,
            Err(e) if cfg.skip_errors => {
                warn!("Skipping line {line_no}: {e}");
                rejected += 1;
            }
            Err(e) => anyhow::bail!("line {line_no}: {e}"),
        }
    }

    // IPv4 ahead of IPv6, each ascending by lower bound.
    ranges.sort_by(|a, b| a.first.cmp(&b.first));

    let table = if cfg.strict {
        RangeTable::new_checked(ranges).context("List failed validation")?
    } else {
        RangeTable::new(ranges)
    };

    debug!(
        ranges = table.range_count(),
        skipped = skipped,
        rejected = rejected,
        "list loaded"
    );

    Ok(LoadedList {
        table,
        skipped,
        rejected,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
