//! # Range Table
//!
//! An immutable, sorted list of non-overlapping [`AddressRange`]s answering
//! "which range, if any, contains this address?" in logarithmic time.
//!
//! Ranges are ordered by their lower bound. The input may interleave the two
//! families (unsigned byte order) or list every IPv4 range first (the `Ord`
//! of [`IpAddr`]); either way the table regroups them at construction into a
//! 4-byte run followed by a 16-byte run. Each search only ever compares
//! addresses of one family, looking in the run of the probe's family.

use std::net::IpAddr;

use iplist_common::network::family::{self, AddressFamily};
use iplist_common::network::range::AddressRange;
use thiserror::Error;
use tracing::debug;

/// Reasons a list fails the optional construction-time validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("range {index} ends before it starts: {first}-{last}")]
    Inverted {
        index: usize,
        first: IpAddr,
        last: IpAddr,
    },
    #[error("range {index} mixes address families: {first}-{last}")]
    MixedFamily {
        index: usize,
        first: IpAddr,
        last: IpAddr,
    },
    #[error("range {index} starts before the range preceding it")]
    Unsorted { index: usize },
    #[error("range {index} overlaps the range preceding it")]
    Overlap { index: usize },
}

/// Sorted, immutable set of address ranges.
///
/// The default value is the empty table, on which every lookup misses.
#[derive(Clone, Debug, Default)]
pub struct RangeTable {
    ranges: Vec<AddressRange>,
    /// Number of leading ranges whose lower bound is IPv4.
    v4_len: usize,
}

impl RangeTable {
    /// Builds a table from ranges already sorted by `first`.
    ///
    /// Iteration afterwards yields the IPv4 ranges, then the IPv6 ranges.
    ///
    /// Nothing is checked. Unsorted or overlapping input gives unspecified
    /// (but memory-safe) lookup results; use [`RangeTable::new_checked`] to
    /// reject such lists instead.
    pub fn new(sorted: Vec<AddressRange>) -> Self {
        // Byte-ordered lists interleave the families; regroup them while
        // keeping each family's relative order.
        let (mut ranges, v6): (Vec<AddressRange>, Vec<AddressRange>) = sorted
            .into_iter()
            .partition(|r| r.family() == AddressFamily::V4);
        let v4_len = ranges.len();
        ranges.extend(v6);
        Self { ranges, v4_len }
    }

    /// Builds a table after an O(n) pass over consecutive ranges.
    pub fn new_checked(sorted: Vec<AddressRange>) -> Result<Self, TableError> {
        let table = Self::new(sorted);
        table.validate()?;
        debug!(ranges = table.range_count(), "range table validated");
        Ok(table)
    }

    /// Checks that every range is well formed, and that the list is sorted
    /// and free of overlap. Reported indexes refer to the regrouped order.
    pub fn validate(&self) -> Result<(), TableError> {
        let mut previous: Option<&AddressRange> = None;

        for (index, range) in self.ranges.iter().enumerate() {
            if !range.is_single_family() {
                return Err(TableError::MixedFamily {
                    index,
                    first: range.first,
                    last: range.last,
                });
            }
            if range.first > range.last {
                return Err(TableError::Inverted {
                    index,
                    first: range.first,
                    last: range.last,
                });
            }
            if let Some(prev) = previous {
                if range.first < prev.first {
                    return Err(TableError::Unsorted { index });
                }
                if range.first <= prev.last {
                    return Err(TableError::Overlap { index });
                }
            }
            previous = Some(range);
        }

        Ok(())
    }

    pub fn range_count(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AddressRange> {
        self.ranges.iter()
    }

    /// Returns the range containing `addr`, or `None`.
    ///
    /// The 4-byte form of the address is tried first, when it has one, then
    /// the 16-byte form. This lets `10.0.0.1` and `::ffff:10.0.0.1` match a
    /// range stored in either representation.
    pub fn lookup(&self, addr: impl Into<IpAddr>) -> Option<&AddressRange> {
        let addr: IpAddr = addr.into();

        if let Some(v4) = family::ipv4_form(addr) {
            if let Some(range) = self.lookup_family(IpAddr::V4(v4)) {
                return Some(range);
            }
        }

        self.lookup_family(IpAddr::V6(family::ipv6_form(addr)))
    }

    /// Like [`RangeTable::lookup`], for an address given as raw network-order
    /// bytes. Slices that are not 4 or 16 bytes long never match.
    pub fn lookup_bytes(&self, bytes: &[u8]) -> Option<&AddressRange> {
        family::addr_from_bytes(bytes).and_then(|addr| self.lookup(addr))
    }

    /// Searches only the ranges of `probe`'s own family.
    fn lookup_family(&self, probe: IpAddr) -> Option<&AddressRange> {
        let (v4, v6) = self.ranges.split_at(self.v4_len);
        match AddressFamily::of(&probe) {
            AddressFamily::V4 => search(v4, &probe),
            AddressFamily::V6 => search(v6, &probe),
        }
    }
}

/// Binary search over single-family ranges sorted by `first`.
///
/// Finds the lowest index `i` such that `i` is the last index or `probe` is
/// below the lower bound of range `i + 1`, then confirms `probe` actually lies
/// inside range `i`.
fn search<'a>(ranges: &'a [AddressRange], probe: &IpAddr) -> Option<&'a AddressRange> {
    let (_, rest) = ranges.split_first()?;
    let index = rest.partition_point(|next| next.first <= *probe);
    let candidate = ranges.get(index)?;

    if *probe < candidate.first || *probe > candidate.last {
        return None;
    }
    Some(candidate)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
