//! # List Line Parser
//!
//! Parses single lines of the PeerGuardian text list ("P2P") format:
//!
//! ```text
//! # comment
//! Some Organisation:1.2.3.0-1.2.3.255
//! ```
//!
//! Reading a source and collecting the ranges is left to the caller.

use std::net::IpAddr;

use iplist_common::network::range::AddressRange;
use thiserror::Error;
use tracing::debug;

/// A present line is missing one of its separators.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    #[error("missing colon")]
    MissingColon,
    #[error("missing hyphen")]
    MissingHyphen,
}

/// Parses one line of a P2P list.
///
/// * `Ok(Some(range))`: the line holds a range.
/// * `Ok(None)`: nothing to load. Blank lines, `#` comments, and lines whose
///   addresses do not parse all land here; malformed addresses are dropped,
///   not reported.
/// * `Err(_)`: the line lacks the `:` or `-` separator.
pub fn parse_line(line: &str) -> Result<Option<AddressRange>, FormatError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let Some((description, addrs)) = line.split_once(':') else {
        return Err(FormatError::MissingColon);
    };
    let Some((first_str, last_str)) = addrs.split_once('-') else {
        return Err(FormatError::MissingHyphen);
    };

    let (Ok(first), Ok(last)) = (first_str.parse::<IpAddr>(), last_str.parse::<IpAddr>()) else {
        debug!(line = %line, "skipping line with unparseable address");
        return Ok(None);
    };

    Ok(Some(AddressRange::new(first, last, description)))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
