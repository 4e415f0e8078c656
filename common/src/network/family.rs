//! # Address Families
//!
//! Helpers for moving a single address between its 4-byte and 16-byte forms.
//!
//! A list may store a block as `1.2.3.0-1.2.3.255` or as
//! `::ffff:1.2.3.0-::ffff:1.2.3.255`. These helpers give every probe address
//! both representations so a lookup can try each one in turn.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// The two address widths a range or probe can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressFamily {
    /// 4-byte addresses.
    V4,
    /// 16-byte addresses.
    V6,
}

impl AddressFamily {
    pub fn of(addr: &IpAddr) -> Self {
        match addr {
            IpAddr::V4(_) => AddressFamily::V4,
            IpAddr::V6(_) => AddressFamily::V6,
        }
    }
}

/// Returns the 4-byte form of `addr`, if it has one.
///
/// Native IPv4 addresses are returned as-is. IPv6 addresses only have a
/// 4-byte form when they are IPv4-mapped (`::ffff:a.b.c.d`).
pub fn ipv4_form(addr: IpAddr) -> Option<Ipv4Addr> {
    match addr {
        IpAddr::V4(v4) => Some(v4),
        IpAddr::V6(v6) => v6.to_ipv4_mapped(),
    }
}

/// Returns the 16-byte form of `addr`.
///
/// IPv4 addresses are widened to their IPv4-mapped form.
pub fn ipv6_form(addr: IpAddr) -> Ipv6Addr {
    match addr {
        IpAddr::V4(v4) => v4.to_ipv6_mapped(),
        IpAddr::V6(v6) => v6,
    }
}

/// Builds an address from its raw network-order bytes.
///
/// Only 4-byte and 16-byte slices are addresses; anything else is `None`.
pub fn addr_from_bytes(bytes: &[u8]) -> Option<IpAddr> {
    if let Ok(octets) = <[u8; 4]>::try_from(bytes) {
        return Some(IpAddr::V4(Ipv4Addr::from(octets)));
    }
    if let Ok(octets) = <[u8; 16]>::try_from(bytes) {
        return Some(IpAddr::V6(Ipv6Addr::from(octets)));
    }
    None
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
