//! # Address Range Model
//!
//! A labelled, inclusive block of addresses as read from an IP list.
//!
//! Both bounds belong to the same address family. Ordering between bounds is
//! the unsigned, left-to-right comparison of their network-order bytes, which
//! is what [`IpAddr`]'s `Ord` gives within one family.

use std::fmt;
use std::net::IpAddr;

use crate::network::family::AddressFamily;

/// An inclusive range of addresses sharing one description.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AddressRange {
    pub first: IpAddr,
    pub last: IpAddr,
    pub description: String,
}

impl AddressRange {
    pub fn new(first: IpAddr, last: IpAddr, description: impl Into<String>) -> Self {
        Self {
            first,
            last,
            description: description.into(),
        }
    }

    /// Family of the lower bound.
    pub fn family(&self) -> AddressFamily {
        AddressFamily::of(&self.first)
    }

    /// Returns true if `first` and `last` belong to the same family.
    pub fn is_single_family(&self) -> bool {
        AddressFamily::of(&self.first) == AddressFamily::of(&self.last)
    }

    /// Inclusive containment check.
    ///
    /// An address of a different family is never contained, even when one of
    /// its alternate forms would be.
    pub fn contains(&self, addr: &IpAddr) -> bool {
        if AddressFamily::of(addr) != self.family() {
            return false;
        }
        self.first <= *addr && *addr <= self.last
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} ({})", self.first, self.last, self.description)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
