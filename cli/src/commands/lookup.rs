use std::net::IpAddr;
use std::path::Path;

use iplist_common::config::Config;
use iplist_core::RangeTable;
use tracing::info;

use crate::{loader, terminal::print};

/// Looks up each address and prints its range. Returns true if every
/// address matched.
pub fn lookup(list: &Path, addrs: &[IpAddr], cfg: &Config) -> anyhow::Result<bool> {
    let loaded = loader::load_file(list, cfg)?;
    info!("Loaded {} ranges from {}", loaded.table.range_count(), list.display());

    print::header("lookup results");
    Ok(report(&loaded.table, addrs))
}

fn report(table: &RangeTable, addrs: &[IpAddr]) -> bool {
    let mut all_matched = true;
    for addr in addrs {
        match table.lookup(*addr) {
            Some(range) => print::matched(addr, range),
            None => {
                print::missed(addr);
                all_matched = false;
            }
        }
    }
    all_matched
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use iplist_common::network::range::AddressRange;
    use std::net::Ipv4Addr;

    fn table() -> RangeTable {
        RangeTable::new(vec![AddressRange::new(
            IpAddr::V4(Ipv4Addr::new(10, 0, 0, 0)),
            IpAddr::V4(Ipv4Addr::new(10, 0, 0, 255)),
            "A",
        )])
    }

    #[test]
    fn test_report_all_matched() {
        let addrs = [IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1))];
        assert!(report(&table(), &addrs));
    }

    #[test]
    fn test_report_with_miss() {
        let addrs = [
            IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)),
            IpAddr::V4(Ipv4Addr::new(10, 0, 1, 1)),
        ];
        assert!(!report(&table(), &addrs));
    }

    #[test]
    fn test_lookup_missing_file() {
        let cfg = Config { strict: false, skip_errors: false };
        let result = lookup(Path::new("/nonexistent/list.p2p"), &[], &cfg);
        assert!(result.is_err());
    }
}
