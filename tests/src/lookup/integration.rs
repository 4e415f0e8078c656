#![cfg(test)]
use iplist_common::network::range::AddressRange;
use iplist_core::{FormatError, RangeTable, parse_line};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

const BLOCKLIST: &str = "\
# Level 1 style list
Example Corp:10.0.0.0-10.0.0.255
Example Corp Annex:10.0.1.0-10.0.1.255
Lab:192.168.50.0-192.168.50.63
Documentation v6:2001:db8::-2001:db8::ffff
Mapped Legacy:::ffff:172.16.0.0-::ffff:172.16.0.255
not an entry:bogus-10.0.0.1
";

/// Parses every line, drops skips, and sorts the way a loader would.
fn build_table(text: &str) -> Result<RangeTable, FormatError> {
    let mut ranges: Vec<AddressRange> = Vec::new();
    for line in text.lines() {
        if let Some(range) = parse_line(line)? {
            ranges.push(range);
        }
    }
    ranges.sort_by(|a, b| a.first.cmp(&b.first));
    Ok(RangeTable::new(ranges))
}

fn lookup_desc(table: &RangeTable, addr: impl Into<IpAddr>) -> Option<String> {
    table.lookup(addr).map(|r| r.description.clone())
}

#[test]
fn parsed_list_answers_lookups() {
    let table = build_table(BLOCKLIST).unwrap();
    assert_eq!(table.range_count(), 5);

    assert_eq!(
        lookup_desc(&table, Ipv4Addr::new(10, 0, 0, 200)).as_deref(),
        Some("Example Corp")
    );
    assert_eq!(
        lookup_desc(&table, Ipv4Addr::new(10, 0, 1, 0)).as_deref(),
        Some("Example Corp Annex")
    );
    assert_eq!(
        lookup_desc(&table, Ipv4Addr::new(192, 168, 50, 63)).as_deref(),
        Some("Lab")
    );
    assert_eq!(lookup_desc(&table, Ipv4Addr::new(192, 168, 50, 64)), None);
    assert_eq!(lookup_desc(&table, Ipv4Addr::new(9, 255, 255, 255)), None);
    assert_eq!(lookup_desc(&table, Ipv4Addr::new(10, 0, 2, 0)), None);
}

#[test]
fn parsed_list_answers_ipv6_and_mapped_lookups() {
    let table = build_table(BLOCKLIST).unwrap();

    let doc: Ipv6Addr = "2001:db8::1234".parse().unwrap();
    assert_eq!(lookup_desc(&table, doc).as_deref(), Some("Documentation v6"));

    // Stored as IPv4-mapped IPv6, probed with a plain IPv4 address.
    assert_eq!(
        lookup_desc(&table, Ipv4Addr::new(172, 16, 0, 9)).as_deref(),
        Some("Mapped Legacy")
    );

    // Stored as IPv4, probed with the mapped form.
    let mapped = Ipv4Addr::new(10, 0, 0, 1).to_ipv6_mapped();
    assert_eq!(lookup_desc(&table, mapped).as_deref(), Some("Example Corp"));
}

#[test]
fn format_error_surfaces_from_loader() {
    let text = "Good:1.1.1.1-1.1.1.2\nBad line with no separators\n";
    assert_eq!(build_table(text).unwrap_err(), FormatError::MissingColon);

    let text = "Good:1.1.1.1-1.1.1.2\nBad:1.1.1.3\n";
    assert_eq!(build_table(text).unwrap_err(), FormatError::MissingHyphen);
}

#[test]
fn matched_range_formats_for_logs() {
    let table = build_table(BLOCKLIST).unwrap();
    let range = table.lookup(Ipv4Addr::new(192, 168, 50, 1)).unwrap();
    assert_eq!(range.to_string(), "192.168.50.0-192.168.50.63 (Lab)");
}

#[test]
fn table_is_shareable_across_threads() {
    let table = std::sync::Arc::new(build_table(BLOCKLIST).unwrap());

    let handles: Vec<_> = (0..4u8)
        .map(|i| {
            let table = std::sync::Arc::clone(&table);
            std::thread::spawn(move || {
                lookup_desc(&table, Ipv4Addr::new(10, 0, 0, i)).is_some()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
