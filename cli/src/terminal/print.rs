use std::net::IpAddr;

use colored::*;
use iplist_common::network::range::AddressRange;

pub const TOTAL_WIDTH: usize = 64;

pub fn header(msg: &str) {
    let text: String = format!("⟦ {} ⟧", msg.to_uppercase());
    let pad: usize = TOTAL_WIDTH.saturating_sub(text.chars().count()) / 2;
    let sep: ColoredString = "═".repeat(pad).bright_black();
    println!("{}{}{}", sep, text.bright_green().bold(), sep);
}

pub fn matched(addr: &IpAddr, range: &AddressRange) {
    println!("{}", match_line(addr, range));
}

/// Layout comes from AddressRange's Display.
fn match_line(addr: &IpAddr, range: &AddressRange) -> String {
    format!(
        "{} {} {}",
        addr.to_string().bold(),
        "→".bright_black(),
        range.to_string().yellow()
    )
}

pub fn missed(addr: &IpAddr) {
    println!(
        "{} {} {}",
        addr.to_string().bold(),
        "→".bright_black(),
        "no match".dimmed()
    );
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
    use std::net::Ipv4Addr;

    #[test]
    fn test_match_line_uses_range_display() {
        let addr = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 9));
        let range = AddressRange::new(
            IpAddr::V4(Ipv4Addr::new(10, 0, 0, 0)),
            IpAddr::V4(Ipv4Addr::new(10, 0, 0, 255)),
            "A",
        );
        let line = match_line(&addr, &range);
        assert!(line.contains("10.0.0.0-10.0.0.255 (A)"), "{line}");
        assert!(line.contains("10.0.0.9"), "{line}");
    }
}
