//! IP address rules
//!
//! Parsing is delegated to `std::net`: dotted-quad IPv4 without leading
//! zeros, and the full RFC 4291 text forms of IPv6 (including `::`
//! compression and an embedded IPv4 tail). Empty text passes.

use std::net::{Ipv4Addr, Ipv6Addr};

crate::rule! {
    /// Passes iff the text is empty or a dotted-quad IPv4 address.
    pub Ipv4Address for str;
    rule(input) { input.is_empty() || input.parse::<Ipv4Addr>().is_ok() }
    fn ipv4_address();
}

crate::rule! {
    /// Passes iff the text is empty or an IPv6 address.
    pub Ipv6Address for str;
    rule(input) { input.is_empty() || input.parse::<Ipv6Addr>().is_ok() }
    fn ipv6_address();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_ipv4() {
        let rule = ipv4_address("invalid ipv4").unwrap();
        assert!(rule.evaluate(""));
        assert!(rule.evaluate("192.168.0.1"));
        assert!(rule.evaluate("0.0.0.0"));
        assert!(!rule.evaluate("256.1.1.1"));
        assert!(!rule.evaluate("1.2.3"));
        assert!(!rule.evaluate("::1"));
    }

    #[test]
    fn test_ipv6() {
        let rule = ipv6_address("invalid ipv6").unwrap();
        assert!(rule.evaluate(""));
        assert!(rule.evaluate("::1"));
        assert!(rule.evaluate("2001:db8::ff00:42:8329"));
        assert!(rule.evaluate("::ffff:192.0.2.1"));
        assert!(!rule.evaluate("2001:db8::g"));
        assert!(!rule.evaluate("192.168.0.1"));
    }
}
