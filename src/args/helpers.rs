use clap::ArgMatches;
use std::net::Ipv6Addr;

pub fn is_port(v: String) -> Result<(), String> {
    match v.parse::<u16>() {
        Ok(port) if port > 0 => Ok(()),
        _ => Err(format!(
            "Failed to parse port number: [{}], 1-65535 allowed",
            v
        )),
    }
}

pub fn parse_port(matches: &ArgMatches, name: &str) -> Option<u16> {
    matches.value_of(name).and_then(|port| port.parse().ok())
}

pub fn is_ipv6(v: String) -> Result<(), String> {
    v.parse::<Ipv6Addr>()
        .map_err(|_| format!("'{}' is not a valid IPv6", v))?;
    return Ok(());
}

pub fn parse_ipv6(matches: &ArgMatches, name: &str) -> Option<Ipv6Addr> {
    matches.value_of(name).and_then(|ip| ip.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_bounds() {
        assert!(is_port("0".to_string()).is_err());
        assert!(is_port("1".to_string()).is_ok());
        assert!(is_port("1234".to_string()).is_ok());
        assert!(is_port("65535".to_string()).is_ok());
        assert!(is_port("65536".to_string()).is_err());
        assert!(is_port("-1".to_string()).is_err());
        assert!(is_port("not a number".to_string()).is_err());
    }

    #[test]
    fn ipv6_check() {
        assert!(is_ipv6("::".to_string()).is_ok());
        assert!(is_ipv6("2001:db8:1::1".to_string()).is_ok());
        assert!(is_ipv6("192.168.0.1".to_string()).is_err());
        assert!(is_ipv6("not an address".to_string()).is_err());
    }
}
