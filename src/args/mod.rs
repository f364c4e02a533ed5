mod helpers;

use clap::{App, Arg, ArgMatches};
use std::net::Ipv6Addr;

use bundy_dhcp6::dhcp6::DHCP6_SERVER_PORT;

fn args() -> App<'static, 'static> {
    App::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::with_name("port")
                .long("port")
                .short("p")
                .takes_value(true)
                .value_name("number")
                .validator(helpers::is_port)
                .help("Non-standard port number 1-65535 (useful for testing only)"),
        )
        .arg(
            Arg::with_name("address")
                .long("address")
                .short("a")
                .takes_value(true)
                .value_name("ip")
                .validator(helpers::is_ipv6)
                .help("IPv6 address to listen on. If none, all addresses are used"),
        )
        .arg(
            Arg::with_name("verbosity")
                .short("v")
                .multiple(true)
                .help("Increase message verbosity"),
        )
}

pub struct Arguments {
    pub port: u16,
    pub address: Option<Ipv6Addr>,
    pub verbosity: usize,
}

impl<'a> Arguments {
    pub fn parse_args() -> Self {
        return Self::parse(&args().get_matches());
    }

    pub fn parse(matches: &'a ArgMatches) -> Arguments {
        Self {
            port: helpers::parse_port(matches, "port")
                .unwrap_or(DHCP6_SERVER_PORT),
            address: helpers::parse_ipv6(matches, "address"),
            verbosity: matches.occurrences_of("verbosity") as usize,
        }
    }
}
