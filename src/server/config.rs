use crate::args::Arguments;
use std::net::{Ipv6Addr, SocketAddr, SocketAddrV6};
use std::time::Duration;

/// How often the receive loop wakes up to check for shutdown.
const RECV_TIMEOUT: Duration = Duration::from_millis(500);

/// Largest datagram read from the socket.
const MAX_DATAGRAM_SIZE: usize = 1500;

pub fn generate_server_config(args: &Arguments) -> ServerConfig {
    let listen_ip = match args.address {
        Some(ip) => ip,
        None => Ipv6Addr::UNSPECIFIED,
    };

    return ServerConfig {
        listen_ip,
        port: args.port,
        recv_timeout: RECV_TIMEOUT,
        max_datagram_size: MAX_DATAGRAM_SIZE,
        verbose: args.verbosity > 0,
    };
}

pub struct ServerConfig {
    pub listen_ip: Ipv6Addr,
    pub port: u16,
    pub recv_timeout: Duration,
    pub max_datagram_size: usize,
    pub verbose: bool,
}

impl ServerConfig {
    pub fn listen_addr(&self) -> SocketAddr {
        return SocketAddr::V6(SocketAddrV6::new(self.listen_ip, self.port, 0, 0));
    }
}
