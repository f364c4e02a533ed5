mod config;

use crate::args;
use bundy_dhcp6::dhcp6::Dhcp6Header;
use log::{debug, info, warn};
use socket2::{Domain, Socket, Type};
use std::io::ErrorKind;
use std::net::{SocketAddr, UdpSocket};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use config::{generate_server_config, ServerConfig};

pub fn main(args: args::Arguments) -> Result<(), String> {
    let srv_conf = generate_server_config(&args);

    info!("Starting DHCPv6 server");
    debug!(
        "pid: {}, port: {}, verbose: {}",
        std::process::id(),
        srv_conf.port,
        if srv_conf.verbose { "yes" } else { "no" }
    );

    let socket = open_udp_socket(&srv_conf)?;
    info!("Listening on {}", srv_conf.listen_addr());

    let running = Arc::new(AtomicBool::new(true));
    let run_c = running.clone();

    ctrlc::set_handler(move || {
        run_c.store(false, Ordering::SeqCst);
    })
    .map_err(|e| format!("Error setting Ctrl-C handler: {}", e))?;

    let mut buf = vec![0u8; srv_conf.max_datagram_size];

    while running.load(Ordering::SeqCst) {
        let (len, src) = match socket.recv_from(&mut buf) {
            Ok(res) => res,
            Err(e)
                if e.kind() == ErrorKind::WouldBlock
                    || e.kind() == ErrorKind::TimedOut
                    || e.kind() == ErrorKind::Interrupted =>
            {
                continue
            }
            Err(e) => return Err(format!("Error receiving packet: {}", e)),
        };

        process_message(&buf[..len], src);
    }

    info!("DHCPv6 server shutting down");
    return Ok(());
}

fn process_message(raw: &[u8], src: SocketAddr) {
    let (header, options) = match Dhcp6Header::parse(raw) {
        Ok(res) => res,
        Err(e) => {
            warn!("Malformed message from {}: {}", src, e);
            return;
        }
    };

    info!(
        "{} from {} (xid 0x{:06x})",
        header.msg_type_name(),
        src,
        header.transaction_id
    );
    debug!("{} byte(s) of options", options.len());
}

fn open_udp_socket(srv_conf: &ServerConfig) -> Result<UdpSocket, String> {
    setup_udp_socket(srv_conf).map_err(|e| {
        format!(
            "Error binding to UDP port {} : {}",
            srv_conf.listen_addr(),
            e
        )
    })
}

fn setup_udp_socket(srv_conf: &ServerConfig) -> std::io::Result<UdpSocket> {
    let socket = Socket::new(Domain::IPV6, Type::DGRAM, None)?;
    socket.set_only_v6(true)?;
    socket.set_reuse_address(true)?;
    socket.set_reuse_port(true)?;
    socket.set_read_timeout(Some(srv_conf.recv_timeout))?;
    socket.bind(&srv_conf.listen_addr().into())?;
    return Ok(socket.into());
}
