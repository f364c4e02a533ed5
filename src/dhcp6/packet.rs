use super::err::Error;
use super::option_data::{read_int, write_int};

/// Message type plus the 24 bit transaction ID.
pub const DHCP6_HEADER_LEN: usize = 4;

const TRANSACTION_ID_MASK: u32 = 0x00ff_ffff;

// 0                   1                   2                   3
// 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |    msg-type   |               transaction-id                  |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                                                               |
// .                            options                            .
// .                 (variable number and length)                  .
// |                                                               |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct Dhcp6Header {
    pub msg_type: u8,

    /// Chosen by the client, echoed by the server. Only the low 24 bits
    /// travel on the wire.
    pub transaction_id: u32,
}

impl Dhcp6Header {
    /// Splits a message into its header and the options area after it.
    pub fn parse(raw: &[u8]) -> Result<(Self, &[u8]), Error<&[u8]>> {
        let word: u32 =
            read_int(raw).map_err(|_| Error::TruncatedHeader(raw.len()))?;
        let header = Self {
            msg_type: (word >> 24) as u8,
            transaction_id: word & TRANSACTION_ID_MASK,
        };

        return Ok((header, &raw[DHCP6_HEADER_LEN..]));
    }

    pub fn build(&self, buf: &mut Vec<u8>) {
        let word = (self.msg_type as u32) << 24
            | (self.transaction_id & TRANSACTION_ID_MASK);
        write_int(word, buf);
    }

    pub fn msg_type_name(&self) -> &'static str {
        return Dhcp6MessageTypes::name(self.msg_type).unwrap_or("Unknown");
    }
}

// DHCPv6 message types, RFC 8415 section 7.3.

#[allow(non_snake_case)]
pub mod Dhcp6MessageTypes {
    /// Client looking for servers able to assign addresses.
    pub const SOLICIT: u8 = 1;

    /// Server answer to a Solicit, announcing it is available.
    pub const ADVERTISE: u8 = 2;

    /// Client asking a specific server for addresses and parameters.
    pub const REQUEST: u8 = 3;

    /// Client checking whether its addresses are still appropriate for the
    /// link it is attached to.
    pub const CONFIRM: u8 = 4;

    /// Client extending the lifetimes of its leases with the server that
    /// assigned them.
    pub const RENEW: u8 = 5;

    /// Client extending its leases with any available server.
    pub const REBIND: u8 = 6;

    pub const REPLY: u8 = 7;

    /// Client giving back one or more leases.
    pub const RELEASE: u8 = 8;

    /// Client reporting an assigned address already in use on the link.
    pub const DECLINE: u8 = 9;

    pub const RECONFIGURE: u8 = 10;
    pub const INFORMATION_REQUEST: u8 = 11;
    pub const RELAY_FORW: u8 = 12;
    pub const RELAY_REPL: u8 = 13;

    pub fn name(msg_type: u8) -> Option<&'static str> {
        match msg_type {
            SOLICIT => Some("Solicit"),
            ADVERTISE => Some("Advertise"),
            REQUEST => Some("Request"),
            CONFIRM => Some("Confirm"),
            RENEW => Some("Renew"),
            REBIND => Some("Rebind"),
            REPLY => Some("Reply"),
            RELEASE => Some("Release"),
            DECLINE => Some("Decline"),
            RECONFIGURE => Some("Reconfigure"),
            INFORMATION_REQUEST => Some("Information-request"),
            RELAY_FORW => Some("Relay-forw"),
            RELAY_REPL => Some("Relay-repl"),
            _ => None,
        }
    }
}
