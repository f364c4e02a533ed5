//! DHCPv6 server component.
//!
//! The [`dhcp6`] module holds the codec for the typed values carried
//! inside DHCPv6 options (addresses, integers, strings and domain names)
//! plus the fixed message header.

pub mod dhcp6;
