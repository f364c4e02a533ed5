mod err;
mod fqdn;
mod option_data;
mod packet;

pub use err::{BadDataTypeCast, Error, MAX_LABEL_LEN, MAX_NAME_WIRE_LEN};
pub use fqdn::{parse_fqdn, read_fqdn, write_fqdn, FqdnReader};
pub use option_data::{
    parse_address, read_address, read_int, read_string, write_address,
    write_int, write_string, AddressFamily, OptionDataType, OptionInt,
};
pub use packet::{Dhcp6Header, Dhcp6MessageTypes, DHCP6_HEADER_LEN};

pub const DHCP6_SERVER_PORT: u16 = 547;
pub const DHCP6_CLIENT_PORT: u16 = 546;
