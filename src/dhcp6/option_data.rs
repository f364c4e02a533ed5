use super::err::{BadDataTypeCast, IResult};
use nom::bytes::complete::take;
use nom::number::complete::{
    be_i16, be_i32, be_i64, be_i8, be_u16, be_u32, be_u64, be_u8,
};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Kinds of values carried in option data fields.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum OptionDataType {
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Ipv4Address,
    Ipv6Address,
    String,
    Fqdn,
}

impl OptionDataType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Ipv4Address => "ipv4-address",
            Self::Ipv6Address => "ipv6-address",
            Self::String => "string",
            Self::Fqdn => "fqdn",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "int8" => Some(Self::Int8),
            "int16" => Some(Self::Int16),
            "int32" => Some(Self::Int32),
            "int64" => Some(Self::Int64),
            "uint8" => Some(Self::Uint8),
            "uint16" => Some(Self::Uint16),
            "uint32" => Some(Self::Uint32),
            "uint64" => Some(Self::Uint64),
            "ipv4-address" => Some(Self::Ipv4Address),
            "ipv6-address" => Some(Self::Ipv6Address),
            "string" => Some(Self::String),
            "fqdn" => Some(Self::Fqdn),
            _ => None,
        }
    }

    /// Fixed wire width in bytes, 0 for variable-length kinds.
    pub fn width(&self) -> usize {
        match self {
            Self::Int8 | Self::Uint8 => 1,
            Self::Int16 | Self::Uint16 => 2,
            Self::Int32 | Self::Uint32 => 4,
            Self::Int64 | Self::Uint64 => 8,
            Self::Ipv4Address => 4,
            Self::Ipv6Address => 16,
            Self::String | Self::Fqdn => 0,
        }
    }
}

/// Address family expected by the option being decoded.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum AddressFamily {
    Inet,
    Inet6,
}

impl AddressFamily {
    pub fn of(address: &IpAddr) -> Self {
        match address {
            IpAddr::V4(_) => Self::Inet,
            IpAddr::V6(_) => Self::Inet6,
        }
    }

    pub fn data_type(&self) -> OptionDataType {
        match self {
            Self::Inet => OptionDataType::Ipv4Address,
            Self::Inet6 => OptionDataType::Ipv6Address,
        }
    }

    pub fn width(&self) -> usize {
        return self.data_type().width();
    }
}

pub fn parse_ipv4(raw: &[u8]) -> IResult<&[u8], Ipv4Addr> {
    be_u32(raw).map(|(r, i)| (r, Ipv4Addr::from(i)))
}

pub fn parse_ipv6(raw: &[u8]) -> IResult<&[u8], Ipv6Addr> {
    take(16u8)(raw).map(|(r, addr): (&[u8], &[u8])| {
        let mut octets = [0u8; 16];
        octets.copy_from_slice(addr);
        (r, Ipv6Addr::from(octets))
    })
}

pub fn parse_address(
    raw: &[u8],
    family: AddressFamily,
) -> IResult<&[u8], IpAddr> {
    match family {
        AddressFamily::Inet => parse_ipv4(raw).map(|(r, a)| (r, a.into())),
        AddressFamily::Inet6 => parse_ipv6(raw).map(|(r, a)| (r, a.into())),
    }
}

/// Reads an address of the given family from the front of `buf`.
pub fn read_address(
    buf: &[u8],
    family: AddressFamily,
) -> Result<IpAddr, BadDataTypeCast> {
    match parse_address(buf, family) {
        Ok((_, address)) => Ok(address),
        Err(_) => Err(BadDataTypeCast::truncated(
            family.data_type(),
            buf.len(),
            family.width(),
        )),
    }
}

/// Appends the raw octets of `address` to `buf`.
pub fn write_address(address: &IpAddr, buf: &mut Vec<u8>) {
    match address {
        IpAddr::V4(addr) => buf.extend(&addr.octets()),
        IpAddr::V6(addr) => buf.extend(&addr.octets()),
    }
}

/// Fixed-width integers transported in network byte order.
pub trait OptionInt: Sized + Copy {
    const DATA_TYPE: OptionDataType;

    fn parse(raw: &[u8]) -> IResult<&[u8], Self>;

    fn write(self, buf: &mut Vec<u8>);
}

macro_rules! option_int {
    ($type:ty, $data_type:ident, $parser:ident) => {
        impl OptionInt for $type {
            const DATA_TYPE: OptionDataType = OptionDataType::$data_type;

            fn parse(raw: &[u8]) -> IResult<&[u8], Self> {
                $parser(raw)
            }

            fn write(self, buf: &mut Vec<u8>) {
                buf.extend(&self.to_be_bytes());
            }
        }
    };
}

option_int!(i8, Int8, be_i8);
option_int!(i16, Int16, be_i16);
option_int!(i32, Int32, be_i32);
option_int!(i64, Int64, be_i64);
option_int!(u8, Uint8, be_u8);
option_int!(u16, Uint16, be_u16);
option_int!(u32, Uint32, be_u32);
option_int!(u64, Uint64, be_u64);

pub fn read_int<T: OptionInt>(buf: &[u8]) -> Result<T, BadDataTypeCast> {
    match T::parse(buf) {
        Ok((_, value)) => Ok(value),
        Err(_) => Err(BadDataTypeCast::truncated(
            T::DATA_TYPE,
            buf.len(),
            T::DATA_TYPE.width(),
        )),
    }
}

pub fn write_int<T: OptionInt>(value: T, buf: &mut Vec<u8>) {
    value.write(buf);
}

/// Reads the whole buffer as text. The octets are copied as they are, no
/// character set is assumed.
pub fn read_string(buf: &[u8]) -> Vec<u8> {
    return buf.to_vec();
}

pub fn write_string(value: &[u8], buf: &mut Vec<u8>) {
    buf.extend(value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_ipv4_address() {
        let address: IpAddr = "192.168.0.1".parse().unwrap();
        let mut buf = Vec::new();
        write_address(&address, &mut buf);

        let out = read_address(&buf, AddressFamily::Inet).unwrap();
        assert_eq!("192.168.0.1", out.to_string());
    }

    #[test]
    fn write_ipv6_address() {
        let expected = [
            0x20, 0x01, 0x0d, 0xb8, 0x0, 0x1, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0,
            0x0, 0x0, 0x0, 0x1,
        ];
        let address: IpAddr = "2001:db8:1::1".parse().unwrap();
        let mut buf = Vec::new();
        write_address(&address, &mut buf);

        assert_eq!(&expected[..], &buf[..]);
        assert_eq!(address, read_address(&buf, AddressFamily::Inet6).unwrap());
    }

    #[test]
    fn write_address_appends() {
        let mut buf = vec![0xff];
        write_address(&"10.0.0.1".parse().unwrap(), &mut buf);
        assert_eq!(vec![0xff, 10, 0, 0, 1], buf);
    }

    #[test]
    fn read_address_truncated() {
        let err = read_address(&[10, 0, 0], AddressFamily::Inet).unwrap_err();
        assert_eq!(OptionDataType::Ipv4Address, err.data_type);

        // four bytes are a complete IPv4 address but not an IPv6 one
        let err =
            read_address(&[10, 0, 0, 1], AddressFamily::Inet6).unwrap_err();
        assert_eq!(OptionDataType::Ipv6Address, err.data_type);

        assert!(read_address(&[], AddressFamily::Inet).is_err());
    }

    #[test]
    fn read_address_ignores_trailing_bytes() {
        let out =
            read_address(&[127, 0, 0, 1, 9, 9], AddressFamily::Inet).unwrap();
        assert_eq!(IpAddr::V4(Ipv4Addr::LOCALHOST), out);
    }

    #[test]
    fn write_int_big_endian() {
        let mut buf = Vec::new();
        write_int(0x0102u16, &mut buf);
        write_int(-2i32, &mut buf);
        write_int(0x0102030405060708u64, &mut buf);
        write_int(0x7fu8, &mut buf);

        assert_eq!(
            vec![
                0x01, 0x02, 0xff, 0xff, 0xff, 0xfe, 0x01, 0x02, 0x03, 0x04,
                0x05, 0x06, 0x07, 0x08, 0x7f
            ],
            buf
        );
    }

    #[test]
    fn read_int_sign_extension() {
        let buf = [0xff, 0xfe];
        assert_eq!(-2i16, read_int::<i16>(&buf).unwrap());
        assert_eq!(0xfffeu16, read_int::<u16>(&buf).unwrap());
        assert_eq!(-1i8, read_int::<i8>(&buf).unwrap());
        assert_eq!(255u8, read_int::<u8>(&buf).unwrap());
    }

    #[test]
    fn read_int_truncated() {
        let err = read_int::<u32>(&[0, 0, 1]).unwrap_err();
        assert_eq!(OptionDataType::Uint32, err.data_type);
        assert!(err.reason.contains("3 byte(s) available, 4 required"));

        assert!(read_int::<i64>(&[0; 7]).is_err());
        assert!(read_int::<u8>(&[]).is_err());
    }

    #[test]
    fn string_is_verbatim() {
        let mut buf = Vec::new();
        write_string(b"hello world", &mut buf);
        assert_eq!(b"hello world".to_vec(), buf);
        assert_eq!(b"hello world".to_vec(), read_string(&buf));
        assert!(read_string(&[]).is_empty());
    }

    #[test]
    fn string_keeps_non_utf8_octets() {
        let raw = [0x66, 0xff, 0xfe, 0x6f];
        let text = read_string(&raw);
        assert_eq!(raw.to_vec(), text);

        let mut buf = Vec::new();
        write_string(&text, &mut buf);
        assert_eq!(raw.to_vec(), buf);
    }

    #[test]
    fn data_type_names() {
        let all = [
            OptionDataType::Int8,
            OptionDataType::Int16,
            OptionDataType::Int32,
            OptionDataType::Int64,
            OptionDataType::Uint8,
            OptionDataType::Uint16,
            OptionDataType::Uint32,
            OptionDataType::Uint64,
            OptionDataType::Ipv4Address,
            OptionDataType::Ipv6Address,
            OptionDataType::String,
            OptionDataType::Fqdn,
        ];
        for data_type in all.iter() {
            assert_eq!(
                Some(*data_type),
                OptionDataType::from_name(data_type.name())
            );
        }
        assert_eq!(None, OptionDataType::from_name("record"));
        assert_eq!(16, OptionDataType::Ipv6Address.width());
        assert_eq!(0, OptionDataType::Fqdn.width());
    }
}
