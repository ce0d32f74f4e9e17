use super::RecordKind;
use std::fmt;
use std::net::IpAddr;

/// Target of one resolved hostname.
///
/// The kind is derived from the address, so a record can only be built through
/// [`AddressRecord::parse`] or [`AddressRecord::from_ip`] and never carries a
/// mismatched pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressRecord {
    address: IpAddr,
    kind: RecordKind,
}

impl AddressRecord {
    /// Classifies an address literal.
    ///
    /// IPv4 literals and IPv4-mapped IPv6 literals (`::ffff:a.b.c.d`) become `A`
    /// records carrying the 4-octet address; every other IPv6 literal becomes `AAAA`.
    /// Returns `None` for anything that is not an IP literal.
    pub fn parse(literal: &str) -> Option<Self> {
        literal.parse::<IpAddr>().ok().map(Self::from_ip)
    }

    pub fn from_ip(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => Self {
                address: IpAddr::V4(v4),
                kind: RecordKind::A,
            },
            IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
                Some(v4) => Self {
                    address: IpAddr::V4(v4),
                    kind: RecordKind::A,
                },
                None => Self {
                    address: IpAddr::V6(v6),
                    kind: RecordKind::AAAA,
                },
            },
        }
    }

    pub fn address(&self) -> IpAddr {
        self.address
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }
}

impl fmt::Display for AddressRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.address)
    }
}
