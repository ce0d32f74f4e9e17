use std::fmt;
use std::str::FromStr;

/// DNS record kind an address literal resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    A,
    AAAA,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::A => "A",
            RecordKind::AAAA => "AAAA",
        }
    }

    /// DNS TYPE code on the wire.
    pub fn to_u16(&self) -> u16 {
        match self {
            RecordKind::A => 1,
            RecordKind::AAAA => 28,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(RecordKind::A),
            "AAAA" => Ok(RecordKind::AAAA),
            other => Err(format!("Unsupported record kind: {}", other)),
        }
    }
}
