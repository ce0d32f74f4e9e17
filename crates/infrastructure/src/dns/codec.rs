//! DNS wire codec
//!
//! Thin adapter over `hickory-proto` so the rest of the crate deals in
//! [`Message`] values and [`DomainError`], never in raw encoder state.

use hickory_proto::op::Message;
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use hostsdns_domain::DomainError;

pub struct DnsCodec;

impl DnsCodec {
    /// Decode one datagram into a DNS message.
    pub fn decode(packet: &[u8]) -> Result<Message, DomainError> {
        Message::from_vec(packet)
            .map_err(|e| DomainError::Codec(format!("Failed to parse DNS message: {}", e)))
    }

    /// Serialize a message to wire format bytes.
    pub fn encode(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::Codec(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
