use super::codec::DnsCodec;
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::rdata::{A, AAAA};
use hickory_proto::rr::{Name, RData, Record};
use hostsdns_application::ports::ResolutionTablePort;
use hostsdns_domain::{AddressRecord, DomainError};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use tracing::debug;

/// Answers never get cached downstream; every query hits the live table.
const ANSWER_TTL: u32 = 0;

/// Turns one DNS query into one reply using the live resolution table.
///
/// Only the first question of a packet is answered. A hit yields a single
/// authoritative A/AAAA record; a miss yields NXDOMAIN.
pub struct QueryResponder {
    table: Arc<dyn ResolutionTablePort>,
    nxdomain_placeholder: bool,
}

impl QueryResponder {
    pub fn new(table: Arc<dyn ResolutionTablePort>) -> Self {
        Self {
            table,
            nxdomain_placeholder: false,
        }
    }

    /// Attach a zeroed A record to NXDOMAIN replies.
    pub fn with_nxdomain_placeholder(mut self, enabled: bool) -> Self {
        self.nxdomain_placeholder = enabled;
        self
    }

    /// Decode, answer and encode one datagram.
    ///
    /// `Ok(None)` means the packet needs no reply.
    pub fn respond(&self, packet: &[u8]) -> Result<Option<Vec<u8>>, DomainError> {
        let request = DnsCodec::decode(packet)?;
        match self.build_response(&request) {
            Some(response) => DnsCodec::encode(&response).map(Some),
            None => Ok(None),
        }
    }

    pub fn build_response(&self, request: &Message) -> Option<Message> {
        if request.message_type() == MessageType::Response {
            debug!(id = request.id(), "Ignoring inbound DNS response");
            return None;
        }

        let mut response = Message::new(request.id(), MessageType::Response, request.op_code());
        response.set_recursion_desired(request.recursion_desired());

        let Some(query) = request.queries().first() else {
            debug!(id = request.id(), "Query has no question section");
            response.set_response_code(ResponseCode::FormErr);
            return Some(response);
        };

        response.add_query(query.clone());
        response.set_authoritative(true);

        let name = query.name();
        match self.table.lookup(&name.to_ascii()) {
            Some(record) => {
                debug!(name = %name, answer = %record, "Resolved from hosts table");
                response.add_answer(answer_record(name.clone(), &record));
                response.set_response_code(ResponseCode::NoError);
            }
            None => {
                debug!(name = %name, "Name not in hosts table (NXDOMAIN)");
                response.set_response_code(ResponseCode::NXDomain);
                if self.nxdomain_placeholder {
                    response.add_answer(placeholder_record());
                }
            }
        }

        Some(response)
    }
}

fn answer_record(name: Name, record: &AddressRecord) -> Record {
    let rdata = match record.address() {
        IpAddr::V4(ipv4) => RData::A(A(ipv4)),
        IpAddr::V6(ipv6) => RData::AAAA(AAAA(ipv6)),
    };
    Record::from_rdata(name, ANSWER_TTL, rdata)
}

fn placeholder_record() -> Record {
    Record::from_rdata(Name::root(), ANSWER_TTL, RData::A(A(Ipv4Addr::UNSPECIFIED)))
}
