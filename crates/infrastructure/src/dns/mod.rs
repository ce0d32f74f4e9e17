pub mod codec;
pub mod responder;
pub mod server;

pub use codec::DnsCodec;
pub use responder::QueryResponder;
pub use server::{bind_udp_socket, HostsDnsServer};
