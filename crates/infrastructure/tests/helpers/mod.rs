pub mod hosts_fixture;

pub use hosts_fixture::{query_packet, HostsFixture};
