pub mod builders;

pub use builders::HostsTableBuilder;
