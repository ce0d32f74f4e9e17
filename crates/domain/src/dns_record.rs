pub mod record;
pub mod record_kind;

pub use record::AddressRecord;
pub use record_kind::RecordKind;
