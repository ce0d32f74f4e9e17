pub mod check_modified;
pub mod load;

pub use check_modified::CheckHostsModifiedUseCase;
pub use load::LoadHostsFileUseCase;
