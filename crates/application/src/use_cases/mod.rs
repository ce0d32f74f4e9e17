pub mod hosts;

pub use hosts::{CheckHostsModifiedUseCase, LoadHostsFileUseCase};
