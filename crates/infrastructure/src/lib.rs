pub mod dns;
pub mod hosts;
