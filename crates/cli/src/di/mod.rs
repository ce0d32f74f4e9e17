mod hosts;

pub use hosts::HostsServices;
