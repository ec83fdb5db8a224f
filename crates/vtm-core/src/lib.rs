pub mod config;
pub mod logging;

pub mod fetch;
pub mod naming;
pub mod pipeline;
pub mod staging;
pub mod transcode;
