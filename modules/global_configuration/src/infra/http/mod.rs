//! HTTP clients

pub mod checker;

pub use checker::HttpConnectivityChecker;
