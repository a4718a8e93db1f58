//! Infrastructure layer - storage and outbound HTTP

pub mod http;
pub mod storage;
