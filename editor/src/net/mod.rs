//! Network access: static resources fetched from the hosting server.

pub mod stylesheet;
