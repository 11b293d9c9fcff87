//! Command implementations for roadgraph

pub mod check;
pub mod connected;
pub mod dispatch;
pub mod path;
pub mod report;
pub mod routes;
pub mod short;
