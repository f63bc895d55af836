//! Handler modules for MCP tools

pub mod check;
pub mod lenses;
pub mod navigate;
