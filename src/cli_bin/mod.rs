//! CLI components: argument definitions and command handlers
//!
//! Only compiled with the `cli` feature; the library API does not depend
//! on anything in here.

pub mod args;
pub mod commands;
