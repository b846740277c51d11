//! HTTP service that forwards source code to an LLM completion API and relays
//! either a prose review or a corrected version of the code.

pub mod config;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod server;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
