pub mod ai;
pub mod analyze_request;
pub mod analyze_response;
pub mod cli;
pub mod config;
pub mod error_response;
pub mod fix_request;
pub mod fix_response;
pub mod health_response;
