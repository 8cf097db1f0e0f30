pub mod panel_service;

pub use panel_service::*;
