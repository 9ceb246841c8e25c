//! Application services and ports.

#![forbid(unsafe_code)]

mod authorization_service;
mod directory_ports;

pub use authorization_service::{AuthorizationService, CapabilitySummary, ShiftAccess, UserAccess};
pub use directory_ports::DirectoryRepository;
