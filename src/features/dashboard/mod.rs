//! Read-only dashboard aggregates for the admin index view.

pub mod dtos;
pub mod service;

pub use service::DashboardService;
