//! Dashboard summary counts.

pub mod service;

pub use service::{DashboardService, DashboardStats};
