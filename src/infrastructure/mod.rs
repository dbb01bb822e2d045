//! Infrastructure layer - External service implementations

pub mod dispatch;
pub mod knowledge;
pub mod logging;
pub mod services;
pub mod workflow;
