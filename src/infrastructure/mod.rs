//! Infrastructure layer - Filesystem access, services and logging

pub mod logging;
pub mod model;
pub mod services;
