//! Utility modules for filesystem access and logging.

pub mod fs;
pub mod logging;
