//! Middleware shared by every tier's router.

pub mod logging;
pub mod request_id;
