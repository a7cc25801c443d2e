//! Record service: every operation borrows one store connection for its own
//! duration and reports failures as [`crate::error::AppError`].

pub mod attendance;
pub mod employee;
pub mod stats;
