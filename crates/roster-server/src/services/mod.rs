//! Services used by the handlers

pub mod credentials;
pub mod uploads;

pub use uploads::{ImageStore, Upload};
