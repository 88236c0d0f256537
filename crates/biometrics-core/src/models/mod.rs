//! Domain models for the biometrics system.

mod patient;
mod request;

pub use patient::*;
pub use request::*;
