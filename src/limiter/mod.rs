mod admission_controller;
mod clock;

pub use admission_controller::{AdmissionConfig, AdmissionController};
pub use clock::{Clock, SystemClock};
