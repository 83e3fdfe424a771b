pub mod attestation;
pub mod doctor;
pub mod enums;
pub mod fraud_case;

pub use attestation::*;
pub use doctor::*;
pub use enums::*;
pub use fraud_case::*;
