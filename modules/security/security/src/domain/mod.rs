//! Domain layer for the security app.

pub mod error;
pub mod ready;

pub use error::{ProvisionError, SecurityError};
pub use ready::{Provisioned, Ready};
