//! Authentication domain: identifiers, secrets, credential sets, and strategies.

pub mod credential;
pub mod id;
pub mod secret;
pub mod strategy;

pub use credential::*;
pub use id::*;
pub use secret::*;
pub use strategy::*;
