//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields a contact record
//! is made of: names, phone numbers, and birthdays. Each value object
//! validates at construction time, so invalid data cannot be represented
//! anywhere in the system, including data read back from a snapshot.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::PhoneNumber;
