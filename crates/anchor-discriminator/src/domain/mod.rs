//! Pure discriminator logic, no I/O.

pub mod discriminator;
pub mod literal;
pub mod namespace;
