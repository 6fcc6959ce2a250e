//! Concrete games built on the core.

pub mod paradox;
