//! Field arithmetic primitives.

pub mod gf256;

pub use gf256::{FieldTables, GF256, TABLES};
