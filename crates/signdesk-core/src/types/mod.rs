//! Core type definitions used across the SignDesk workspace.

pub mod id;

pub use id::*;
