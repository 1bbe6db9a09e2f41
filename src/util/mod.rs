//! Shared utility helpers.

pub mod parse;
