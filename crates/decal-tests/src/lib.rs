//! Integration test crate for Decal Studio.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It runs full decode -> matte -> encode pipelines to verify the
//! decal crates work together.

#[cfg(test)]
mod matting;

#[cfg(test)]
mod media;
