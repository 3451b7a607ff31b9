//! armrig CLI library.
//!
//! This crate provides the core functionality for the armrig CLI,
//! including rig file loading and the command implementations.

pub mod commands;
pub mod input;
