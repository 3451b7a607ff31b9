//! armrig End-to-End Test Infrastructure
//!
//! Integration tests for the flows that matter to a rigging host:
//!
//! - Rig file -> twist plan through the CLI command layer
//! - Ordering and fraction properties over arbitrary joint layouts
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p armrig-tests
//! ```

pub mod fixtures;

pub use fixtures::{ArmFixture, RigFileFixture};
