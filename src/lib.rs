//! A stateful Vietnamese input method engine core.
//!
//! Converts a stream of physical key events into the Vietnamese text those
//! keys encode under Telex or VNI, via a seven-stage transformation
//! pipeline validated against Vietnamese phonotactics before anything is
//! committed. Consumed by platform host shells through the C ABI in
//! [`ffi`]; [`Engine`] is the pure Rust entry point for anything embedding
//! this crate directly instead of through the C boundary.

pub mod buffer;
pub mod engine;
pub mod error;
pub mod ffi;
pub mod keys;
pub mod methods;
pub mod parsing;
pub mod pipeline;
pub mod shortcut;
pub mod syllable;
pub mod tables;
pub mod validation;

pub use engine::Engine;
pub use ffi::ImeResult;
pub use methods::InputMethod;
pub use pipeline::{Action, Decision};
