//! This module is separated into its own crate to keep the facade thin, and should not be used directly.

/// `use wwise_rs::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export wwise_types for convenience
pub use wwise_types;

// Re-export commonly used types at crate root
pub use wwise_types::{
	file::{BnkError, BnkFile, LayoutConfig, LoopValue},
	wem::{Container, ReplacementWem, Wem, WemDescriptor},
};
