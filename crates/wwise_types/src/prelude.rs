//! Prelude module for `wwise_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```
//! use wwise_types::prelude::*;
//!
//! let config = LayoutConfig::default();
//! let replacement = ReplacementWem::from_bytes(0, vec![0u8; 32]);
//! assert_eq!(replacement.length(), 32);
//! assert_eq!(config.align(33), 48);
//! ```

// File module types
#[doc(inline)]
pub use crate::file::{
	// SoundBank types
	BankDescriptor,
	BnkError,
	BnkFile,
	LayoutConfig,
	LoopValue,
	Object,
	Section,
	SectionHeader,
	SoundObject,
};

// Wem model
#[doc(inline)]
pub use crate::wem::{Container, ReplacementWem, Wem, WemDescriptor};

// Byte windows
#[doc(inline)]
pub use crate::stream::{ByteRange, SharedSource, share};
