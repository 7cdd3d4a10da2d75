//! Prelude module for `wwise_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use wwise_internal::prelude::*;
//!
//! // Now you can use all common types directly
//! let desc = WemDescriptor::new(1001, 0x30, 512);
//! assert_eq!(desc.end(), 0x230);
//! assert!(LoopValue::infinite().is_infinite());
//! ```

// Re-export everything from wwise_types::prelude
#[doc(inline)]
pub use wwise_types::prelude::*;

// Re-export the entire wwise_types module for advanced usage
#[doc(inline)]
pub use wwise_types;
