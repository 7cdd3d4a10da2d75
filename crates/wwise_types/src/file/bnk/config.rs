//! Layout configuration used when wems are replaced.

use super::constants::WEM_ALIGNMENT;

/// Controls how wems are laid out in the DATA section after a replacement.
///
/// # Presets
///
/// - `default()`: 16-byte alignment, the value every known SoundBank uses
/// - `unaligned()`: wems packed back to back
///
/// # Examples
///
/// ```
/// use wwise_types::file::bnk::LayoutConfig;
///
/// let config = LayoutConfig::default();
/// assert_eq!(config.alignment(), 16);
///
/// assert!(LayoutConfig::new(2048).is_some());
/// assert!(LayoutConfig::new(12).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
	alignment: u64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			alignment: WEM_ALIGNMENT,
		}
	}
}

impl LayoutConfig {
	/// Creates a configuration with a custom alignment.
	///
	/// Returns `None` unless `alignment` is a non-zero power of two.
	pub fn new(alignment: u64) -> Option<Self> {
		alignment.is_power_of_two().then_some(Self {
			alignment,
		})
	}

	/// Packs wems without any gap between them.
	pub fn unaligned() -> Self {
		Self {
			alignment: 1,
		}
	}

	/// Byte boundary every wem offset is rounded up to
	pub fn alignment(&self) -> u64 {
		self.alignment
	}

	/// Rounds `offset` up to the next aligned position
	pub fn align(&self, offset: u64) -> u64 {
		offset.next_multiple_of(self.alignment)
	}
}
