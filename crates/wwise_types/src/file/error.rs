//! Error types for SoundBank parsing and manipulation.

use thiserror::Error;

/// Errors that can occur when parsing, modifying or writing SoundBank files
#[derive(Debug, Error)]
pub enum BnkError {
	/// Not enough data to parse
	#[error("Insufficient data in {context}: expected {expected} bytes, got {actual} bytes")]
	InsufficientData {
		/// What was being parsed
		context: String,
		/// Expected number of bytes
		expected: u64,
		/// Actual number of bytes
		actual: u64,
	},

	/// DIDX length is not a whole number of entries
	#[error("DIDX length {length} is not a multiple of the {entry_size}-byte entry size")]
	MisalignedIndex {
		/// Declared section length
		length: u32,
		/// Size of one index entry
		entry_size: usize,
	},

	/// The same wem ID appears twice in the DIDX
	#[error("{0} is an illegal repeated wem ID in the DIDX")]
	DuplicateWemId(u32),

	/// Wem windows do not fit the DATA section
	#[error("Invalid layout for wem {id} at index {index}: {message}")]
	InvalidWemLayout {
		/// Index of the offending wem
		index: usize,
		/// ID of the offending wem
		id: u32,
		/// Description of the problem
		message: String,
	},

	/// HIRC object declares a size too small for its type
	#[error("Object {object_id} of type 0x{object_type:02X} declares {size} bytes, needs at least {minimum}")]
	InvalidObjectSize {
		/// Object ID
		object_id: u32,
		/// Object type tag
		object_type: u8,
		/// Declared size
		size: u32,
		/// Minimum size for this type
		minimum: u32,
	},

	/// Sound object loop flag is neither 0 nor 1
	#[error("Sound object {object_id} has invalid loop flag 0x{flag:02X}")]
	InvalidLoopFlag {
		/// Object ID
		object_id: u32,
		/// Raw flag byte
		flag: u8,
	},

	/// A section required by the operation is absent
	#[error("Missing {0} section")]
	MissingSection(&'static str),

	/// A section that may only appear once appears twice
	#[error("Section {0} appears more than once")]
	DuplicateSection(String),

	/// Wem index out of range
	#[error("Wem index {index} out of range (total wems: {count})")]
	WemIndexOutOfRange {
		/// Requested index
		index: usize,
		/// Number of wems available
		count: usize,
	},

	/// The wem has no sound object carrying loop parameters
	#[error("Wem {wem_id} has no sound object holding its loop parameters")]
	NoLoopObject {
		/// Wem ID
		wem_id: u32,
	},

	/// Recomputed layout does not fit the 32-bit fields of the format
	#[error("Layout overflow: {0} bytes do not fit in a 32-bit field")]
	LayoutOverflow(u64),

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

impl BnkError {
	/// Creates an `InsufficientData` error
	pub fn insufficient_data(context: impl Into<String>, expected: u64, actual: u64) -> Self {
		Self::InsufficientData {
			context: context.into(),
			expected,
			actual,
		}
	}

	/// Creates an `InvalidWemLayout` error
	pub fn invalid_layout(index: usize, id: u32, message: impl Into<String>) -> Self {
		Self::InvalidWemLayout {
			index,
			id,
			message: message.into(),
		}
	}
}
