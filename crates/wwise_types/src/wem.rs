//! Wem model shared by Wwise container formats.
//!
//! A wem is one embedded audio payload. Containers describe it with a
//! [`WemDescriptor`], keep its bytes as a lazy [`ByteRange`] and remember the
//! [`Padding`] that follows it so that unchanged files are rewritten exactly.

use std::{
	fmt::{Display, Formatter},
	io::{self, Read, Write},
	path::Path,
};

use serde::{Deserialize, Serialize};

use crate::stream::{ByteRange, Padding, SharedSource, share};

/// Size of a serialized [`WemDescriptor`] in bytes
pub const WEM_DESCRIPTOR_SIZE: usize = 12;

/// Location of a wem inside its container.
///
/// `offset` is relative to the start of the container's data region.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WemDescriptor {
	/// Wem ID, unique within a container
	pub id: u32,
	/// Byte offset from the start of the data region
	pub offset: u32,
	/// Length of the wem payload in bytes
	pub length: u32,
}

impl WemDescriptor {
	/// Creates a new descriptor
	pub fn new(id: u32, offset: u32, length: u32) -> Self {
		Self {
			id,
			offset,
			length,
		}
	}

	/// Loads a descriptor from any reader
	pub fn from_reader<R: Read>(reader: &mut R) -> io::Result<Self> {
		let mut buffer = [0u8; WEM_DESCRIPTOR_SIZE];
		reader.read_exact(&mut buffer)?;
		Ok(Self::from_bytes(&buffer))
	}

	/// Loads a descriptor from its 12-byte little-endian form
	pub fn from_bytes(data: &[u8; WEM_DESCRIPTOR_SIZE]) -> Self {
		Self {
			id: u32::from_le_bytes([data[0], data[1], data[2], data[3]]),
			offset: u32::from_le_bytes([data[4], data[5], data[6], data[7]]),
			length: u32::from_le_bytes([data[8], data[9], data[10], data[11]]),
		}
	}

	/// Serializes the descriptor to bytes
	pub fn to_bytes(self) -> [u8; WEM_DESCRIPTOR_SIZE] {
		let mut buffer = [0u8; WEM_DESCRIPTOR_SIZE];
		buffer[0..4].copy_from_slice(&self.id.to_le_bytes());
		buffer[4..8].copy_from_slice(&self.offset.to_le_bytes());
		buffer[8..12].copy_from_slice(&self.length.to_le_bytes());
		buffer
	}

	/// Offset one past the last payload byte
	pub fn end(&self) -> u64 {
		u64::from(self.offset) + u64::from(self.length)
	}
}

impl Display for WemDescriptor {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "Wem {{ id: {}, offset: 0x{:X}, length: {} }}", self.id, self.offset, self.length)
	}
}

/// A single wem: descriptor, lazy payload and trailing padding.
#[derive(Debug, Clone)]
pub struct Wem {
	/// Where the wem lives in its container
	pub descriptor: WemDescriptor,
	pub(crate) payload: ByteRange,
	pub(crate) padding: Padding,
}

impl Wem {
	/// Creates a wem from its parts
	pub fn new(descriptor: WemDescriptor, payload: ByteRange, padding: Padding) -> Self {
		Self {
			descriptor,
			payload,
			padding,
		}
	}

	/// Lazy window over the wem payload
	pub fn payload(&self) -> &ByteRange {
		&self.payload
	}

	/// Bytes written after the payload
	pub fn padding(&self) -> &Padding {
		&self.padding
	}

	/// Writes payload followed by padding
	pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<u64> {
		let mut written = self.payload.write_to(writer)?;
		written += self.padding.write_to(writer)?;
		Ok(written)
	}
}

/// Request to swap the payload of the wem at `wem_index`.
#[derive(Debug, Clone)]
pub struct ReplacementWem {
	/// Index of the wem to replace, in container order
	pub wem_index: usize,
	/// New payload bytes
	pub payload: ByteRange,
}

impl ReplacementWem {
	/// Replaces the wem at `wem_index` with `length` bytes read from the start of `source`
	pub fn new(wem_index: usize, source: SharedSource, length: u64) -> Self {
		Self::from_range(wem_index, ByteRange::new(source, 0, length))
	}

	/// Replaces the wem at `wem_index` with an existing window
	pub fn from_range(wem_index: usize, payload: ByteRange) -> Self {
		Self {
			wem_index,
			payload,
		}
	}

	/// Replaces the wem at `wem_index` with an in-memory payload
	pub fn from_bytes(wem_index: usize, data: Vec<u8>) -> Self {
		Self::from_range(wem_index, ByteRange::from_bytes(data))
	}

	/// Replaces the wem at `wem_index` with the contents of a `.wem` file.
	///
	/// The file is opened now but only read when the container is written.
	pub fn from_path(wem_index: usize, path: impl AsRef<Path>) -> io::Result<Self> {
		let file = std::fs::File::open(path)?;
		let length = file.metadata()?.len();
		Ok(Self::new(wem_index, share(file), length))
	}

	/// Length of the new payload in bytes
	pub fn length(&self) -> u64 {
		self.payload.len()
	}
}

/// Operations every Wwise container offers its front ends.
pub trait Container {
	/// Error returned by fallible operations
	type Error: From<io::Error>;

	/// Wems in container order
	fn wems(&self) -> &[Wem];

	/// Replaces wem payloads and recomputes the container layout
	fn replace_wems(&mut self, replacements: &[ReplacementWem]) -> Result<(), Self::Error>;

	/// Serializes the whole container, returning the number of bytes written
	fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<u64, Self::Error>;
}
