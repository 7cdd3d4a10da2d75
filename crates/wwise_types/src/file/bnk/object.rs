//! HIRC objects.
//!
//! Every object starts with a 9-byte descriptor:
//!
//! ```text
//! Offset  Size  Field        Description
//! ------  ----  -----------  ------------------------------------------
//! +0x00   1     type         Object type tag
//! +0x01   4     size         Bytes that follow this field (ID + body)
//! +0x05   4     object_id    Object ID
//! ```
//!
//! Only sound objects (type `0x02`) are decoded, everything else is kept as an
//! opaque body. A sound object body starts with a fixed 22-byte block:
//!
//! ```text
//! Offset  Size  Field        Description
//! ------  ----  -----------  ------------------------------------------
//! +0x00   4     plugin_id    Source plugin ID
//! +0x04   1     stream_type  Embedded / streamed / prefetched
//! +0x05   12    wem          Wem descriptor (id, offset, length)
//! +0x11   1     loops        0 = plays once, 1 = loops
//! +0x12   4     loop_count   Loop count, 0 = infinite
//! +0x16   ...   remainder    Remaining parameters, replayed verbatim
//! ```

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::{
	file::BnkError,
	wem::{WEM_DESCRIPTOR_SIZE, WemDescriptor},
};

use super::constants::{
	OBJECT_DESCRIPTOR_SIZE, OBJECT_ID_SIZE, SOUND_FIXED_BODY_SIZE, SOUND_OBJECT_TYPE,
};

/// Loop setting requested for a wem.
///
/// `value` is ignored when `loops` is false, `value == 0` means infinite.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoopValue {
	/// Whether the wem loops at all
	pub loops: bool,
	/// Loop count, 0 for infinite
	pub value: u32,
}

impl LoopValue {
	/// Plays once
	pub fn none() -> Self {
		Self::default()
	}

	/// Loops forever
	pub fn infinite() -> Self {
		Self {
			loops: true,
			value: 0,
		}
	}

	/// Loops `count` times
	pub fn times(count: u32) -> Self {
		Self {
			loops: true,
			value: count,
		}
	}

	/// Returns true for an infinite loop
	pub fn is_infinite(&self) -> bool {
		self.loops && self.value == 0
	}
}

impl std::fmt::Display for LoopValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match (self.loops, self.value) {
			(false, _) => write!(f, "none"),
			(true, 0) => write!(f, "infinite"),
			(true, count) => write!(f, "{}", count),
		}
	}
}

/// Descriptor common to every HIRC object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectDescriptor {
	/// Object type tag
	pub object_type: u8,
	/// Size of the object ID plus body
	pub size: u32,
	/// Object ID
	pub object_id: u32,
}

impl ObjectDescriptor {
	/// Loads a descriptor from any reader
	pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, BnkError> {
		let mut buffer = [0u8; OBJECT_DESCRIPTOR_SIZE];
		reader.read_exact(&mut buffer)?;
		Ok(Self {
			object_type: buffer[0],
			size: u32::from_le_bytes([buffer[1], buffer[2], buffer[3], buffer[4]]),
			object_id: u32::from_le_bytes([buffer[5], buffer[6], buffer[7], buffer[8]]),
		})
	}

	/// Serializes the descriptor to bytes
	pub fn to_bytes(self) -> [u8; OBJECT_DESCRIPTOR_SIZE] {
		let mut buffer = [0u8; OBJECT_DESCRIPTOR_SIZE];
		buffer[0] = self.object_type;
		buffer[1..5].copy_from_slice(&self.size.to_le_bytes());
		buffer[5..9].copy_from_slice(&self.object_id.to_le_bytes());
		buffer
	}

	/// Size of the type-specific body that follows the descriptor
	pub fn body_size(&self) -> Result<u32, BnkError> {
		self.size.checked_sub(OBJECT_ID_SIZE).ok_or(BnkError::InvalidObjectSize {
			object_id: self.object_id,
			object_type: self.object_type,
			size: self.size,
			minimum: OBJECT_ID_SIZE,
		})
	}
}

/// Loop parameters stored in a sound object
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoopStructure {
	/// Whether the wem loops
	pub loops: bool,
	/// Loop count, 0 = infinite when `loops` is set
	pub loop_count: u32,
}

impl LoopStructure {
	/// Loop setting as seen by front ends
	pub fn value(&self) -> LoopValue {
		LoopValue {
			loops: self.loops,
			value: self.loop_count,
		}
	}
}

impl From<LoopValue> for LoopStructure {
	fn from(value: LoopValue) -> Self {
		Self {
			loops: value.loops,
			loop_count: if value.loops { value.value } else { 0 },
		}
	}
}

/// A sound (SFX or voice) object binding a wem to its playback parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundObject {
	/// Common descriptor
	pub descriptor: ObjectDescriptor,
	/// Source plugin ID
	pub plugin_id: u32,
	/// Stream type
	pub stream_type: u8,
	/// Copy of the wem descriptor this sound plays
	pub wem: WemDescriptor,
	/// Loop parameters
	pub loop_structure: LoopStructure,
	remainder: Vec<u8>,
}

impl SoundObject {
	/// Decodes a sound object body.
	///
	/// # Panics
	///
	/// Panics if `descriptor` is not a sound object descriptor.
	pub fn from_bytes(descriptor: ObjectDescriptor, body: &[u8]) -> Result<Self, BnkError> {
		assert_eq!(
			descriptor.object_type, SOUND_OBJECT_TYPE,
			"Expected a sound object but got type 0x{:02X}",
			descriptor.object_type
		);

		if body.len() < SOUND_FIXED_BODY_SIZE {
			return Err(BnkError::InvalidObjectSize {
				object_id: descriptor.object_id,
				object_type: descriptor.object_type,
				size: descriptor.size,
				minimum: SOUND_FIXED_BODY_SIZE as u32 + OBJECT_ID_SIZE,
			});
		}

		let plugin_id = u32::from_le_bytes([body[0], body[1], body[2], body[3]]);
		let stream_type = body[4];

		let mut wem = [0u8; WEM_DESCRIPTOR_SIZE];
		wem.copy_from_slice(&body[5..5 + WEM_DESCRIPTOR_SIZE]);
		let wem = WemDescriptor::from_bytes(&wem);

		let loops = match body[0x11] {
			0 => false,
			1 => true,
			flag => {
				return Err(BnkError::InvalidLoopFlag {
					object_id: descriptor.object_id,
					flag,
				});
			}
		};
		let loop_count = u32::from_le_bytes([body[0x12], body[0x13], body[0x14], body[0x15]]);

		Ok(Self {
			descriptor,
			plugin_id,
			stream_type,
			wem,
			loop_structure: LoopStructure {
				loops,
				loop_count,
			},
			remainder: body[SOUND_FIXED_BODY_SIZE..].to_vec(),
		})
	}

	/// Parameters following the loop structure, kept undecoded
	pub fn remainder(&self) -> &[u8] {
		&self.remainder
	}

	/// Writes the object, re-encoding its loop structure
	pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<u64, BnkError> {
		let mut fixed = [0u8; SOUND_FIXED_BODY_SIZE];
		fixed[0..4].copy_from_slice(&self.plugin_id.to_le_bytes());
		fixed[4] = self.stream_type;
		fixed[5..5 + WEM_DESCRIPTOR_SIZE].copy_from_slice(&self.wem.to_bytes());
		fixed[0x11] = u8::from(self.loop_structure.loops);
		fixed[0x12..0x16].copy_from_slice(&self.loop_structure.loop_count.to_le_bytes());

		writer.write_all(&self.descriptor.to_bytes())?;
		writer.write_all(&fixed)?;
		writer.write_all(&self.remainder)?;
		Ok((OBJECT_DESCRIPTOR_SIZE + SOUND_FIXED_BODY_SIZE + self.remainder.len()) as u64)
	}
}

/// Any object type the codec does not decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownObject {
	/// Common descriptor
	pub descriptor: ObjectDescriptor,
	body: Vec<u8>,
}

impl UnknownObject {
	/// Wraps a raw body
	pub fn new(descriptor: ObjectDescriptor, body: Vec<u8>) -> Self {
		Self {
			descriptor,
			body,
		}
	}

	/// Raw body bytes
	pub fn body(&self) -> &[u8] {
		&self.body
	}

	/// Writes descriptor and body unchanged
	pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<u64, BnkError> {
		writer.write_all(&self.descriptor.to_bytes())?;
		writer.write_all(&self.body)?;
		Ok((OBJECT_DESCRIPTOR_SIZE + self.body.len()) as u64)
	}
}

/// One HIRC object
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Object {
	/// Sound object with decoded loop parameters
	Sound(SoundObject),
	/// Object kept as raw bytes
	Unknown(UnknownObject),
}

impl Object {
	/// Reads one object: descriptor, then exactly the declared body.
	pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, BnkError> {
		let descriptor = ObjectDescriptor::from_reader(reader)?;
		let body_size = descriptor.body_size()?;

		let mut body = Vec::new();
		let read = reader.take(u64::from(body_size)).read_to_end(&mut body)?;
		if read < body_size as usize {
			return Err(BnkError::insufficient_data(
				format!("HIRC object {}", descriptor.object_id),
				u64::from(body_size),
				read as u64,
			));
		}

		match descriptor.object_type {
			SOUND_OBJECT_TYPE => Ok(Self::Sound(SoundObject::from_bytes(descriptor, &body)?)),
			_ => Ok(Self::Unknown(UnknownObject::new(descriptor, body))),
		}
	}

	/// Common descriptor
	pub fn descriptor(&self) -> &ObjectDescriptor {
		match self {
			Self::Sound(object) => &object.descriptor,
			Self::Unknown(object) => &object.descriptor,
		}
	}

	/// Writes the object, returning the number of bytes written
	pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<u64, BnkError> {
		match self {
			Self::Sound(object) => object.write_to(writer),
			Self::Unknown(object) => object.write_to(writer),
		}
	}
}
