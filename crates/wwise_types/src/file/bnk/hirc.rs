//! `HIRC` (object hierarchy) section.
//!
//! ```text
//! Offset  Size  Field    Description
//! ------  ----  -------  ------------------------------------------
//! +0x00   4     count    Number of objects
//! +0x04   ...   objects  `count` objects, see [`super::object`]
//! ```

use std::{
	collections::HashMap,
	fmt::{Display, Formatter},
	io::{Cursor, Write},
};

use log::{debug, trace, warn};

use crate::file::BnkError;

use super::{
	constants::{HIRC_TAG, OBJECT_COUNT_SIZE, OBJECT_DESCRIPTOR_SIZE},
	object::{LoopStructure, LoopValue, Object},
	section::SectionHeader,
};

/// The HIRC section
#[derive(Debug, Clone)]
pub struct ObjectHierarchySection {
	/// Section header
	pub header: SectionHeader,
	objects: Vec<Object>,
	/// Bytes after the last declared object
	trailing: Vec<u8>,
	/// Wem ID to loop count, looping wems only
	loop_of: HashMap<u32, u32>,
	/// Wem ID to the position of its sound object in `objects`
	wem_to_object: HashMap<u32, usize>,
}

impl ObjectHierarchySection {
	/// Parses a HIRC body.
	///
	/// # Panics
	///
	/// Panics if `header` is not a HIRC header.
	pub fn from_bytes(header: SectionHeader, body: &[u8]) -> Result<Self, BnkError> {
		header.assert_tag(HIRC_TAG);

		if body.len() < OBJECT_COUNT_SIZE {
			return Err(BnkError::insufficient_data(
				"HIRC object count",
				OBJECT_COUNT_SIZE as u64,
				body.len() as u64,
			));
		}
		let count = u32::from_le_bytes([body[0], body[1], body[2], body[3]]);

		let mut cursor = Cursor::new(body);
		cursor.set_position(OBJECT_COUNT_SIZE as u64);

		let mut objects = Vec::with_capacity((count as usize).min(body.len()));
		for i in 0..count {
			let remaining = body.len() as u64 - cursor.position();
			let object = Object::from_reader(&mut cursor).map_err(|err| match err {
				BnkError::IOError(_) => BnkError::insufficient_data(
					format!("HIRC object {} of {}", i, count),
					OBJECT_DESCRIPTOR_SIZE as u64,
					remaining,
				),
				other => other,
			})?;
			trace!(
				"HIRC object type 0x{:02X} id {}",
				object.descriptor().object_type,
				object.descriptor().object_id
			);
			objects.push(object);
		}

		let position = cursor.position() as usize;
		let trailing = body[position..].to_vec();
		if !trailing.is_empty() {
			debug!("HIRC keeps {} bytes after its last object", trailing.len());
		}

		let mut section = Self {
			header,
			objects,
			trailing,
			loop_of: HashMap::new(),
			wem_to_object: HashMap::new(),
		};
		section.index_sound_objects();
		Ok(section)
	}

	fn index_sound_objects(&mut self) {
		self.loop_of.clear();
		self.wem_to_object.clear();

		for (position, object) in self.objects.iter().enumerate() {
			let Object::Sound(sound) = object else {
				continue;
			};
			let wem_id = sound.wem.id;
			if let Some(previous) = self.wem_to_object.insert(wem_id, position) {
				warn!(
					"Sound object {} shadows object at position {} for wem {}",
					sound.descriptor.object_id, previous, wem_id
				);
			}
			self.loop_of.remove(&wem_id);
			if sound.loop_structure.loops {
				self.loop_of.insert(wem_id, sound.loop_structure.loop_count);
			}
		}
	}

	/// Objects in file order
	pub fn objects(&self) -> &[Object] {
		&self.objects
	}

	/// Number of objects
	pub fn object_count(&self) -> usize {
		self.objects.len()
	}

	/// Bytes kept after the last object
	pub fn trailing(&self) -> &[u8] {
		&self.trailing
	}

	/// Loop count of a looping wem, `None` if it does not loop or has no sound object
	pub fn loop_of(&self, wem_id: u32) -> Option<u32> {
		self.loop_of.get(&wem_id).copied()
	}

	/// Loop setting of the sound object playing `wem_id`
	pub fn loop_value(&self, wem_id: u32) -> Option<LoopValue> {
		let position = *self.wem_to_object.get(&wem_id)?;
		match &self.objects[position] {
			Object::Sound(sound) => Some(sound.loop_structure.value()),
			Object::Unknown(_) => None,
		}
	}

	/// Rewrites the loop parameters of the sound object playing `wem_id`.
	///
	/// Only the loop flag and loop count change, the object keeps its size.
	pub fn replace_loop_of(&mut self, wem_id: u32, value: LoopValue) -> Result<(), BnkError> {
		let position = *self.wem_to_object.get(&wem_id).ok_or(BnkError::NoLoopObject {
			wem_id,
		})?;
		let Some(Object::Sound(sound)) = self.objects.get_mut(position) else {
			return Err(BnkError::NoLoopObject {
				wem_id,
			});
		};

		let structure = LoopStructure::from(value);
		debug!(
			"Wem {} loop {} -> {}",
			wem_id,
			sound.loop_structure.value(),
			structure.value()
		);
		sound.loop_structure = structure;

		if structure.loops {
			self.loop_of.insert(wem_id, structure.loop_count);
		} else {
			self.loop_of.remove(&wem_id);
		}
		Ok(())
	}

	/// Writes header, object count, every object and the trailing bytes
	pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<u64, BnkError> {
		let mut written = self.header.write_to(writer)?;
		let count = u32::try_from(self.objects.len())
			.map_err(|_| BnkError::LayoutOverflow(self.objects.len() as u64))?;
		writer.write_all(&count.to_le_bytes())?;
		written += OBJECT_COUNT_SIZE as u64;
		for object in &self.objects {
			written += object.write_to(writer)?;
		}
		writer.write_all(&self.trailing)?;
		written += self.trailing.len() as u64;
		Ok(written)
	}
}

impl Display for ObjectHierarchySection {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{} objects({}) looping_wems({})",
			self.header,
			self.objects.len(),
			self.loop_of.len()
		)
	}
}
