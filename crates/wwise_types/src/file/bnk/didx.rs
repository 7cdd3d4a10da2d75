//! `DIDX` (data index) section.

use std::{
	collections::HashMap,
	fmt::{Display, Formatter},
	io::Write,
};

use log::trace;

use crate::{
	file::BnkError,
	wem::{WEM_DESCRIPTOR_SIZE, WemDescriptor},
};

use super::{
	constants::{DIDX_ENTRY_SIZE, DIDX_TAG},
	section::SectionHeader,
};

/// The DIDX section: one descriptor per wem embedded in the DATA section
#[derive(Debug, Clone)]
pub struct DataIndexSection {
	/// Section header
	pub header: SectionHeader,
	/// Wem IDs in file order
	wem_ids: Vec<u32>,
	/// Wem ID to descriptor
	descriptors: HashMap<u32, WemDescriptor>,
}

impl DataIndexSection {
	/// Parses a DIDX body.
	///
	/// # Errors
	///
	/// Fails if the body is not a whole number of entries or if a wem ID is
	/// repeated, which only happens in corrupt files.
	///
	/// # Panics
	///
	/// Panics if `header` is not a DIDX header.
	pub fn from_bytes(header: SectionHeader, body: &[u8]) -> Result<Self, BnkError> {
		header.assert_tag(DIDX_TAG);

		let length = header.length as usize;
		if length % DIDX_ENTRY_SIZE != 0 {
			return Err(BnkError::MisalignedIndex {
				length: header.length,
				entry_size: DIDX_ENTRY_SIZE,
			});
		}
		if body.len() < length {
			return Err(BnkError::insufficient_data("DIDX", length as u64, body.len() as u64));
		}

		let wem_count = length / DIDX_ENTRY_SIZE;
		let mut wem_ids = Vec::with_capacity(wem_count);
		let mut descriptors = HashMap::with_capacity(wem_count);

		for chunk in body[..length].chunks_exact(DIDX_ENTRY_SIZE) {
			let mut entry = [0u8; WEM_DESCRIPTOR_SIZE];
			entry.copy_from_slice(chunk);
			let desc = WemDescriptor::from_bytes(&entry);

			if descriptors.contains_key(&desc.id) {
				return Err(BnkError::DuplicateWemId(desc.id));
			}
			trace!("DIDX entry {}", desc);
			wem_ids.push(desc.id);
			descriptors.insert(desc.id, desc);
		}

		Ok(Self {
			header,
			wem_ids,
			descriptors,
		})
	}

	/// Number of wems in the bank
	pub fn wem_count(&self) -> usize {
		self.wem_ids.len()
	}

	/// Wem IDs in file order
	pub fn wem_ids(&self) -> &[u32] {
		&self.wem_ids
	}

	/// ID of the wem at `index`
	pub fn wem_id(&self, index: usize) -> Option<u32> {
		self.wem_ids.get(index).copied()
	}

	/// Descriptor of the wem with the given ID
	pub fn descriptor(&self, id: u32) -> Option<&WemDescriptor> {
		self.descriptors.get(&id)
	}

	/// Descriptors in file order
	pub fn descriptors(&self) -> impl Iterator<Item = &WemDescriptor> {
		self.wem_ids.iter().filter_map(|id| self.descriptors.get(id))
	}

	/// Total payload size of all wems
	pub fn total_wem_size(&self) -> u64 {
		self.descriptors.values().map(|desc| u64::from(desc.length)).sum()
	}

	/// Overwrites stored descriptors with the ones the DATA section now uses.
	pub(crate) fn sync_descriptors<'a>(
		&mut self,
		updated: impl IntoIterator<Item = &'a WemDescriptor>,
	) {
		for desc in updated {
			if let Some(stored) = self.descriptors.get_mut(&desc.id) {
				*stored = *desc;
			}
		}
	}

	/// Writes header and every descriptor in file order
	pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<u64, BnkError> {
		let mut written = self.header.write_to(writer)?;
		for desc in self.descriptors() {
			writer.write_all(&desc.to_bytes())?;
			written += DIDX_ENTRY_SIZE as u64;
		}
		Ok(written)
	}
}

impl Display for DataIndexSection {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{} wem_count({}) total_wem_size({})",
			self.header,
			self.wem_count(),
			self.total_wem_size()
		)
	}
}
