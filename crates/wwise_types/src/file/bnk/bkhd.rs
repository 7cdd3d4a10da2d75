//! `BKHD` (bank header) section.

use std::{
	fmt::{Display, Formatter},
	io::Write,
};

use serde::{Deserialize, Serialize};

use crate::{
	file::BnkError,
	stream::{ByteRange, SharedSource},
};

use super::{
	constants::{BKHD_DESCRIPTOR_SIZE, BKHD_TAG},
	section::SectionHeader,
};

/// Metadata about the SoundBank as a whole
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BankDescriptor {
	/// Bank format version
	pub version: u32,
	/// Bank ID
	pub bank_id: u32,
}

impl BankDescriptor {
	/// Loads the descriptor from its 8-byte form
	pub fn from_bytes(data: &[u8; BKHD_DESCRIPTOR_SIZE]) -> Self {
		Self {
			version: u32::from_le_bytes([data[0], data[1], data[2], data[3]]),
			bank_id: u32::from_le_bytes([data[4], data[5], data[6], data[7]]),
		}
	}

	/// Serializes the descriptor to bytes
	pub fn to_bytes(self) -> [u8; BKHD_DESCRIPTOR_SIZE] {
		let mut buffer = [0u8; BKHD_DESCRIPTOR_SIZE];
		buffer[0..4].copy_from_slice(&self.version.to_le_bytes());
		buffer[4..8].copy_from_slice(&self.bank_id.to_le_bytes());
		buffer
	}
}

/// The BKHD section: bank descriptor plus bytes the codec does not interpret
#[derive(Debug, Clone)]
pub struct BankHeaderSection {
	/// Section header
	pub header: SectionHeader,
	/// Version and bank ID
	pub descriptor: BankDescriptor,
	trailing: ByteRange,
}

impl BankHeaderSection {
	/// Parses a BKHD body located at `body_offset`.
	///
	/// Only the descriptor is read. Everything after it stays a lazy window.
	///
	/// # Panics
	///
	/// Panics if `header` is not a BKHD header.
	pub fn read(
		header: SectionHeader,
		source: &SharedSource,
		body_offset: u64,
	) -> Result<Self, BnkError> {
		header.assert_tag(BKHD_TAG);

		let length = u64::from(header.length);
		if length < BKHD_DESCRIPTOR_SIZE as u64 {
			return Err(BnkError::insufficient_data("BKHD", BKHD_DESCRIPTOR_SIZE as u64, length));
		}

		let fixed = ByteRange::new(source.clone(), body_offset, BKHD_DESCRIPTOR_SIZE as u64);
		let mut buffer = [0u8; BKHD_DESCRIPTOR_SIZE];
		fixed.write_to(&mut &mut buffer[..])?;
		let descriptor = BankDescriptor::from_bytes(&buffer);

		let known = BKHD_DESCRIPTOR_SIZE as u64;
		let trailing = ByteRange::new(source.clone(), body_offset + known, length - known);

		Ok(Self {
			header,
			descriptor,
			trailing,
		})
	}

	/// Lazy window over the bytes after the descriptor
	pub fn trailing(&self) -> &ByteRange {
		&self.trailing
	}

	/// Writes header, descriptor and trailing bytes
	pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<u64, BnkError> {
		let mut written = self.header.write_to(writer)?;
		writer.write_all(&self.descriptor.to_bytes())?;
		written += BKHD_DESCRIPTOR_SIZE as u64;
		written += self.trailing.write_to(writer)?;
		Ok(written)
	}
}

impl Display for BankHeaderSection {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{} version({}) id({})",
			self.header, self.descriptor.version, self.descriptor.bank_id
		)
	}
}
