//! Core file operations for SoundBank files.
//!
//! This module contains the main `File` structure: section scanning, wem
//! replacement, loop editing and serialization.

use std::{
	fmt::{Display, Formatter},
	io::{self, BufWriter, Cursor, Read, Seek, Write},
	path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{
	file::BnkError,
	stream::{ByteRange, SharedSource, share, source_len},
	wem::{Container, ReplacementWem, Wem, WemDescriptor},
};

use super::{
	bkhd::BankHeaderSection,
	config::LayoutConfig,
	constants::SECTION_HEADER_SIZE,
	data::DataSection,
	didx::DataIndexSection,
	hirc::ObjectHierarchySection,
	object::LoopValue,
	section::{Section, SectionHeader, SectionKind},
};

/// File structure for `.bnk` files.
///
/// Sections keep their file order. Wem payloads and unknown bodies stay in the
/// source until the bank is written, so the source must outlive every write.
#[derive(Debug, Clone)]
pub struct File {
	sections: Vec<Section>,
	/// Path the bank was opened from, if any
	path: Option<PathBuf>,
}

impl File {
	/// Opens a `.bnk` file from the given path
	pub fn open(path: impl AsRef<Path>) -> Result<Self, BnkError> {
		let path = path.as_ref();
		let file = std::fs::File::open(path)?;
		let mut bank = Self::from_source(share(file))?;
		bank.path = Some(path.canonicalize()?);
		Ok(bank)
	}

	/// Parses a bank from an in-memory buffer
	pub fn from_bytes(data: Vec<u8>) -> Result<Self, BnkError> {
		Self::from_source(share(Cursor::new(data)))
	}

	/// Parses a bank from any seekable reader, taking ownership of it
	pub fn from_reader<R: Read + Seek + 'static>(reader: R) -> Result<Self, BnkError> {
		Self::from_source(share(reader))
	}

	/// Parses a bank from a shared source.
	///
	/// Sections are scanned until the source is exhausted.
	pub fn from_source(source: SharedSource) -> Result<Self, BnkError> {
		let total = source_len(&source)?;
		let mut sections: Vec<Section> = Vec::new();
		let mut position = 0u64;

		while position < total {
			let remaining = total - position;
			if remaining < SECTION_HEADER_SIZE as u64 {
				return Err(BnkError::insufficient_data(
					format!("section header at 0x{:X}", position),
					SECTION_HEADER_SIZE as u64,
					remaining,
				));
			}

			let mut buffer = [0u8; SECTION_HEADER_SIZE];
			ByteRange::new(source.clone(), position, SECTION_HEADER_SIZE as u64)
				.write_to(&mut &mut buffer[..])?;
			let header = SectionHeader::from_bytes(&buffer);

			let body_offset = position + SECTION_HEADER_SIZE as u64;
			let body_end = body_offset + u64::from(header.length);
			if body_end > total {
				return Err(BnkError::insufficient_data(
					format!("{} body", header.tag_str()),
					u64::from(header.length),
					total - body_offset,
				));
			}

			let kind = header.kind();
			if matches!(kind, SectionKind::DataIndex | SectionKind::Data)
				&& sections.iter().any(|section| section.header().kind() == kind)
			{
				return Err(BnkError::DuplicateSection(header.tag_str()));
			}

			let index = sections.iter().find_map(|section| match section {
				Section::DataIndex(index) => Some(index),
				_ => None,
			});
			let section = Section::read(header, &source, body_offset, index)?;
			sections.push(section);
			position = body_end;
		}

		debug!("Parsed {} sections from {} bytes", sections.len(), total);

		Ok(Self {
			sections,
			path: None,
		})
	}

	/// Sections in file order
	pub fn sections(&self) -> &[Section] {
		&self.sections
	}

	/// The BKHD section, if present
	pub fn bank_header(&self) -> Option<&BankHeaderSection> {
		self.sections.iter().find_map(|section| match section {
			Section::BankHeader(header) => Some(header),
			_ => None,
		})
	}

	/// The DIDX section, if present
	pub fn data_index(&self) -> Option<&DataIndexSection> {
		self.sections.iter().find_map(|section| match section {
			Section::DataIndex(index) => Some(index),
			_ => None,
		})
	}

	/// The DATA section, if present
	pub fn data(&self) -> Option<&DataSection> {
		self.sections.iter().find_map(|section| match section {
			Section::Data(data) => Some(data),
			_ => None,
		})
	}

	/// The HIRC section, if present
	pub fn object_hierarchy(&self) -> Option<&ObjectHierarchySection> {
		self.sections.iter().find_map(|section| match section {
			Section::ObjectHierarchy(hirc) => Some(hirc),
			_ => None,
		})
	}

	fn data_index_mut(&mut self) -> Option<&mut DataIndexSection> {
		self.sections.iter_mut().find_map(|section| match section {
			Section::DataIndex(index) => Some(index),
			_ => None,
		})
	}

	fn data_mut(&mut self) -> Option<&mut DataSection> {
		self.sections.iter_mut().find_map(|section| match section {
			Section::Data(data) => Some(data),
			_ => None,
		})
	}

	fn object_hierarchy_mut(&mut self) -> Option<&mut ObjectHierarchySection> {
		self.sections.iter_mut().find_map(|section| match section {
			Section::ObjectHierarchy(hirc) => Some(hirc),
			_ => None,
		})
	}

	/// Wems in file order, empty if the bank embeds none
	pub fn wems(&self) -> &[Wem] {
		self.data().map_or(&[][..], DataSection::wems)
	}

	/// Number of embedded wems
	pub fn wem_count(&self) -> usize {
		self.wems().len()
	}

	/// Replaces wems using the default 16-byte layout
	pub fn replace_wems(&mut self, replacements: &[ReplacementWem]) -> Result<(), BnkError> {
		self.replace_wems_with(replacements, &LayoutConfig::default())
	}

	/// Replaces wems, lays out the DATA section again and updates the DIDX.
	///
	/// The bank header and the object hierarchy are left untouched.
	pub fn replace_wems_with(
		&mut self,
		replacements: &[ReplacementWem],
		config: &LayoutConfig,
	) -> Result<(), BnkError> {
		let data = self.data_mut().ok_or(BnkError::MissingSection("DATA"))?;
		data.replace(replacements, config)?;
		let descriptors: Vec<WemDescriptor> = data.wems().iter().map(|wem| wem.descriptor).collect();

		let index = self.data_index_mut().ok_or(BnkError::MissingSection("DIDX"))?;
		index.sync_descriptors(&descriptors);

		info!("Replaced {} wems", replacements.len());
		Ok(())
	}

	/// Sets the loop parameters of the wem at `wem_index`
	pub fn replace_loop_of(&mut self, wem_index: usize, value: LoopValue) -> Result<(), BnkError> {
		let index = self.data_index().ok_or(BnkError::MissingSection("DIDX"))?;
		let wem_id = index.wem_id(wem_index).ok_or(BnkError::WemIndexOutOfRange {
			index: wem_index,
			count: index.wem_count(),
		})?;

		let hirc = self.object_hierarchy_mut().ok_or(BnkError::MissingSection("HIRC"))?;
		hirc.replace_loop_of(wem_id, value)?;
		info!("Wem {} (index {}) now loops: {}", wem_id, wem_index, value);
		Ok(())
	}

	/// Loop setting of the wem at `wem_index`, if a sound object plays it
	pub fn loop_value(&self, wem_index: usize) -> Option<LoopValue> {
		let wem_id = self.data_index()?.wem_id(wem_index)?;
		self.object_hierarchy()?.loop_value(wem_id)
	}

	/// Writes every section in order, returning the number of bytes written
	pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<u64, BnkError> {
		let mut written = 0;
		for section in &self.sections {
			written += section.write_to(writer)?;
		}
		Ok(written)
	}

	/// Serializes the bank into memory
	pub fn to_bytes(&self) -> Result<Vec<u8>, BnkError> {
		let mut buffer = Vec::new();
		self.write_to(&mut buffer)?;
		Ok(buffer)
	}

	/// Writes the bank to `path`.
	///
	/// Payloads are streamed from the source, so the target cannot be the file
	/// the bank was opened from.
	pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<u64, BnkError> {
		let path = path.as_ref();
		if let (Some(source), Ok(target)) = (&self.path, path.canonicalize())
			&& *source == target
		{
			return Err(io::Error::new(
				io::ErrorKind::InvalidInput,
				format!("cannot overwrite {} while reading from it", target.display()),
			)
			.into());
		}

		let mut writer = BufWriter::new(std::fs::File::create(path)?);
		let written = self.write_to(&mut writer)?;
		writer.flush()?;
		info!("Saved {} bytes to {}", written, path.display());
		Ok(written)
	}
}

impl Container for File {
	type Error = BnkError;

	fn wems(&self) -> &[Wem] {
		File::wems(self)
	}

	fn replace_wems(&mut self, replacements: &[ReplacementWem]) -> Result<(), BnkError> {
		File::replace_wems(self, replacements)
	}

	fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<u64, BnkError> {
		File::write_to(self, writer)
	}
}

impl Display for File {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		writeln!(f, "SoundBank: {} sections, {} wems", self.sections.len(), self.wem_count())?;
		for section in &self.sections {
			writeln!(f, "  {}", section)?;
		}
		Ok(())
	}
}
