//! Section envelope shared by every SoundBank section and tag dispatch.

use std::{
	fmt::{Display, Formatter},
	io::{Read, Write},
};

use log::debug;

use crate::{
	file::BnkError,
	stream::{ByteRange, SharedSource},
};

use super::{
	bkhd::BankHeaderSection,
	constants::{BKHD_TAG, DATA_TAG, DIDX_TAG, HIRC_TAG, SECTION_HEADER_SIZE},
	data::DataSection,
	didx::DataIndexSection,
	hirc::ObjectHierarchySection,
};

/// The 8-byte header in front of every section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionHeader {
	/// Four-character section tag
	pub tag: [u8; 4],
	/// Length of the section body, excluding this header
	pub length: u32,
}

/// Section types the codec knows how to interpret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
	/// `BKHD`
	BankHeader,
	/// `DIDX`
	DataIndex,
	/// `DATA`
	Data,
	/// `HIRC`
	ObjectHierarchy,
	/// Anything else, replayed verbatim
	Unknown,
}

impl SectionHeader {
	/// Creates a new header
	pub fn new(tag: [u8; 4], length: u32) -> Self {
		Self {
			tag,
			length,
		}
	}

	/// Loads a header from its 8-byte form
	pub fn from_bytes(data: &[u8; SECTION_HEADER_SIZE]) -> Self {
		Self {
			tag: [data[0], data[1], data[2], data[3]],
			length: u32::from_le_bytes([data[4], data[5], data[6], data[7]]),
		}
	}

	/// Loads a header from any reader
	pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, BnkError> {
		let mut buffer = [0u8; SECTION_HEADER_SIZE];
		reader.read_exact(&mut buffer)?;
		Ok(Self::from_bytes(&buffer))
	}

	/// Serializes the header to bytes
	pub fn to_bytes(self) -> [u8; SECTION_HEADER_SIZE] {
		let mut buffer = [0u8; SECTION_HEADER_SIZE];
		buffer[0..4].copy_from_slice(&self.tag);
		buffer[4..8].copy_from_slice(&self.length.to_le_bytes());
		buffer
	}

	/// Writes the header, returning the number of bytes written
	pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<u64, BnkError> {
		writer.write_all(&self.to_bytes())?;
		Ok(SECTION_HEADER_SIZE as u64)
	}

	/// Classifies the section by its tag
	pub fn kind(&self) -> SectionKind {
		match self.tag {
			BKHD_TAG => SectionKind::BankHeader,
			DIDX_TAG => SectionKind::DataIndex,
			DATA_TAG => SectionKind::Data,
			HIRC_TAG => SectionKind::ObjectHierarchy,
			_ => SectionKind::Unknown,
		}
	}

	/// Tag as printable text
	pub fn tag_str(&self) -> String {
		String::from_utf8_lossy(&self.tag).into_owned()
	}

	/// Panics unless the header carries `expected`. Typed constructors use it
	/// to catch dispatch bugs.
	pub(crate) fn assert_tag(&self, expected: [u8; 4]) {
		assert!(
			self.tag == expected,
			"Expected {} header but got: {}",
			String::from_utf8_lossy(&expected),
			self.tag_str()
		);
	}
}

impl Display for SectionHeader {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}: len({})", self.tag_str(), self.length)
	}
}

/// A section with an unrecognized tag
#[derive(Debug, Clone)]
pub struct UnknownSection {
	/// Section header
	pub header: SectionHeader,
	body: ByteRange,
}

impl UnknownSection {
	/// Wraps the body at `body_offset` without reading it
	pub fn read(header: SectionHeader, source: &SharedSource, body_offset: u64) -> Self {
		Self {
			header,
			body: ByteRange::new(source.clone(), body_offset, u64::from(header.length)),
		}
	}

	/// Lazy window over the section body
	pub fn body(&self) -> &ByteRange {
		&self.body
	}

	/// Writes header and body unchanged
	pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<u64, BnkError> {
		let written = self.header.write_to(writer)?;
		Ok(written + self.body.write_to(writer)?)
	}
}

/// One section of a SoundBank
#[derive(Debug, Clone)]
pub enum Section {
	/// `BKHD`
	BankHeader(BankHeaderSection),
	/// `DIDX`
	DataIndex(DataIndexSection),
	/// `DATA`
	Data(DataSection),
	/// `HIRC`
	ObjectHierarchy(ObjectHierarchySection),
	/// Any other tag
	Unknown(UnknownSection),
}

impl Section {
	/// Parses the body of the section described by `header`.
	///
	/// `body_offset` is the absolute position of the body in `source`. The
	/// DATA section needs the previously parsed DIDX to locate its wems.
	pub fn read(
		header: SectionHeader,
		source: &SharedSource,
		body_offset: u64,
		index: Option<&DataIndexSection>,
	) -> Result<Self, BnkError> {
		debug!("Parsing section {} at 0x{:X}", header, body_offset);

		let section = match header.kind() {
			SectionKind::BankHeader => {
				Self::BankHeader(BankHeaderSection::read(header, source, body_offset)?)
			}
			SectionKind::DataIndex => {
				let body = body_range(header, source, body_offset).read_all()?;
				Self::DataIndex(DataIndexSection::from_bytes(header, &body)?)
			}
			SectionKind::Data => {
				let index = index.ok_or(BnkError::MissingSection("DIDX"))?;
				Self::Data(DataSection::read(header, source, body_offset, index)?)
			}
			SectionKind::ObjectHierarchy => {
				let body = body_range(header, source, body_offset).read_all()?;
				Self::ObjectHierarchy(ObjectHierarchySection::from_bytes(header, &body)?)
			}
			SectionKind::Unknown => Self::Unknown(UnknownSection::read(header, source, body_offset)),
		};
		Ok(section)
	}

	/// Header of the section
	pub fn header(&self) -> &SectionHeader {
		match self {
			Self::BankHeader(section) => &section.header,
			Self::DataIndex(section) => &section.header,
			Self::Data(section) => &section.header,
			Self::ObjectHierarchy(section) => &section.header,
			Self::Unknown(section) => &section.header,
		}
	}

	/// Writes the full section, returning the number of bytes written
	pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<u64, BnkError> {
		let written = match self {
			Self::BankHeader(section) => section.write_to(writer)?,
			Self::DataIndex(section) => section.write_to(writer)?,
			Self::Data(section) => section.write_to(writer)?,
			Self::ObjectHierarchy(section) => section.write_to(writer)?,
			Self::Unknown(section) => section.write_to(writer)?,
		};
		debug!("Wrote section {} ({} bytes)", self.header(), written);
		Ok(written)
	}
}

impl Display for Section {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::BankHeader(section) => write!(f, "{}", section),
			Self::DataIndex(section) => write!(f, "{}", section),
			Self::Data(section) => write!(f, "{}", section),
			Self::ObjectHierarchy(section) => write!(f, "{}", section),
			Self::Unknown(section) => write!(f, "{}", section.header),
		}
	}
}

fn body_range(header: SectionHeader, source: &SharedSource, body_offset: u64) -> ByteRange {
	ByteRange::new(source.clone(), body_offset, u64::from(header.length))
}
