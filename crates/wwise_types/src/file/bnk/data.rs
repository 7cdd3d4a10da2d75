//! `DATA` section: the wem payloads themselves.
//!
//! Wems are stored back to back in DIDX order. Every wem starts on an aligned
//! offset, the bytes between the end of one wem and the start of the next are
//! padding:
//!
//! ```text
//! ┌──────────────┬─────────┬──────────────┬─────────┬─────┬──────────────┐
//! │ wem 0        │ padding │ wem 1        │ padding │ ... │ wem n        │
//! └──────────────┴─────────┴──────────────┴─────────┴─────┴──────────────┘
//! ^ offset 0                ^ offset aligned to 16
//! ```

use std::{
	fmt::{Display, Formatter},
	io::Write,
};

use log::{debug, info};

use crate::{
	file::BnkError,
	stream::{ByteRange, Padding, SharedSource},
	wem::{ReplacementWem, Wem},
};

use super::{config::LayoutConfig, constants::DATA_TAG, didx::DataIndexSection, section::SectionHeader};

/// The DATA section
#[derive(Debug, Clone)]
pub struct DataSection {
	/// Section header
	pub header: SectionHeader,
	/// Absolute offset of the first body byte in the source file
	data_start: u64,
	/// Bytes before the first wem, empty in every bank seen so far
	leading: Padding,
	wems: Vec<Wem>,
}

impl DataSection {
	/// Builds lazy windows for every wem listed in `index`.
	///
	/// No payload byte is read.
	///
	/// # Panics
	///
	/// Panics if `header` is not a DATA header.
	pub fn read(
		header: SectionHeader,
		source: &SharedSource,
		body_offset: u64,
		index: &DataIndexSection,
	) -> Result<Self, BnkError> {
		header.assert_tag(DATA_TAG);

		let section_len = u64::from(header.length);
		let descriptors: Vec<_> = index.descriptors().copied().collect();

		let first_offset = descriptors.first().map_or(section_len, |desc| u64::from(desc.offset));
		if first_offset > section_len {
			let id = descriptors.first().map_or(0, |desc| desc.id);
			return Err(BnkError::invalid_layout(0, id, "starts past the end of the DATA section"));
		}
		let leading = if first_offset == 0 {
			Padding::none()
		} else {
			Padding::from_range(ByteRange::new(source.clone(), body_offset, first_offset))
		};

		let mut wems = Vec::with_capacity(descriptors.len());
		for (i, desc) in descriptors.iter().enumerate() {
			let end = desc.end();
			if end > section_len {
				return Err(BnkError::invalid_layout(
					i,
					desc.id,
					format!("ends at 0x{:X}, past the DATA length 0x{:X}", end, section_len),
				));
			}

			// The last wem's padding runs to the end of the section.
			let next = descriptors.get(i + 1).map_or(section_len, |next| u64::from(next.offset));
			if next < end {
				return Err(BnkError::invalid_layout(
					i,
					desc.id,
					format!("ends at 0x{:X}, past the next wem at 0x{:X}", end, next),
				));
			}

			let payload =
				ByteRange::new(source.clone(), body_offset + u64::from(desc.offset), u64::from(desc.length));
			let padding = Padding::from_range(ByteRange::new(source.clone(), body_offset + end, next - end));
			wems.push(Wem::new(*desc, payload, padding));
		}

		debug!("DATA holds {} wems starting at 0x{:X}", wems.len(), body_offset);

		Ok(Self {
			header,
			data_start: body_offset,
			leading,
			wems,
		})
	}

	/// Absolute offset of the section body in the file it was parsed from
	pub fn data_start(&self) -> u64 {
		self.data_start
	}

	/// Wems in file order
	pub fn wems(&self) -> &[Wem] {
		&self.wems
	}

	/// Replaces wem payloads and lays out the whole section again.
	///
	/// Every request is validated before anything changes, so a failed call
	/// leaves the section untouched.
	pub fn replace(
		&mut self,
		replacements: &[ReplacementWem],
		config: &LayoutConfig,
	) -> Result<(), BnkError> {
		let count = self.wems.len();
		let mut lengths = Vec::with_capacity(replacements.len());
		for replacement in replacements {
			if replacement.wem_index >= count {
				return Err(BnkError::WemIndexOutOfRange {
					index: replacement.wem_index,
					count,
				});
			}
			let length = u32::try_from(replacement.length())
				.map_err(|_| BnkError::LayoutOverflow(replacement.length()))?;
			lengths.push(length);
		}

		let mut wems = self.wems.clone();
		for (replacement, length) in replacements.iter().zip(lengths) {
			let wem = &mut wems[replacement.wem_index];
			info!(
				"Replacing wem {} at index {} ({} -> {} bytes)",
				wem.descriptor.id, replacement.wem_index, wem.descriptor.length, length
			);
			wem.payload = replacement.payload.clone();
			wem.descriptor.length = length;
		}

		let (leading, length) = relayout(&self.leading, &mut wems, config)?;
		self.leading = leading;
		self.wems = wems;
		self.header.length = length;
		Ok(())
	}

	/// Writes header, then every wem followed by its padding
	pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<u64, BnkError> {
		let mut written = self.header.write_to(writer)?;
		written += self.leading.write_to(writer)?;
		for wem in &self.wems {
			written += wem.write_to(writer)?;
		}
		Ok(written)
	}
}

/// Recomputes offsets and padding of every wem from the ordered list.
///
/// Each wem starts at the previous wem's end rounded up to the alignment, the
/// last wem has no padding. Returns the new leading padding and section length.
fn relayout(
	leading: &Padding,
	wems: &mut [Wem],
	config: &LayoutConfig,
) -> Result<(Padding, u32), BnkError> {
	let mut cursor = config.align(leading.len());
	let leading = leading.resized(cursor);

	let count = wems.len();
	for (i, wem) in wems.iter_mut().enumerate() {
		wem.descriptor.offset = u32::try_from(cursor).map_err(|_| BnkError::LayoutOverflow(cursor))?;
		let end = cursor + u64::from(wem.descriptor.length);
		let next = if i + 1 < count { config.align(end) } else { end };
		wem.padding = wem.padding.resized(next - end);
		cursor = next;
	}

	let length = u32::try_from(cursor).map_err(|_| BnkError::LayoutOverflow(cursor))?;
	Ok((leading, length))
}

impl Display for DataSection {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} wems({})", self.header, self.wems.len())
	}
}
