//! Lazily re-seekable byte windows over shared random-access sources.
//!
//! A [`ByteRange`] never buffers the bytes it describes. Every read seeks the
//! shared source to `offset + cursor` first, so any number of windows over the
//! same file can be read in any order, and the same window can be read again
//! after it has been fully consumed.

use std::{
	cell::RefCell,
	fmt,
	io::{self, Read, Seek, SeekFrom, Write},
	rc::Rc,
};

/// Any random-access byte source a window can be opened over.
pub trait Source: Read + Seek {}

impl<T: Read + Seek> Source for T {}

/// Shared handle to a source.
///
/// Containers are single threaded, windows only need interior mutability to
/// seek the source they share.
pub type SharedSource = Rc<RefCell<dyn Source>>;

/// Wraps a reader into a [`SharedSource`].
pub fn share<S: Source + 'static>(source: S) -> SharedSource {
	Rc::new(RefCell::new(source))
}

/// Returns the total length of a source, restoring its position afterwards.
pub fn source_len(source: &SharedSource) -> io::Result<u64> {
	let mut source = source.borrow_mut();
	let position = source.stream_position()?;
	let end = source.seek(SeekFrom::End(0))?;
	source.seek(SeekFrom::Start(position))?;
	Ok(end)
}

/// A window of `len` bytes starting at `offset` in a shared source.
#[derive(Clone)]
pub struct ByteRange {
	source: SharedSource,
	offset: u64,
	len: u64,
}

impl ByteRange {
	/// Creates a window over `len` bytes at `offset`. Nothing is read.
	pub fn new(source: SharedSource, offset: u64, len: u64) -> Self {
		Self {
			source,
			offset,
			len,
		}
	}

	/// Creates a window spanning an entire in-memory buffer.
	pub fn from_bytes(data: Vec<u8>) -> Self {
		let len = data.len() as u64;
		Self::new(share(io::Cursor::new(data)), 0, len)
	}

	/// Absolute offset of the window in its source
	pub fn offset(&self) -> u64 {
		self.offset
	}

	/// Number of bytes in the window
	pub fn len(&self) -> u64 {
		self.len
	}

	/// Returns true if the window is empty
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Returns a window over the first `len` bytes of this one.
	pub fn truncated(&self, len: u64) -> Self {
		Self::new(self.source.clone(), self.offset, self.len.min(len))
	}

	/// Returns a fresh reader positioned at the start of the window.
	pub fn reader(&self) -> RangeReader {
		RangeReader {
			range: self.clone(),
			position: 0,
		}
	}

	/// Streams the whole window into `writer`.
	///
	/// Fails with [`io::ErrorKind::UnexpectedEof`] if the source ends before
	/// the window does.
	pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<u64> {
		if self.len == 0 {
			return Ok(0);
		}

		let mut source = self.source.borrow_mut();
		source.seek(SeekFrom::Start(self.offset))?;
		let copied = io::copy(&mut (&mut *source).take(self.len), writer)?;
		if copied != self.len {
			return Err(io::Error::new(
				io::ErrorKind::UnexpectedEof,
				format!(
					"byte range at 0x{:X} expected {} bytes, source ended after {}",
					self.offset, self.len, copied
				),
			));
		}
		Ok(copied)
	}

	/// Reads the whole window into memory.
	///
	/// Meant for small metadata bodies; wem payloads should be streamed with
	/// [`ByteRange::write_to`].
	pub fn read_all(&self) -> io::Result<Vec<u8>> {
		let mut buffer = Vec::with_capacity(self.len as usize);
		self.write_to(&mut buffer)?;
		Ok(buffer)
	}
}

impl fmt::Debug for ByteRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ByteRange").field("offset", &self.offset).field("len", &self.len).finish()
	}
}

/// Sequential reader over a [`ByteRange`].
#[derive(Debug, Clone)]
pub struct RangeReader {
	range: ByteRange,
	position: u64,
}

impl RangeReader {
	/// Number of bytes left to read
	pub fn remaining(&self) -> u64 {
		self.range.len - self.position
	}

	/// Rewinds the reader to the start of its window.
	pub fn rewind(&mut self) {
		self.position = 0;
	}
}

impl Read for RangeReader {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		let remaining = self.remaining();
		if remaining == 0 || buf.is_empty() {
			return Ok(0);
		}

		let wanted = buf.len().min(usize::try_from(remaining).unwrap_or(usize::MAX));
		let mut source = self.range.source.borrow_mut();
		source.seek(SeekFrom::Start(self.range.offset + self.position))?;
		let read = source.read(&mut buf[..wanted])?;
		self.position += read as u64;
		Ok(read)
	}
}

/// Filler bytes between the end of one wem and the start of the next.
///
/// Padding read from a file keeps its original bytes. When a layout change
/// grows a gap, the extra bytes are zeros.
#[derive(Debug, Clone, Default)]
pub struct Padding {
	kept: Option<ByteRange>,
	zeros: u64,
}

impl Padding {
	/// Empty padding
	pub fn none() -> Self {
		Self::default()
	}

	/// Padding replayed from an existing window
	pub fn from_range(range: ByteRange) -> Self {
		Self {
			kept: Some(range),
			zeros: 0,
		}
	}

	/// Padding made of `len` zero bytes
	pub fn zeros(len: u64) -> Self {
		Self {
			kept: None,
			zeros: len,
		}
	}

	/// Total padding size in bytes
	pub fn len(&self) -> u64 {
		self.kept.as_ref().map_or(0, ByteRange::len) + self.zeros
	}

	/// Returns true if there is no padding
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns padding of exactly `len` bytes, keeping as many of the original
	/// bytes as fit and zero-filling the rest.
	pub fn resized(&self, len: u64) -> Self {
		let kept = self.kept.as_ref().map(|range| range.truncated(len)).filter(|r| !r.is_empty());
		let kept_len = kept.as_ref().map_or(0, ByteRange::len);
		Self {
			kept,
			zeros: len - kept_len,
		}
	}

	/// Writes the padding bytes into `writer`.
	pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<u64> {
		let mut written = match &self.kept {
			Some(range) => range.write_to(writer)?,
			None => 0,
		};
		if self.zeros > 0 {
			written += io::copy(&mut io::repeat(0).take(self.zeros), writer)?;
		}
		Ok(written)
	}
}
