//! Benchmark helper utilities for wwise-rs
//!
//! This module generates synthetic SoundBanks so the benchmark suite does not
//! depend on game data. Generated banks contain every section the codec
//! interprets (BKHD, DIDX, DATA, HIRC) plus one section it replays verbatim.

/// Alignment of wem offsets in generated banks
pub const WEM_ALIGNMENT: usize = 16;

fn push_section(out: &mut Vec<u8>, tag: &[u8; 4], body: &[u8]) {
	out.extend_from_slice(tag);
	out.extend_from_slice(&(body.len() as u32).to_le_bytes());
	out.extend_from_slice(body);
}

/// Generates a SoundBank with `wem_count` wems of `wem_size` bytes each
///
/// Every wem has a looping sound object in HIRC, so loop edits can be
/// benchmarked on any index.
pub fn generate_test_bnk_data(wem_count: usize, wem_size: usize) -> Vec<u8> {
	let mut bank = Vec::new();

	// BKHD: version, bank ID, a few opaque bytes
	let mut bkhd = Vec::new();
	bkhd.extend_from_slice(&0x8Cu32.to_le_bytes());
	bkhd.extend_from_slice(&0x1234_5678u32.to_le_bytes());
	bkhd.extend_from_slice(&[0u8; 16]);
	push_section(&mut bank, b"BKHD", &bkhd);

	// DIDX + DATA
	let mut didx = Vec::with_capacity(wem_count * 12);
	let mut data = Vec::with_capacity(wem_count * wem_size.next_multiple_of(WEM_ALIGNMENT));
	for i in 0..wem_count {
		let id = 100_000 + i as u32;
		didx.extend_from_slice(&id.to_le_bytes());
		didx.extend_from_slice(&(data.len() as u32).to_le_bytes());
		didx.extend_from_slice(&(wem_size as u32).to_le_bytes());

		data.extend((0..wem_size).map(|j| (i + j) as u8));
		if i + 1 < wem_count {
			data.resize(data.len().next_multiple_of(WEM_ALIGNMENT), 0);
		}
	}
	push_section(&mut bank, b"DIDX", &didx);
	push_section(&mut bank, b"DATA", &data);

	// HIRC: one sound object per wem
	let mut hirc = (wem_count as u32).to_le_bytes().to_vec();
	for (i, entry) in didx.chunks_exact(12).enumerate() {
		let mut body = Vec::new();
		body.extend_from_slice(&0x0004_0001u32.to_le_bytes());
		body.push(0);
		body.extend_from_slice(entry);
		body.push(1);
		body.extend_from_slice(&2u32.to_le_bytes());
		body.extend_from_slice(&[0u8; 24]);

		hirc.push(0x02);
		hirc.extend_from_slice(&(body.len() as u32 + 4).to_le_bytes());
		hirc.extend_from_slice(&(200_000 + i as u32).to_le_bytes());
		hirc.extend_from_slice(&body);
	}
	push_section(&mut bank, b"HIRC", &hirc);

	push_section(&mut bank, b"STID", &[1, 0, 0, 0, 4, b'b', b'e', b'n', b'c']);
	bank
}
