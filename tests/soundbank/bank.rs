//! Minimal SoundBank writer used to seed the end-to-end tests

pub(crate) const WEM_IDS: [u32; 2] = [0x0A00_0001, 0x0A00_0002];

fn push_section(out: &mut Vec<u8>, tag: &[u8; 4], body: &[u8]) {
	out.extend_from_slice(tag);
	out.extend_from_slice(&(body.len() as u32).to_le_bytes());
	out.extend_from_slice(body);
}

/// `RIFF`-prefixed payload so extracted wems look like real ones
pub(crate) fn wem_payload(len: usize, seed: u8) -> Vec<u8> {
	let mut payload = b"RIFF".to_vec();
	payload.extend((4..len).map(|i| seed ^ i as u8));
	payload
}

/// Two wems, each played by a sound object; the first loops `first_loop` times
pub(crate) fn two_wem_bank(first_loop: Option<u32>) -> Vec<u8> {
	let payloads = [wem_payload(100, 0x11), wem_payload(33, 0x22)];

	let mut didx = Vec::new();
	let mut data = Vec::new();
	let mut entries = Vec::new();
	for (i, (id, payload)) in WEM_IDS.iter().zip(&payloads).enumerate() {
		let mut entry = Vec::new();
		entry.extend_from_slice(&id.to_le_bytes());
		entry.extend_from_slice(&(data.len() as u32).to_le_bytes());
		entry.extend_from_slice(&(payload.len() as u32).to_le_bytes());
		didx.extend_from_slice(&entry);
		entries.push(entry);

		data.extend_from_slice(payload);
		if i + 1 < payloads.len() {
			data.resize(data.len().next_multiple_of(16), 0);
		}
	}

	let mut hirc = 2u32.to_le_bytes().to_vec();
	for (i, entry) in entries.iter().enumerate() {
		let (loops, count) = match (i, first_loop) {
			(0, Some(count)) => (1u8, count),
			_ => (0u8, 0u32),
		};
		let mut body = Vec::new();
		body.extend_from_slice(&0x0004_0001u32.to_le_bytes());
		body.push(0);
		body.extend_from_slice(entry);
		body.push(loops);
		body.extend_from_slice(&count.to_le_bytes());
		body.extend_from_slice(&[0x00, 0x00, 0x01, 0x00]);

		hirc.push(0x02);
		hirc.extend_from_slice(&(body.len() as u32 + 4).to_le_bytes());
		hirc.extend_from_slice(&(0x0B00_0000 + i as u32).to_le_bytes());
		hirc.extend_from_slice(&body);
	}

	let mut bank = Vec::new();
	let mut bkhd = 0x8Cu32.to_le_bytes().to_vec();
	bkhd.extend_from_slice(&0xCAFEu32.to_le_bytes());
	push_section(&mut bank, b"BKHD", &bkhd);
	push_section(&mut bank, b"DIDX", &didx);
	push_section(&mut bank, b"DATA", &data);
	push_section(&mut bank, b"HIRC", &hirc);
	push_section(&mut bank, b"PLAT", b"Windows\0");
	bank
}
