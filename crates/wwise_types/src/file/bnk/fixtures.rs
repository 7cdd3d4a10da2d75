//! Synthetic SoundBanks built byte by byte for the unit tests.

use super::{
	constants::{BKHD_TAG, DATA_TAG, DIDX_TAG, HIRC_TAG, SOUND_OBJECT_TYPE},
	object::LoopValue,
};
use crate::wem::WemDescriptor;

pub const BANK_VERSION: u32 = 0x8C;
pub const BANK_ID: u32 = 0x5EED_0001;
pub const BKHD_TRAILING: [u8; 12] = [0x01, 0, 0, 0, 0x10, 0x20, 0x30, 0x40, 0, 0, 0, 0];

pub const WEM_IDS: [u32; 3] = [1001, 1002, 1003];
pub const WEM_LENGTHS: [usize; 3] = [37, 64, 5];

pub const UNKNOWN_TAG: [u8; 4] = *b"STID";
pub const UNKNOWN_SECTION_BODY: [u8; 11] = *b"\x01\x00\x00\x00Music01";
pub const UNKNOWN_OBJECT_TYPE: u8 = 0x07;
pub const UNKNOWN_OBJECT_BODY: [u8; 10] = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
pub const SOUND_REMAINDER: [u8; 7] = [0xAA, 0xBB, 0xCC, 0xDD, 0x00, 0x01, 0x02];

/// Deterministic payload bytes for the wem with the given seed
pub fn payload(seed: u8, len: usize) -> Vec<u8> {
	(0..len).map(|i| seed.wrapping_mul(31).wrapping_add(i as u8)).collect()
}

pub fn section(tag: [u8; 4], body: &[u8]) -> Vec<u8> {
	let mut out = Vec::with_capacity(8 + body.len());
	out.extend_from_slice(&tag);
	out.extend_from_slice(&(body.len() as u32).to_le_bytes());
	out.extend_from_slice(body);
	out
}

pub fn bkhd(version: u32, bank_id: u32, trailing: &[u8]) -> Vec<u8> {
	let mut body = Vec::new();
	body.extend_from_slice(&version.to_le_bytes());
	body.extend_from_slice(&bank_id.to_le_bytes());
	body.extend_from_slice(trailing);
	section(BKHD_TAG, &body)
}

pub fn didx(descriptors: &[WemDescriptor]) -> Vec<u8> {
	let body: Vec<u8> = descriptors.iter().flat_map(|desc| desc.to_bytes()).collect();
	section(DIDX_TAG, &body)
}

/// Lays `payloads` out on 16-byte boundaries, filling gaps with `fill` and
/// appending `tail` extra fill bytes after the last wem.
pub fn data(ids: &[u32], payloads: &[Vec<u8>], fill: u8, tail: usize) -> (Vec<u8>, Vec<WemDescriptor>) {
	let mut body = Vec::new();
	let mut descriptors = Vec::new();
	for (i, (id, payload)) in ids.iter().zip(payloads).enumerate() {
		descriptors.push(WemDescriptor::new(*id, body.len() as u32, payload.len() as u32));
		body.extend_from_slice(payload);
		if i + 1 < payloads.len() {
			body.resize(body.len().next_multiple_of(16), fill);
		}
	}
	body.resize(body.len() + tail, fill);
	(section(DATA_TAG, &body), descriptors)
}

pub fn sound_object(object_id: u32, wem: WemDescriptor, value: LoopValue, loop_flag: Option<u8>) -> Vec<u8> {
	let mut body = Vec::new();
	body.extend_from_slice(&0x0004_0001u32.to_le_bytes());
	body.push(0);
	body.extend_from_slice(&wem.to_bytes());
	body.push(loop_flag.unwrap_or(u8::from(value.loops)));
	let count = if value.loops { value.value } else { 0 };
	body.extend_from_slice(&count.to_le_bytes());
	body.extend_from_slice(&SOUND_REMAINDER);
	object(SOUND_OBJECT_TYPE, object_id, &body)
}

pub fn object(object_type: u8, object_id: u32, body: &[u8]) -> Vec<u8> {
	let mut out = vec![object_type];
	out.extend_from_slice(&(body.len() as u32 + 4).to_le_bytes());
	out.extend_from_slice(&object_id.to_le_bytes());
	out.extend_from_slice(body);
	out
}

pub fn hirc(objects: &[Vec<u8>], trailing: &[u8]) -> Vec<u8> {
	let mut body = (objects.len() as u32).to_le_bytes().to_vec();
	for object in objects {
		body.extend_from_slice(object);
	}
	body.extend_from_slice(trailing);
	section(HIRC_TAG, &body)
}

pub fn payloads() -> Vec<Vec<u8>> {
	WEM_LENGTHS.iter().enumerate().map(|(i, len)| payload(i as u8 + 1, *len)).collect()
}

/// Three-wem bank: BKHD, DIDX, DATA, HIRC and an unknown STID section.
///
/// Wem 0 plays with `first_loop`, wem 1 loops 3 times and wem 2
/// has no sound object at all. HIRC also holds an unknown object.
pub fn sample_bank(first_loop: LoopValue) -> Vec<u8> {
	sample_bank_with(first_loop, 0, 0)
}

/// [`sample_bank`] with custom DATA fill byte and extra bytes after the last wem
pub fn sample_bank_with(first_loop: LoopValue, fill: u8, tail: usize) -> Vec<u8> {
	let (data, descriptors) = data(&WEM_IDS, &payloads(), fill, tail);

	let objects = vec![
		sound_object(2001, descriptors[0], first_loop, None),
		object(UNKNOWN_OBJECT_TYPE, 3001, &UNKNOWN_OBJECT_BODY),
		sound_object(2002, descriptors[1], LoopValue::times(3), None),
	];

	let mut bank = bkhd(BANK_VERSION, BANK_ID, &BKHD_TRAILING);
	bank.extend(didx(&descriptors));
	bank.extend(data);
	bank.extend(hirc(&objects, &[]));
	bank.extend(section(UNKNOWN_TAG, &UNKNOWN_SECTION_BODY));
	bank
}
