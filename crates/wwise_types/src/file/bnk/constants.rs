//! Constants used in `.bnk` files

/// Size of a section header (tag + length)
pub const SECTION_HEADER_SIZE: usize = 8;

/// Size of the known portion of a BKHD body (version + bank ID)
pub const BKHD_DESCRIPTOR_SIZE: usize = 8;

/// Size of one DIDX entry (wem ID, offset, length)
pub const DIDX_ENTRY_SIZE: usize = 12;

/// Size of the object count at the start of a HIRC body
pub const OBJECT_COUNT_SIZE: usize = 4;

/// Size of the descriptor starting every HIRC object (type, size, ID)
pub const OBJECT_DESCRIPTOR_SIZE: usize = 9;

/// Bytes of the object ID, which the declared object size includes
pub const OBJECT_ID_SIZE: u32 = 4;

/// HIRC type tag of a sound (SFX/voice) object
pub const SOUND_OBJECT_TYPE: u8 = 0x02;

/// Size of the fixed part of a sound object body:
/// plugin ID (4), stream type (1), wem descriptor (12), loop flag (1), loop count (4)
pub const SOUND_FIXED_BODY_SIZE: usize = 22;

/// Alignment of wem offsets inside the DATA section
pub const WEM_ALIGNMENT: u64 = 16;

/// Tag of the bank header section
pub const BKHD_TAG: [u8; 4] = *b"BKHD";

/// Tag of the data index section
pub const DIDX_TAG: [u8; 4] = *b"DIDX";

/// Tag of the data section
pub const DATA_TAG: [u8; 4] = *b"DATA";

/// Tag of the object hierarchy section
pub const HIRC_TAG: [u8; 4] = *b"HIRC";
