//! SoundBank file support for `wwise-rs` project.
//!
//! This module reads, modifies and rewrites `.bnk` (Wwise SoundBank) files:
//! containers that embed `.wem` audio payloads next to the metadata describing
//! how they are played.
//!
//! # File Structure
//!
//! A SoundBank is a sequence of sections. Each section starts with an 8-byte
//! header (four-character tag, `u32` little-endian body length) followed by its
//! body:
//!
//! - `BKHD`: bank version and ID, followed by bytes that are kept verbatim
//! - `DIDX`: one 12-byte entry (ID, offset, length) per embedded wem
//! - `DATA`: wem payloads, each starting on a 16-byte boundary
//! - `HIRC`: object hierarchy, sound objects carry the per-wem loop settings
//!
//! Any other tag is replayed unchanged.
//!
//! # Features
//!
//! - **Lazy parsing**: wem payloads are never buffered, they stay windows into
//!   the source until the bank is written
//! - **Exact round trip**: an unmodified bank is written back byte for byte
//! - **Replacement**: swap wem payloads, offsets and padding are recomputed
//! - **Loop editing**: change the loop flag and count of the sound playing a wem
//!
//! # Examples
//!
//! ## Listing wems
//!
//! ```no_run
//! use wwise_types::file::bnk::File;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bank = File::open("Init.bnk")?;
//!
//! for (i, wem) in bank.wems().iter().enumerate() {
//!     println!("{}: {} ({} bytes)", i, wem.descriptor.id, wem.descriptor.length);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Replacing a wem and making it loop
//!
//! ```no_run
//! use wwise_types::{
//!     file::bnk::{File, LoopValue},
//!     wem::ReplacementWem,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut bank = File::open("Music.bnk")?;
//!
//! bank.replace_wems(&[ReplacementWem::from_path(0, "new_theme.wem")?])?;
//! bank.replace_loop_of(0, LoopValue::infinite())?;
//!
//! bank.save_to_file("Music_patched.bnk")?;
//! # Ok(())
//! # }
//! ```

mod bkhd;
mod config;
mod data;
mod didx;
mod file;
mod hirc;
mod object;
mod section;

pub mod constants;

pub use bkhd::{BankDescriptor, BankHeaderSection};
pub use config::LayoutConfig;
pub use data::DataSection;
pub use didx::DataIndexSection;
pub use file::File;
pub use hirc::ObjectHierarchySection;
pub use object::{LoopStructure, LoopValue, Object, ObjectDescriptor, SoundObject, UnknownObject};
pub use section::{Section, SectionHeader, SectionKind, UnknownSection};

#[cfg(test)]
mod fixtures;
