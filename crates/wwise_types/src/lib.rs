//! This crate provides core data types and file format support for the `wwise-rs` project.
//!
//! # File Formats
//!
//! - **BNK**: Wwise SoundBank containers holding embedded `.wem` audio, their
//!   index and the object hierarchy describing playback
//!
//! # Building Blocks
//!
//! - [`stream`]: lazily re-seekable byte windows over a shared source
//! - [`wem`]: the wem model and the [`wem::Container`] trait every container implements
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use wwise_types::prelude::*;
//!
//! # fn main() -> Result<(), BnkError> {
//! let mut bank = BnkFile::open("Music.bnk")?;
//! bank.replace_loop_of(0, LoopValue::times(4))?;
//! bank.save_to_file("Music_loop.bnk")?;
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use wwise_types::file::BnkFile;
//!
//! # fn main() -> Result<(), wwise_types::file::BnkError> {
//! let bank = BnkFile::open("Music.bnk")?;
//! println!("{}", bank);
//! # Ok(())
//! # }
//! ```

pub mod file;
pub mod stream;
pub mod wem;

/// `use wwise_types::prelude::*;` to import commonly used items.
pub mod prelude;
