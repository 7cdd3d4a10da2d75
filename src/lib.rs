#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `wwise-rs` reads, modifies and rewrites Wwise SoundBank (`.bnk`) containers.
//!
//! Wem payloads are never loaded eagerly: they stay lazy windows over the
//! opened file, so large banks can be rewritten with a small, constant memory
//! footprint.
//!
//! ```no_run
//! use wwise_rs::prelude::*;
//!
//! # fn main() -> Result<(), BnkError> {
//! let mut bank = BnkFile::open("Music.bnk")?;
//! bank.replace_wems(&[ReplacementWem::from_path(0, "theme.wem")?])?;
//! bank.save_to_file("Music_patched.bnk")?;
//! # Ok(())
//! # }
//! ```
//!
pub use wwise_internal::*;
