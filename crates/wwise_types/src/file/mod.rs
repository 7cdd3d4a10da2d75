//! File type support for `wwise-rs` project.

mod error;

pub mod bnk;

// Re-export unified error type
pub use error::BnkError;

// Re-export main file types
pub use bnk::{
	BankDescriptor, BankHeaderSection, DataIndexSection, DataSection, File as BnkFile,
	LayoutConfig, LoopValue, Object, ObjectHierarchySection, Section, SectionHeader, SoundObject,
	UnknownObject, UnknownSection,
};
