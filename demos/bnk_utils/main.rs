//! BNK (Wwise SoundBank) CLI Utility
//!
//! A command-line tool for inspecting SoundBanks, extracting and replacing
//! their embedded wems, and editing loop settings.
//!
//! # Features
//!
//! - **info**: List sections, wems and loop settings, optionally as JSON
//! - **extract**: Write one wem or every wem to `.wem` files
//! - **replace**: Swap wem payloads and write the re-laid-out bank
//! - **loop**: Change how often a wem loops
//!
//! # Usage
//!
//! ```bash
//! # Show the bank layout
//! cargo run --example bnk_utils info Music.bnk
//! cargo run --example bnk_utils info Music.bnk --json
//!
//! # Extract every wem (auto output: Music_wems/)
//! cargo run --example bnk_utils extract Music.bnk
//!
//! # Extract wem 3 only
//! cargo run --example bnk_utils extract Music.bnk --index 3
//!
//! # Replace wems 0 and 2 (auto output: Music_patched.bnk)
//! cargo run --example bnk_utils replace Music.bnk --wem 0=theme.wem --wem 2=battle.wem
//!
//! # Loop wem 0 forever, or 4 times, or not at all
//! cargo run --example bnk_utils loop Music.bnk 0 infinite
//! cargo run --example bnk_utils loop Music.bnk 0 4 Music_loop.bnk
//! cargo run --example bnk_utils loop Music.bnk 0 none
//! ```

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::{debug, info};
use serde::Serialize;
use std::{
	fs,
	path::{Path, PathBuf},
};
use wwise_rs::prelude::*;

fn main() -> Result<()> {
	let cli = Cli::parse();

	let default_level = if cli.verbose { "debug" } else { "info" };
	env_logger::init_from_env(env_logger::Env::default().default_filter_or(default_level));

	match cli.command {
		Commands::Info {
			input,
			json,
		} => handle_info(&input, json),
		Commands::Extract {
			input,
			index,
			output,
		} => handle_extract(&input, index, output),
		Commands::Replace {
			input,
			wems,
			output,
			alignment,
		} => handle_replace(&input, &wems, output, alignment),
		Commands::Loop {
			input,
			index,
			value,
			output,
		} => handle_loop(&input, index, value, output),
	}
}

#[derive(Parser)]
#[command(name = "bnk_utils")]
#[command(author = "wwise-rs project")]
#[command(version)]
#[command(about = "SoundBank utility - inspect, extract, replace and loop wems in .bnk files", long_about = None)]
struct Cli {
	/// Show debug logs from the codec (`RUST_LOG` takes precedence)
	#[arg(short, long, global = true)]
	verbose: bool,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Show sections, wems and loop settings
	Info {
		/// Input BNK file path
		#[arg(value_name = "INPUT_BNK")]
		input: PathBuf,

		/// Print machine-readable JSON instead of text
		#[arg(long)]
		json: bool,
	},

	/// Extract wems to `.wem` files named after their IDs
	Extract {
		/// Input BNK file path
		#[arg(value_name = "INPUT_BNK")]
		input: PathBuf,

		/// Only extract the wem at this index
		#[arg(short, long)]
		index: Option<usize>,

		/// Output directory (optional, defaults to `input_wems/`)
		#[arg(short, long, value_name = "OUTPUT_DIR")]
		output: Option<PathBuf>,
	},

	/// Replace wems and write the re-laid-out bank
	Replace {
		/// Input BNK file path
		#[arg(value_name = "INPUT_BNK")]
		input: PathBuf,

		/// Replacement as `INDEX=PATH`, may be repeated
		#[arg(short, long = "wem", value_name = "INDEX=PATH", value_parser = parse_replacement, required = true)]
		wems: Vec<(usize, PathBuf)>,

		/// Output BNK file path (optional, defaults to `input_patched.bnk`)
		#[arg(short, long, value_name = "OUTPUT_BNK")]
		output: Option<PathBuf>,

		/// Wem alignment in bytes, must be a power of two
		#[arg(long, default_value_t = 16)]
		alignment: u64,
	},

	/// Set the loop count of a wem
	Loop {
		/// Input BNK file path
		#[arg(value_name = "INPUT_BNK")]
		input: PathBuf,

		/// Wem index
		#[arg(value_name = "INDEX")]
		index: usize,

		/// `none`, `infinite` or a loop count
		#[arg(value_name = "LOOP", value_parser = parse_loop)]
		value: LoopValue,

		/// Output BNK file path (optional, defaults to `input_patched.bnk`)
		#[arg(value_name = "OUTPUT_BNK")]
		output: Option<PathBuf>,
	},
}

/// Parses `INDEX=PATH`
fn parse_replacement(s: &str) -> Result<(usize, PathBuf), String> {
	let (index, path) = s.split_once('=').ok_or_else(|| format!("expected INDEX=PATH, got '{}'", s))?;
	let index = index.trim().parse().map_err(|err| format!("invalid wem index '{}': {}", index, err))?;
	Ok((index, PathBuf::from(path)))
}

/// Parses `none`, `infinite` or a loop count
fn parse_loop(s: &str) -> Result<LoopValue, String> {
	match s.to_ascii_lowercase().as_str() {
		"none" | "off" => Ok(LoopValue::none()),
		"infinite" | "inf" | "0" => Ok(LoopValue::infinite()),
		count => count
			.parse()
			.map(LoopValue::times)
			.map_err(|err| format!("invalid loop value '{}': {}", s, err)),
	}
}

/// Builds `<stem><suffix>` next to the input file
fn sibling_path(input: &Path, suffix: &str) -> PathBuf {
	let stem = input.file_stem().map_or_else(|| "bank".into(), |stem| stem.to_string_lossy());
	input.with_file_name(format!("{}{}", stem, suffix))
}

fn open_bank(input: &Path) -> Result<BnkFile> {
	let bank = BnkFile::open(input).with_context(|| format!("Failed to parse {}", input.display()))?;
	debug!("Opened {}:\n{}", input.display(), bank);
	Ok(bank)
}

/// Section summary for JSON output
#[derive(Debug, Serialize)]
struct SectionInfo {
	tag: String,
	length: u32,
}

/// Wem summary for JSON output
#[derive(Debug, Serialize)]
struct WemInfo {
	index: usize,
	#[serde(flatten)]
	descriptor: WemDescriptor,
	padding: u64,
	/// First bytes of the payload, hex encoded
	magic: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	loop_value: Option<LoopValue>,
}

/// Bank summary for JSON output
#[derive(Debug, Serialize)]
struct BankInfo {
	#[serde(skip_serializing_if = "Option::is_none")]
	bank: Option<BankDescriptor>,
	sections: Vec<SectionInfo>,
	wems: Vec<WemInfo>,
}

fn collect_info(bank: &BnkFile) -> Result<BankInfo> {
	let sections = bank
		.sections()
		.iter()
		.map(|section| SectionInfo {
			tag: section.header().tag_str(),
			length: section.header().length,
		})
		.collect();

	let mut wems = Vec::with_capacity(bank.wem_count());
	for (index, wem) in bank.wems().iter().enumerate() {
		let head = wem.payload().truncated(4).read_all()?;
		wems.push(WemInfo {
			index,
			descriptor: wem.descriptor,
			padding: wem.padding().len(),
			magic: hex::encode(head),
			loop_value: bank.loop_value(index),
		});
	}

	Ok(BankInfo {
		bank: bank.bank_header().map(|header| header.descriptor),
		sections,
		wems,
	})
}

/// Handle info command
fn handle_info(input: &Path, json: bool) -> Result<()> {
	let bank = open_bank(input)?;
	let summary = collect_info(&bank)?;

	if json {
		println!("{}", serde_json::to_string_pretty(&summary)?);
		return Ok(());
	}

	println!("{}", bank);
	println!("{:>5}  {:>10}  {:>10}  {:>10}  {:>7}  {:>8}  loop", "index", "id", "offset", "length", "padding", "magic");
	for wem in &summary.wems {
		let loop_text = wem.loop_value.map_or_else(|| "-".to_string(), |value| value.to_string());
		println!(
			"{:>5}  {:>10}  {:>#10X}  {:>10}  {:>7}  {:>8}  {}",
			wem.index,
			wem.descriptor.id,
			wem.descriptor.offset,
			wem.descriptor.length,
			wem.padding,
			wem.magic,
			loop_text
		);
	}
	Ok(())
}

/// Handle extract command
fn handle_extract(input: &Path, index: Option<usize>, output: Option<PathBuf>) -> Result<()> {
	let bank = open_bank(input)?;
	let output_dir = output.unwrap_or_else(|| sibling_path(input, "_wems"));
	fs::create_dir_all(&output_dir)
		.with_context(|| format!("Failed to create {}", output_dir.display()))?;

	let selected: Vec<(usize, &Wem)> = match index {
		Some(index) => match bank.wems().get(index) {
			Some(wem) => vec![(index, wem)],
			None => bail!("Wem index {} out of range (total wems: {})", index, bank.wem_count()),
		},
		None => bank.wems().iter().enumerate().collect(),
	};

	for (index, wem) in selected {
		let path = output_dir.join(format!("{}.wem", wem.descriptor.id));
		let mut file = fs::File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;
		let written = wem.payload().write_to(&mut file)?;
		info!("Wem {:3} ({}) -> {} ({} bytes)", index, wem.descriptor.id, path.display(), written);
	}
	Ok(())
}

/// Handle replace command
fn handle_replace(
	input: &Path,
	wems: &[(usize, PathBuf)],
	output: Option<PathBuf>,
	alignment: u64,
) -> Result<()> {
	let Some(config) = LayoutConfig::new(alignment) else {
		bail!("Alignment {} is not a power of two", alignment);
	};

	let mut bank = open_bank(input)?;
	let replacements = wems
		.iter()
		.map(|(index, path)| {
			ReplacementWem::from_path(*index, path).with_context(|| format!("Failed to open {}", path.display()))
		})
		.collect::<Result<Vec<_>>>()?;

	bank.replace_wems_with(&replacements, &config)?;

	let output = output.unwrap_or_else(|| sibling_path(input, "_patched.bnk"));
	let written = bank.save_to_file(&output)?;
	info!("Wrote {} ({} bytes)", output.display(), written);
	Ok(())
}

/// Handle loop command
fn handle_loop(input: &Path, index: usize, value: LoopValue, output: Option<PathBuf>) -> Result<()> {
	let mut bank = open_bank(input)?;
	let previous = bank.loop_value(index);
	bank.replace_loop_of(index, value)?;

	let output = output.unwrap_or_else(|| sibling_path(input, "_patched.bnk"));
	bank.save_to_file(&output)?;
	info!(
		"Wem {} loop {} -> {}, wrote {}",
		index,
		previous.map_or_else(|| "-".to_string(), |value| value.to_string()),
		value,
		output.display()
	);
	Ok(())
}
