//! Benchmark suite for SoundBank parsing, writing and re-layout
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use wwise_benches::generate_test_bnk_data;
use wwise_types::{
	file::{BnkFile, LoopValue},
	wem::ReplacementWem,
};

const WORKLOADS: [(&str, usize, usize); 3] =
	[("few_large", 8, 256 * 1024), ("typical", 64, 16 * 1024), ("many_small", 2048, 300)];

/// Benchmark parsing: only metadata is read, payloads stay lazy
fn bench_parse(c: &mut Criterion) {
	let mut group = c.benchmark_group("bnk_parse");

	for (name, count, size) in WORKLOADS {
		let data = generate_test_bnk_data(count, size);
		group.throughput(Throughput::Elements(count as u64));
		group.bench_with_input(BenchmarkId::new("parse", name), &data, |b, data| {
			b.iter(|| {
				let bank = BnkFile::from_bytes(black_box(data).clone());
				black_box(bank)
			});
		});
	}

	group.finish();
}

/// Benchmark streaming every section back out
fn bench_write(c: &mut Criterion) {
	let mut group = c.benchmark_group("bnk_write");

	for (name, count, size) in WORKLOADS {
		let data = generate_test_bnk_data(count, size);
		let bank = match BnkFile::from_bytes(data.clone()) {
			Ok(bank) => bank,
			Err(err) => {
				eprintln!("Warning: could not parse generated bank {}: {}", name, err);
				continue;
			}
		};

		group.throughput(Throughput::Bytes(data.len() as u64));
		group.bench_function(BenchmarkId::new("write_to", name), |b| {
			let mut out = Vec::with_capacity(data.len());
			b.iter(|| {
				out.clear();
				let written = bank.write_to(&mut out);
				black_box(written)
			});
		});
	}

	group.finish();
}

/// Benchmark the full re-layout triggered by a single replacement
fn bench_replace(c: &mut Criterion) {
	let mut group = c.benchmark_group("bnk_replace");

	for (name, count, size) in WORKLOADS {
		let data = generate_test_bnk_data(count, size);
		let bank = match BnkFile::from_bytes(data) {
			Ok(bank) => bank,
			Err(err) => {
				eprintln!("Warning: could not parse generated bank {}: {}", name, err);
				continue;
			}
		};
		let replacement = ReplacementWem::from_bytes(0, vec![0x55; size / 2 + 3]);

		group.throughput(Throughput::Elements(count as u64));
		group.bench_function(BenchmarkId::new("replace_first", name), |b| {
			b.iter(|| {
				let mut bank = bank.clone();
				let result = bank.replace_wems(black_box(std::slice::from_ref(&replacement)));
				black_box((bank, result))
			});
		});
	}

	group.finish();
}

/// Benchmark loop edits, which only touch one HIRC object
fn bench_loop_edit(c: &mut Criterion) {
	let data = generate_test_bnk_data(2048, 64);
	let Ok(bank) = BnkFile::from_bytes(data) else {
		eprintln!("Warning: could not parse generated bank");
		return;
	};

	c.bench_function("bnk_replace_loop_of", |b| {
		b.iter(|| {
			let mut bank = bank.clone();
			let result = bank.replace_loop_of(black_box(1024), LoopValue::infinite());
			black_box((bank, result))
		});
	});
}

criterion_group!(benches, bench_parse, bench_write, bench_replace, bench_loop_edit);

criterion_main!(benches);
