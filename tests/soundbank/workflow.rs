use std::fs;

use wwise_rs::{BnkError, BnkFile, Container, LoopValue, ReplacementWem};

use crate::{
	bank::{WEM_IDS, two_wem_bank, wem_payload},
	temp_path,
};

#[test_log::test]
fn open_and_save_unchanged_bank() {
	let input = temp_path("unchanged_in.bnk");
	let output = temp_path("unchanged_out.bnk");
	let bytes = two_wem_bank(Some(2));
	fs::write(&input, &bytes).unwrap();

	let bank = BnkFile::open(&input).unwrap();
	assert_eq!(bank.wem_count(), 2);
	assert_eq!(bank.data_index().unwrap().wem_ids(), &WEM_IDS);
	assert_eq!(bank.loop_value(0), Some(LoopValue::times(2)));
	assert_eq!(bank.loop_value(1), Some(LoopValue::none()));

	bank.save_to_file(&output).unwrap();
	assert_eq!(fs::read(&output).unwrap(), bytes);

	fs::remove_file(&input).unwrap();
	fs::remove_file(&output).unwrap();
}

#[test_log::test]
fn replace_from_wem_file_then_loop() {
	let input = temp_path("patch_in.bnk");
	let wem = temp_path("patch.wem");
	let output = temp_path("patch_out.bnk");
	fs::write(&input, two_wem_bank(None)).unwrap();
	let new_payload = wem_payload(250, 0x5C);
	fs::write(&wem, &new_payload).unwrap();

	let mut bank = BnkFile::open(&input).unwrap();
	bank.replace_wems(&[ReplacementWem::from_path(0, &wem).unwrap()]).unwrap();
	bank.replace_loop_of(0, LoopValue::infinite()).unwrap();
	bank.save_to_file(&output).unwrap();

	let patched = BnkFile::open(&output).unwrap();
	let wems = patched.wems();
	assert_eq!(wems[0].descriptor.length, 250);
	assert_eq!(wems[0].payload().read_all().unwrap(), new_payload);
	assert_eq!(wems[1].descriptor.offset, 256);
	assert_eq!(wems[1].payload().read_all().unwrap(), wem_payload(33, 0x22));
	assert_eq!(patched.data().unwrap().header.length, 256 + 33);
	assert_eq!(patched.loop_value(0), Some(LoopValue::infinite()));
	assert_eq!(patched.object_hierarchy().unwrap().loop_of(WEM_IDS[0]), Some(0));

	for path in [&input, &wem, &output] {
		fs::remove_file(path).unwrap();
	}
}

fn shrink_last<C: Container>(container: &mut C) -> Result<Vec<u8>, C::Error> {
	let last = container.wems().len() - 1;
	container.replace_wems(&[ReplacementWem::from_bytes(last, vec![0u8; 7])])?;
	let mut out = Vec::new();
	container.write_to(&mut out)?;
	Ok(out)
}

#[test_log::test]
fn container_trait_from_facade() {
	let mut bank = BnkFile::from_bytes(two_wem_bank(Some(5))).unwrap();
	let out = shrink_last(&mut bank).unwrap();

	let reparsed = BnkFile::from_bytes(out).unwrap();
	assert_eq!(reparsed.wems()[1].descriptor.length, 7);
	assert_eq!(reparsed.loop_value(0), Some(LoopValue::times(5)));
}

#[test_log::test]
fn missing_file_is_an_io_error() {
	let err = BnkFile::open(temp_path("does_not_exist.bnk")).unwrap_err();
	assert!(matches!(err, BnkError::IOError(ref io) if io.kind() == std::io::ErrorKind::NotFound));
}
