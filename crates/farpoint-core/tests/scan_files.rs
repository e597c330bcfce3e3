use farpoint_core::{scan, scan_and_write, scan_with_options, BufferMode, ScanError, ScanOptions};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn scan_reports_farthest_point_from_file() {
    let temp = tempdir().unwrap();
    let path = write_file(temp.path(), "points.txt", "abc\n1 2 2\n");

    let fp = scan(&path).unwrap();
    assert_eq!(fp.line_number, 2);
    assert_eq!((fp.x, fp.y, fp.z), (1, 2, 2));
    assert_eq!(fp.max_distance_squared, 9);
}

#[test]
fn mmap_and_read_buffers_agree() {
    let temp = tempdir().unwrap();
    let mut content = String::new();
    for i in 0..2000i64 {
        if i % 7 == 0 {
            content.push_str("garbage\n");
        } else {
            content.push_str(&format!("{} {} {}\n", i % 13 - 6, -(i % 31), i % 5));
        }
    }
    let path = write_file(temp.path(), "many.txt", &content);

    let mapped = scan_with_options(&path, &ScanOptions::default()).unwrap();
    let read = scan_with_options(&path, &ScanOptions { buffer: BufferMode::Read, ..Default::default() }).unwrap();
    assert_eq!(mapped, read);
    assert_eq!(mapped.stats.lines, 2000);
    assert_eq!(mapped.stats.skipped_lines, 286);
}

#[test]
fn scan_errors_by_kind() {
    let temp = tempdir().unwrap();

    let empty = write_file(temp.path(), "empty.txt", "");
    assert!(matches!(scan(&empty), Err(ScanError::EmptyFile)));

    let junk = write_file(temp.path(), "junk.txt", "abc\ndef\n");
    assert!(matches!(scan(&junk), Err(ScanError::NoValidPoints { lines: 2 })));

    let missing = temp.path().join("missing.txt");
    assert!(matches!(scan(&missing), Err(ScanError::Open { .. })));
}

#[test]
fn repeated_scans_are_independent() {
    let temp = tempdir().unwrap();
    let path = write_file(temp.path(), "p.txt", "0 0 5");
    let a = scan(&path).unwrap();
    let b = scan(&path).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.max_distance_squared, 25);
}

#[test]
fn scan_and_write_emits_sorted_json_array() {
    let temp = tempdir().unwrap();
    write_file(temp.path(), "b.txt", "-3 4 0\n");
    write_file(temp.path(), "a.txt", "1 2\n3 4 5\n");
    write_file(temp.path(), "c.txt", "nothing here\n");
    fs::create_dir(temp.path().join("sub")).unwrap();
    write_file(&temp.path().join("sub"), "d.txt", "9 9 9\n");

    let mut out: Vec<u8> = Vec::new();
    let stats = scan_and_write(temp.path(), &mut out, &ScanOptions::default()).unwrap();
    assert_eq!(stats.files_scanned, 2);
    assert_eq!(stats.files_failed, 1);
    assert_eq!(stats.outputs_written, 3);

    let items: Vec<Value> = serde_json::from_slice(&out).unwrap();
    assert_eq!(items.len(), 3);
    assert!(items[0]["file"].as_str().unwrap().ends_with("a.txt"));
    assert_eq!(items[0]["line_number"], 2);
    assert_eq!(items[0]["max_distance_squared"], 50);
    assert!(items[1]["file"].as_str().unwrap().ends_with("b.txt"));
    assert_eq!(items[1]["x"], -3);
    assert!(items[2]["error"].as_str().unwrap().contains("no valid points"));
}

#[test]
fn scan_and_write_skips_large_files() {
    let temp = tempdir().unwrap();
    write_file(temp.path(), "small.txt", "1 1 1\n");
    write_file(temp.path(), "large.txt", "1 1 1\n2 2 2\n3 3 3\n");

    let opts = ScanOptions { max_file_size: Some(8), ..Default::default() };
    let mut out: Vec<u8> = Vec::new();
    let stats = scan_and_write(temp.path(), &mut out, &opts).unwrap();
    assert_eq!(stats.files_skipped, 1);

    let items: Vec<Value> = serde_json::from_slice(&out).unwrap();
    assert_eq!(items.len(), 1);
    assert!(items[0]["file"].as_str().unwrap().ends_with("small.txt"));
}

#[test]
fn scan_and_write_accepts_single_file() {
    let temp = tempdir().unwrap();
    let path = write_file(temp.path(), "one.txt", "2 3 6\n");

    let mut out: Vec<u8> = Vec::new();
    scan_and_write(&path, &mut out, &ScanOptions::default()).unwrap();
    let items: Vec<Value> = serde_json::from_slice(&out).unwrap();
    assert_eq!(items[0]["max_distance_squared"], 49);
}

#[test]
fn directory_path_fails_to_map_in_both_modes() {
    let temp = tempdir().unwrap();
    for buffer in [BufferMode::Mmap, BufferMode::Read] {
        let opts = ScanOptions { buffer, ..Default::default() };
        match scan_with_options(temp.path(), &opts) {
            Err(ScanError::Map { path, .. }) => assert_eq!(path, temp.path()),
            other => panic!("expected map error for {buffer:?}, got {other:?}"),
        }
    }
}

#[test]
fn wrapped_negative_distance_is_not_a_valid_point() {
    let temp = tempdir().unwrap();
    let path = write_file(temp.path(), "big.txt", "4000000000 4000000000 0\n");
    assert!(matches!(scan(&path), Err(ScanError::NoValidPoints { lines: 1 })));

    let mixed = write_file(temp.path(), "mixed.txt", "4000000000 4000000000 0\n1 1 1\n");
    let fp = scan(&mixed).unwrap();
    assert_eq!((fp.line_number, fp.max_distance_squared), (2, 3));
}
