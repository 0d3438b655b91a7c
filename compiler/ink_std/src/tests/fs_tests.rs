//! Tests for the asynchronous filesystem natives.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::fs;

use pretty_assertions::assert_eq;

use super::run_in;

#[test]
fn write_then_read_range() {
    let dir = tempfile::tempdir().unwrap();
    let (result, out) = run_in(
        dir.path(),
        "write('a.txt', 0, 'hello', e => (\n\
           out(e.type)\n\
           read('a.txt', 1, 3, r => out(';' + r.type + ';' + r.data))\n\
         ))",
    );
    assert!(result.is_ok());
    assert_eq!(out, "end;data;ell");
    assert_eq!(fs::read_to_string(dir.path().join("a.txt")).unwrap(), "hello");
}

#[test]
fn write_at_offset_keeps_rest_of_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "abcdef").unwrap();
    let (_, out) = run_in(dir.path(), "write('a.txt', 2, 'XY', e => out(e.type))");
    assert_eq!(out, "end");
    assert_eq!(fs::read_to_string(dir.path().join("a.txt")).unwrap(), "abXYef");
}

#[test]
fn write_negative_offset_appends() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("log"), "one").unwrap();
    let (_, out) = run_in(dir.path(), "write('log', 0 - 1, ',two', e => out(e.type))");
    assert_eq!(out, "end");
    assert_eq!(fs::read_to_string(dir.path().join("log")).unwrap(), "one,two");
}

#[test]
fn read_past_end_is_short() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "abc").unwrap();
    let (_, out) = run_in(dir.path(), "read('a.txt', 1, 100, e => out(e.data))");
    assert_eq!(out, "bc");
}

#[test]
fn read_missing_file_reports_error_event() {
    let dir = tempfile::tempdir().unwrap();
    let (result, out) = run_in(
        dir.path(),
        "read('missing.txt', 0, 10, e => out(e.type + ':' + string(len(e.message) > 0)))",
    );
    assert!(result.is_ok());
    assert_eq!(out, "error:true");
}

#[test]
fn stat_reports_file_info() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello").unwrap();
    let (_, out) = run_in(
        dir.path(),
        "stat('a.txt', e => out(e.data.name + ';' + string(e.data.len) + ';' + string(e.data.dir) + ';' + type(e.data.mod)))",
    );
    assert_eq!(out, "a.txt;5;false;number");
}

#[test]
fn stat_of_missing_path_is_null_data() {
    let dir = tempfile::tempdir().unwrap();
    let (_, out) = run_in(dir.path(), "stat('nope', e => out(e.type + ';' + string(e.data)))");
    assert_eq!(out, "data;()");
}

#[test]
fn dir_lists_entries_sorted_by_name() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.ink"), "").unwrap();
    fs::write(dir.path().join("a.ink"), "x").unwrap();
    fs::create_dir(dir.path().join("c")).unwrap();
    let (_, out) = run_in(
        dir.path(),
        "dir('.', e => out(string(len(e.data)) + ';' + e.data.0.name + ';' + e.data.1.name + ';' + string(e.data.2.dir)))",
    );
    assert_eq!(out, "3;a.ink;b.ink;true");
}

#[test]
fn make_creates_parents_and_delete_removes_tree() {
    let dir = tempfile::tempdir().unwrap();
    let (_, out) = run_in(dir.path(), "make('x/y/z', e => out(e.type))");
    assert_eq!(out, "end");
    assert!(dir.path().join("x/y/z").is_dir());

    let (_, out) = run_in(dir.path(), "delete('x', e => out(e.type))");
    assert_eq!(out, "end");
    assert!(!dir.path().join("x").exists());
}

#[test]
fn delete_missing_path_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let (_, out) = run_in(dir.path(), "delete('ghost', e => out(e.type))");
    assert_eq!(out, "end");
}

#[test]
fn bad_arguments_fail_synchronously() {
    let dir = tempfile::tempdir().unwrap();
    let (result, out) = run_in(dir.path(), "read('a.txt', 0 - 1, 3, e => out('called'))");
    assert!(result.is_err());
    assert_eq!(out, "");

    let (result, _) = run_in(dir.path(), "write('a.txt', 0, 'x', 'not a function')");
    assert!(result.is_err());
}
