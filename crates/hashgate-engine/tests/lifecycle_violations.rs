//! # Lifecycle Violation Tests
//!
//! A lifecycle violation aborts the process, so each case re-runs this
//! test binary as a child restricted to that one test. The child performs
//! the illegal call; the parent asserts the child died abnormally and that
//! its stderr names the expected and actual states.

use std::process::{Command, Output};

use hashgate_engine::api::{create_hasher, destroy_hasher, update_hasher};
use hashgate_engine::{DynHasher, HashAlgorithm};

const CHILD_ENV: &str = "HASHGATE_VIOLATION_CHILD";

fn in_child() -> bool {
    std::env::var_os(CHILD_ENV).is_some()
}

fn run_child(test_name: &str) -> Output {
    let exe = std::env::current_exe().expect("test binary path");
    Command::new(exe)
        .args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .output()
        .expect("spawn child test process")
}

fn assert_aborted_with(output: &Output, diagnostic: &str) {
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !output.status.success(),
        "child exited successfully; stderr: {stderr}"
    );
    assert!(
        stderr.contains(diagnostic),
        "missing diagnostic {diagnostic:?}; stderr: {stderr}"
    );
    assert!(
        !stderr.contains("child reached end"),
        "illegal call returned; stderr: {stderr}"
    );
}

fn sha256() -> DynHasher {
    DynHasher::new(HashAlgorithm::Sha256).unwrap()
}

/// Marks that the illegal call returned instead of aborting.
fn reached_end() {
    eprintln!("child reached end");
}

#[test]
fn finish_twice_aborts() {
    if in_child() {
        let mut h = sha256();
        h.update(b"abc").unwrap();
        let mut out = [0u8; 32];
        h.finish(&mut out).unwrap();
        let _ = h.finish(&mut out);
        reached_end();
        return;
    }
    let output = run_child("finish_twice_aborts");
    assert_aborted_with(&output, "Expected states {working}, but got done");
}

#[test]
fn diagnostic_printed_once_under_stderr_subscriber() {
    if in_child() {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(std::io::stderr)
            .init();
        let mut h = sha256();
        h.update(b"abc").unwrap();
        let _ = h.reset();
        reached_end();
        return;
    }
    let output = run_child("diagnostic_printed_once_under_stderr_subscriber");
    let diagnostic = "Expected states {done}, but got working";
    assert_aborted_with(&output, diagnostic);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches(diagnostic).count(), 1, "stderr: {stderr}");
}

#[test]
fn finish_without_update_aborts() {
    if in_child() {
        let mut h = sha256();
        let mut out = [0u8; 32];
        let _ = h.finish(&mut out);
        reached_end();
        return;
    }
    let output = run_child("finish_without_update_aborts");
    assert_aborted_with(&output, "Expected states {working}, but got reset");
}

#[test]
fn reset_while_working_aborts() {
    if in_child() {
        let mut h = sha256();
        h.update(b"partial").unwrap();
        let _ = h.reset();
        reached_end();
        return;
    }
    let output = run_child("reset_while_working_aborts");
    assert_aborted_with(&output, "Expected states {done}, but got working");
}

#[test]
fn reset_fresh_handle_aborts() {
    if in_child() {
        let mut h = sha256();
        let _ = h.reset();
        reached_end();
        return;
    }
    let output = run_child("reset_fresh_handle_aborts");
    assert_aborted_with(&output, "Expected states {done}, but got reset");
}

#[test]
fn update_after_finish_aborts() {
    if in_child() {
        let mut h = sha256();
        h.update(b"abc").unwrap();
        h.finish_vec().unwrap();
        let _ = h.update(b"more");
        reached_end();
        return;
    }
    let output = run_child("update_after_finish_aborts");
    assert_aborted_with(&output, "Expected states {reset, working}, but got done");
}

#[test]
fn update_after_destroy_aborts() {
    if in_child() {
        let mut h = create_hasher(0).unwrap();
        destroy_hasher(&mut h).unwrap();
        let _ = update_hasher(&mut h, b"late");
        reached_end();
        return;
    }
    let output = run_child("update_after_destroy_aborts");
    assert_aborted_with(&output, "Expected states {reset, working}, but got destroyed");
}

#[test]
fn destroy_twice_aborts() {
    if in_child() {
        let mut h = sha256();
        h.destroy();
        h.destroy();
        reached_end();
        return;
    }
    let output = run_child("destroy_twice_aborts");
    assert_aborted_with(
        &output,
        "Expected states {reset, working, done}, but got destroyed",
    );
}

#[test]
fn digest_size_after_destroy_aborts() {
    if in_child() {
        let mut h = sha256();
        h.destroy();
        let _ = h.digest_size();
        reached_end();
        return;
    }
    let output = run_child("digest_size_after_destroy_aborts");
    assert_aborted_with(
        &output,
        "Expected states {reset, working, done}, but got destroyed",
    );
}

#[test]
fn legal_sequence_does_not_abort() {
    if in_child() {
        let mut h = sha256();
        h.update(b"abc").unwrap();
        h.finish_vec().unwrap();
        h.reset().unwrap();
        h.update(b"").unwrap();
        h.finish_vec().unwrap();
        h.destroy();
        return;
    }
    let output = run_child("legal_sequence_does_not_abort");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}
