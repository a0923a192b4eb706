//! Integration tests for merging in each output mode.

use pdfmerge::command::Platform;
use pdfmerge::config::{MergeOptions, Output};
use pdfmerge::merge::{MergeResult, Merger, merge, merge_json};
use pdfmerge::validation::FileList;
use serde_json::json;
use tokio::io::AsyncReadExt;

use crate::common::{Workspace, path_str};

fn options(tool: String) -> MergeOptions {
    MergeOptions::default().with_lib_path(tool)
}

#[tokio::test]
async fn test_buffer_mode_returns_merged_bytes() {
    let ws = Workspace::new();
    let a = ws.input("a.pdf", "%PDF-A\n");
    let b = ws.input("b.pdf", "%PDF-B\n");

    let result = merge([path_str(&a), path_str(&b)], options(ws.concat_tool()))
        .await
        .expect("Merge failed");

    let MergeResult::Buffer(bytes) = result else {
        panic!("expected a buffer result");
    };
    assert_eq!(bytes, b"%PDF-A\n%PDF-B\n");
}

#[tokio::test]
async fn test_buffer_mode_removes_temporary_output() {
    let ws = Workspace::new();
    let a = ws.input("a.pdf", "A");
    let b = ws.input("b.pdf", "B");

    merge([path_str(&a), path_str(&b)], options(ws.concat_tool()))
        .await
        .expect("Merge failed");

    let target = ws.recorded_target();
    assert!(target.starts_with(std::env::temp_dir()));
    assert!(!target.exists(), "Temporary output was not removed");
}

#[tokio::test]
async fn test_arguments_follow_toolkit_convention() {
    let ws = Workspace::new();
    let a = ws.input("a.pdf", "A");
    let b = ws.input("b.pdf", "B");

    merge([path_str(&a), path_str(&b)], options(ws.concat_tool()))
        .await
        .expect("Merge failed");

    let args = ws.recorded_args();
    assert_eq!(args.len(), 5);
    assert_eq!(args[0], path_str(&a));
    assert_eq!(args[1], path_str(&b));
    assert_eq!(args[2], "cat");
    assert_eq!(args[3], "output");
}

#[tokio::test]
async fn test_stream_mode_matches_buffer_mode() {
    let ws = Workspace::new();
    let a = ws.input("a.pdf", "first document\n");
    let b = ws.input("b.pdf", "second document\n");
    let files = [path_str(&a), path_str(&b)];

    let buffer = merge(&files, options(ws.concat_tool()))
        .await
        .expect("Buffer merge failed")
        .into_bytes()
        .expect("Buffer result has bytes");

    let result = merge(
        &files,
        options(ws.concat_tool()).with_output(Output::parse("READSTREAM")),
    )
    .await
    .expect("Stream merge failed");

    let MergeResult::Stream(mut stream) = result else {
        panic!("expected a stream result");
    };
    let mut streamed = Vec::new();
    stream.read_to_end(&mut streamed).await.unwrap();

    assert_eq!(streamed, buffer);
    assert!(!ws.recorded_target().exists());
}

#[tokio::test]
async fn test_file_mode_writes_destination() {
    let ws = Workspace::new();
    let a = ws.input("a.pdf", "A");
    let b = ws.input("b.pdf", "B");
    let destination = ws.path().join("out").join("merged.pdf");
    std::fs::create_dir_all(destination.parent().unwrap()).unwrap();

    let result = merge(
        [path_str(&a), path_str(&b)],
        options(ws.concat_tool()).with_output(Output::parse(&path_str(&destination))),
    )
    .await
    .expect("Merge failed");

    let MergeResult::File(output) = result else {
        panic!("expected a file result");
    };
    assert_eq!(output.status, Some(0));
    assert_eq!(std::fs::read_to_string(&destination).unwrap(), "AB");
    assert_eq!(ws.recorded_target(), destination);
}

#[tokio::test]
async fn test_input_order_is_preserved() {
    let ws = Workspace::new();
    let a = ws.input("a.pdf", "A");
    let b = ws.input("b.pdf", "B");
    let c = ws.input("c.pdf", "C");

    let bytes = merge(
        [path_str(&c), path_str(&a), path_str(&b)],
        options(ws.concat_tool()),
    )
    .await
    .expect("Merge failed")
    .into_bytes()
    .unwrap();

    assert_eq!(bytes, b"CAB");
}

#[tokio::test]
async fn test_single_wildcard_expands_to_all_matches() {
    let ws = Workspace::new();
    ws.input("parts/01.pdf", "1");
    ws.input("parts/02.pdf", "2");
    ws.input("parts/notes.txt", "x");
    let pattern = format!("{}/*.pdf", path_str(&ws.path().join("parts")));

    let bytes = merge([pattern], options(ws.concat_tool()))
        .await
        .expect("Merge failed")
        .into_bytes()
        .unwrap();

    assert_eq!(bytes, b"12");
    assert_eq!(ws.recorded_args().len(), 5);
}

#[tokio::test]
async fn test_wildcard_in_directory_with_special_characters() {
    let ws = Workspace::new();
    ws.input("it's a; dir/01.pdf", "1");
    ws.input("it's a; dir/02.pdf", "2");
    let pattern = format!("{}/*.pdf", path_str(&ws.path().join("it's a; dir")));

    let bytes = merge([pattern], options(ws.concat_tool()))
        .await
        .expect("Merge failed")
        .into_bytes()
        .unwrap();

    assert_eq!(bytes, b"12");
    assert_eq!(
        ws.recorded_args()[0],
        path_str(&ws.path().join("it's a; dir/01.pdf"))
    );
}

#[tokio::test]
async fn test_wildcard_cannot_run_commands() {
    let ws = Workspace::new();
    ws.input("parts/01.pdf", "1");
    ws.input("parts/02.pdf", "2");
    let marker = ws.path().join("touched");
    let pattern = format!(
        "{}/*.pdf; touch {}",
        path_str(&ws.path().join("parts")),
        path_str(&marker)
    );
    let other = ws.input("c.pdf", "C");

    let result = merge([pattern, path_str(&other)], options(ws.concat_tool())).await;

    assert!(result.is_err(), "Pattern must not match any file");
    assert!(!marker.exists(), "Shell ran text from an input path");
}

#[tokio::test]
async fn test_paths_with_shell_metacharacters() {
    let ws = Workspace::new();
    let a = ws.input("my part; $(echo x).pdf", "A");
    let b = ws.input("it's.pdf", "B");

    let bytes = merge([path_str(&a), path_str(&b)], options(ws.concat_tool()))
        .await
        .expect("Merge failed")
        .into_bytes()
        .unwrap();

    assert_eq!(bytes, b"AB");
    assert_eq!(ws.recorded_args()[0], path_str(&a));
}

#[tokio::test]
async fn test_backslash_paths_are_normalized() {
    let ws = Workspace::new();
    ws.input("docs/a.pdf", "A");
    ws.input("docs/b.pdf", "B");
    let root = path_str(ws.path());
    let a = format!(r"{root}\docs\a.pdf");
    let b = format!(r"{root}\docs\b.pdf");

    let bytes = merge([a, b], options(ws.concat_tool()))
        .await
        .expect("Merge failed")
        .into_bytes()
        .unwrap();

    assert_eq!(bytes, b"AB");
    assert_eq!(ws.recorded_args()[0], format!("{root}/docs/a.pdf"));
}

#[tokio::test]
async fn test_merge_json_drops_non_strings() {
    let ws = Workspace::new();
    let a = ws.input("a.pdf", "A");
    let b = ws.input("b.pdf", "B");

    let bytes = merge_json(
        &json!([path_str(&a), 42, null, path_str(&b), {"path": "c.pdf"}]),
        options(ws.concat_tool()),
    )
    .await
    .expect("Merge failed")
    .into_bytes()
    .unwrap();

    assert_eq!(bytes, b"AB");
}

#[tokio::test]
async fn test_argument_vector_invocation() {
    let ws = Workspace::new();
    let a = ws.input("$HOME a.pdf", "A");
    let b = ws.input("b.pdf", "B");
    let files = FileList::new([path_str(&a), path_str(&b)]).unwrap();

    let merger = Merger::with_platform(Platform::ArgumentVector);
    let result = merger
        .merge(&files, &options(ws.concat_tool()))
        .await
        .expect("Merge failed");

    assert_eq!(result.into_bytes().unwrap(), b"AB");
    assert_eq!(ws.recorded_args()[0], path_str(&a));
}

#[tokio::test]
async fn test_concurrent_merges_are_independent() {
    let ws = Workspace::new();
    let a = ws.input("a.pdf", "A");
    let b = ws.input("b.pdf", "B");
    let tool = ws.concat_tool();

    let (first, second) = tokio::join!(
        merge([path_str(&a), path_str(&b)], options(tool.clone())),
        merge([path_str(&b), path_str(&a)], options(tool.clone())),
    );

    assert_eq!(first.unwrap().into_bytes().unwrap(), b"AB");
    assert_eq!(second.unwrap().into_bytes().unwrap(), b"BA");
}
