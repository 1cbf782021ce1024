use std::fs;
use std::io::Write;

use clap::Parser;
use hexfeed::cli::{run, Args};
use hexfeed::FeedError;
use tempfile::{tempdir, NamedTempFile};

fn source(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();
    file
}

fn run_args(argv: &[&str]) -> (anyhow::Result<()>, String) {
    let args = Args::try_parse_from(argv).unwrap();
    let mut out = Vec::new();
    let result = run(args, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_decode_unterminated_comment_is_an_error() {
    let input = source(b"12 ; no newline");
    let path = input.path().to_str().unwrap();

    let (result, _) = run_args(&["hexfeed", "decode", path]);
    let err = result.unwrap_err();

    match err.downcast_ref::<FeedError>() {
        Some(FeedError::NoHandoff { consumed }) => {
            assert_eq!(*consumed, b"12 ; no newline".len() + 1)
        }
        other => panic!("expected NoHandoff, got {other:?}"),
    }
}

#[test]
fn test_decode_without_eot_only_reports() {
    let input = source(b"12 ; no newline");
    let path = input.path().to_str().unwrap();

    let (result, out) = run_args(&["hexfeed", "decode", path, "--no-eot"]);

    assert!(result.is_ok());
    assert!(out.contains("not reached, monitor still waiting"));
}

#[test]
fn test_decode_json_output_parses() {
    let input = source(b"48 65 6c 6c 6f ; Hello\n");
    let path = input.path().to_str().unwrap();

    let (result, out) = run_args(&["hexfeed", "decode", path, "--format", "json", "-v", "echo"]);
    assert!(result.is_ok());

    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["variant"], "echo");
    assert_eq!(json["image"], "48656c6c6f");
    assert_eq!(json["loaded"], 5);
    assert_eq!(json["comments"], 1);
    assert_eq!(json["appended_eot"], true);
}

#[test]
fn test_decode_writes_image() {
    let input = source(b"de ad be ef\n");
    let path = input.path().to_str().unwrap();
    let dir = tempdir().unwrap();
    let image = dir.path().join("image.bin");

    let (result, _) = run_args(&[
        "hexfeed",
        "decode",
        path,
        "--image",
        image.to_str().unwrap(),
    ]);

    assert!(result.is_ok());
    assert_eq!(fs::read(&image).unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
}

#[test]
fn test_decode_missing_input_is_a_read_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.hex0");

    let (result, _) = run_args(&["hexfeed", "decode", missing.to_str().unwrap()]);
    let err = result.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<FeedError>(),
        Some(FeedError::Read { .. })
    ));
}
