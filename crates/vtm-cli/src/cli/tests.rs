//! CLI parse tests.

use super::Cli;
use clap::Parser;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_long_url() {
    let cli = parse(&["vtm", "--url", "https://example.com/watch?v=abc"]);
    assert_eq!(cli.url, "https://example.com/watch?v=abc");
    assert!(cli.temp_dir.is_none());
    assert!(cli.output_dir.is_none());
}

#[test]
fn cli_parse_short_url() {
    let cli = parse(&["vtm", "-u", "https://example.com/watch?v=abc"]);
    assert_eq!(cli.url, "https://example.com/watch?v=abc");
}

#[test]
fn cli_parse_dir_overrides() {
    let cli = parse(&[
        "vtm",
        "-u",
        "https://example.com/x",
        "--temp-dir",
        "/tmp/vtm-staging",
        "--output-dir",
        "/tmp/vtm-out",
    ]);
    assert_eq!(
        cli.temp_dir.as_deref(),
        Some(std::path::Path::new("/tmp/vtm-staging"))
    );
    assert_eq!(
        cli.output_dir.as_deref(),
        Some(std::path::Path::new("/tmp/vtm-out"))
    );
}

#[test]
fn cli_missing_url_is_an_error() {
    assert!(Cli::try_parse_from(["vtm"]).is_err());
}

#[test]
fn cli_url_requires_a_value() {
    assert!(Cli::try_parse_from(["vtm", "--url"]).is_err());
}
