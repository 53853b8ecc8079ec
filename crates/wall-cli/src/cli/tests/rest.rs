//! Tests for serve and export.

use super::parse;
use crate::cli::{Cli, CliCommand, KindArg};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn cli_parse_serve() {
    match parse(&["shortcut-wall", "serve"]) {
        CliCommand::Serve { port } => assert!(port.is_none()),
        other => panic!("expected Serve, got {other:?}"),
    }
    match parse(&["shortcut-wall", "serve", "--port", "8080"]) {
        CliCommand::Serve { port } => assert_eq!(port, Some(8080)),
        other => panic!("expected Serve, got {other:?}"),
    }
}

#[test]
fn cli_parse_export() {
    match parse(&["shortcut-wall", "export", "folder", "abc", "--out", "/tmp/out"]) {
        CliCommand::Export { kind, id, out } => {
            assert_eq!(kind, KindArg::Folder);
            assert_eq!(id, "abc");
            assert_eq!(out, Some(PathBuf::from("/tmp/out")));
        }
        other => panic!("expected Export, got {other:?}"),
    }
}

#[test]
fn cli_rejects_unknown_kind_and_sort() {
    assert!(Cli::try_parse_from(["shortcut-wall", "export", "printer", "x"]).is_err());
    assert!(Cli::try_parse_from(["shortcut-wall", "site", "list", "--sort", "random"]).is_err());
    assert!(Cli::try_parse_from(["shortcut-wall", "site", "add", "only-name"]).is_err());
}
