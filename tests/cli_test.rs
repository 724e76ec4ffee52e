use beman_new::cli::Args;
use clap::Parser;
use std::ffi::OsString;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("beman-new")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["my_proj"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.project_name, "my_proj");
    assert_eq!(parsed.owner, None);
    assert_eq!(parsed.paper, "TODO");
    assert_eq!(parsed.cpp_version, 26);
    assert_eq!(parsed.desc, "TODO");
    assert!(!parsed.verbose);
}

#[test]
fn test_all_options() {
    let args = make_args(&[
        "--owner",
        "me",
        "--paper",
        "P1234R5",
        "--cpp-version",
        "23",
        "--desc",
        "A new library",
        "--verbose",
        "my_proj",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.owner.as_deref(), Some("me"));
    assert_eq!(parsed.paper, "P1234R5");
    assert_eq!(parsed.cpp_version, 23);
    assert_eq!(parsed.desc, "A new library");
    assert!(parsed.verbose);
}

#[test]
fn test_project_name_is_not_validated() {
    let args = make_args(&["my proj/with.odd-chars"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.project_name, "my proj/with.odd-chars");
}

#[test]
fn test_missing_project_name() {
    let args = make_args(&["--owner", "me"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_invalid_cpp_version() {
    let args = make_args(&["--cpp-version", "latest", "my_proj"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["my_proj", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}
