//! Integration tests for the generator.

#![allow(missing_docs)]

use std::fs;
use std::path::Path;

use assert2::{check, let_assert};
use taqc_gen::{Error, GeneratorConfig, find_struct, generate, render};
use tempfile::TempDir;

const SEARCH: &str = r#"
use chrono::{DateTime, Utc};

pub struct Search {
    #[taqc("q")]
    pub query: String,
    #[taqc("exact")]
    pub exact: bool,
    #[taqc("since, unixTimeUnit=millisec")]
    pub since: Option<DateTime<Utc>>,
    #[taqc("tag")]
    pub tags: Vec<String>,
    pub internal: u64,
}
"#;

fn workspace(files: &[(&str, &str)]) -> TempDir {
    let_assert!(Ok(dir) = tempfile::tempdir());
    for (name, content) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            let_assert!(Ok(()) = fs::create_dir_all(parent));
        }
        let_assert!(Ok(()) = fs::write(&path, content));
    }
    dir
}

fn config_for(name: &str, dir: &Path) -> GeneratorConfig {
    GeneratorConfig::builder(name)
        .input(dir)
        .command_line(["--type", name, "src"])
        .build()
}

#[test]
fn type_not_found() {
    let dir = workspace(&[("lib.rs", SEARCH)]);
    let config = config_for("Missing", dir.path());

    let_assert!(Err(Error::TypeNotFound { name }) = generate(&config));
    check!(name == "Missing");
    check!(!dir.path().join("missing_gen.rs").exists());
}

#[test]
fn writes_next_to_sources() {
    let dir = workspace(&[("lib.rs", SEARCH)]);
    let config = config_for("Search", dir.path());

    let_assert!(Ok(generated) = generate(&config));
    check!(generated.output == dir.path().join("search_gen.rs"));
    check!(generated.written);

    let_assert!(Ok(code) = fs::read_to_string(&generated.output));
    check!(code.starts_with("// Code generated by taqc-gen --type Search src; DO NOT EDIT.\n\n"));

    let compact: String = code.split_whitespace().collect();
    for expected in [
        "impl::taqc::ToQueryParamsforSearch{",
        r#"query.set("q",::taqc::format::string(&self.query));"#,
        r#"ifself.exact{query.set("exact",::taqc::format::TRUE);}"#,
        "if let::core::option::Option::Some(value)=&self.since{",
        "::taqc::format::unix_time(value,::taqc::UnixTimeUnit::Millisec)",
        r#"foriteminself.tags.iter(){query.add("tag",::taqc::format::string(item));}"#,
    ] {
        let expected: String = expected.split_whitespace().collect();
        check!(compact.contains(&expected), "missing `{expected}` in:\n{code}");
    }
    check!(!code.contains("internal"));
}

#[test]
fn rewrites_only_on_change() {
    let dir = workspace(&[("lib.rs", SEARCH)]);
    let config = config_for("Search", dir.path());

    let_assert!(Ok(first) = generate(&config));
    let_assert!(Ok(second) = generate(&config));
    check!(first.written);
    check!(!second.written);

    let_assert!(Ok(()) = fs::write(&first.output, "// stale\n"));
    let_assert!(Ok(third) = generate(&config));
    check!(third.written);
}

#[test]
fn output_is_deterministic() {
    let dir = workspace(&[("lib.rs", SEARCH)]);
    let config = config_for("Search", dir.path());

    let_assert!(Ok(found) = find_struct(&config.inputs, "Search"));
    let_assert!(Ok(first) = render(&config, &found.item));
    let_assert!(Ok(second) = render(&config, &found.item));
    check!(first == second);
}

#[test]
fn explicit_output_and_crate_path() {
    let dir = workspace(&[("lib.rs", SEARCH)]);
    let output = dir.path().join("generated").join("query.rs");
    let config = GeneratorConfig::builder("Search")
        .input(dir.path())
        .output(&output)
        .crate_path("crate::params")
        .build();

    let_assert!(Ok(generated) = generate(&config));
    check!(generated.output == output);

    let_assert!(Ok(code) = fs::read_to_string(&output));
    check!(code.starts_with("// Code generated by taqc-gen --type Search; DO NOT EDIT.\n"));
    check!(code.contains("impl crate::params::ToQueryParams for Search {"));
    check!(!code.contains("::taqc"));
}

#[test]
fn first_declaration_wins() {
    let dir = workspace(&[
        ("b/query.rs", "struct Query { #[taqc(\"from_b\")] value: String }"),
        ("a/query.rs", "mod inner { struct Query { #[taqc(\"from_a\")] value: String } }"),
        ("target/query.rs", "struct Query { #[taqc(\"from_target\")] value: String }"),
    ]);

    let_assert!(Ok(found) = find_struct(&[dir.path().to_path_buf()], "Query"));
    check!(found.path == dir.path().join("a").join("query.rs"));
}

#[test]
fn skips_target_directories() {
    let dir = workspace(&[("target/query.rs", "struct Query { #[taqc(\"q\")] value: String }")]);

    let_assert!(Err(Error::TypeNotFound { .. }) = find_struct(&[dir.path().to_path_buf()], "Query"));
}

#[test]
fn unsupported_field_type() {
    let dir = workspace(&[(
        "lib.rs",
        "struct Search { #[taqc(\"flags\")] flags: Vec<bool> }",
    )]);
    let config = config_for("Search", dir.path());

    let_assert!(Err(Error::Generate(err)) = generate(&config));
    check!(err.to_string() == "unsupported field type `Vec<bool>` (sequence)");
    check!(!dir.path().join("search_gen.rs").exists());
}

#[test]
fn invalid_tag() {
    let dir = workspace(&[(
        "lib.rs",
        "struct Search { #[taqc(\"at, unixTimeUnit=hour\")] at: DateTime<Utc> }",
    )]);
    let config = config_for("Search", dir.path());

    let_assert!(Err(Error::Generate(err)) = generate(&config));
    check!(err.to_string() == "hour is unsupported: unsupported unix time unit has given");
}

#[test]
fn invalid_source() {
    let dir = workspace(&[("lib.rs", "struct Search {")]);
    let config = config_for("Search", dir.path());

    let_assert!(Err(Error::Parse { path, .. }) = generate(&config));
    check!(path == dir.path().join("lib.rs"));
}

#[test]
fn invalid_crate_path() {
    let dir = workspace(&[("lib.rs", SEARCH)]);
    let config = GeneratorConfig::builder("Search")
        .input(dir.path())
        .crate_path("not a path")
        .build();

    let_assert!(Err(Error::Generate(_)) = generate(&config));
}
