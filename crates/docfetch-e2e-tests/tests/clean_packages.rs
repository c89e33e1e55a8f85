use assert_fs::prelude::*;
use docfetch_e2e_tests::{
    ALPHA_BODY, TestContentServer, init_tracing, setup_test_environment,
};
use docfetch_lib::PackageDescriptor;
use docfetch_lib::cli::{
    Command, PackageListSource, ResolvedCommand, resolve_command, run_clean_with_reporter,
    run_fetch_with_reporter,
};
use docfetch_lib::config::ParserStrategy;
use docfetch_lib::report::ConsoleReporter;
use predicates::prelude::*;
use std::path::Path;

fn package_list_source(config_path: &Path) -> PackageListSource {
    PackageListSource {
        config_path: config_path.to_str().unwrap().to_string(),
        base_dir: None,
        parser: ParserStrategy::Auto,
    }
}

#[tokio::test]
async fn test_clean_removes_fetched_outputs_only() {
    init_tracing();
    let server = TestContentServer::spawn().await.unwrap();

    let (temp_dir, config_path) = setup_test_environment(vec![
        PackageDescriptor::new("A", server.url("/a"), "10", "docs/a/out.txt"),
        PackageDescriptor::new("C", server.url("/c"), "10", "docs/c/out.txt"),
    ])
    .unwrap();
    let base = assert_fs::fixture::ChildPath::new(temp_dir.path());
    base.child("docs/c").create_dir_all().unwrap();
    base.child("docs/c/keep.txt").write_str("local notes").unwrap();

    let fetch = Command::Fetch {
        source: package_list_source(&config_path),
        timeout_secs: 5,
    };
    let ResolvedCommand::Fetch(params) = resolve_command(fetch).unwrap() else {
        unreachable!("Resolved command type mismatch");
    };
    let mut reporter = ConsoleReporter::new(Vec::new());
    run_fetch_with_reporter(params, &mut reporter).await.unwrap();
    base.child("docs/a/out.txt").assert(ALPHA_BODY);

    let clean = Command::Clean {
        source: package_list_source(&config_path),
    };
    let ResolvedCommand::Clean(params) = resolve_command(clean).unwrap() else {
        unreachable!("Resolved command type mismatch");
    };
    let mut reporter = ConsoleReporter::new(Vec::new());
    let summary = run_clean_with_reporter(params, &mut reporter).await;

    assert_eq!(summary.removed_files, 2);
    assert_eq!(summary.removed_dirs, 1);
    base.child("docs/a").assert(predicate::path::missing());
    base.child("docs/c/out.txt").assert(predicate::path::missing());
    base.child("docs/c/keep.txt").assert("local notes");
    base.child("packages.json").assert(predicate::path::is_file());

    let output = String::from_utf8(reporter.into_inner()).unwrap();
    assert_eq!(
        output,
        "Cleaning documentation packages...\n  Removed: docs/a/out.txt\n  Removed: docs/c/out.txt\nDone.\n"
    );
}

#[tokio::test]
async fn test_clean_twice_is_a_no_op() {
    init_tracing();

    let (temp_dir, config_path) = setup_test_environment(vec![PackageDescriptor::new(
        "A",
        "http://127.0.0.1:1/a",
        "10",
        "a/out.txt",
    )])
    .unwrap();
    let base = assert_fs::fixture::ChildPath::new(temp_dir.path());
    base.child("a").create_dir_all().unwrap();
    base.child("a/out.txt").write_str("content").unwrap();

    for expected_removed in [1, 0] {
        let clean = Command::Clean {
            source: package_list_source(&config_path),
        };
        let ResolvedCommand::Clean(params) = resolve_command(clean).unwrap() else {
            unreachable!("Resolved command type mismatch");
        };
        let mut reporter = ConsoleReporter::new(Vec::new());
        let summary = run_clean_with_reporter(params, &mut reporter).await;
        assert_eq!(summary.removed_files, expected_removed);
    }

    base.child("a").assert(predicate::path::missing());
}
