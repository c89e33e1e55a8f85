use assert_fs::prelude::*;
use docfetch_e2e_tests::{
    ALPHA_BODY, GAMMA_BODY, TestContentServer, init_tracing, setup_test_environment,
    unreachable_url,
};
use docfetch_lib::PackageDescriptor;
use docfetch_lib::cli::{
    Command, FetchParams, PackageListSource, ResolvedCommand, resolve_command,
    run_fetch_with_reporter,
};
use docfetch_lib::config::ParserStrategy;
use docfetch_lib::report::ConsoleReporter;
use predicates::prelude::*;
use std::path::Path;

fn build_fetch_params(config_path: &Path) -> FetchParams {
    let command = Command::Fetch {
        source: PackageListSource {
            config_path: config_path.to_str().unwrap().to_string(),
            base_dir: None,
            parser: ParserStrategy::Auto,
        },
        timeout_secs: 5,
    };
    match resolve_command(command).expect("Failed to resolve fetch command") {
        ResolvedCommand::Fetch(params) => params,
        _ => unreachable!("Resolved command type mismatch"),
    }
}

async fn fetch(config_path: &Path) -> (docfetch_lib::fetch::ProcessSummary, String) {
    let mut reporter = ConsoleReporter::new(Vec::new());
    let summary = run_fetch_with_reporter(build_fetch_params(config_path), &mut reporter)
        .await
        .expect("Fetch should complete despite per-package failures");
    let output = String::from_utf8(reporter.into_inner()).unwrap();
    (summary, output)
}

#[tokio::test]
async fn test_failed_package_does_not_stop_the_batch() {
    init_tracing();
    let server = TestContentServer::spawn().await.unwrap();

    let (temp_dir, config_path) = setup_test_environment(vec![
        PackageDescriptor::new("A", server.url("/a"), "10", "a/out.txt"),
        PackageDescriptor::new("B", server.url("/b?x=1"), "20", "b/out.txt"),
    ])
    .unwrap();

    let (summary, output) = fetch(&config_path).await;

    assert_eq!(
        output,
        "Fetching documentation packages...\n  Fetching: A\n    -> a/out.txt\n  Fetching: B\n    FAILED: B\nDone.\n"
    );
    assert_eq!(summary.succeeded, 1);
    assert_eq!(summary.failed_packages, vec!["B".to_string()]);

    let base = assert_fs::fixture::ChildPath::new(temp_dir.path());
    base.child("a/out.txt").assert(ALPHA_BODY);
    base.child("b/out.txt").assert(predicate::path::missing());
}

#[tokio::test]
async fn test_unreachable_host_between_successes() {
    init_tracing();
    let server = TestContentServer::spawn().await.unwrap();

    let (temp_dir, config_path) = setup_test_environment(vec![
        PackageDescriptor::new("First", server.url("/a"), "1", "first.md"),
        PackageDescriptor::new("Second", unreachable_url("/doc"), "2", "second.md"),
        PackageDescriptor::new("Third", server.url("/c"), "3", "third.md"),
    ])
    .unwrap();

    let (summary, output) = fetch(&config_path).await;

    let fetching_lines: Vec<&str> = output
        .lines()
        .filter(|line| line.starts_with("  Fetching: "))
        .collect();
    assert_eq!(
        fetching_lines,
        vec!["  Fetching: First", "  Fetching: Second", "  Fetching: Third"]
    );
    assert!(output.contains("    FAILED: Second\n"));
    assert!(output.ends_with("Done.\n"));
    assert_eq!(summary.succeeded, 2);

    let base = assert_fs::fixture::ChildPath::new(temp_dir.path());
    base.child("first.md").assert(ALPHA_BODY);
    base.child("second.md").assert(predicate::path::missing());
    base.child("third.md").assert(GAMMA_BODY);
}

#[tokio::test]
async fn test_tokens_parameter_reaches_the_server() {
    init_tracing();
    let server = TestContentServer::spawn().await.unwrap();

    let (temp_dir, config_path) = setup_test_environment(vec![
        PackageDescriptor::new("Plain", server.url("/echo"), "500", "plain.txt"),
        PackageDescriptor::new("Query", server.url("/echo?id=42"), "500", "query.txt"),
    ])
    .unwrap();

    fetch(&config_path).await;

    let base = assert_fs::fixture::ChildPath::new(temp_dir.path());
    base.child("plain.txt").assert("tokens=500");
    base.child("query.txt").assert("id=42&tokens=500");
}

#[tokio::test]
async fn test_redirects_are_followed_into_nested_directories() {
    init_tracing();
    let server = TestContentServer::spawn().await.unwrap();

    let (temp_dir, config_path) = setup_test_environment(vec![PackageDescriptor::new(
        "Moved",
        server.url("/moved"),
        "1",
        "sub/dir/file.txt",
    )])
    .unwrap();

    let (summary, _) = fetch(&config_path).await;

    assert_eq!(summary.succeeded, 1);
    let base = assert_fs::fixture::ChildPath::new(temp_dir.path());
    base.child("sub/dir").assert(predicate::path::is_dir());
    base.child("sub/dir/file.txt").assert(ALPHA_BODY);
}

#[tokio::test]
async fn test_refetch_overwrites_previous_output() {
    init_tracing();
    let server = TestContentServer::spawn().await.unwrap();

    let (temp_dir, config_path) = setup_test_environment(vec![PackageDescriptor::new(
        "A",
        server.url("/a"),
        "1",
        "a.md",
    )])
    .unwrap();
    let base = assert_fs::fixture::ChildPath::new(temp_dir.path());
    base.child("a.md")
        .write_str("stale content that is longer than the fresh document body, by a lot")
        .unwrap();

    fetch(&config_path).await;
    let (summary, _) = fetch(&config_path).await;

    assert_eq!(summary.succeeded, 1);
    base.child("a.md").assert(ALPHA_BODY);
}

#[tokio::test]
async fn test_line_scanned_package_list() {
    init_tracing();
    let server = TestContentServer::spawn().await.unwrap();

    let temp_dir = assert_fs::TempDir::new().unwrap();
    let config = temp_dir.child("packages.list");
    config
        .write_str(&format!(
            "- name: A\n  source: {}\n  tokens: 10\n  output: a/out.txt\n- name: Incomplete\n  source: {}\n  output: b/out.txt\n",
            server.url("/a"),
            server.url("/c"),
        ))
        .unwrap();

    let (summary, output) = fetch(config.path()).await;

    assert_eq!(summary.succeeded, 1);
    assert!(output.contains("    FAILED: Incomplete\n"));
    temp_dir.child("a/out.txt").assert(ALPHA_BODY);
    temp_dir.child("b/out.txt").assert(predicate::path::missing());
}
