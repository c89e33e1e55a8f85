use axum::Router;
use axum::extract::RawQuery;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use docfetch_lib::PackageDescriptor;
use docfetch_lib::config::PackageList;
use eyre::Result;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tokio::net::TcpListener;

pub const ALPHA_BODY: &str = "# Alpha\n\nAlpha documentation snippet.\n";
pub const GAMMA_BODY: &str = "# Gamma\n\nGamma documentation snippet.\n";

/// A local stand-in for the content API.
///
/// * `/a` and `/c` answer 200 with a fixed body
/// * `/b` answers 404
/// * `/echo` answers 200 with the raw query string it received
/// * `/moved` redirects to `/a`
pub struct TestContentServer {
    addr: SocketAddr,
}

impl TestContentServer {
    pub async fn spawn() -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let router = Router::new()
            .route("/a", get(|| async { ALPHA_BODY }))
            .route("/b", get(|| async { (StatusCode::NOT_FOUND, "no such document") }))
            .route("/c", get(|| async { GAMMA_BODY }))
            .route(
                "/echo",
                get(|RawQuery(query): RawQuery| async move { query.unwrap_or_default() }),
            )
            .route("/moved", get(|| async { Redirect::temporary("/a") }));

        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Ok(Self { addr })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// A source nothing listens on, so every request fails at connect time.
pub fn unreachable_url(path: &str) -> String {
    format!("http://127.0.0.1:1{path}")
}

pub fn setup_test_environment(packages: Vec<PackageDescriptor>) -> Result<(TempDir, PathBuf)> {
    let temp_dir = tempfile::tempdir()?;

    let config_path = temp_dir.path().join("packages.json");
    write_package_list(&config_path, packages)?;

    Ok((temp_dir, config_path))
}

pub fn write_package_list(path: &Path, packages: Vec<PackageDescriptor>) -> Result<()> {
    let package_list = PackageList { packages };
    std::fs::write(path, serde_json::to_string_pretty(&package_list)?)?;
    Ok(())
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
