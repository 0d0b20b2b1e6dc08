#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use newsdeskapp::model::Article;
use newsdeskapp::store::fs::FileStore;
use newsdeskapp::store::memory::fixtures::sample_draft;
use newsdeskapp::store::DataStore;
use predicates::prelude::*;
use std::net::{TcpListener, TcpStream};
use std::process::{Child, Stdio};
use std::thread::sleep;
use std::time::{Duration, Instant};
use tempfile::TempDir;

fn newsdesk_cmd() -> Command {
    let mut cmd = Command::new(cargo_bin("newsdesk"));
    // Keep the environment from leaking configuration into the tests.
    for var in [
        "NEWSDESK_DATA_DIR",
        "NEWSDESK_BIND",
        "NEWSDESK_ADMIN_TOKEN",
        "NEWSDESK_READ_PRIMARY_URL",
        "NEWSDESK_READ_SECONDARY_URL",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd.env("NO_PROXY", "127.0.0.1,localhost");
    cmd
}

fn free_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

struct ServerGuard(Child);

impl Drop for ServerGuard {
    fn drop(&mut self) {
        let _ = self.0.kill();
        let _ = self.0.wait();
    }
}

fn start_server(data_dir: &std::path::Path, port: u16) -> ServerGuard {
    let child = std::process::Command::new(cargo_bin("newsdesk"))
        .args(["serve", "--bind", &format!("127.0.0.1:{}", port), "--data-dir"])
        .arg(data_dir)
        .env_remove("NEWSDESK_BIND")
        .env_remove("NEWSDESK_DATA_DIR")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    let guard = ServerGuard(child);

    let deadline = Instant::now() + Duration::from_secs(10);
    while TcpStream::connect(("127.0.0.1", port)).is_err() {
        assert!(Instant::now() < deadline, "server did not start");
        sleep(Duration::from_millis(50));
    }
    guard
}

#[test]
fn test_categories_prints_registry() {
    newsdesk_cmd()
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Business"))
        .stdout(predicate::str::contains("  Stock Market"))
        .stdout(predicate::str::contains("/category/stock-market"));
}

#[test]
fn test_missing_config_file_fails() {
    let temp = TempDir::new().unwrap();
    newsdesk_cmd()
        .arg("--config")
        .arg(temp.path().join("nope.toml"))
        .arg("categories")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_read_malformed_id_is_not_found() {
    newsdesk_cmd()
        .args(["read", "not-an-id"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Article not found"));
}

#[test]
fn test_serve_then_read_with_fallback() {
    let temp = TempDir::new().unwrap();
    let mut store = FileStore::open(temp.path().to_path_buf());
    let mut draft = sample_draft("Harbour reopens");
    draft.description = "Ships are **moving** again.".to_string();
    let article = Article::new(draft);
    store.save_article(&article).unwrap();

    let port = free_port();
    let _server = start_server(temp.path(), port);

    // Primary points at a closed port; the read succeeds via the secondary.
    newsdesk_cmd()
        .env(
            "NEWSDESK_READ_PRIMARY_URL",
            format!("http://127.0.0.1:{}", free_port()),
        )
        .env(
            "NEWSDESK_READ_SECONDARY_URL",
            format!("http://127.0.0.1:{}", port),
        )
        .args(["read", &article.id.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Harbour reopens"))
        .stdout(predicate::str::contains("1 min read"))
        .stdout(predicate::str::contains("<strong>moving</strong>"));
}
