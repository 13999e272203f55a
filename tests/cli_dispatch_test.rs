// tests/cli_dispatch_test.rs

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

// 使用临时目录作为 HOME，避免读写真实配置文件
fn main_command(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("HOME", home).env_remove("YUN_ACCESS_TOKEN");
    cmd
}

fn home_with_api_base(api_base: &str) -> TempDir {
    let home = tempdir().unwrap();
    let config_dir = home.path().join(".yun-offline");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.json"),
        format!(
            r#"{{"network": {{"api_base": "{}", "connect_timeout_secs": 2, "timeout_secs": 5, "max_retries": 0}}}}"#,
            api_base
        ),
    )
    .unwrap();
    home
}

// --- 测试基本 CLI 行为 ---

#[test]
fn test_help_flag() {
    let home = tempdir().unwrap();
    let mut cmd = main_command(home.path());
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("显示此帮助信息并退出"));
}

#[test]
fn test_token_help_command() {
    let home = tempdir().unwrap();
    let mut cmd = main_command(home.path());
    cmd.arg("--token-help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("获取 access_token"));
}

#[test]
fn test_missing_mode_shows_help() {
    let home = tempdir().unwrap();
    let mut cmd = main_command(home.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_delete_source_requires_delete() {
    let home = tempdir().unwrap();
    let mut cmd = main_command(home.path());
    cmd.arg("--list").arg("--delete-source");
    cmd.assert().failure();
}

#[test]
fn test_missing_token_is_reported() {
    let home = tempdir().unwrap();
    let mut cmd = main_command(home.path());
    cmd.arg("--list");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("未提供 Access Token"));

    // 首次运行会创建默认配置文件
    assert!(home.path().join(".yun-offline").join("config.json").is_file());
}

// --- 测试核心分发逻辑 ---

#[test]
fn test_delete_rejects_malformed_hash() {
    let home = home_with_api_base("http://127.0.0.1:9");
    let mut cmd = main_command(home.path());
    cmd.arg("--delete").arg("not-a-hash").arg("--token").arg("t");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("不是有效的 info_hash"));
}

#[test]
fn test_batch_without_valid_links_is_noop() {
    let home = home_with_api_base("http://127.0.0.1:9");
    let batch = home.path().join("links.txt");
    fs::write(&batch, "# only comments\n\nnot a link\n").unwrap();

    let mut cmd = main_command(home.path());
    cmd.arg("-b").arg(&batch).arg("--token").arg("t");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("没有有效链接"))
        .stderr(predicate::str::contains("跳过无效条目: not a link"));
}

#[test]
fn test_list_mode_dispatch() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/open/offline/get_task_list")
        .match_query(mockito::Matcher::UrlEncoded("page".into(), "2".into()))
        .match_header("authorization", "Bearer cli-token")
        .with_status(200)
        .with_body(r#"{"state":true,"code":0,"message":"","data":{"page":2,"page_count":3,"count":21,"tasks":[{"info_hash":"a94a8fe5ccb19ba61c4c0873d391e987982fbbd3","name":"debian.iso","status":2,"percentDone":100,"size":1048576}]}}"#)
        .create();

    let home = home_with_api_base(&server.url());
    let mut cmd = main_command(home.path());
    cmd.arg("--list").arg("2").arg("--token").arg("cli-token");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("debian.iso"))
        .stdout(predicate::str::contains("离线下载完成"))
        .stdout(predicate::str::contains("--list 3"));
    mock.assert();
}

#[test]
fn test_add_mode_reports_partial_failure() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/open/offline/add_task_urls")
        .with_status(200)
        .with_body(r#"{"state":true,"data":[{"state":true,"info_hash":"H1","url":"https://a/1"},{"state":false,"code":10008,"message":"任务已存在","url":"https://a/2"}]}"#)
        .create();

    let home = home_with_api_base(&server.url());
    let mut cmd = main_command(home.path());
    cmd.env("YUN_ACCESS_TOKEN", "env-token")
        .arg("--add")
        .arg("https://a/1")
        .arg("https://a/2");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("已添加: H1"))
        .stdout(predicate::str::contains("成功添加: 1/2"));
    mock.assert();
}
