// src/main.rs

use clap::{CommandFactory, FromArgMatches};
use colored::*;
use std::{env, process, sync::Arc, time::Duration};
use tokio_util::sync::CancellationToken;
use yun_offline::{cli::Cli, error::AppError, run_from_cli};

#[tokio::main]
async fn main() {
    // 为 Windows 终端启用 ANSI 颜色支持
    #[cfg(windows)]
    {
        colored::control::set_virtual_terminal(true).ok();
    }

    let cancellation_token = CancellationToken::new();
    let ctrl_c_token = cancellation_token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!("\n{} 用户强制中断程序。", "[!]".yellow());
            ctrl_c_token.cancel();
            // 给进行中的请求留出退出时间，阻塞在输入提示时直接结束进程
            tokio::time::sleep(Duration::from_millis(500)).await;
            process::exit(130);
        }
    });

    let bin_name = env::var("CARGO_BIN_NAME").unwrap_or_else(|_| "yun-offline".to_string());

    let after_help = format!(
        "示例:\n  # 添加链接到指定文件夹\n  {bin} --add \"magnet:?xt=urn:btih:...\" --dir 123456\n\n  # 从文件批量添加\n  {bin} -b my_links.txt\n\n  # 查看任务列表第 2 页\n  {bin} --list 2\n\n  # 删除任务及已下载的文件\n  {bin} --delete <INFO_HASH> --delete-source\n\n  # 获取 Token 帮助\n  {bin} --token-help",
        bin = bin_name
    );

    let cmd = Cli::command().after_help(after_help);
    let args = match Cli::from_arg_matches(&cmd.get_matches()) {
        Ok(args) => Arc::new(args),
        Err(e) => e.exit(),
    };

    if let Err(e) = run_from_cli(args, cancellation_token).await {
        if matches!(e, AppError::UserInterrupt) {
            process::exit(130);
        }
        eprintln!("\n{} {}", "[X]".red(), format!("程序执行出错: {}", e).red());
        process::exit(1);
    }
}
