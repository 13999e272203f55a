// src/cli.rs

use clap::{Parser, ValueEnum, command, crate_version};
use std::path::PathBuf;

/// 定义日志输出级别
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Parser, Debug, Clone)]
#[command(
    version = crate_version!(),
    about,
    long_about = None,
    arg_required_else_help = true,
    disable_help_flag = true,
    disable_version_flag = true,
)]
#[command(group(
    clap::ArgGroup::new("mode")
        .required(true)
        .args(&["add", "batch_file", "delete", "list", "set_token", "token_help"]),
))]
pub struct Cli {
    // --- 运行模式 (Mode) ---
    /// 添加一个或多个链接为云下载任务 (支持 http/https/ftp/magnet/ed2k)
    #[arg(long, value_name = "URL", num_args = 1.., help_heading = "Mode")]
    pub add: Vec<String>,
    /// 从文本文件批量添加链接 (每行一个，# 开头为注释)
    #[arg(short, long, value_name = "FILE", help_heading = "Mode")]
    pub batch_file: Option<PathBuf>,
    /// 根据 info_hash 删除云下载任务
    #[arg(long, value_name = "HASH", help_heading = "Mode")]
    pub delete: Option<String>,
    /// 查看云下载任务列表的指定页 (默认第 1 页)
    #[arg(
        short,
        long,
        value_name = "PAGE",
        num_args = 0..=1,
        default_missing_value = "1",
        value_parser = clap::value_parser!(u64).range(1..),
        help_heading = "Mode"
    )]
    pub list: Option<u64>,
    /// 输入并保存 Access Token 到本地配置文件
    #[arg(long, action = clap::ArgAction::SetTrue, help_heading = "Mode")]
    pub set_token: bool,
    /// 显示如何获取 Access Token 的指南并退出
    #[arg(long, action = clap::ArgAction::SetTrue, help_heading = "Mode")]
    pub token_help: bool,

    // --- 选项 (Options) ---
    /// [添加模式] 保存到的目标文件夹 ID，默认使用配置文件中的设置或根目录
    #[arg(short, long, value_name = "DIR_ID", help_heading = "Options")]
    pub dir: Option<String>,
    /// [删除模式] 同时删除已下载的源文件
    #[arg(long, action = clap::ArgAction::SetTrue, requires = "delete", help_heading = "Options")]
    pub delete_source: bool,
    /// 提供访问令牌 (Access Token)，优先级最高
    #[arg(long, help_heading = "Options")]
    pub token: Option<String>,

    // --- 通用选项 (General) ---
    /// 显示此帮助信息并退出
    #[arg(short = 'h', long, action = clap::ArgAction::Help, global = true, help_heading = "General")]
    _help: Option<bool>,
    /// 显示版本信息并退出
    #[arg(short = 'V', long, action = clap::ArgAction::Version, global = true, help_heading = "General")]
    _version: Option<bool>,
    /// (隐藏参数) 设置日志文件的输出级别，用于调试
    #[arg(long, value_enum, default_value_t = LogLevel::Off, global = true, hide = true)]
    pub log_level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_defaults_to_first_page() {
        let cli = Cli::try_parse_from(["yun-offline", "--list"]).unwrap();
        assert_eq!(cli.list, Some(1));
        let cli = Cli::try_parse_from(["yun-offline", "--list", "3"]).unwrap();
        assert_eq!(cli.list, Some(3));
    }

    #[test]
    fn test_list_rejects_page_zero() {
        assert!(Cli::try_parse_from(["yun-offline", "--list", "0"]).is_err());
    }

    #[test]
    fn test_add_accepts_multiple_urls() {
        let cli = Cli::try_parse_from([
            "yun-offline",
            "--add",
            "https://a.example/1.iso",
            "magnet:?xt=urn:btih:abc",
            "--dir",
            "123",
        ])
        .unwrap();
        assert_eq!(cli.add.len(), 2);
        assert_eq!(cli.dir.as_deref(), Some("123"));
    }

    #[test]
    fn test_modes_are_exclusive() {
        assert!(Cli::try_parse_from(["yun-offline", "--list", "--delete", "abc"]).is_err());
    }
}
