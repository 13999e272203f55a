// src/utils.rs

use crate::error::*;
use anyhow::Context;
use chrono::{Local, TimeZone};
use regex::Regex;
use std::{fs, path::Path, sync::LazyLock};
use url::Url;

static INFO_HASH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]{40}$").unwrap());

pub fn is_info_hash(text: &str) -> bool {
    INFO_HASH_PATTERN.is_match(text)
}

/// 判断一行输入是否是可提交的下载链接
pub fn is_download_link(text: &str) -> bool {
    // ed2k 链接含有 '|'，无法按 URL 解析
    if text.get(..7).is_some_and(|prefix| prefix.eq_ignore_ascii_case("ed2k://")) {
        return true;
    }
    Url::parse(text).is_ok_and(|url| {
        matches!(url.scheme(), "http" | "https" | "ftp" | "magnet" | "thunder")
    })
}

/// 读取批量文件，返回 (有效链接, 被跳过的行)
pub fn read_batch_links(path: &Path) -> AppResult<(Vec<String>, Vec<String>)> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("读取批量文件 '{}' 失败", path.display()))?;
    Ok(parse_batch_links(&content))
}

pub fn parse_batch_links(content: &str) -> (Vec<String>, Vec<String>) {
    let mut links = vec![];
    let mut skipped = vec![];
    for line in content.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if is_download_link(line) {
            links.push(line.to_string());
        } else {
            skipped.push(line.to_string());
        }
    }
    (links, skipped)
}

pub fn format_size(bytes: i64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    if bytes <= 0 {
        return "0 B".to_string();
    }
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} B", bytes)
    } else {
        format!("{:.2} {}", size, UNITS[unit])
    }
}

pub fn format_timestamp(ts: i64) -> String {
    if ts <= 0 {
        return "-".to_string();
    }
    Local
        .timestamp_opt(ts, 0)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn truncate_text(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut end_pos = 0;
    for (i, c) in text.char_indices() {
        width += if c.is_ascii() { 1 } else { 2 };
        if width > max_width.saturating_sub(3) {
            end_pos = i;
            break;
        }
    }
    if end_pos == 0 { text.to_string() } else { format!("{}...", &text[..end_pos]) }
}
