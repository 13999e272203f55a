// src/ui.rs

use crate::{constants, models::OfflineTaskListResp, symbols, utils};
use colored::*;
use std::io::{self, Write};

pub fn print_header(title: &str) {
    println!("\n{}", "═".repeat(constants::UI_WIDTH));
    println!(" {}", title.cyan().bold());
    println!("{}", "═".repeat(constants::UI_WIDTH));
}

pub fn box_message(title: &str, content: &[&str], color_func: fn(ColoredString) -> ColoredString) {
    println!("\n┌{}┐", "─".repeat(constants::UI_WIDTH - 2));
    println!("  {}", color_func(title.bold()));
    println!("├{}┤", "─".repeat(constants::UI_WIDTH - 2));
    for line in content {
        println!("  {}", line);
    }
    println!("└{}┘", "─".repeat(constants::UI_WIDTH - 2));
}

pub fn prompt_hidden(message: &str) -> io::Result<String> {
    print!("\n>>> {}: ", message);
    io::stdout().flush()?;
    rpassword::read_password()
}

pub fn print_task_list(resp: &OfflineTaskListResp) {
    print_header(&format!(
        "云下载任务 (第 {}/{} 页，共 {} 个任务)",
        resp.page,
        resp.page_count.max(1),
        resp.count
    ));

    if resp.tasks.is_empty() {
        println!("{} 当前页没有任务。", *symbols::INFO);
        return;
    }

    for (i, task) in resp.tasks.iter().enumerate() {
        let (symbol, color_func) = task.status().get_display_info();
        println!(
            "\n{} [{}] {} {}",
            symbol,
            format!("{:>2}", i + 1).yellow(),
            utils::truncate_text(&task.name, constants::TASK_NAME_TRUNCATE_LENGTH).bold(),
            color_func(format!("({})", task.describe_status()).normal()),
        );
        println!(
            "      进度: {:>3}%  大小: {:<10}  添加于: {}",
            task.percent_done,
            utils::format_size(task.size),
            utils::format_timestamp(task.add_time),
        );
        println!("      info_hash: {}", task.info_hash.dimmed());
    }

    if resp.page < resp.page_count {
        println!(
            "\n{} 使用 --list {} 查看下一页。",
            *symbols::INFO,
            resp.page + 1
        );
    }
}
