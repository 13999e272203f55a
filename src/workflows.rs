// src/workflows.rs

use crate::{
    AppContext, config,
    error::{AppError, AppResult},
    symbols, ui, utils,
};
use colored::*;
use log::{info, warn};
use std::path::Path;

/// 添加模式 (--add)
pub(crate) async fn run_add(context: &AppContext, uris: &[String]) -> AppResult<()> {
    let save_dir_id = resolve_save_dir(context);
    ui::print_header(&format!("添加云下载任务 (目标文件夹: {})", save_dir_id));
    for uri in uris {
        println!("  {}", utils::truncate_text(uri, 80));
    }

    let hashes = context
        .client
        .add_offline_task_uris(uris, &save_dir_id)
        .await?;
    print_add_summary(uris.len(), &hashes);
    Ok(())
}

/// 批量模式 (-b)，文件中所有有效链接通过一次请求提交
pub(crate) async fn run_batch(context: &AppContext, batch_file: &Path) -> AppResult<()> {
    let (links, skipped) = utils::read_batch_links(batch_file)?;
    for line in &skipped {
        warn!("批量文件中的无效条目: {}", line);
        eprintln!("{} 跳过无效条目: {}", *symbols::WARN, line);
    }
    if links.is_empty() {
        warn!("批量文件 '{}' 中没有有效链接。", batch_file.display());
        println!(
            "{} 批量文件 '{}' 中没有有效链接。",
            *symbols::WARN,
            batch_file.display()
        );
        return Ok(());
    }
    info!("从 '{}' 读取到 {} 个链接", batch_file.display(), links.len());
    run_add(context, &links).await
}

/// 删除模式 (--delete)
pub(crate) async fn run_delete(context: &AppContext, info_hash: &str) -> AppResult<()> {
    if !utils::is_info_hash(info_hash) {
        return Err(AppError::UserInputError(format!(
            "'{}' 不是有效的 info_hash (应为 40 位十六进制字符)。",
            info_hash
        )));
    }
    let delete_source = context.args.delete_source;
    context
        .client
        .delete_offline_task(info_hash, delete_source)
        .await?;

    info!("已删除任务 {} (删除源文件: {})", info_hash, delete_source);
    let suffix = if delete_source { "，源文件已一并删除" } else { "" };
    println!("{} 已删除任务 {}{}。", *symbols::OK, info_hash, suffix);
    Ok(())
}

/// 列表模式 (--list)
pub(crate) async fn run_list(context: &AppContext, page: u64) -> AppResult<()> {
    let resp = context.client.offline_task_list(page).await?;
    info!(
        "获取任务列表第 {}/{} 页，本页 {} 个任务",
        resp.page,
        resp.page_count,
        resp.tasks.len()
    );
    ui::print_task_list(&resp);
    Ok(())
}

/// 交互式输入并保存 Token (--set-token)
pub(crate) fn run_set_token() -> AppResult<()> {
    let token = ui::prompt_hidden("请输入 Access Token (输入不可见，完成后按回车)")
        .map_err(|_| AppError::UserInterrupt)?;
    let path = config::token::save_token(token.trim())?;
    println!("{} Token已成功保存至: {}", *symbols::OK, path.display());
    Ok(())
}

fn resolve_save_dir(context: &AppContext) -> String {
    context
        .args
        .dir
        .clone()
        .filter(|dir| !dir.is_empty())
        .unwrap_or_else(|| context.config.default_save_dir_id.clone())
}

fn print_add_summary(submitted: usize, hashes: &[String]) {
    println!();
    for hash in hashes {
        println!("{} 已添加: {}", *symbols::OK, hash);
    }
    let summary = format!("成功添加: {}/{}", hashes.len(), submitted);
    if hashes.len() == submitted {
        println!("\n{}", summary.green());
    } else {
        warn!("{} 个链接添加失败", submitted - hashes.len());
        println!(
            "\n{} {} ({} 个链接添加失败，可使用 --log-level warn 查看原因)",
            *symbols::WARN,
            summary.yellow(),
            submitted - hashes.len()
        );
    }
}
