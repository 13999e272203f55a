// src/lib.rs

pub mod cli;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod offline;
pub mod symbols;
pub mod ui;
pub mod utils;
mod workflows;

pub use client::{AuthRequest, Endpoint, Form, RobustClient};
pub use offline::OfflineTaskClient;

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{AppError, AppResult},
};
use colored::*;
use log::{debug, info};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// 执行上下文，包含各模式所需的配置和客户端
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<AppConfig>,
    pub client: OfflineTaskClient,
    pub args: Arc<Cli>,
}

/// 库的公共入口点，由 `main.rs` 调用
pub async fn run_from_cli(args: Arc<Cli>, cancellation_token: CancellationToken) -> AppResult<()> {
    logging::setup_logging(args.log_level);
    debug!("CLI 参数: {:?}", args);

    if args.token_help {
        ui::box_message(
            "获取 Access Token 指南",
            constants::HELP_TOKEN_GUIDE
                .lines()
                .collect::<Vec<_>>()
                .as_slice(),
            |s| s.cyan(),
        );
        return Ok(());
    }

    if args.set_token {
        return workflows::run_set_token();
    }

    let config = Arc::new(AppConfig::new()?);
    debug!("加载的应用配置: {:?}", config);

    let (token_opt, source) = config::token::resolve_token(args.token.as_deref());
    let Some(token) = token_opt else {
        info!("未找到 Access Token");
        return Err(AppError::TokenMissing);
    };
    info!("从 {} 加载 Access Token", source);

    let transport = RobustClient::new(config.clone(), token, cancellation_token)?;
    let context = AppContext {
        config,
        client: OfflineTaskClient::new(Arc::new(transport)),
        args: args.clone(),
    };

    if !args.add.is_empty() {
        workflows::run_add(&context, &args.add).await
    } else if let Some(batch_file) = &args.batch_file {
        workflows::run_batch(&context, batch_file).await
    } else if let Some(info_hash) = &args.delete {
        workflows::run_delete(&context, info_hash).await
    } else if let Some(page) = args.list {
        workflows::run_list(&context, page).await
    } else {
        Ok(())
    }
}
