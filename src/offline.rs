// src/offline.rs

use crate::{
    client::{AuthRequest, Endpoint, Form, request_json},
    constants::api::form as field,
    error::{AppError, AppResult},
    models::{AddOfflineTaskUrisResp, OfflineTaskListResp},
};
use log::{debug, info, warn};
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

/// 云下载接口的客户端。本身不持有跨调用的状态，可以在多个任务间共享。
#[derive(Clone)]
pub struct OfflineTaskClient {
    transport: Arc<dyn AuthRequest>,
}

impl OfflineTaskClient {
    pub fn new(transport: Arc<dyn AuthRequest>) -> Self {
        Self { transport }
    }

    /// 提交一个或多个链接到指定文件夹，返回添加成功的任务 info_hash。
    ///
    /// 添加失败的链接不会返回错误，调用方可以比较返回数量与提交数量判断是否部分失败。
    pub async fn add_offline_task_uris(
        &self,
        uris: &[String],
        save_dir_id: &str,
    ) -> AppResult<Vec<String>> {
        if uris.is_empty() {
            return Err(AppError::InvalidArgument("uris is empty".to_string()));
        }

        let form = Form::from([
            (field::URLS, uris.join("\n")),
            (field::WP_PATH_ID, save_dir_id.to_string()),
        ]);
        let resp: Vec<AddOfflineTaskUrisResp> = request_json(
            self.transport.as_ref(),
            Endpoint::AddOfflineTask,
            Method::POST,
            form,
        )
        .await?;

        let mut hashes = Vec::with_capacity(resp.len());
        for item in resp {
            if item.is_accepted() {
                hashes.push(item.info_hash);
            } else {
                warn!(
                    "链接 '{}' 添加失败: code={}, message={}",
                    item.url, item.code, item.message
                );
            }
        }
        info!("提交 {} 个链接，成功添加 {} 个任务", uris.len(), hashes.len());
        Ok(hashes)
    }

    pub async fn delete_offline_task(&self, info_hash: &str, delete_source_files: bool) -> AppResult<()> {
        let form = Form::from([
            (field::INFO_HASH, info_hash.to_string()),
            (
                field::DEL_SOURCE_FILE,
                if delete_source_files { "1" } else { "0" }.to_string(),
            ),
        ]);

        // 返回内容不作解析
        let resp: Value = request_json(
            self.transport.as_ref(),
            Endpoint::DeleteOfflineTask,
            Method::POST,
            form,
        )
        .await?;
        debug!("删除任务 '{}' 的响应: {}", info_hash, resp);
        Ok(())
    }

    /// 获取一页云下载任务列表，翻页由调用方负责
    pub async fn offline_task_list(&self, page: u64) -> AppResult<OfflineTaskListResp> {
        let form = Form::from([(field::PAGE, page.to_string())]);
        request_json(
            self.transport.as_ref(),
            Endpoint::OfflineTaskList,
            Method::GET,
            form,
        )
        .await
    }
}
