// src/client.rs

use crate::{config::AppConfig, constants, error::*};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Method, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;
use std::{collections::BTreeMap, fmt, sync::Arc};
use tokio_util::sync::CancellationToken;

/// 表单字段，GET 请求作为查询串发送，POST 请求作为 urlencoded 请求体发送
pub type Form = BTreeMap<&'static str, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    AddOfflineTask,
    DeleteOfflineTask,
    OfflineTaskList,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::AddOfflineTask => constants::api::ADD_OFFLINE_TASK,
            Endpoint::DeleteOfflineTask => constants::api::DELETE_OFFLINE_TASK,
            Endpoint::OfflineTaskList => constants::api::OFFLINE_TASK_LIST,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// 带认证的请求通道。实现方负责附加认证信息、发送请求并拆开响应外壳，
/// 返回响应中的 `data` 部分。
#[async_trait]
pub trait AuthRequest: Send + Sync {
    async fn auth_request(&self, endpoint: Endpoint, method: Method, form: Form) -> AppResult<Value>;
}

/// 发送请求并将 `data` 解码为调用方需要的结构
pub async fn request_json<T: DeserializeOwned>(
    transport: &dyn AuthRequest,
    endpoint: Endpoint,
    method: Method,
    form: Form,
) -> AppResult<T> {
    let raw = transport.auth_request(endpoint, method, form).await?;
    serde_json::from_value(raw).map_err(|source| AppError::ApiParseFailed {
        endpoint: endpoint.to_string(),
        source,
    })
}

#[derive(Deserialize, Debug)]
struct ApiEnvelope {
    #[serde(default, deserialize_with = "lenient_bool")]
    state: bool,
    #[serde(default, alias = "errno")]
    code: i64,
    #[serde(default, alias = "error")]
    message: String,
    #[serde(default)]
    data: Value,
}

// 部分接口的 state 字段以 0/1 返回
fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_i64().is_some_and(|n| n != 0),
        _ => false,
    })
}

#[derive(Clone)]
pub struct RobustClient {
    pub client: ClientWithMiddleware,
    config: Arc<AppConfig>,
    token: String,
    cancellation_token: CancellationToken,
}

impl RobustClient {
    pub fn new(
        config: Arc<AppConfig>,
        token: impl Into<String>,
        cancellation_token: CancellationToken,
    ) -> AppResult<Self> {
        let retry_policy =
            ExponentialBackoff::builder().build_with_max_retries(config.max_retries);
        let client = ClientBuilder::new(
            reqwest::Client::builder()
                .user_agent(config.user_agent.clone())
                .connect_timeout(config.connect_timeout)
                .timeout(config.timeout)
                .build()?,
        )
        .with(RetryTransientMiddleware::new_with_policy(retry_policy))
        .build();

        Ok(Self {
            client,
            config,
            token: token.into(),
            cancellation_token,
        })
    }

    async fn exchange(&self, endpoint: Endpoint, method: Method, form: &Form) -> AppResult<Value> {
        let url = self.config.endpoint_url(endpoint.path());
        debug!("{} {} 表单: {:?}", method, url, form);

        let is_get = method == Method::GET;
        let builder = self.client.request(method, &url).bearer_auth(&self.token);
        let builder = if is_get { builder.query(form) } else { builder.form(form) };

        let res = builder.send().await?;
        if res.status() == StatusCode::UNAUTHORIZED || res.status() == StatusCode::FORBIDDEN {
            return Err(AppError::TokenInvalid);
        }
        let body = res.error_for_status()?.bytes().await?;

        let envelope: ApiEnvelope =
            serde_json::from_slice(&body).map_err(|source| AppError::ApiParseFailed {
                endpoint: endpoint.to_string(),
                source,
            })?;
        if !envelope.state {
            warn!(
                "接口 '{}' 返回失败: code={}, message={}",
                endpoint, envelope.code, envelope.message
            );
            if constants::api::TOKEN_ERROR_CODES.contains(&envelope.code) {
                return Err(AppError::TokenInvalid);
            }
            return Err(AppError::Api {
                code: envelope.code,
                message: envelope.message,
            });
        }
        Ok(envelope.data)
    }
}

#[async_trait]
impl AuthRequest for RobustClient {
    async fn auth_request(&self, endpoint: Endpoint, method: Method, form: Form) -> AppResult<Value> {
        tokio::select! {
            biased;
            _ = self.cancellation_token.cancelled() => {
                warn!("请求 '{}' 已被取消", endpoint);
                Err(AppError::UserInterrupt)
            }
            res = self.exchange(endpoint, method, &form) => res,
        }
    }
}
