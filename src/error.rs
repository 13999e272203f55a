// src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("参数无效: {0}")]
    InvalidArgument(String),
    #[error("认证失败 (Token 无效或已过期)")]
    TokenInvalid,
    #[error("未提供 Access Token，无法访问云下载接口")]
    TokenMissing,
    #[error("网络请求失败: {0}")]
    Network(#[from] reqwest::Error),
    #[error("网络中间件错误: {0}")]
    NetworkMiddleware(#[from] reqwest_middleware::Error),
    #[error("接口返回错误 (code {code}): {message}")]
    Api { code: i64, message: String },
    #[error("无法解析来自 '{endpoint}' 的API响应: {source}")]
    ApiParseFailed {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON 解析错误: {0}")]
    Json(#[from] serde_json::Error),
    #[error("URL 解析错误: {0}")]
    Url(#[from] url::ParseError),
    #[error("用户中断")]
    UserInterrupt,
    #[error("{0}")] // 只打印内部信息，不加任何前缀
    UserInputError(String),
    #[error("未知错误: {0}")]
    Other(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;
