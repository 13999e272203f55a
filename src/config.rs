// src/config.rs

pub mod token;

use self::token::load_or_create_external_config;
use crate::{constants, error::AppResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NetworkConfig {
    pub api_base: Option<String>,
    pub connect_timeout_secs: Option<u64>,
    pub timeout_secs: Option<u64>,
    pub max_retries: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accesstoken: Option<String>,
    #[serde(default)]
    pub network: NetworkConfig,
    /// 未通过 --dir 指定时使用的目标文件夹 ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_save_dir_id: Option<String>,
}

impl ExternalConfig {
    pub(crate) fn default_app_config() -> Self {
        let network_config = NetworkConfig {
            api_base: Some(constants::api::DEFAULT_BASE.into()),
            connect_timeout_secs: Some(10),
            timeout_secs: Some(30),
            max_retries: Some(3),
        };

        Self {
            accesstoken: None,
            network: network_config,
            default_save_dir_id: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base: String,
    pub user_agent: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub max_retries: u32,
    pub default_save_dir_id: String,
}

impl AppConfig {
    pub fn new() -> AppResult<Self> {
        let external_config = load_or_create_external_config()?;
        Ok(Self::from_external(external_config))
    }

    pub fn from_external(external_config: ExternalConfig) -> Self {
        let network = external_config.network;
        Self {
            api_base: network
                .api_base
                .filter(|base| !base.is_empty())
                .unwrap_or_else(|| constants::api::DEFAULT_BASE.into()),
            user_agent: constants::USER_AGENT.into(),
            connect_timeout: Duration::from_secs(network.connect_timeout_secs.unwrap_or(10)),
            timeout: Duration::from_secs(network.timeout_secs.unwrap_or(30)),
            max_retries: network.max_retries.unwrap_or(3),
            default_save_dir_id: external_config
                .default_save_dir_id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| constants::ROOT_DIR_ID.into()),
        }
    }

    /// 拼接接口的完整地址
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}

#[cfg(feature = "testing")]
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: constants::api::DEFAULT_BASE.to_string(),
            user_agent: "test-agent/1.0".to_string(),
            connect_timeout: Duration::from_secs(5),
            timeout: Duration::from_secs(15),
            max_retries: 0,
            default_save_dir_id: constants::ROOT_DIR_ID.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_external_fills_defaults() {
        let external = ExternalConfig {
            accesstoken: None,
            network: NetworkConfig::default(),
            default_save_dir_id: Some(String::new()),
        };
        let config = AppConfig::from_external(external);
        assert_eq!(config.api_base, constants::api::DEFAULT_BASE);
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.default_save_dir_id, constants::ROOT_DIR_ID);
    }

    #[test]
    fn test_endpoint_url_trims_trailing_slash() {
        let mut external = ExternalConfig::default_app_config();
        external.network.api_base = Some("http://127.0.0.1:1234/".into());
        let config = AppConfig::from_external(external);
        assert_eq!(
            config.endpoint_url(constants::api::OFFLINE_TASK_LIST),
            "http://127.0.0.1:1234/open/offline/get_task_list"
        );
    }
}
