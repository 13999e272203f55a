// src/constants.rs

pub const UI_WIDTH: usize = 88;
pub const TASK_NAME_TRUNCATE_LENGTH: usize = 40;
pub const CONFIG_DIR_NAME: &str = concat!(".", clap::crate_name!());
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "app.log";
pub const LOG_FALLBACK_FILE_NAME: &str = "fallback.log";
pub const TOKEN_ENV_VAR: &str = "YUN_ACCESS_TOKEN";
/// 未指定目标文件夹时保存到网盘根目录
pub const ROOT_DIR_ID: &str = "0";
pub const USER_AGENT: &str = concat!(clap::crate_name!(), "/", clap::crate_version!());

pub const HELP_TOKEN_GUIDE: &str = r#"
1. 登录开放平台: https://open.115.com 并创建应用。
2. 按照开放平台文档完成授权，获取 access_token。
   (授权文档: https://www.yuque.com/115yun/open/shtpzfhewv5nag11)
3. 通过以下任一方式提供 Token (优先级从高到低):
   - 命令行参数 --token <TOKEN>
   - 环境变量 YUN_ACCESS_TOKEN
   - 运行 --set-token 保存到本地配置文件
4. access_token 有效期有限，失效后需重新获取。"#;

pub mod api {
    pub const DEFAULT_BASE: &str = "https://proapi.115.com";
    pub const ADD_OFFLINE_TASK: &str = "/open/offline/add_task_urls";
    pub const DELETE_OFFLINE_TASK: &str = "/open/offline/del_task";
    pub const OFFLINE_TASK_LIST: &str = "/open/offline/get_task_list";

    /// access_token 无效、过期或校验失败时接口返回的错误码
    pub const TOKEN_ERROR_CODES: [i64; 4] = [40140123, 40140124, 40140125, 40140126];

    pub mod form {
        pub const URLS: &str = "urls";
        pub const WP_PATH_ID: &str = "wp_path_id";
        pub const INFO_HASH: &str = "info_hash";
        pub const DEL_SOURCE_FILE: &str = "del_source_file";
        pub const PAGE: &str = "page";
    }
}
