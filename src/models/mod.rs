// src/models/mod.rs

pub mod offline;

pub use offline::{AddOfflineTaskUrisResp, OfflineTask, OfflineTaskListResp};

use crate::symbols;
use colored::{ColoredString, Colorize};

/// 云下载任务状态，由接口返回的整数状态码映射而来
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OfflineTaskStatus {
    Failed,
    Todo,
    Running,
    Done,
    Unknown(i32),
}

impl From<i32> for OfflineTaskStatus {
    fn from(code: i32) -> Self {
        match code {
            -1 => OfflineTaskStatus::Failed,
            0 => OfflineTaskStatus::Todo,
            1 => OfflineTaskStatus::Running,
            2 => OfflineTaskStatus::Done,
            other => OfflineTaskStatus::Unknown(other),
        }
    }
}

impl OfflineTaskStatus {
    pub fn label(&self) -> String {
        match self {
            OfflineTaskStatus::Failed => "离线下载失败".to_string(),
            OfflineTaskStatus::Todo => "准备开始离线下载".to_string(),
            OfflineTaskStatus::Running => "离线任务下载中".to_string(),
            OfflineTaskStatus::Done => "离线下载完成".to_string(),
            OfflineTaskStatus::Unknown(code) => format!("未知状态: {}", code),
        }
    }

    pub fn get_display_info(
        &self,
    ) -> (
        &'static ColoredString,
        fn(ColoredString) -> ColoredString,
    ) {
        match self {
            OfflineTaskStatus::Done => (&symbols::OK, |s| s.green()),
            OfflineTaskStatus::Running => (&symbols::INFO, |s| s.cyan()),
            OfflineTaskStatus::Todo => (&symbols::INFO, |s| s.normal()),
            OfflineTaskStatus::Failed => (&symbols::ERROR, |s| s.red()),
            OfflineTaskStatus::Unknown(_) => (&symbols::WARN, |s| s.yellow()),
        }
    }
}
