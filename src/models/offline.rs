// src/models/offline.rs

use super::OfflineTaskStatus;
use serde::{Deserialize, Serialize};

// --- 添加云下载任务 ---

/// 每个提交的链接对应一条结果，顺序与提交顺序一致
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AddOfflineTaskUrisResp {
    /// 成功为 true
    #[serde(default)]
    pub state: bool,
    /// 成功返回 0
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    /// 只有任务添加成功时才会返回
    #[serde(default)]
    pub info_hash: String,
    #[serde(default)]
    pub url: String,
}

impl AddOfflineTaskUrisResp {
    pub fn is_accepted(&self) -> bool {
        self.state && !self.info_hash.is_empty()
    }
}

// --- 云下载任务列表 ---

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct OfflineTaskListResp {
    /// 当前第几页
    #[serde(default)]
    pub page: i64,
    /// 总页数
    #[serde(default)]
    pub page_count: i64,
    /// 任务总数
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub tasks: Vec<OfflineTask>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct OfflineTask {
    pub info_hash: String,
    pub add_time: i64,
    #[serde(rename = "percentDone")]
    pub percent_done: i32,
    /// 总大小（字节）
    pub size: i64,
    pub name: String,
    pub last_update: i64,
    /// 下载完成后的文件或文件夹 ID
    pub file_id: String,
    /// 删除源文件时需要传递的 ID
    pub delete_file_id: String,
    /// -1 失败，0 分配中，1 下载中，2 成功
    pub status: i32,
    pub url: String,
    /// 所在父文件夹 ID
    pub wp_path_id: String,
    /// 视频清晰度
    pub def2: i32,
    /// 视频时长
    pub play_long: i32,
    pub can_appeal: i32,
}

impl OfflineTask {
    pub fn status(&self) -> OfflineTaskStatus {
        OfflineTaskStatus::from(self.status)
    }

    pub fn is_todo(&self) -> bool {
        self.status == 0
    }

    pub fn is_running(&self) -> bool {
        self.status == 1
    }

    pub fn is_done(&self) -> bool {
        self.status == 2
    }

    pub fn is_failed(&self) -> bool {
        self.status == -1
    }

    pub fn describe_status(&self) -> String {
        self.status().label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task_with_status(status: i32) -> OfflineTask {
        OfflineTask {
            status,
            ..Default::default()
        }
    }

    #[test]
    fn test_status_predicates() {
        assert!(task_with_status(0).is_todo());
        assert!(task_with_status(1).is_running());
        assert!(task_with_status(2).is_done());
        assert!(task_with_status(-1).is_failed());

        let running = task_with_status(1);
        assert!(!running.is_todo() && !running.is_done() && !running.is_failed());
    }

    #[test]
    fn test_describe_status() {
        assert_eq!(task_with_status(-1).describe_status(), "离线下载失败");
        assert_eq!(task_with_status(0).describe_status(), "准备开始离线下载");
        assert_eq!(task_with_status(1).describe_status(), "离线任务下载中");
        assert_eq!(task_with_status(2).describe_status(), "离线下载完成");

        // 超出已知范围时回退为带原始数值的描述
        let unknown = task_with_status(99).describe_status();
        assert!(unknown.contains("99"), "fallback was: {}", unknown);
    }

    #[test]
    fn test_offline_task_deserializes_wire_names() {
        let json = r#"{
            "info_hash": "abc",
            "add_time": 1700000000,
            "percentDone": 42,
            "size": 1024,
            "name": "ubuntu.iso",
            "last_update": 1700000100,
            "file_id": "f1",
            "delete_file_id": "d1",
            "status": 1,
            "url": "magnet:?xt=urn:btih:abc",
            "wp_path_id": "0",
            "def2": 100,
            "play_long": 0,
            "can_appeal": 0
        }"#;
        let task: OfflineTask = serde_json::from_str(json).unwrap();
        assert_eq!(task.percent_done, 42);
        assert_eq!(task.def2, 100);
        assert!(task.is_running());
    }

    #[test]
    fn test_accepted_requires_state_and_hash() {
        let ok = AddOfflineTaskUrisResp { state: true, info_hash: "H".into(), ..Default::default() };
        let no_hash = AddOfflineTaskUrisResp { state: true, ..Default::default() };
        let failed = AddOfflineTaskUrisResp { state: false, info_hash: "H".into(), ..Default::default() };
        assert!(ok.is_accepted());
        assert!(!no_hash.is_accepted());
        assert!(!failed.is_accepted());
    }
}
