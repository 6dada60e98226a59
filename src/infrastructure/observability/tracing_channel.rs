// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::operator_channel::OperatorChannel;
use std::sync::Mutex;
use tracing::warn;

/// 通过 tracing 输出警告
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingChannel;

impl OperatorChannel for TracingChannel {
    fn warn(&self, message: &str) {
        warn!(target: "panel_support::operator", "{}", message);
    }
}

/// 记录所有警告的通道
///
/// 同时转发到 tracing，主要用于测试与需要回显警告的命令行工具。
#[derive(Debug, Default)]
pub struct RecordingChannel {
    messages: Mutex<Vec<String>>,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已记录的警告
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }
}

impl OperatorChannel for RecordingChannel {
    fn warn(&self, message: &str) {
        warn!(target: "panel_support::operator", "{}", message);
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}
