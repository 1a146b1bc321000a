//! 测试辅助模块
//!
//! 提供 mock 实现：记录提交的 sink，以及可控的熵源。

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::credentials::EntropySource;
use crate::error::{ConsoleError, ConsoleResult};
use crate::traits::{SubmissionKind, SubmissionSink};

// ===== RecordingSink =====

pub struct RecordingSink {
    submissions: RwLock<Vec<(SubmissionKind, serde_json::Value)>>,
    /// 如果 Some，submit 时返回此错误（用于测试回滚路径）
    error: RwLock<Option<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            submissions: RwLock::new(Vec::new()),
            error: RwLock::new(None),
        }
    }

    pub async fn set_error(&self, err: Option<String>) {
        *self.error.write().await = err;
    }

    pub async fn submissions(&self) -> Vec<(SubmissionKind, serde_json::Value)> {
        self.submissions.read().await.clone()
    }
}

#[async_trait]
impl SubmissionSink for RecordingSink {
    async fn submit(&self, kind: SubmissionKind, payload: serde_json::Value) -> ConsoleResult<()> {
        if let Some(ref msg) = *self.error.read().await {
            return Err(ConsoleError::Submission(msg.clone()));
        }
        self.submissions.write().await.push((kind, payload));
        Ok(())
    }
}

// ===== Entropy =====

/// 总是失败的熵源
#[derive(Debug)]
pub struct FailingEntropy;

impl EntropySource for FailingEntropy {
    fn fill(&mut self, _buf: &mut [u8]) -> ConsoleResult<()> {
        Err(ConsoleError::EntropyUnavailable("test source".into()))
    }
}

/// 按顺序吐出预设 u32（小端）的熵源，耗尽后报错
#[derive(Debug)]
pub struct SequenceEntropy {
    values: VecDeque<u32>,
}

impl SequenceEntropy {
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values: values.into(),
        }
    }
}

impl EntropySource for SequenceEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> ConsoleResult<()> {
        for chunk in buf.chunks_mut(4) {
            let value = self
                .values
                .pop_front()
                .ok_or_else(|| ConsoleError::EntropyUnavailable("sequence exhausted".into()))?;
            let bytes = value.to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
        Ok(())
    }
}
