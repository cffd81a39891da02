//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("边不存在: {0} -> {1}")]
    EdgeNotFound(String, String),

    #[error("边已存在: {0} -> {1}")]
    EdgeAlreadyExists(String, String),

    #[error("不允许自环: {0}")]
    SelfLoop(String),

    #[error("存在负权边: {0}")]
    NegativeWeight(String),
}
