//! 结构化配置编解码
//!
//! 配置以 JSON 文本形式持久化。解码采用稀疏记录语义：
//! 未知字段被忽略，缺失字段保持未设置。JSON `null` 解码为空记录，
//! 重复的键以最后一次出现的值为准。

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ConfigurationResult;

/// 将 JSON 文本解码为记录，不做任何迁移处理
pub fn decode<T: DeserializeOwned + Default>(raw: &str) -> ConfigurationResult<T> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Null => Ok(T::default()),
        value => Ok(serde_json::from_value(value)?),
    }
}

/// 将记录编码为 JSON 文本
pub fn encode<T: Serialize>(record: &T) -> serde_json::Result<String> {
    serde_json::to_string(record)
}

/// 以 JSON 文本持久化的稀疏记录
///
/// `normalize` 在解码之后执行，用于一次性的字段迁移。
/// 默认实现不做任何处理。
pub trait StructuredRecord: Serialize + DeserializeOwned + Default {
    fn normalize(&mut self) {}

    fn from_json(raw: &str) -> ConfigurationResult<Self> {
        let mut record: Self = decode(raw)?;
        record.normalize();
        Ok(record)
    }

    fn to_json(&self) -> serde_json::Result<String> {
        encode(self)
    }
}
