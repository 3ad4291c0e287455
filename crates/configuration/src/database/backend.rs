//! 数据库边界抽象接口
//!
//! 配置存储只依赖这里定义的能力：
//! - 参数化单行查询
//! - 参数化多行查询（以 stream 形式返回，drop 即释放游标）
//! - 事务：执行语句、提交；未提交即 drop 等同于回滚

use async_trait::async_trait;
use futures_util::stream::BoxStream;
use strum::{Display, IntoStaticStr};

use crate::error::{ConfigurationError, ConfigurationResult};

/// 配置存储用到的全部语句
///
/// 具体 SQL 文本由各个后端按自己的方言提供。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Statement {
    /// `configuration` 与 `admin_configuration` 都非空的行
    SelectBothConfigs,
    SelectConfig,
    SelectAdminConfig,
    /// 某个 customer realm 的全部 context key（五列）
    SelectContextKeys,
    DeleteContextKey,
    /// 按 id 插入或覆盖（五列）
    UpsertContextKey,
    /// 全部授权（五列，后两列可为空）
    SelectAllAuthorizations,
}

/// 一行查询结果，所有列均以可空文本表示
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    columns: Vec<Option<String>>,
}

impl Row {
    pub fn new(columns: Vec<Option<String>>) -> Self {
        Self { columns }
    }

    /// 构造一行全部非空的文本列
    pub fn text<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: values.into_iter().map(|v| Some(v.into())).collect(),
        }
    }

    /// 检查列数是否与目标结构一致
    pub fn expect_columns(&self, expected: usize) -> ConfigurationResult<()> {
        if self.columns.len() != expected {
            return Err(ConfigurationError::scan(format!(
                "expected {expected} columns, got {}",
                self.columns.len()
            )));
        }
        Ok(())
    }

    /// 读取非空列
    pub fn required(&self, index: usize, column: &str) -> ConfigurationResult<String> {
        self.optional(index, column)?.ok_or_else(|| {
            ConfigurationError::scan(format!("column {column} (index {index}) is NULL"))
        })
    }

    /// 读取可空列，NULL 映射为 `None`
    pub fn optional(&self, index: usize, column: &str) -> ConfigurationResult<Option<String>> {
        self.columns.get(index).cloned().ok_or_else(|| {
            ConfigurationError::scan(format!(
                "column {column} (index {index}) out of bounds, row has {} columns",
                self.columns.len()
            ))
        })
    }
}

/// 多行查询结果流
pub type RowStream<'a> = BoxStream<'a, ConfigurationResult<Row>>;

/// 配置数据库连接能力
///
/// 所有实现都必须可以在多个任务间并发使用。
#[async_trait]
pub trait ConfigurationDatabase: Send + Sync {
    /// 执行单行查询
    ///
    /// # Returns
    /// * `Ok(Some(row))` - 找到第一行
    /// * `Ok(None)` - 没有匹配行
    /// * `Err(...)` - 存储错误
    async fn query_row(&self, statement: Statement, params: &[&str])
    -> ConfigurationResult<Option<Row>>;

    /// 执行多行查询
    ///
    /// 返回的 stream 在被 drop 时释放底层游标。
    fn query<'a>(&'a self, statement: Statement, params: &[&str]) -> RowStream<'a>;

    /// 开启一个事务
    async fn begin(&self) -> ConfigurationResult<Box<dyn DatabaseTransaction>>;
}

/// 数据库事务
///
/// 未调用 `commit` 就被 drop 的事务必须回滚。
#[async_trait]
pub trait DatabaseTransaction: Send {
    /// 在事务内执行语句，返回受影响的行数
    async fn execute(&mut self, statement: Statement, params: &[&str]) -> ConfigurationResult<u64>;

    /// 提交事务。提交之后该事务不能再被使用
    async fn commit(&mut self) -> ConfigurationResult<()>;
}
