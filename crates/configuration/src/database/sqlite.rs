//! SQLite 后端实现
//!
//! 使用 sqlx 提供原生异步 SQLite 存储支持

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use sqlx::query::Query;
use sqlx::sqlite::{
    SqliteArguments, SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions,
    SqliteRow, SqliteSynchronous,
};
use sqlx::{Row as SqlxRow, Sqlite, Transaction};
use tracing::{debug, info};

use super::backend::{ConfigurationDatabase, DatabaseTransaction, Row, RowStream, Statement};
use super::config::SqliteConfig;
use crate::error::{ConfigurationError, ConfigurationResult};

/// 数据库文件名，存放在 `sqlite_path` 目录下
pub const DATABASE_FILE: &str = "realmstore.db";

fn sql(statement: Statement) -> &'static str {
    match statement {
        Statement::SelectBothConfigs => {
            "SELECT configuration, admin_configuration FROM realm_configuration
             WHERE realm_id = ? AND configuration IS NOT NULL AND admin_configuration IS NOT NULL"
        }
        Statement::SelectConfig => {
            "SELECT configuration FROM realm_configuration
             WHERE realm_id = ? AND configuration IS NOT NULL"
        }
        Statement::SelectAdminConfig => {
            "SELECT admin_configuration FROM realm_configuration
             WHERE realm_id = ? AND admin_configuration IS NOT NULL"
        }
        Statement::SelectContextKeys => {
            "SELECT id, label, identities_realm, customer_realm, configuration
             FROM context_key_configuration WHERE customer_realm = ?"
        }
        Statement::DeleteContextKey => "DELETE FROM context_key_configuration WHERE id = ?",
        Statement::UpsertContextKey => {
            "INSERT INTO context_key_configuration (id, label, identities_realm, customer_realm, configuration)
             VALUES (?, ?, ?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET
                label = excluded.label,
                identities_realm = excluded.identities_realm,
                customer_realm = excluded.customer_realm,
                configuration = excluded.configuration"
        }
        Statement::SelectAllAuthorizations => {
            "SELECT realm_id, group_name, action, target_realm_id, target_group_name FROM authorizations"
        }
    }
}

fn bind_all(
    statement: Statement,
    params: &[&str],
) -> Query<'static, Sqlite, SqliteArguments<'static>> {
    params
        .iter()
        .fold(sqlx::query(sql(statement)), |query, param| {
            query.bind(param.to_string())
        })
}

fn convert_row(row: &SqliteRow) -> ConfigurationResult<Row> {
    let mut columns = Vec::with_capacity(row.len());
    for index in 0..row.len() {
        columns.push(row.try_get::<Option<String>, _>(index)?);
    }
    Ok(Row::new(columns))
}

/// SQLite 存储后端
#[derive(Clone)]
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl std::fmt::Debug for SqliteDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteDatabase")
            .field("pool_size", &self.pool.size())
            .finish()
    }
}

impl SqliteDatabase {
    /// 创建新的 SQLite 后端实例
    ///
    /// # Arguments
    /// * `path` - 数据库文件存储目录路径，必须已存在。
    ///   数据库文件为 `{path}/realmstore.db`
    /// * `config` - 连接参数
    pub async fn new(path: &Path, config: &SqliteConfig) -> ConfigurationResult<Self> {
        let db_file = path.join(DATABASE_FILE);

        // 创建连接选项并启用 WAL 模式
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", db_file.display()))
            .map_err(|e| ConfigurationError::store(format!("Failed to parse SQLite URL: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(config.busy_timeout_secs));

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await
            .map_err(|e| ConfigurationError::store(format!("Failed to connect to SQLite: {e}")))?;

        let database = Self { pool };
        database.initialize_schema().await?;

        info!(
            path = %db_file.display(),
            max_connections = config.max_connections,
            "SQLite configuration store initialized, WAL mode enabled"
        );

        Ok(database)
    }

    /// 初始化数据库表结构
    async fn initialize_schema(&self) -> ConfigurationResult<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS realm_configuration (
                realm_id TEXT PRIMARY KEY NOT NULL,
                configuration TEXT,
                admin_configuration TEXT
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS context_key_configuration (
                id TEXT PRIMARY KEY NOT NULL,
                label TEXT NOT NULL,
                identities_realm TEXT NOT NULL,
                customer_realm TEXT NOT NULL,
                configuration TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_context_key_customer_realm
             ON context_key_configuration(customer_realm)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS authorizations (
                realm_id TEXT NOT NULL,
                group_name TEXT NOT NULL,
                action TEXT NOT NULL,
                target_realm_id TEXT,
                target_group_name TEXT
            )",
        )
        .execute(&self.pool)
        .await?;

        debug!("SQLite tables and indexes initialized");
        Ok(())
    }

    /// 获取数据库连接池
    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// 执行 SQL 语句并返回影响的行数
    pub async fn execute(&self, sql: &str) -> ConfigurationResult<u64> {
        let result = sqlx::query(sql).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl ConfigurationDatabase for SqliteDatabase {
    async fn query_row(
        &self,
        statement: Statement,
        params: &[&str],
    ) -> ConfigurationResult<Option<Row>> {
        let row = bind_all(statement, params)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(convert_row).transpose()
    }

    fn query<'a>(&'a self, statement: Statement, params: &[&str]) -> RowStream<'a> {
        bind_all(statement, params)
            .fetch(&self.pool)
            .map(|row| {
                row.map_err(ConfigurationError::from)
                    .and_then(|row| convert_row(&row))
            })
            .boxed()
    }

    async fn begin(&self) -> ConfigurationResult<Box<dyn DatabaseTransaction>> {
        let tx = self.pool.begin().await.map_err(|e| {
            ConfigurationError::store(format!("Failed to begin transaction: {e}"))
        })?;
        Ok(Box::new(SqliteTransaction { inner: Some(tx) }))
    }
}

/// SQLite 事务
///
/// 内部的 sqlx 事务在 drop 时自动回滚。
pub struct SqliteTransaction {
    inner: Option<Transaction<'static, Sqlite>>,
}

#[async_trait]
impl DatabaseTransaction for SqliteTransaction {
    async fn execute(&mut self, statement: Statement, params: &[&str]) -> ConfigurationResult<u64> {
        let tx = self
            .inner
            .as_mut()
            .ok_or_else(|| ConfigurationError::store("Transaction already committed"))?;
        let result = bind_all(statement, params).execute(&mut **tx).await?;
        Ok(result.rows_affected())
    }

    async fn commit(&mut self) -> ConfigurationResult<()> {
        let tx = self
            .inner
            .take()
            .ok_or_else(|| ConfigurationError::store("Transaction already committed"))?;
        tx.commit().await.map_err(|e| {
            ConfigurationError::store(format!("Failed to commit transaction: {e}"))
        })
    }
}
