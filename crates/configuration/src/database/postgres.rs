//! PostgreSQL 后端实现
//!
//! 使用 sqlx 提供 PostgreSQL 存储支持

use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use sqlx::postgres::{PgArguments, PgPool, PgPoolOptions, PgRow};
use sqlx::query::Query;
use sqlx::{Postgres, Row as SqlxRow, Transaction};
use tracing::{debug, info};

use super::backend::{ConfigurationDatabase, DatabaseTransaction, Row, RowStream, Statement};
use super::config::PostgresConfig;
use crate::error::{ConfigurationError, ConfigurationResult};

fn sql(statement: Statement) -> &'static str {
    match statement {
        Statement::SelectBothConfigs => {
            "SELECT configuration, admin_configuration FROM realm_configuration
             WHERE realm_id = $1 AND configuration IS NOT NULL AND admin_configuration IS NOT NULL"
        }
        Statement::SelectConfig => {
            "SELECT configuration FROM realm_configuration
             WHERE realm_id = $1 AND configuration IS NOT NULL"
        }
        Statement::SelectAdminConfig => {
            "SELECT admin_configuration FROM realm_configuration
             WHERE realm_id = $1 AND admin_configuration IS NOT NULL"
        }
        Statement::SelectContextKeys => {
            "SELECT id, label, identities_realm, customer_realm, configuration
             FROM context_key_configuration WHERE customer_realm = $1"
        }
        Statement::DeleteContextKey => "DELETE FROM context_key_configuration WHERE id = $1",
        Statement::UpsertContextKey => {
            "INSERT INTO context_key_configuration (id, label, identities_realm, customer_realm, configuration)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (id) DO UPDATE SET
                label = EXCLUDED.label,
                identities_realm = EXCLUDED.identities_realm,
                customer_realm = EXCLUDED.customer_realm,
                configuration = EXCLUDED.configuration"
        }
        Statement::SelectAllAuthorizations => {
            "SELECT realm_id, group_name, action, target_realm_id, target_group_name FROM authorizations"
        }
    }
}

fn bind_all(statement: Statement, params: &[&str]) -> Query<'static, Postgres, PgArguments> {
    params
        .iter()
        .fold(sqlx::query(sql(statement)), |query, param| {
            query.bind(param.to_string())
        })
}

fn convert_row(row: &PgRow) -> ConfigurationResult<Row> {
    let mut columns = Vec::with_capacity(row.len());
    for index in 0..row.len() {
        columns.push(row.try_get::<Option<String>, _>(index)?);
    }
    Ok(Row::new(columns))
}

/// PostgreSQL 存储后端
#[derive(Clone)]
pub struct PostgresDatabase {
    pool: PgPool,
}

impl std::fmt::Debug for PostgresDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresDatabase")
            .field("pool_size", &self.pool.size())
            .finish()
    }
}

impl PostgresDatabase {
    /// 创建新的 PostgreSQL 后端实例
    pub async fn new(config: &PostgresConfig) -> ConfigurationResult<Self> {
        let url = format!(
            "postgres://{}:{}@{}:{}/{}",
            config.username, config.password, config.host, config.port, config.database
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.pool_size)
            .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
            .connect(&url)
            .await
            .map_err(|e| {
                ConfigurationError::store(format!("Failed to connect to PostgreSQL: {e}"))
            })?;

        let database = Self { pool };
        database.initialize_schema().await?;

        info!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            "PostgreSQL configuration store initialized"
        );

        Ok(database)
    }

    async fn initialize_schema(&self) -> ConfigurationResult<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS realm_configuration (
                realm_id TEXT PRIMARY KEY,
                configuration TEXT,
                admin_configuration TEXT
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS context_key_configuration (
                id TEXT PRIMARY KEY,
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

        debug!("PostgreSQL tables and indexes initialized");
        Ok(())
    }

    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ConfigurationDatabase for PostgresDatabase {
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
        Ok(Box::new(PostgresTransaction { inner: Some(tx) }))
    }
}

/// PostgreSQL 事务，drop 时自动回滚
pub struct PostgresTransaction {
    inner: Option<Transaction<'static, Postgres>>,
}

#[async_trait]
impl DatabaseTransaction for PostgresTransaction {
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
