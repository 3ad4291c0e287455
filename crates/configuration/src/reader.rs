//! 配置读取
//!
//! 按 realm 读取配置和管理端配置，按 customer realm 读取 context key。
//! 所有失败路径在返回之前都会记录一条 warning 日志。

use futures_util::StreamExt;
use tracing::warn;

use crate::codec::StructuredRecord;
use crate::database::{ConfigurationDatabase, Row, Statement};
use crate::dto::{
    ContextKeyConfiguration, RealmAdminConfiguration, RealmConfiguration, RealmContextKey,
};
use crate::error::{ConfigurationError, ConfigurationResult};
use crate::scope::AuthorizationScope;

/// 配置存储模块
///
/// 只持有数据库句柄和构造时确定的授权范围，可以在多个任务间共享。
#[derive(Debug, Clone)]
pub struct ConfigurationReaderModule<D> {
    pub(crate) db: D,
    pub(crate) auth_scope: AuthorizationScope,
}

impl<D: ConfigurationDatabase> ConfigurationReaderModule<D> {
    /// 创建不限制授权范围的模块
    pub fn new(db: D) -> Self {
        Self {
            db,
            auth_scope: AuthorizationScope::Unrestricted,
        }
    }

    /// 合并一个允许的 action 集合，可多次调用
    pub fn with_authorization_scope<S, A>(mut self, actions: S) -> Self
    where
        S: IntoIterator<Item = A>,
        A: AsRef<str>,
    {
        self.auth_scope = self.auth_scope.restrict(actions);
        self
    }

    pub fn with_scope(mut self, scope: AuthorizationScope) -> Self {
        self.auth_scope = scope;
        self
    }

    pub fn authorization_scope(&self) -> &AuthorizationScope {
        &self.auth_scope
    }

    pub fn database(&self) -> &D {
        &self.db
    }

    /// 同时获取 realm 的配置和管理端配置
    ///
    /// 只匹配两列都非空的行。先解码普通配置，成功后才解码管理端配置。
    pub async fn get_both_configurations(
        &self,
        realm_id: &str,
    ) -> ConfigurationResult<(RealmConfiguration, RealmAdminConfiguration)> {
        let row = self
            .fetch_config_row(Statement::SelectBothConfigs, realm_id, "Realm configurations")
            .await?;

        let (config_json, admin_json) = row
            .expect_columns(2)
            .and_then(|_| {
                Ok((
                    row.required(0, "configuration")?,
                    row.required(1, "admin_configuration")?,
                ))
            })
            .inspect_err(|e| {
                warn!(realm = %realm_id, error = %e, "Can't read realm configurations. Scan failed");
            })?;

        let config = decode_logged::<RealmConfiguration>(&config_json, realm_id)?;
        let admin_config = decode_logged::<RealmAdminConfiguration>(&admin_json, realm_id)?;
        Ok((config, admin_config))
    }

    /// 获取 realm 配置
    pub async fn get_configuration(&self, realm_id: &str) -> ConfigurationResult<RealmConfiguration> {
        let row = self
            .fetch_config_row(Statement::SelectConfig, realm_id, "Realm configuration")
            .await?;
        let config_json = single_column(&row, "configuration", realm_id)?;
        decode_logged(&config_json, realm_id)
    }

    /// 获取 realm 管理端配置
    pub async fn get_admin_configuration(
        &self,
        realm_id: &str,
    ) -> ConfigurationResult<RealmAdminConfiguration> {
        let row = self
            .fetch_config_row(Statement::SelectAdminConfig, realm_id, "Realm admin configuration")
            .await?;
        let admin_json = single_column(&row, "admin_configuration", realm_id)?;
        decode_logged(&admin_json, realm_id)
    }

    async fn fetch_config_row(
        &self,
        statement: Statement,
        realm_id: &str,
        what: &'static str,
    ) -> ConfigurationResult<Row> {
        match self.db.query_row(statement, &[realm_id]).await {
            Ok(Some(row)) => Ok(row),
            Ok(None) => {
                warn!(realm = %realm_id, "{what} not found in DB");
                Err(ConfigurationError::not_found(realm_id))
            }
            Err(e) => {
                warn!(realm = %realm_id, error = %e, "Can't query {what}");
                Err(e)
            }
        }
    }

    /// 获取 customer realm 的全部 context key
    ///
    /// 没有数据时返回空列表。任何一行失败都会使整个调用失败，不返回部分结果。
    pub async fn get_context_keys(
        &self,
        customer_realm: &str,
    ) -> ConfigurationResult<Vec<RealmContextKey>> {
        let mut rows = self.db.query(Statement::SelectContextKeys, &[customer_realm]);

        let mut context_keys = Vec::new();
        while let Some(row) = rows.next().await {
            let row = row.inspect_err(|e| {
                warn!(
                    realm = %customer_realm,
                    error = %e,
                    "Can't get context key configuration. Failed to iterate on every items"
                );
            })?;
            let context_key = scan_context_key(&row).inspect_err(|e| {
                warn!(
                    realm = %customer_realm,
                    error = %e,
                    "Can't get context key configuration. Scan failed"
                );
            })?;
            context_keys.push(context_key);
        }

        Ok(context_keys)
    }
}

fn single_column(row: &Row, column: &str, realm_id: &str) -> ConfigurationResult<String> {
    row.expect_columns(1)
        .and_then(|_| row.required(0, column))
        .inspect_err(|e| {
            warn!(realm = %realm_id, error = %e, "Can't read {column}. Scan failed");
        })
}

fn decode_logged<T: StructuredRecord>(raw: &str, realm_id: &str) -> ConfigurationResult<T> {
    T::from_json(raw).inspect_err(|e| {
        warn!(realm = %realm_id, error = %e, "Stored configuration is not valid JSON");
    })
}

fn scan_context_key(row: &Row) -> ConfigurationResult<RealmContextKey> {
    row.expect_columns(5)?;
    let id = row.required(0, "id")?;
    let label = row.required(1, "label")?;
    let identities_realm = row.required(2, "identities_realm")?;
    let customer_realm = row.required(3, "customer_realm")?;
    let config = ContextKeyConfiguration::from_json(&row.required(4, "configuration")?)?;

    Ok(RealmContextKey {
        id,
        label,
        identities_realm,
        customer_realm,
        config,
    })
}
