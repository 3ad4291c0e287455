//! 授权列表
//!
//! 读取全部授权元组，并按模块构造时确定的授权范围过滤 action。

use futures_util::StreamExt;
use tracing::warn;

use crate::database::{ConfigurationDatabase, Row, Statement};
use crate::dto::Authorization;
use crate::error::ConfigurationResult;
use crate::reader::ConfigurationReaderModule;

fn scan_authorization(row: &Row) -> ConfigurationResult<Authorization> {
    row.expect_columns(5)?;
    Ok(Authorization {
        realm_id: row.required(0, "realm_id")?,
        group_name: row.required(1, "group_name")?,
        action: row.required(2, "action")?,
        target_realm_id: row.optional(3, "target_realm_id")?,
        target_group_name: row.optional(4, "target_group_name")?,
    })
}

impl<D: ConfigurationDatabase> ConfigurationReaderModule<D> {
    /// 获取授权范围内的全部授权
    ///
    /// 保持存储返回的顺序。任何一行失败都会使整个调用失败。
    pub async fn list_authorizations(&self) -> ConfigurationResult<Vec<Authorization>> {
        let mut rows = self.db.query(Statement::SelectAllAuthorizations, &[]);

        let mut authorizations = Vec::new();
        while let Some(row) = rows.next().await {
            let row = row.inspect_err(|e| {
                warn!(error = %e, "Can't get authorizations. Failed to iterate on every items");
            })?;
            let authz = scan_authorization(&row).inspect_err(|e| {
                warn!(error = %e, "Can't get authorizations. Scan failed");
            })?;
            if self.auth_scope.allows(&authz.action) {
                authorizations.push(authz);
            }
        }

        Ok(authorizations)
    }
}
