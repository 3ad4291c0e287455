//! Context key 对账
//!
//! 将某个 customer realm 已存储的 context key 集合替换为调用方提供的集合：
//! 删除不再出现的 id，再逐个 upsert 新集合中的条目，全部在同一个事务中完成。

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::codec::StructuredRecord;
use crate::database::{ConfigurationDatabase, Statement};
use crate::dto::RealmContextKey;
use crate::error::{ConfigurationError, ConfigurationResult};
use crate::reader::ConfigurationReaderModule;

/// 已存在但不在目标集合中的 id，按读取顺序去重
fn stale_ids<'a>(existing: &'a [RealmContextKey], desired: &HashSet<&str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    existing
        .iter()
        .map(|ck| ck.id.as_str())
        .filter(|id| !desired.contains(id) && seen.insert(*id))
        .collect()
}

impl<D: ConfigurationDatabase> ConfigurationReaderModule<D> {
    /// 设置 customer realm 的 context key 集合
    ///
    /// 要么全部生效，要么什么都不改变。事务在任何失败路径上都会随 drop 回滚。
    pub async fn set_context_keys(
        &self,
        customer_realm: &str,
        context_keys: &[RealmContextKey],
    ) -> ConfigurationResult<()> {
        let desired: HashSet<&str> = context_keys.iter().map(|ck| ck.id.as_str()).collect();

        let existing = self.get_context_keys(customer_realm).await.inspect_err(|e| {
            warn!(
                realm = %customer_realm,
                error = %e,
                "Can't update context keys. Failed to get existing context keys"
            );
        })?;
        let stale = stale_ids(&existing, &desired);

        let mut tx = self.db.begin().await.inspect_err(|e| {
            warn!(realm = %customer_realm, error = %e, "Can't update context keys. Failed to start transaction");
        })?;

        for id in stale.iter().copied() {
            tx.execute(Statement::DeleteContextKey, &[id])
                .await
                .inspect_err(|e| {
                    warn!(
                        realm = %customer_realm,
                        context_key = %id,
                        error = %e,
                        "Can't update context keys. Failed to delete context key"
                    );
                })?;
        }

        for ck in context_keys {
            let config_json = ck.config.to_json().map_err(|e| {
                warn!(
                    realm = %customer_realm,
                    context_key = %ck.id,
                    error = %e,
                    "Can't update context keys. Failed to serialize configuration"
                );
                ConfigurationError::store(format!(
                    "Failed to serialize configuration of context key {}: {e}",
                    ck.id
                ))
            })?;

            tx.execute(
                Statement::UpsertContextKey,
                &[
                    ck.id.as_str(),
                    ck.label.as_str(),
                    ck.identities_realm.as_str(),
                    ck.customer_realm.as_str(),
                    config_json.as_str(),
                ],
            )
            .await
            .inspect_err(|e| {
                warn!(
                    realm = %customer_realm,
                    context_key = %ck.id,
                    error = %e,
                    "Can't update context keys. Failed to upsert context key"
                );
            })?;
        }

        tx.commit().await.inspect_err(|e| {
            warn!(realm = %customer_realm, error = %e, "Can't update context keys. Commit failed");
        })?;

        debug!(
            realm = %customer_realm,
            deleted = stale.len(),
            upserted = context_keys.len(),
            "Context keys updated"
        );
        Ok(())
    }
}
