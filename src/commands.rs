//! 子命令执行
//!
//! 每个子命令返回要打印到标准输出的 JSON 文本。

use anyhow::Context;
use realm_configuration::RealmContextKey;
use realmstore_common::security::{Action, ActionsIndex, scope_for};
use realmstore_common::{RealmStore, RealmStoreConfig, open_store};
use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::cli::Commands;
use crate::error::{Error, Result};

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// 执行需要配置存储的子命令
pub(crate) async fn execute(
    command: &Commands,
    config: &RealmStoreConfig,
    index: &ActionsIndex,
) -> Result<String> {
    if !command.needs_store() {
        return match command {
            Commands::ListActions { service } => {
                let actions: Vec<&Action> = index
                    .all_actions()
                    .iter()
                    .filter(|a| service.is_none_or(|s| a.service == s))
                    .collect();
                to_json(&actions)
            }
            _ => Err(Error::custom("command is handled before the store is opened")),
        };
    }

    let store = open_store(config, index).await?;
    execute_with_store(command, store, index).await
}

async fn execute_with_store(
    command: &Commands,
    store: RealmStore,
    index: &ActionsIndex,
) -> Result<String> {
    match command {
        Commands::GetConfig { realm } => to_json(&store.get_configuration(realm).await?),
        Commands::GetAdminConfig { realm } => {
            to_json(&store.get_admin_configuration(realm).await?)
        }
        Commands::GetConfigs { realm } => {
            let (configuration, admin_configuration) =
                store.get_both_configurations(realm).await?;
            to_json(&json!({
                "configuration": configuration,
                "admin_configuration": admin_configuration,
            }))
        }
        Commands::GetContextKeys { customer_realm } => {
            to_json(&store.get_context_keys(customer_realm).await?)
        }
        Commands::SetContextKeys {
            customer_realm,
            file,
        } => {
            let content = std::fs::read_to_string(file)
                .with_context(|| format!("Failed to read context keys file {}", file.display()))?;
            let context_keys: Vec<RealmContextKey> = serde_json::from_str(&content)
                .with_context(|| format!("Invalid context keys file {}", file.display()))?;

            store.set_context_keys(customer_realm, &context_keys).await?;
            info!(
                realm = %customer_realm,
                count = context_keys.len(),
                "Context keys replaced"
            );
            to_json(&json!({ "customer_realm": customer_realm, "context_keys": context_keys.len() }))
        }
        Commands::ListAuthorizations { service, apis } => {
            // 命令行指定的范围取代配置文件中的范围
            let store = match service {
                Some(service) => {
                    store.with_scope(scope_for(index, [(*service, apis.as_slice())]))
                }
                None => store,
            };
            to_json(&store.list_authorizations().await?)
        }
        Commands::Test { .. } | Commands::ListActions { .. } => Err(Error::custom(
            "command does not operate on the configuration store",
        )),
    }
}
