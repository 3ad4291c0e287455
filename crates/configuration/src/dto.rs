//! Realm 配置数据结构
//!
//! 所有配置字段都是可选的：`None` 表示"未设置"，与 `false`/空值不同。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::codec::StructuredRecord;

/// Realm 级别的配置
///
/// `api_self_account_editing_enabled` 取代了旧字段 `api_self_mail_editing_enabled`。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealmConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_redirect_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_self_authenticator_deletion_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_self_password_change_enabled: Option<bool>,
    /// 旧字段，解码后总是被清空，永远不会再被写出
    #[serde(rename = "api_self_mail_editing_enabled", skip_serializing)]
    pub deprecated_api_self_mail_editing_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_self_account_editing_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_self_account_deletion_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_authenticators_tab: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_password_tab: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_profile_tab: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_mail_editing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_account_deletion_button: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub register_execute_actions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_cancelled_registration_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_successful_registration_url: Option<String>,
}

impl StructuredRecord for RealmConfiguration {
    /// 旧字段迁移：仅当新字段未设置时才继承旧字段的值
    fn normalize(&mut self) {
        if self.api_self_account_editing_enabled.is_none() {
            self.api_self_account_editing_enabled = self.deprecated_api_self_mail_editing_enabled;
        }
        self.deprecated_api_self_mail_editing_enabled = None;
    }
}

/// Realm 管理端配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealmAdminConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_checks: Option<BTreeMap<String, bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accreditations: Option<Vec<RealmAdminAccreditation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_register_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_gln_editing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_identification_voucher_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_identification_account_creation_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_identification_prefix_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auxiliary_video_identification_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onboarding_status_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent_required_social: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent_required_corporate: Option<bool>,
}

impl StructuredRecord for RealmAdminConfiguration {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealmAdminAccreditation {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity: Option<String>,
}

/// Context key 的 payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextKeyConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identification_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identification_client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onboarding_redirect_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onboarding_client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_voucher: Option<bool>,
}

impl StructuredRecord for ContextKeyConfiguration {}

/// 一对 realm 之间的命名配置项
///
/// `id` 由调用方分配，全局唯一且在更新之间保持稳定。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealmContextKey {
    pub id: String,
    pub label: String,
    pub identities_realm: String,
    pub customer_realm: String,
    #[serde(default)]
    pub config: ContextKeyConfiguration,
}

/// 授权元组
///
/// `target_*` 仅在跨 realm / 跨 group 授权时出现。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authorization {
    pub realm_id: String,
    #[serde(rename = "group_id")]
    pub group_name: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_realm_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_group_name: Option<String>,
}
