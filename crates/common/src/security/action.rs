//! 权限 action 定义
//!
//! 每个 action 属于某个服务的某个 API，并带有一个作用范围。

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Action 的作用范围
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ActionScope {
    /// 与 realm 无关
    Global,
    /// 作用于整个 realm
    Realm,
    /// 作用于 realm 内的某个 group
    Group,
}

/// 提供 action 的后端服务
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Service {
    Bridge,
    Event,
    #[strum(serialize = "idnow")]
    #[serde(rename = "idnow")]
    IdNow,
    PaperCard,
    Scheduler,
    Signature,
    Voucher,
    Accreditation,
}

/// 服务对外暴露的 API 分组
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Api {
    Communication,
    Events,
    Kyc,
    Management,
    Statistic,
    Task,
    #[strum(serialize = "idnow")]
    #[serde(rename = "idnow")]
    IdNow,
    Cards,
    Scheduler,
    Signature,
}

/// 权限目录中的一项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Action {
    pub service: Service,
    pub api: Api,
    pub name: &'static str,
    pub scope: ActionScope,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_service_names() {
        assert_eq!(Service::PaperCard.to_string(), "paper-card");
        assert_eq!(Service::IdNow.to_string(), "idnow");
        assert_eq!(Service::from_str("bridge").unwrap(), Service::Bridge);
        assert_eq!(Service::from_str("idnow").unwrap(), Service::IdNow);
        assert!(Service::from_str("unknown").is_err());
    }

    #[test]
    fn test_api_names() {
        assert_eq!(Api::from_str("management").unwrap(), Api::Management);
        assert_eq!(Api::IdNow.to_string(), "idnow");
        let name: &'static str = Api::Kyc.into();
        assert_eq!(name, "kyc");
    }

    #[test]
    fn test_action_serialization() {
        let action = Action {
            service: Service::Bridge,
            api: Api::Management,
            name: "MGMT_GetUser",
            scope: ActionScope::Group,
        };
        assert_eq!(action.to_string(), "MGMT_GetUser");
        assert_eq!(
            serde_json::to_string(&action).unwrap(),
            r#"{"service":"bridge","api":"management","name":"MGMT_GetUser","scope":"group"}"#
        );
    }
}
