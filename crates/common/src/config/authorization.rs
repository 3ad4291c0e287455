//! 授权范围配置
//!
//! ```toml
//! [[authorization.scopes]]
//! service = "bridge"
//! apis = ["management", "statistic"]
//!
//! [[authorization.scopes]]
//! service = "scheduler"   # apis 省略时取整个服务
//! ```

use realm_configuration::AuthorizationScope;
use serde::{Deserialize, Serialize};

use crate::security::{ActionsIndex, Api, Service, scope_for};

/// 授权范围配置
///
/// 没有配置任何 scope 时，列出授权不做过滤。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<ScopeConfig>,
}

/// 一个服务及其 API 子集
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeConfig {
    pub service: Service,
    #[serde(default)]
    pub apis: Vec<Api>,
}

impl AuthorizationConfig {
    /// 根据权限目录构建授权范围
    pub fn build_scope(&self, index: &ActionsIndex) -> AuthorizationScope {
        scope_for(
            index,
            self.scopes
                .iter()
                .map(|scope| (scope.service, scope.apis.as_slice())),
        )
    }

    /// 检查每个配置的 scope 都至少对应一个 action
    pub fn validate(&self, index: &ActionsIndex) -> Result<(), Vec<String>> {
        let errors: Vec<String> = self
            .scopes
            .iter()
            .flat_map(|scope| {
                let service = scope.service;
                let empty_service = scope.apis.is_empty()
                    && index.action_names_for_service(service).is_empty();
                let service_error = empty_service
                    .then(|| format!("Service '{service}' has no registered actions"));

                let api_errors = scope.apis.iter().filter_map(move |api| {
                    index
                        .actions_for_apis(service, std::slice::from_ref(api))
                        .is_empty()
                        .then(|| format!("Service '{service}' has no actions for API '{api}'"))
                });

                service_error.into_iter().chain(api_errors)
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unrestricted() {
        let config = AuthorizationConfig::default();
        let scope = config.build_scope(&ActionsIndex::standard());
        assert!(!scope.is_restricted());
        assert!(config.validate(&ActionsIndex::standard()).is_ok());
    }

    #[test]
    fn test_parse_and_build_scope() {
        let config: AuthorizationConfig = toml::from_str(
            r#"
            [[scopes]]
            service = "bridge"
            apis = ["statistic"]

            [[scopes]]
            service = "paper-card"
            "#,
        )
        .unwrap();

        assert_eq!(config.scopes.len(), 2);
        assert_eq!(config.scopes[1].service, Service::PaperCard);
        assert!(config.scopes[1].apis.is_empty());

        let scope = config.build_scope(&ActionsIndex::standard());
        assert!(scope.allows("ST_GetStatistics"));
        assert!(scope.allows("PC_CreateBatch"));
        assert!(!scope.allows("MGMT_GetUser"));
    }

    #[test]
    fn test_validate_rejects_empty_scopes() {
        let config = AuthorizationConfig {
            scopes: vec![
                ScopeConfig {
                    service: Service::Voucher,
                    apis: vec![Api::Kyc],
                },
                ScopeConfig {
                    service: Service::Event,
                    apis: vec![],
                },
            ],
        };
        let errors = config.validate(&ActionsIndex::standard()).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("'kyc'"));
        assert!(errors[1].contains("'event'"));
    }
}
