//! 权限目录
//!
//! 定义各服务注册的 action（名称 + 作用范围），以及由目录构建授权范围的辅助函数。

mod action;
mod catalog;
mod standard;

pub use action::{Action, ActionScope, Api, Service};
pub use catalog::ActionsIndex;

use realm_configuration::AuthorizationScope;

/// 由一组 `(service, apis)` 构建授权范围
///
/// 每一组贡献一个 action 集合；`apis` 为空时取该服务的全部 action。
/// 没有任何分组时不限制。
pub fn scope_for<'a, I>(index: &ActionsIndex, groups: I) -> AuthorizationScope
where
    I: IntoIterator<Item = (Service, &'a [Api])>,
{
    AuthorizationScope::from_action_sets(groups.into_iter().map(|(service, apis)| {
        if apis.is_empty() {
            index.action_names_for_service(service)
        } else {
            index.action_names_for_apis(service, apis)
        }
    }))
}
