//! 权限目录索引
//!
//! 不可变的 action 表，由应用启动时构建一次，再注入到需要它的组件中。

use std::collections::HashMap;

use super::action::{Action, Api, Service};
use super::standard::STANDARD_ACTIONS;

/// 按服务和 API 索引的 action 目录
#[derive(Debug, Clone)]
pub struct ActionsIndex {
    actions: Vec<Action>,
    by_name: HashMap<&'static str, usize>,
}

impl ActionsIndex {
    /// 由任意 action 列表构建目录
    ///
    /// 重名的 action 以第一次出现的为准。
    pub fn new(actions: Vec<Action>) -> Self {
        let mut by_name = HashMap::with_capacity(actions.len());
        for (position, action) in actions.iter().enumerate() {
            by_name.entry(action.name).or_insert(position);
        }
        Self { actions, by_name }
    }

    /// 全部服务注册的标准目录
    pub fn standard() -> Self {
        Self::new(STANDARD_ACTIONS.to_vec())
    }

    pub fn all_actions(&self) -> &[Action] {
        &self.actions
    }

    /// 某个服务下若干 API 的 action，按 `apis` 的顺序拼接
    pub fn actions_for_apis(&self, service: Service, apis: &[Api]) -> Vec<&Action> {
        apis.iter()
            .flat_map(|api| {
                self.actions
                    .iter()
                    .filter(move |a| a.service == service && a.api == *api)
            })
            .collect()
    }

    pub fn action_names_for_apis(&self, service: Service, apis: &[Api]) -> Vec<&'static str> {
        self.actions_for_apis(service, apis)
            .into_iter()
            .map(|a| a.name)
            .collect()
    }

    pub fn action_names_for_service(&self, service: Service) -> Vec<&'static str> {
        self.actions
            .iter()
            .filter(|a| a.service == service)
            .map(|a| a.name)
            .collect()
    }

    pub fn find(&self, name: &str) -> Option<&Action> {
        self.by_name
            .get(name)
            .and_then(|&position| self.actions.get(position))
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Default for ActionsIndex {
    fn default() -> Self {
        Self::standard()
    }
}
