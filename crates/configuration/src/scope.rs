//! 授权范围过滤
//!
//! 授权范围由零个或多个 action 名称集合合并而成：
//! - 没有提供任何集合：不限制，所有 action 都可见
//! - 提供了至少一个集合（即使为空）：只有合并后集合中的 action 可见

use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthorizationScope {
    #[default]
    Unrestricted,
    Restricted(HashSet<String>),
}

impl AuthorizationScope {
    /// 由多个 action 集合构建授权范围
    pub fn from_action_sets<I, S, A>(sets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = A>,
        A: AsRef<str>,
    {
        sets.into_iter()
            .fold(Self::Unrestricted, |scope, actions| scope.restrict(actions))
    }

    /// 合并一个 action 集合，并使范围变为受限
    pub fn restrict<S, A>(self, actions: S) -> Self
    where
        S: IntoIterator<Item = A>,
        A: AsRef<str>,
    {
        let mut allowed = match self {
            Self::Unrestricted => HashSet::new(),
            Self::Restricted(allowed) => allowed,
        };
        allowed.extend(actions.into_iter().map(|a| a.as_ref().to_string()));
        Self::Restricted(allowed)
    }

    pub fn allows(&self, action: &str) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::Restricted(allowed) => allowed.contains(action),
        }
    }

    pub fn is_restricted(&self) -> bool {
        matches!(self, Self::Restricted(_))
    }
}
