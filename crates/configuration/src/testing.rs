//! 测试用内存数据库
//!
//! 记录事务内执行过的语句，支持按语句注入失败。事务内的修改先写入副本，
//! 只有提交成功才会写回共享状态。

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use futures_util::StreamExt;
use futures_util::stream;

use crate::database::{ConfigurationDatabase, DatabaseTransaction, Row, RowStream, Statement};
use crate::error::{ConfigurationError, ConfigurationResult};

/// 事务内执行过的一条语句
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Executed {
    pub statement: Statement,
    pub params: Vec<String>,
}

impl Executed {
    pub fn new(statement: Statement, params: &[&str]) -> Self {
        Self {
            statement,
            params: params.iter().map(|p| p.to_string()).collect(),
        }
    }
}

#[derive(Debug, Default)]
struct State {
    realm_configs: HashMap<String, (Option<String>, Option<String>)>,
    context_keys: Vec<Row>,
    authorizations: Vec<Row>,

    failures: HashMap<Statement, String>,
    iteration_failures: HashMap<Statement, (usize, String)>,
    begin_failure: Option<String>,
    commit_failure: Option<String>,

    executed: Vec<Executed>,
    transactions_started: usize,
    commits: usize,
    rollbacks: usize,
}

fn column(row: &Row, index: usize) -> Option<String> {
    row.optional(index, "column").ok().flatten()
}

#[derive(Debug, Clone, Default)]
pub struct MockDatabase {
    state: Arc<Mutex<State>>,
}

impl MockDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    pub fn set_realm_config(&self, realm_id: &str, config: Option<&str>, admin: Option<&str>) {
        self.state().realm_configs.insert(
            realm_id.to_string(),
            (config.map(str::to_string), admin.map(str::to_string)),
        );
    }

    pub fn insert_context_key(
        &self,
        id: &str,
        label: &str,
        identities_realm: &str,
        customer_realm: &str,
        configuration: &str,
    ) {
        self.insert_raw_context_key_row(Row::text([
            id,
            label,
            identities_realm,
            customer_realm,
            configuration,
        ]));
    }

    pub fn insert_raw_context_key_row(&self, row: Row) {
        self.state().context_keys.push(row);
    }

    /// 已提交的 context key id，按存储顺序
    pub fn context_key_ids(&self, customer_realm: &str) -> Vec<String> {
        self.state()
            .context_keys
            .iter()
            .filter(|row| column(row, 3).as_deref() == Some(customer_realm))
            .filter_map(|row| column(row, 0))
            .collect()
    }

    pub fn insert_authorization(
        &self,
        realm_id: &str,
        group_name: &str,
        action: &str,
        target_realm_id: Option<&str>,
        target_group_name: Option<&str>,
    ) {
        self.insert_raw_authorization_row(Row::new(vec![
            Some(realm_id.to_string()),
            Some(group_name.to_string()),
            Some(action.to_string()),
            target_realm_id.map(str::to_string),
            target_group_name.map(str::to_string),
        ]));
    }

    pub fn insert_raw_authorization_row(&self, row: Row) {
        self.state().authorizations.push(row);
    }

    /// 让某条语句在执行时失败
    pub fn fail_statement(&self, statement: Statement, message: &str) {
        self.state()
            .failures
            .insert(statement, message.to_string());
    }

    /// 让多行查询在返回 `rows` 行之后失败
    pub fn fail_iteration_after(&self, statement: Statement, rows: usize, message: &str) {
        self.state()
            .iteration_failures
            .insert(statement, (rows, message.to_string()));
    }

    pub fn fail_begin(&self, message: &str) {
        self.state().begin_failure = Some(message.to_string());
    }

    pub fn fail_commit(&self, message: &str) {
        self.state().commit_failure = Some(message.to_string());
    }

    pub fn executed(&self) -> Vec<Executed> {
        self.state().executed.clone()
    }

    pub fn transactions_started(&self) -> usize {
        self.state().transactions_started
    }

    pub fn commits(&self) -> usize {
        self.state().commits
    }

    pub fn rollbacks(&self) -> usize {
        self.state().rollbacks
    }
}

#[async_trait]
impl ConfigurationDatabase for MockDatabase {
    async fn query_row(
        &self,
        statement: Statement,
        params: &[&str],
    ) -> ConfigurationResult<Option<Row>> {
        let state = self.state();
        if let Some(message) = state.failures.get(&statement) {
            return Err(ConfigurationError::store(message.clone()));
        }

        let realm_id = params.first().copied().unwrap_or_default();
        let Some((config, admin)) = state.realm_configs.get(realm_id) else {
            return Ok(None);
        };

        let row = match (statement, config, admin) {
            (Statement::SelectBothConfigs, Some(config), Some(admin)) => {
                Some(Row::text([config.as_str(), admin.as_str()]))
            }
            (Statement::SelectConfig, Some(config), _) => Some(Row::text([config.as_str()])),
            (Statement::SelectAdminConfig, _, Some(admin)) => Some(Row::text([admin.as_str()])),
            (Statement::SelectBothConfigs | Statement::SelectConfig | Statement::SelectAdminConfig, _, _) => None,
            (other, _, _) => {
                return Err(ConfigurationError::store(format!(
                    "{other} is not a single row query"
                )));
            }
        };
        Ok(row)
    }

    fn query<'a>(&'a self, statement: Statement, params: &[&str]) -> RowStream<'a> {
        let state = self.state();
        if let Some(message) = state.failures.get(&statement) {
            let err = ConfigurationError::store(message.clone());
            return stream::iter(vec![Err(err)]).boxed();
        }

        let rows: Vec<Row> = match statement {
            Statement::SelectContextKeys => {
                let customer_realm = params.first().copied().unwrap_or_default();
                state
                    .context_keys
                    .iter()
                    .filter(|row| column(row, 3).as_deref() == Some(customer_realm))
                    .cloned()
                    .collect()
            }
            Statement::SelectAllAuthorizations => state.authorizations.clone(),
            other => {
                let err = ConfigurationError::store(format!("{other} is not a multi row query"));
                return stream::iter(vec![Err(err)]).boxed();
            }
        };

        let mut items: Vec<ConfigurationResult<Row>> = rows.into_iter().map(Ok).collect();
        if let Some((after, message)) = state.iteration_failures.get(&statement) {
            items.truncate(*after);
            items.push(Err(ConfigurationError::store(message.clone())));
        }
        stream::iter(items).boxed()
    }

    async fn begin(&self) -> ConfigurationResult<Box<dyn DatabaseTransaction>> {
        let mut state = self.state();
        if let Some(message) = &state.begin_failure {
            return Err(ConfigurationError::store(message.clone()));
        }
        state.transactions_started += 1;
        let staged = state.context_keys.clone();
        Ok(Box::new(MockTransaction {
            state: Arc::clone(&self.state),
            staged,
            committed: false,
        }))
    }
}

struct MockTransaction {
    state: Arc<Mutex<State>>,
    staged: Vec<Row>,
    committed: bool,
}

#[async_trait]
impl DatabaseTransaction for MockTransaction {
    async fn execute(&mut self, statement: Statement, params: &[&str]) -> ConfigurationResult<u64> {
        let mut state = self.state.lock().unwrap();
        state.executed.push(Executed::new(statement, params));
        if let Some(message) = state.failures.get(&statement) {
            return Err(ConfigurationError::store(message.clone()));
        }

        let id = params.first().copied().unwrap_or_default();
        match statement {
            Statement::DeleteContextKey => {
                let before = self.staged.len();
                self.staged
                    .retain(|row| column(row, 0).as_deref() != Some(id));
                Ok((before - self.staged.len()) as u64)
            }
            Statement::UpsertContextKey => {
                let row = Row::text(params.iter().copied());
                match self
                    .staged
                    .iter_mut()
                    .find(|existing| column(existing, 0).as_deref() == Some(id))
                {
                    Some(existing) => *existing = row,
                    None => self.staged.push(row),
                }
                Ok(1)
            }
            other => Err(ConfigurationError::store(format!(
                "{other} is not a transactional statement"
            ))),
        }
    }

    async fn commit(&mut self) -> ConfigurationResult<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(message) = &state.commit_failure {
            return Err(ConfigurationError::store(message.clone()));
        }
        state.context_keys = std::mem::take(&mut self.staged);
        state.commits += 1;
        self.committed = true;
        Ok(())
    }
}

impl Drop for MockTransaction {
    fn drop(&mut self) {
        if !self.committed {
            if let Ok(mut state) = self.state.lock() {
                state.rollbacks += 1;
            }
        }
    }
}
