use realm_configuration::database::SqliteConfig;
use realm_configuration::{
    ConfigurationError, ConfigurationReaderModule, ContextKeyConfiguration, RealmContextKey,
    SqliteDatabase, StructuredRecord,
};
use tempfile::TempDir;

const CUSTOMER: &str = "customer";

struct TestStore {
    module: ConfigurationReaderModule<SqliteDatabase>,
    _temp_dir: TempDir,
}

async fn open_store() -> TestStore {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let db = SqliteDatabase::new(temp_dir.path(), &SqliteConfig::default())
        .await
        .expect("open sqlite store");
    TestStore {
        module: ConfigurationReaderModule::new(db),
        _temp_dir: temp_dir,
    }
}

fn context_key(id: &str, label: &str) -> RealmContextKey {
    RealmContextKey {
        id: id.to_string(),
        label: label.to_string(),
        identities_realm: "identities".to_string(),
        customer_realm: CUSTOMER.to_string(),
        config: ContextKeyConfiguration {
            onboarding_client_id: Some(format!("{id}-client")),
            auto_voucher: Some(false),
            ..Default::default()
        },
    }
}

async fn stored_ids(store: &TestStore) -> Vec<String> {
    let mut ids: Vec<String> = store
        .module
        .get_context_keys(CUSTOMER)
        .await
        .expect("read context keys")
        .into_iter()
        .map(|ck| ck.id)
        .collect();
    ids.sort();
    ids
}

#[tokio::test]
async fn reads_realm_configurations() {
    let store = open_store().await;
    let db = store.module.database();
    db.execute(
        r#"INSERT INTO realm_configuration (realm_id, configuration, admin_configuration)
           VALUES ('myrealm', '{"api_self_mail_editing_enabled":true,"default_client_id":"account"}', '{"mode":"social"}'),
                  ('halfrealm', '{}', NULL)"#,
    )
    .await
    .expect("seed realm configuration");

    let (config, admin) = store
        .module
        .get_both_configurations("myrealm")
        .await
        .expect("both configurations");
    assert_eq!(config.default_client_id.as_deref(), Some("account"));
    assert_eq!(config.api_self_account_editing_enabled, Some(true));
    assert_eq!(admin.mode.as_deref(), Some("social"));

    let err = store
        .module
        .get_both_configurations("halfrealm")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(store.module.get_configuration("halfrealm").await.is_ok());
    assert!(
        store
            .module
            .get_admin_configuration("halfrealm")
            .await
            .unwrap_err()
            .is_not_found()
    );

    let err = store.module.get_configuration("unknown").await.unwrap_err();
    assert!(matches!(err, ConfigurationError::NotFound { .. }));
}

#[tokio::test]
async fn malformed_stored_configuration() {
    let store = open_store().await;
    store
        .module
        .database()
        .execute(
            "INSERT INTO realm_configuration (realm_id, configuration, admin_configuration)
             VALUES ('broken', 'not json', '{}')",
        )
        .await
        .expect("seed broken configuration");

    let err = store.module.get_configuration("broken").await.unwrap_err();
    assert!(matches!(err, ConfigurationError::MalformedInput(_)));
}

#[tokio::test]
async fn set_context_keys_reconciles_stored_set() {
    let store = open_store().await;

    store
        .module
        .set_context_keys(CUSTOMER, &[context_key("A", "first"), context_key("B", "second")])
        .await
        .expect("initial context keys");
    assert_eq!(stored_ids(&store).await, vec!["A", "B"]);

    store
        .module
        .set_context_keys(CUSTOMER, &[context_key("B", "updated"), context_key("C", "third")])
        .await
        .expect("reconcile context keys");
    assert_eq!(stored_ids(&store).await, vec!["B", "C"]);

    let keys = store.module.get_context_keys(CUSTOMER).await.unwrap();
    let b = keys.iter().find(|ck| ck.id == "B").unwrap();
    assert_eq!(b.label, "updated");
    assert_eq!(b.config.onboarding_client_id.as_deref(), Some("B-client"));
    assert_eq!(b.config.auto_voucher, Some(false));

    // 其它 customer realm 的数据不受影响
    assert!(store.module.get_context_keys("other").await.unwrap().is_empty());

    store
        .module
        .set_context_keys(CUSTOMER, &[])
        .await
        .expect("clear context keys");
    assert!(stored_ids(&store).await.is_empty());
}

#[tokio::test]
async fn failed_delete_leaves_table_untouched() {
    let store = open_store().await;
    store
        .module
        .set_context_keys(CUSTOMER, &[context_key("A", "first"), context_key("B", "second")])
        .await
        .expect("initial context keys");

    store
        .module
        .database()
        .execute(
            "CREATE TRIGGER lock_context_key_a BEFORE DELETE ON context_key_configuration
             WHEN OLD.id = 'A'
             BEGIN SELECT RAISE(ABORT, 'context key A is locked'); END",
        )
        .await
        .expect("create trigger");

    let err = store
        .module
        .set_context_keys(CUSTOMER, &[context_key("B", "changed"), context_key("C", "third")])
        .await
        .unwrap_err();
    assert!(matches!(err, ConfigurationError::Store { .. }));
    assert!(err.to_string().contains("locked"));

    assert_eq!(stored_ids(&store).await, vec!["A", "B"]);
    let keys = store.module.get_context_keys(CUSTOMER).await.unwrap();
    let b = keys.iter().find(|ck| ck.id == "B").unwrap();
    assert_eq!(b.label, "second");
}

#[tokio::test]
async fn stored_context_key_payload_is_sparse() {
    let store = open_store().await;
    store
        .module
        .set_context_keys(CUSTOMER, &[context_key("A", "first")])
        .await
        .unwrap();

    let row: (String,) = sqlx::query_as(
        "SELECT configuration FROM context_key_configuration WHERE id = 'A'",
    )
    .fetch_one(store.module.database().get_pool())
    .await
    .expect("read raw payload");
    assert_eq!(row.0, r#"{"onboarding_client_id":"A-client","auto_voucher":false}"#);

    let decoded = ContextKeyConfiguration::from_json(&row.0).unwrap();
    assert_eq!(decoded.redirect_mode, None);
}

#[tokio::test]
async fn lists_authorizations_with_nullable_targets() {
    let store = open_store().await;
    store
        .module
        .database()
        .execute(
            "INSERT INTO authorizations (realm_id, group_name, action, target_realm_id, target_group_name)
             VALUES ('master', 'admins', 'MGMT_GetUser', NULL, NULL),
                    ('master', 'admins', 'MGMT_GetRealm', 'customer', NULL),
                    ('master', 'admins', 'EV_GetActions', 'customer', 'operators')",
        )
        .await
        .expect("seed authorizations");

    let all = store.module.list_authorizations().await.unwrap();
    assert_eq!(all.len(), 3);
    let get_user = all.iter().find(|a| a.action == "MGMT_GetUser").unwrap();
    assert_eq!(get_user.target_realm_id, None);
    assert_eq!(get_user.target_group_name, None);

    let db = store.module.database().clone();
    let scoped = ConfigurationReaderModule::new(db)
        .with_authorization_scope(["MGMT_GetUser", "MGMT_GetRealm"]);
    let filtered = scoped.list_authorizations().await.unwrap();
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|a| a.action.starts_with("MGMT_")));
}
