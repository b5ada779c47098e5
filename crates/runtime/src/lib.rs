//! Runtime helpers for the Docdesk core: telemetry, bootstrap fixtures,
//! and the wiring of store, repositories, and auth service from loaded
//! configuration.

use std::sync::Arc;

use anyhow::{Context, Result};
use docdesk_auth::AuthService;
use docdesk_config::{AppConfig, StorageConfig};
use docdesk_documents::{DocumentRepository, DOCUMENTS_COLLECTION};
use docdesk_questions::{QuestionRepository, QUESTIONS_COLLECTION};
use docdesk_store::{JsonFileStore, Latency, MemoryStore, Store, StoreBackend};
use docdesk_users::{Role, UserRepository, USERS_COLLECTION};
use tracing::info;

pub mod seed;

/// Storage path sentinel selecting the ephemeral in-memory backend.
pub const MEMORY_STORE_PATH: &str = ":memory:";

pub mod telemetry {
    use anyhow::Result;
    use tracing::Level;
    use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

    pub fn init_tracing() -> Result<()> {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let subscriber = SubscriberBuilder::default()
            .with_max_level(Level::INFO)
            .with_env_filter(env_filter)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|error| anyhow::anyhow!("failed to set tracing subscriber: {error}"))
    }
}

/// Handle bundle over the wired core: one store, the three repositories,
/// and the auth service, all sharing the same backend.
#[derive(Clone)]
pub struct CoreServices {
    pub store: Store,
    pub users: UserRepository,
    pub documents: DocumentRepository,
    pub questions: QuestionRepository,
    pub auth: AuthService,
}

impl CoreServices {
    pub fn initialise(config: &AppConfig) -> Result<Self> {
        let backend = open_backend(&config.storage)?;

        let store = Store::builder(backend)
            .latency(Latency::from_config(config.api.simulate_latency))
            .seed(
                USERS_COLLECTION,
                serde_json::to_value(seed::bootstrap_users())
                    .context("failed to serialize user fixtures")?,
            )
            .seed(
                DOCUMENTS_COLLECTION,
                serde_json::to_value(seed::bootstrap_documents())
                    .context("failed to serialize document fixtures")?,
            )
            .seed(
                QUESTIONS_COLLECTION,
                serde_json::to_value(seed::bootstrap_questions())
                    .context("failed to serialize question fixtures")?,
            )
            .build();

        let users = UserRepository::new(store.clone());
        let documents = DocumentRepository::new(store.clone());
        let questions = QuestionRepository::new(store.clone());
        let auth = AuthService::new(users.clone())
            .with_default_role(Role::from(config.auth.default_role.as_str()));

        info!(
            storage = %config.storage.path,
            simulate_latency = config.api.simulate_latency,
            "docdesk core services initialised"
        );

        Ok(Self {
            store,
            users,
            documents,
            questions,
            auth,
        })
    }
}

fn open_backend(storage: &StorageConfig) -> Result<Arc<dyn StoreBackend>> {
    if storage.path == MEMORY_STORE_PATH {
        info!("using in-memory store");
        return Ok(Arc::new(MemoryStore::new()));
    }

    let store = JsonFileStore::open(&storage.path)
        .with_context(|| format!("failed to open data file {}", storage.path))?;
    Ok(Arc::new(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use docdesk_config::{ApiConfig, AuthConfig};
    use tempfile::TempDir;

    fn memory_config() -> AppConfig {
        AppConfig {
            storage: StorageConfig {
                path: MEMORY_STORE_PATH.to_string(),
            },
            api: ApiConfig {
                simulate_latency: false,
            },
            auth: AuthConfig {
                default_role: "viewer".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_initialise_with_memory_store() {
        let services = CoreServices::initialise(&memory_config()).unwrap();

        // First access seeds each collection with the bootstrap dataset.
        assert_eq!(services.users.list().await.unwrap().len(), 3);
        assert_eq!(services.documents.list().await.unwrap().len(), 3);
        assert_eq!(services.questions.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_seeded_admin_can_log_in() {
        let services = CoreServices::initialise(&memory_config()).unwrap();

        let admin = services.auth.login("ADMIN@example.com", "pw").await.unwrap();
        assert_eq!(admin.name, "Admin User");
        assert_eq!(services.auth.current_user().unwrap(), Some(admin));
    }

    #[tokio::test]
    async fn test_register_and_relogin_through_services() {
        let services = CoreServices::initialise(&memory_config()).unwrap();

        let alice = services
            .auth
            .register("Alice", "alice@x.com", "pw", None)
            .await
            .unwrap();
        assert_eq!(alice.role, Role::Viewer);

        services.auth.logout().await.unwrap();
        let again = services.auth.login("alice@x.com", "pw").await.unwrap();
        assert_eq!(again, alice);
    }

    #[tokio::test]
    async fn test_configured_default_role_applies() {
        let mut config = memory_config();
        config.auth.default_role = "editor".to_string();
        let services = CoreServices::initialise(&config).unwrap();

        let user = services
            .auth
            .register("Ed", "ed@x.com", "pw", None)
            .await
            .unwrap();
        assert_eq!(user.role, Role::Editor);
    }

    #[tokio::test]
    async fn test_file_store_persists_across_initialisations() {
        let temp = TempDir::new().unwrap();
        let mut config = memory_config();
        config.storage.path = temp
            .path()
            .join("docdesk-data.json")
            .display()
            .to_string();

        {
            let services = CoreServices::initialise(&config).unwrap();
            services
                .auth
                .register("Alice", "alice@x.com", "pw", None)
                .await
                .unwrap();
        }

        let reopened = CoreServices::initialise(&config).unwrap();
        let alice = reopened.auth.login("alice@x.com", "pw").await.unwrap();
        assert_eq!(alice.name, "Alice");
        assert_eq!(reopened.users.list().await.unwrap().len(), 4);
    }
}
