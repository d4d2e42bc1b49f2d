//! Construction of the workflow from configuration.

use crate::AppConfig;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use vignette_database::{
    DEFAULT_POOL_SIZE, PgPool, PostgresConversationStore, PostgresProjectRepository,
    establish_pool, run_migrations,
};
use vignette_error::{DatabaseError, DatabaseErrorKind, VignetteResult};
use vignette_interface::{ConversationStore, ProjectRepository};
use vignette_models::OpenAiClient;
use vignette_workflow::{
    InMemoryConversationStore, InMemoryProjectRepository, ModelGateway, ProjectWorkflow,
};

/// Build the provider client and storage, then the workflow engine.
///
/// With a database URL the pool is created and migrations are applied;
/// without one, everything lives in memory and is lost on exit.
///
/// # Errors
///
/// Configuration errors from the provider client; database errors while
/// connecting or migrating.
#[instrument(skip(config))]
pub async fn build_workflow(config: &AppConfig) -> VignetteResult<ProjectWorkflow> {
    let client = Arc::new(OpenAiClient::new(config.openai_config())?);
    info!(
        text_model = %config.text_model,
        image_model = %config.image_model,
        "Provider client ready"
    );

    let (store, projects): (Arc<dyn ConversationStore>, Arc<dyn ProjectRepository>) =
        match &config.database_url {
            Some(url) => {
                let pool = connect(url.clone()).await?;
                (
                    Arc::new(PostgresConversationStore::new(pool.clone())),
                    Arc::new(PostgresProjectRepository::new(pool)),
                )
            }
            None => {
                warn!("DATABASE_URL not set, projects and conversations are kept in memory");
                (
                    Arc::new(InMemoryConversationStore::new()),
                    Arc::new(InMemoryProjectRepository::new()),
                )
            }
        };

    let gateway = ModelGateway::new(client.clone(), client, store)
        .with_timeout(config.request_timeout());
    Ok(ProjectWorkflow::new(gateway, projects))
}

async fn connect(url: String) -> VignetteResult<PgPool> {
    tokio::task::spawn_blocking(move || -> VignetteResult<PgPool> {
        let pool = establish_pool(&url, DEFAULT_POOL_SIZE)?;
        let mut conn = pool.get().map_err(DatabaseError::from)?;
        run_migrations(&mut conn)?;
        Ok(pool)
    })
    .await
    .map_err(|e| DatabaseError::new(DatabaseErrorKind::Task(e.to_string())))?
}
