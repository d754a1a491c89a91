use crate::config::MongoConfig;
use crate::models::NameRecord;
use crate::services::NameStore;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{ClientOptions, FindOptions, IndexOptions},
    Client as MongoClient, Collection, IndexModel,
};
use secrecy::ExposeSecret;
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoNameStore {
    client: MongoClient,
    names: Collection<NameRecord>,
}

impl MongoNameStore {
    pub async fn connect(config: &MongoConfig) -> Result<Self, AppError> {
        tracing::info!(database = %config.database, "Connecting to MongoDB");

        let mut client_options = ClientOptions::parse(config.uri.expose_secret())
            .await
            .map_err(|e| {
                tracing::error!("Failed to parse MongoDB connection string: {}", e);
                AppError::from(e)
            })?;
        client_options.app_name = Some("guestbook-service".to_string());

        let client = MongoClient::with_options(client_options).map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let names = client
            .database(&config.database)
            .collection(&config.collection);

        tracing::info!(
            database = %config.database,
            collection = %config.collection,
            "MongoDB client ready"
        );
        Ok(Self { client, names })
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for guestbook-service");

        // Non-unique: the same guest may sign more than once
        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(
                IndexOptions::builder()
                    .name("name_lookup".to_string())
                    .build(),
            )
            .build();

        self.names
            .create_index(name_index, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create name index on names collection: {}", e);
                AppError::from(e)
            })?;
        tracing::info!("Created index on names.name");

        Ok(())
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn names(&self) -> &Collection<NameRecord> {
        &self.names
    }
}

#[async_trait]
impl NameStore for MongoNameStore {
    async fn insert(&self, record: NameRecord) -> Result<(), AppError> {
        self.names.insert_one(record, None).await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<NameRecord>, AppError> {
        // ObjectIds lead with their creation time, so `_id` order is insertion order
        let options = FindOptions::builder()
            .projection(doc! { "_id": 0, "name": 1 })
            .sort(doc! { "_id": 1 })
            .build();

        let cursor = self.names.find(doc! {}, options).await?;
        let records: Vec<NameRecord> = cursor.try_collect().await?;
        Ok(records)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn shutdown(&self) {
        tracing::info!("Closing MongoDB client");
        self.client.clone().shutdown().await;
    }
}
