//! Smoke tests for the database infrastructure
//!
//! These run without a live database: they only cover configuration
//! handling up to the point where a connection would be attempted.

use common::database::{DatabaseConfig, init_pool};
use common::error::DatabaseError;

#[tokio::test]
async fn invalid_database_url_is_a_configuration_error() {
    let config = DatabaseConfig {
        database_url: "not-a-valid-url".to_string(),
        max_connections: 1,
    };

    let err = init_pool(&config).await.unwrap_err();
    assert!(matches!(err, DatabaseError::Configuration(_)));
}
