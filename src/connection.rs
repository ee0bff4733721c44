//! Connection collaborators: the executor talks to Redis only through these
//! traits, so tests can substitute recording mocks.

use std::sync::Arc;

use async_trait::async_trait;

use crate::value::CommandArg;

/// One live connection able to run a single command round-trip.
#[async_trait]
pub trait CommandConnection: Send + Sync {
    async fn execute_command(
        &self,
        command: &str,
        args: &[CommandArg],
    ) -> Result<redis::Value, redis::RedisError>;
}

/// Hands out connections. Pooling, reconnects and timeouts are this
/// collaborator's concern, not the executor's.
#[async_trait]
pub trait ConnectionProvider: Send + Sync {
    async fn get_connection(&self) -> Result<Arc<dyn CommandConnection>, redis::RedisError>;
}

/// Production connection backed by a shared [`redis::aio::ConnectionManager`].
pub struct ManagedConnection {
    conn: redis::aio::ConnectionManager,
}

#[async_trait]
impl CommandConnection for ManagedConnection {
    async fn execute_command(
        &self,
        command: &str,
        args: &[CommandArg],
    ) -> Result<redis::Value, redis::RedisError> {
        let mut conn = self.conn.clone();
        let mut cmd = redis::cmd(command);
        for arg in args {
            cmd.arg(arg);
        }
        cmd.query_async(&mut conn).await
    }
}

/// Production provider wrapping a single shared connection manager.
/// The manager multiplexes and reconnects internally, so handing out
/// clones is the whole job.
#[derive(Clone)]
pub struct RedisConnectionProvider {
    conn: redis::aio::ConnectionManager,
    pub url_redacted: String,
}

impl RedisConnectionProvider {
    pub fn new(conn: redis::aio::ConnectionManager, url_redacted: String) -> Self {
        Self { conn, url_redacted }
    }
}

#[async_trait]
impl ConnectionProvider for RedisConnectionProvider {
    async fn get_connection(&self) -> Result<Arc<dyn CommandConnection>, redis::RedisError> {
        Ok(Arc::new(ManagedConnection {
            conn: self.conn.clone(),
        }))
    }
}
