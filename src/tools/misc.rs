//! Connectivity and keyspace housekeeping tools.

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{schemars, tool, tool_router};
use serde::Deserialize;

use crate::server::RedisToolServer;
use crate::value::CommandArg;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ExpireParams {
    #[schemars(description = "Key to expire")]
    pub key: String,

    #[schemars(description = "Time to live in seconds")]
    pub seconds: i64,
}

impl RedisToolServer {
    pub async fn do_ping(&self) -> Result<CallToolResult, ErrorData> {
        let value = self.executor().execute("PING", None).await;
        Ok(Self::reply(value))
    }

    pub async fn do_dbsize(&self) -> Result<CallToolResult, ErrorData> {
        let value = self.executor().execute("DBSIZE", None).await;
        Ok(Self::reply(value))
    }

    pub async fn do_expire(&self, params: ExpireParams) -> Result<CallToolResult, ErrorData> {
        let value = self
            .executor()
            .execute(
                "EXPIRE",
                Some(vec![CommandArg::Str(params.key), CommandArg::Int(params.seconds)]),
            )
            .await;
        Ok(Self::reply(value))
    }
}

#[tool_router(router = misc_router)]
impl RedisToolServer {
    #[tool(name = "ping", description = "Check connectivity to the Redis server")]
    async fn ping(&self) -> Result<CallToolResult, ErrorData> {
        self.do_ping().await
    }

    #[tool(name = "dbsize", description = "Get the number of keys in the current database")]
    async fn dbsize(&self) -> Result<CallToolResult, ErrorData> {
        self.do_dbsize().await
    }

    #[tool(name = "expire", description = "Set a time to live in seconds on a key")]
    async fn expire(
        &self,
        Parameters(params): Parameters<ExpireParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.do_expire(params).await
    }
}

impl RedisToolServer {
    pub fn misc_tools() -> ToolRouter<Self> {
        Self::misc_router()
    }
}
