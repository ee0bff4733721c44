//! Hash key tools.

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{schemars, tool, tool_router};
use serde::Deserialize;

use crate::server::RedisToolServer;
use crate::value::CommandArg;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct HashSetParams {
    #[schemars(description = "Hash key name")]
    pub key: String,

    #[schemars(description = "Field name")]
    pub field: String,

    #[schemars(description = "Field value")]
    pub value: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct HashGetParams {
    #[schemars(description = "Hash key name")]
    pub key: String,

    #[schemars(description = "Field name")]
    pub field: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct HashKeyParams {
    #[schemars(description = "Hash key name")]
    pub key: String,
}

impl RedisToolServer {
    pub async fn do_hset(&self, params: HashSetParams) -> Result<CallToolResult, ErrorData> {
        let value = self
            .executor()
            .execute(
                "HSET",
                Some(vec![
                    CommandArg::Str(params.key),
                    CommandArg::Str(params.field),
                    CommandArg::Str(params.value),
                ]),
            )
            .await;
        Ok(Self::reply(value))
    }

    pub async fn do_hget(&self, params: HashGetParams) -> Result<CallToolResult, ErrorData> {
        let value = self
            .executor()
            .execute(
                "HGET",
                Some(vec![CommandArg::Str(params.key), CommandArg::Str(params.field)]),
            )
            .await;
        Ok(Self::reply(value))
    }

    pub async fn do_hgetall(&self, params: HashKeyParams) -> Result<CallToolResult, ErrorData> {
        let value = self
            .executor()
            .execute("HGETALL", Some(vec![CommandArg::Str(params.key)]))
            .await;
        Ok(Self::reply(value))
    }
}

#[tool_router(router = hash_router)]
impl RedisToolServer {
    #[tool(name = "hset", description = "Set a single field on a hash key")]
    async fn hset(
        &self,
        Parameters(params): Parameters<HashSetParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.do_hset(params).await
    }

    #[tool(name = "hget", description = "Get a single field from a hash key")]
    async fn hget(
        &self,
        Parameters(params): Parameters<HashGetParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.do_hget(params).await
    }

    #[tool(name = "hgetall", description = "Get all fields and values of a hash key")]
    async fn hgetall(
        &self,
        Parameters(params): Parameters<HashKeyParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.do_hgetall(params).await
    }
}

impl RedisToolServer {
    pub fn hash_tools() -> ToolRouter<Self> {
        Self::hash_router()
    }
}
