//! List key tools.

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{schemars, tool, tool_router};
use serde::Deserialize;

use crate::server::RedisToolServer;
use crate::value::CommandArg;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListPushParams {
    #[schemars(description = "List key name")]
    pub key: String,

    #[schemars(description = "Values to append, in order")]
    pub values: Vec<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListRangeParams {
    #[schemars(description = "List key name")]
    pub key: String,

    #[schemars(description = "Start index (default: 0)")]
    #[serde(default)]
    pub start: Option<i64>,

    #[schemars(description = "Stop index, inclusive (default: -1 for end of list)")]
    #[serde(default)]
    pub stop: Option<i64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListKeyParams {
    #[schemars(description = "List key name")]
    pub key: String,
}

impl RedisToolServer {
    pub async fn do_rpush(&self, params: ListPushParams) -> Result<CallToolResult, ErrorData> {
        let mut args = vec![CommandArg::Str(params.key)];
        args.extend(params.values.into_iter().map(CommandArg::Str));
        let value = self.executor().execute("RPUSH", Some(args)).await;
        Ok(Self::reply(value))
    }

    pub async fn do_lrange(&self, params: ListRangeParams) -> Result<CallToolResult, ErrorData> {
        let value = self
            .executor()
            .execute(
                "LRANGE",
                Some(vec![
                    CommandArg::Str(params.key),
                    CommandArg::Int(params.start.unwrap_or(0)),
                    CommandArg::Int(params.stop.unwrap_or(-1)),
                ]),
            )
            .await;
        Ok(Self::reply(value))
    }

    pub async fn do_llen(&self, params: ListKeyParams) -> Result<CallToolResult, ErrorData> {
        let value = self
            .executor()
            .execute("LLEN", Some(vec![CommandArg::Str(params.key)]))
            .await;
        Ok(Self::reply(value))
    }
}

#[tool_router(router = list_router)]
impl RedisToolServer {
    #[tool(name = "rpush", description = "Append one or more values to a list key")]
    async fn rpush(
        &self,
        Parameters(params): Parameters<ListPushParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.do_rpush(params).await
    }

    #[tool(name = "lrange", description = "Get a range of elements from a list key")]
    async fn lrange(
        &self,
        Parameters(params): Parameters<ListRangeParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.do_lrange(params).await
    }

    #[tool(name = "llen", description = "Get the length of a list key")]
    async fn llen(
        &self,
        Parameters(params): Parameters<ListKeyParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.do_llen(params).await
    }
}

impl RedisToolServer {
    pub fn list_tools() -> ToolRouter<Self> {
        Self::list_router()
    }
}
