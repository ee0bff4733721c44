//! String key tools.

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{schemars, tool, tool_router};
use serde::Deserialize;

use crate::server::RedisToolServer;
use crate::value::CommandArg;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetParams {
    #[schemars(description = "Key to read")]
    pub key: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetParams {
    #[schemars(description = "Key to write")]
    pub key: String,

    #[schemars(description = "Value to store")]
    pub value: String,

    #[schemars(description = "Optional expiry in seconds")]
    #[serde(default)]
    pub expire_seconds: Option<i64>,
}

impl RedisToolServer {
    pub async fn do_get(&self, params: GetParams) -> Result<CallToolResult, ErrorData> {
        let value = self
            .executor()
            .execute("GET", Some(vec![CommandArg::Str(params.key)]))
            .await;
        Ok(Self::reply(value))
    }

    pub async fn do_set(&self, params: SetParams) -> Result<CallToolResult, ErrorData> {
        let mut args = vec![CommandArg::Str(params.key), CommandArg::Str(params.value)];
        if let Some(seconds) = params.expire_seconds {
            args.push(CommandArg::Str("EX".to_string()));
            args.push(CommandArg::Int(seconds));
        }
        let value = self.executor().execute("SET", Some(args)).await;
        Ok(Self::reply(value))
    }
}

#[tool_router(router = string_router)]
impl RedisToolServer {
    #[tool(name = "get", description = "Get the string value of a key")]
    async fn get(
        &self,
        Parameters(params): Parameters<GetParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.do_get(params).await
    }

    #[tool(
        name = "set",
        description = "Set a string key to a value, optionally with an expiry in seconds"
    )]
    async fn set(
        &self,
        Parameters(params): Parameters<SetParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.do_set(params).await
    }
}

impl RedisToolServer {
    pub fn string_tools() -> ToolRouter<Self> {
        Self::string_router()
    }
}
