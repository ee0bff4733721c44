//! Raw pass-through command tools. This is the restricted module: the only
//! one exposed in lite mode, and the only one withheld otherwise.

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{schemars, tool, tool_router};
use serde::Deserialize;

use crate::server::RedisToolServer;
use crate::value::CommandArg;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ExecuteParams {
    #[schemars(description = "Redis command name, e.g. 'SET' or 'ZADD'")]
    pub command: String,

    #[schemars(
        description = "Command arguments. Nested arrays are flattened one level, \
                       e.g. ['set', [1, 'a'], [2, 'b']] becomes set 1 a 2 b"
    )]
    #[serde(default)]
    pub args: Option<Vec<CommandArg>>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ExecuteRawParams {
    #[schemars(
        description = "Whole command line split on whitespace, e.g. 'ZADD myscores 100 player1'. \
                       Integer tokens are forwarded numerically."
    )]
    pub command: String,
}

impl RedisToolServer {
    pub async fn do_execute(&self, params: ExecuteParams) -> Result<CallToolResult, ErrorData> {
        let value = self.executor().execute(&params.command, params.args).await;
        Ok(Self::reply(value))
    }

    pub async fn do_execute_raw(
        &self,
        params: ExecuteRawParams,
    ) -> Result<CallToolResult, ErrorData> {
        let value = self.executor().execute_raw(&params.command).await;
        Ok(Self::reply(value))
    }
}

#[tool_router(router = execute_router)]
impl RedisToolServer {
    #[tool(
        name = "execute",
        description = "Execute an arbitrary Redis command with structured arguments. \
                       No client-side validation; the store's own reply or error is returned as text."
    )]
    async fn execute(
        &self,
        Parameters(params): Parameters<ExecuteParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.do_execute(params).await
    }

    #[tool(
        name = "execute_raw",
        description = "Execute a whole Redis command line, e.g. 'SET mykey myvalue'"
    )]
    async fn execute_raw(
        &self,
        Parameters(params): Parameters<ExecuteRawParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.do_execute_raw(params).await
    }
}

impl RedisToolServer {
    pub fn execute_tools() -> ToolRouter<Self> {
        Self::execute_router()
    }
}
