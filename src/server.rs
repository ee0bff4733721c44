use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::model::*;
use rmcp::{tool_handler, ServerHandler};

use crate::config::ServerConfig;
use crate::connection::ConnectionProvider;
use crate::executor::CommandExecutor;
use crate::registry;
use crate::value::ReplyValue;

/// MCP server over a single Redis instance. Which tools it carries is
/// decided at construction time by the module loader.
#[derive(Clone)]
pub struct RedisToolServer {
    executor: CommandExecutor,
    tool_router: ToolRouter<Self>,
}

impl RedisToolServer {
    /// Tools selected by the mode flag: lite mode exposes only the raw
    /// execute module, normal mode everything else.
    pub fn new(provider: Arc<dyn ConnectionProvider>, config: &ServerConfig) -> Self {
        Self::with_router(provider, registry::load_tools(config))
    }

    /// Every catalog module, the raw execute module included.
    pub fn with_all_tools(provider: Arc<dyn ConnectionProvider>) -> Self {
        Self::with_router(provider, registry::load_all_tools())
    }

    pub fn with_router(
        provider: Arc<dyn ConnectionProvider>,
        tool_router: ToolRouter<Self>,
    ) -> Self {
        Self {
            executor: CommandExecutor::new(provider),
            tool_router,
        }
    }

    pub fn executor(&self) -> &CommandExecutor {
        &self.executor
    }

    /// Render a decoded reply as tool output: plain text for scalars,
    /// pretty JSON for sequences and mappings. Error replies are already
    /// text by the executor's contract.
    pub(crate) fn reply(value: ReplyValue) -> CallToolResult {
        let text = match &value {
            ReplyValue::Seq(_) | ReplyValue::Map(_) => {
                serde_json::to_string_pretty(&value.to_json())
                    .unwrap_or_else(|_| "null".to_string())
            }
            scalar => scalar.to_plain_string(),
        };
        CallToolResult::success(vec![Content::text(text)])
    }
}

#[tool_handler]
impl ServerHandler for RedisToolServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mcp-redis-tools".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(
                "Redis tool server. Depending on the configured mode this exposes \
                 either typed tools (string get/set, hash, list, misc) or the raw \
                 pass-through tools: execute (command name plus structured \
                 arguments, nested arrays flattened one level) and execute_raw \
                 (a whole command line). Failures come back as plain text \
                 results, never as protocol errors."
                    .to_string(),
            ),
        }
    }
}
