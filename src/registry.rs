//! Tool module catalog and loader.
//!
//! The catalog is an explicit static list rather than anything discovered at
//! runtime: each entry names a module and the function that builds its tool
//! router. Loading a module means invoking that function exactly once and
//! merging the result, in catalog order.

use rmcp::handler::server::router::tool::ToolRouter;

use crate::config::ServerConfig;
use crate::server::RedisToolServer;

/// The restricted/raw-execution module. In lite mode it is the only module
/// loaded; in normal mode it is the only one excluded.
pub const RAW_EXECUTE_MODULE: &str = "execute";

pub struct ToolModule {
    pub name: &'static str,
    pub router: fn() -> ToolRouter<RedisToolServer>,
}

pub static CATALOG: &[ToolModule] = &[
    ToolModule {
        name: "string",
        router: RedisToolServer::string_tools,
    },
    ToolModule {
        name: "hash",
        router: RedisToolServer::hash_tools,
    },
    ToolModule {
        name: "list",
        router: RedisToolServer::list_tools,
    },
    ToolModule {
        name: "misc",
        router: RedisToolServer::misc_tools,
    },
    ToolModule {
        name: RAW_EXECUTE_MODULE,
        router: RedisToolServer::execute_tools,
    },
];

/// Load the mode-selected tool set: only the raw execute module in lite
/// mode, every other catalog module otherwise.
pub fn load_tools(config: &ServerConfig) -> ToolRouter<RedisToolServer> {
    if config.lite_mode {
        tracing::info!(module = RAW_EXECUTE_MODULE, "lite mode: loading raw execute module only");
        combine(CATALOG.iter().filter(|m| m.name == RAW_EXECUTE_MODULE))
    } else {
        combine(CATALOG.iter().filter(|m| m.name != RAW_EXECUTE_MODULE))
    }
}

/// Load every catalog module, the raw execute module included.
pub fn load_all_tools() -> ToolRouter<RedisToolServer> {
    combine(CATALOG.iter())
}

fn combine<'a>(
    modules: impl Iterator<Item = &'a ToolModule>,
) -> ToolRouter<RedisToolServer> {
    let mut router = ToolRouter::new();
    for module in modules {
        tracing::debug!(module = module.name, "registering tool module");
        router = router + (module.router)();
    }
    router
}
