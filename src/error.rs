/// Failures from the command executor. These never escape a tool call as an
/// MCP error; the executor renders them into plain text results so the
/// calling framework always receives a value.
#[derive(Debug, thiserror::Error)]
pub enum ExecuteError {
    #[error("Error: Command cannot be empty")]
    EmptyCommand,

    #[error("Error: Command string cannot be empty")]
    EmptyCommandString,

    #[error("Redis error executing command '{command}': {source}")]
    Store {
        command: String,
        #[source]
        source: redis::RedisError,
    },
}
