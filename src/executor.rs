//! Pass-through command executor.
//!
//! Forwards arbitrary commands to the store through a connection provider,
//! flattening nested argument sequences on the way in and decoding binary
//! strings on the way out. All failures come back as descriptive text
//! values; a tool call never observes an error variant.

use std::sync::Arc;

use crate::connection::ConnectionProvider;
use crate::error::ExecuteError;
use crate::value::{decode_reply, flatten_args, CommandArg, ReplyValue};

#[derive(Clone)]
pub struct CommandExecutor {
    provider: Arc<dyn ConnectionProvider>,
}

impl CommandExecutor {
    pub fn new(provider: Arc<dyn ConnectionProvider>) -> Self {
        Self { provider }
    }

    /// Run `command` with optional structured arguments. Nested sequences in
    /// `args` are expanded one level, order preserved.
    pub async fn execute(&self, command: &str, args: Option<Vec<CommandArg>>) -> ReplyValue {
        match self.try_execute(command, args).await {
            Ok(value) => value,
            Err(e) => ReplyValue::Text(e.to_string()),
        }
    }

    /// Run a whole command line, e.g. `"ZADD myscores 100 player1"`.
    /// Tokens are split on whitespace; each argument token that parses as an
    /// integer is forwarded numerically. No quoting rules apply, and unknown
    /// commands are forwarded untouched; only the store rejects them.
    pub async fn execute_raw(&self, command_string: &str) -> ReplyValue {
        let mut tokens = command_string.split_whitespace();
        let Some(command) = tokens.next() else {
            return ReplyValue::Text(ExecuteError::EmptyCommandString.to_string());
        };
        let args: Vec<CommandArg> = tokens
            .map(|token| match token.parse::<i64>() {
                Ok(n) => CommandArg::Int(n),
                Err(_) => CommandArg::Str(token.to_string()),
            })
            .collect();
        self.execute(command, Some(args)).await
    }

    async fn try_execute(
        &self,
        command: &str,
        args: Option<Vec<CommandArg>>,
    ) -> Result<ReplyValue, ExecuteError> {
        if command.trim().is_empty() {
            return Err(ExecuteError::EmptyCommand);
        }

        let store_err = |source| ExecuteError::Store {
            command: command.to_string(),
            source,
        };

        let conn = self.provider.get_connection().await.map_err(store_err)?;
        let flat = flatten_args(args);

        tracing::debug!(command, args = flat.len(), "executing command");
        let raw = conn.execute_command(command, &flat).await.map_err(store_err)?;
        Ok(decode_reply(raw))
    }
}
