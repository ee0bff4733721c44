//! Argument and reply value types for the pass-through executor.
//!
//! Tool calls hand us loosely structured JSON arguments; Redis hands back
//! loosely structured replies with binary strings at the leaves. Both sides
//! are modelled as explicit tagged variants so flattening and decoding are
//! plain recursive transforms instead of dynamic dispatch.

use redis::{RedisWrite, ToRedisArgs};
use serde::Deserialize;

/// A single command argument as supplied by a tool call.
///
/// Deserializes untagged from JSON, so `["set", [1, "a"], [2, "b"]]` parses
/// directly. Nested sequences are expanded one level by [`flatten_args`].
#[derive(Debug, Clone, PartialEq, Deserialize, schemars::JsonSchema)]
#[serde(untagged)]
pub enum CommandArg {
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<CommandArg>),
}

impl ToRedisArgs for CommandArg {
    fn write_redis_args<W: ?Sized + RedisWrite>(&self, out: &mut W) {
        match self {
            CommandArg::Int(i) => i.write_redis_args(out),
            CommandArg::Float(f) => f.write_redis_args(out),
            CommandArg::Str(s) => s.write_redis_args(out),
            CommandArg::List(items) => {
                for item in items {
                    item.write_redis_args(out);
                }
            }
        }
    }
}

/// Expand one level of nested sequences in place, preserving order.
/// `None` yields zero arguments.
pub fn flatten_args(args: Option<Vec<CommandArg>>) -> Vec<CommandArg> {
    let mut out = Vec::new();
    for arg in args.into_iter().flatten() {
        match arg {
            CommandArg::List(items) => out.extend(items),
            other => out.push(other),
        }
    }
    out
}

/// A decoded Redis reply: binary strings turned into text, structure intact.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyValue {
    Nil,
    Text(String),
    Int(i64),
    Double(f64),
    Bool(bool),
    Seq(Vec<ReplyValue>),
    /// Ordered key/value pairs. Kept as pairs rather than a map type so
    /// non-text keys survive decoding unchanged.
    Map(Vec<(ReplyValue, ReplyValue)>),
}

/// Recursively decode a raw [`redis::Value`]. Bulk strings become text via
/// UTF-8 (lossy on invalid bytes); sequences decode element-wise; maps
/// decode each key and value with pairing preserved.
pub fn decode_reply(value: redis::Value) -> ReplyValue {
    match value {
        redis::Value::Nil => ReplyValue::Nil,
        redis::Value::Okay => ReplyValue::Text("OK".to_string()),
        redis::Value::SimpleString(s) => ReplyValue::Text(s),
        redis::Value::BulkString(bytes) => {
            ReplyValue::Text(String::from_utf8_lossy(&bytes).into_owned())
        }
        redis::Value::Int(i) => ReplyValue::Int(i),
        redis::Value::Double(d) => ReplyValue::Double(d),
        redis::Value::Boolean(b) => ReplyValue::Bool(b),
        redis::Value::VerbatimString { text, .. } => ReplyValue::Text(text),
        redis::Value::Array(items) => {
            ReplyValue::Seq(items.into_iter().map(decode_reply).collect())
        }
        redis::Value::Set(items) => {
            ReplyValue::Seq(items.into_iter().map(decode_reply).collect())
        }
        redis::Value::Map(pairs) => ReplyValue::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (decode_reply(k), decode_reply(v)))
                .collect(),
        ),
        redis::Value::BigNumber(n) => ReplyValue::Text(n.to_string()),
        // Attributes carry out-of-band metadata; only the payload matters
        // to the caller.
        redis::Value::Attribute { data, .. } => decode_reply(*data),
        other => ReplyValue::Text(format!("{other:?}")),
    }
}

impl ReplyValue {
    /// Render for tool output. Map keys are stringified since JSON objects
    /// require text keys.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            ReplyValue::Nil => serde_json::Value::Null,
            ReplyValue::Text(s) => serde_json::Value::String(s.clone()),
            ReplyValue::Int(i) => serde_json::json!(i),
            ReplyValue::Double(d) => serde_json::json!(d),
            ReplyValue::Bool(b) => serde_json::Value::Bool(*b),
            ReplyValue::Seq(items) => {
                serde_json::Value::Array(items.iter().map(|v| v.to_json()).collect())
            }
            ReplyValue::Map(pairs) => {
                // Stringified keys can collide (e.g. 2 and "2"). Fall back
                // to an array of pairs rather than dropping an entry.
                let mut map = serde_json::Map::with_capacity(pairs.len());
                let mut collided = false;
                for (k, v) in pairs {
                    if map.insert(k.to_plain_string(), v.to_json()).is_some() {
                        collided = true;
                        break;
                    }
                }
                if collided {
                    serde_json::Value::Array(
                        pairs
                            .iter()
                            .map(|(k, v)| serde_json::Value::Array(vec![k.to_json(), v.to_json()]))
                            .collect(),
                    )
                } else {
                    serde_json::Value::Object(map)
                }
            }
        }
    }

    /// Flat text form used when a scalar reply is surfaced directly.
    pub fn to_plain_string(&self) -> String {
        match self {
            ReplyValue::Nil => "(nil)".to_string(),
            ReplyValue::Text(s) => s.clone(),
            ReplyValue::Int(i) => i.to_string(),
            ReplyValue::Double(d) => d.to_string(),
            ReplyValue::Bool(b) => b.to_string(),
            other => other.to_json().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_preserves_order_one_level() {
        let args = vec![
            CommandArg::Str("set".into()),
            CommandArg::List(vec![CommandArg::Int(1), CommandArg::Str("a".into())]),
            CommandArg::List(vec![CommandArg::Int(2), CommandArg::Str("b".into())]),
        ];
        let flat = flatten_args(Some(args));
        assert_eq!(
            flat,
            vec![
                CommandArg::Str("set".into()),
                CommandArg::Int(1),
                CommandArg::Str("a".into()),
                CommandArg::Int(2),
                CommandArg::Str("b".into()),
            ]
        );
    }

    #[test]
    fn flatten_none_yields_empty() {
        assert!(flatten_args(None).is_empty());
    }

    #[test]
    fn flatten_passes_scalars_through() {
        let args = vec![CommandArg::Str("key".into()), CommandArg::Float(1.5)];
        assert_eq!(flatten_args(Some(args.clone())), args);
    }

    #[test]
    fn command_arg_deserializes_untagged() {
        let parsed: Vec<CommandArg> =
            serde_json::from_str(r#"["set", [1, "a"], 2.5]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                CommandArg::Str("set".into()),
                CommandArg::List(vec![CommandArg::Int(1), CommandArg::Str("a".into())]),
                CommandArg::Float(2.5),
            ]
        );
    }

    #[test]
    fn decode_bulk_string() {
        let v = decode_reply(redis::Value::BulkString(b"hello".to_vec()));
        assert_eq!(v, ReplyValue::Text("hello".into()));
    }

    #[test]
    fn decode_sequence_element_wise() {
        let v = decode_reply(redis::Value::Array(vec![
            redis::Value::BulkString(b"item1".to_vec()),
            redis::Value::BulkString(b"item2".to_vec()),
            redis::Value::Int(3),
        ]));
        assert_eq!(
            v,
            ReplyValue::Seq(vec![
                ReplyValue::Text("item1".into()),
                ReplyValue::Text("item2".into()),
                ReplyValue::Int(3),
            ])
        );
    }

    #[test]
    fn decode_map_preserves_pairing() {
        let v = decode_reply(redis::Value::Map(vec![
            (
                redis::Value::BulkString(b"field1".to_vec()),
                redis::Value::BulkString(b"value1".to_vec()),
            ),
            (
                redis::Value::BulkString(b"field2".to_vec()),
                redis::Value::BulkString(b"value2".to_vec()),
            ),
        ]));
        assert_eq!(
            v,
            ReplyValue::Map(vec![
                (ReplyValue::Text("field1".into()), ReplyValue::Text("value1".into())),
                (ReplyValue::Text("field2".into()), ReplyValue::Text("value2".into())),
            ])
        );
    }

    #[test]
    fn decode_nested_structures() {
        let v = decode_reply(redis::Value::Array(vec![redis::Value::Map(vec![(
            redis::Value::BulkString(b"k".to_vec()),
            redis::Value::Array(vec![redis::Value::BulkString(b"v".to_vec())]),
        )])]));
        assert_eq!(
            v,
            ReplyValue::Seq(vec![ReplyValue::Map(vec![(
                ReplyValue::Text("k".into()),
                ReplyValue::Seq(vec![ReplyValue::Text("v".into())]),
            )])])
        );
    }

    #[test]
    fn decode_invalid_utf8_is_lossy() {
        let v = decode_reply(redis::Value::BulkString(vec![0xff, 0xfe]));
        assert_eq!(v, ReplyValue::Text("\u{fffd}\u{fffd}".into()));
    }

    #[test]
    fn decode_unwraps_attribute_payload() {
        let v = decode_reply(redis::Value::Attribute {
            data: Box::new(redis::Value::BulkString(b"payload".to_vec())),
            attributes: vec![(
                redis::Value::SimpleString("ttl".into()),
                redis::Value::Int(3600),
            )],
        });
        assert_eq!(v, ReplyValue::Text("payload".into()));
    }

    #[test]
    fn decode_okay_and_scalars() {
        assert_eq!(decode_reply(redis::Value::Okay), ReplyValue::Text("OK".into()));
        assert_eq!(decode_reply(redis::Value::Int(42)), ReplyValue::Int(42));
        assert_eq!(decode_reply(redis::Value::Nil), ReplyValue::Nil);
    }

    #[test]
    fn map_renders_as_json_object() {
        let v = ReplyValue::Map(vec![
            (ReplyValue::Text("a".into()), ReplyValue::Int(1)),
            (ReplyValue::Int(2), ReplyValue::Text("b".into())),
        ]);
        assert_eq!(v.to_json(), serde_json::json!({"a": 1, "2": "b"}));
    }

    #[test]
    fn colliding_map_keys_render_as_pairs() {
        let v = ReplyValue::Map(vec![
            (ReplyValue::Text("2".into()), ReplyValue::Text("a".into())),
            (ReplyValue::Int(2), ReplyValue::Text("b".into())),
        ]);
        assert_eq!(v.to_json(), serde_json::json!([["2", "a"], [2, "b"]]));
    }
}
