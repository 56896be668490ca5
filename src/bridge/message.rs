use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Everything posted on an endpoint is either a call or a reply to one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Message {
    Call(Call),
    Reply(Reply),
}

/// Method invocation addressed to a named service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Call {
    pub id: Uuid,
    pub service: String,
    pub method: String,
    #[serde(default)]
    pub args: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    pub id: Uuid,
    pub service: String,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Resolved(Value),
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_is_tagged_by_type() {
        let id = Uuid::new_v4();
        let message = Message::Call(Call {
            id,
            service: "music-service".to_string(),
            method: "getArtist".to_string(),
            args: vec![json!("/a.mp3")],
        });

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["type"], "call");
        assert_eq!(value["method"], "getArtist");
        assert_eq!(value["args"], json!(["/a.mp3"]));
    }

    #[test]
    fn test_call_without_args_defaults_to_empty() {
        let id = Uuid::new_v4();
        let value = json!({
            "type": "call",
            "id": id,
            "service": "music-service",
            "method": "getArtists"
        });

        match serde_json::from_value::<Message>(value).unwrap() {
            Message::Call(call) => assert!(call.args.is_empty()),
            other => panic!("expected call, got {:?}", other),
        }
    }
}
