// Copyright © 2025 Nipun Kumar

//! Records returned by the chatlog backend.
//!
//! Everything here is deserialized verbatim from the camelCase JSON the server
//! emits. Missing string fields fall back to empty strings so that a sparse row
//! still renders instead of failing the whole page.

use serde::{Deserialize, Deserializer, Serialize};

/// `{ items: [...] }` wrapper used by every list endpoint except the chat log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_empty")]
    pub items: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactItem {
    pub user_name: String,
    pub alias: String,
    pub remark: String,
    pub nick_name: String,
    pub is_friend: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatRoomItem {
    pub name: String,
    pub nick_name: String,
    pub owner: String,
    pub remark: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub users: Vec<ChatRoomUser>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatRoomUser {
    pub user_name: String,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatSessionItem {
    pub user_name: String,
    pub nick_name: String,
    #[serde(deserialize_with = "string_or_number")]
    pub n_order: String,
    pub n_time: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatlogItem {
    pub seq: i64,
    pub time: String,
    pub talker: String,
    pub talker_name: String,
    pub is_chat_room: bool,
    pub sender: String,
    pub sender_name: String,
    pub is_self: bool,
    #[serde(rename = "type")]
    pub kind: i64,
    pub sub_type: i64,
    pub content: String,
}

impl ChatlogItem {
    /// Name shown in front of a log line. In rooms the talker is the room
    /// itself, so the sender wins; raw ids are the last resort.
    pub fn speaker(&self) -> &str {
        [&self.sender_name, &self.talker_name, &self.sender, &self.talker]
            .into_iter()
            .find(|s| !s.is_empty())
            .map(|s| s.as_str())
            .unwrap_or("")
    }
}

/// Query parameters shared by all four endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageQuery {
    pub limit: usize,
    pub offset: usize,
    pub talker: Option<String>,
    pub time: Option<String>,
}

impl PageQuery {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self {
            limit,
            offset,
            ..Default::default()
        }
    }

    pub fn with_talker(mut self, talker: impl Into<String>) -> Self {
        self.talker = Some(talker.into());
        self
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Renders the parameters as `&key=value` pairs, ready to be appended to an
    /// endpoint that already carries `?format=json`.
    pub fn to_query_suffix(&self) -> String {
        let mut out = format!("&limit={}&offset={}", self.limit, self.offset);
        if let Some(talker) = &self.talker {
            out.push_str("&talker=");
            out.push_str(&urlencoding::encode(talker));
        }
        if let Some(time) = &self.time {
            out.push_str("&time=");
            out.push_str(&urlencoding::encode(time));
        }
        out
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(serde_json::Number),
        Null,
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Num(n) => n.to_string(),
        Raw::Null => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn contact_page_decodes_camel_case_fields() {
        let page: Page<ContactItem> = serde_json::from_value(json!({
            "items": [{
                "userName": "wxid_abc",
                "alias": "abc",
                "remark": "",
                "nickName": "Alice",
                "isFriend": true
            }]
        }))
        .unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].user_name, "wxid_abc");
        assert_eq!(page.items[0].nick_name, "Alice");
        assert!(page.items[0].is_friend);
    }

    #[test]
    fn null_items_and_users_become_empty() {
        let page: Page<ChatRoomItem> = serde_json::from_value(json!({
            "items": [{ "name": "123@chatroom", "users": null }]
        }))
        .unwrap();
        assert!(page.items[0].users.is_empty());
        assert_eq!(page.items[0].owner, "");

        let empty: Page<ContactItem> = serde_json::from_value(json!({ "items": null })).unwrap();
        assert!(empty.items.is_empty());
    }

    #[test]
    fn session_order_accepts_numbers_and_strings() {
        let page: Page<ChatSessionItem> = serde_json::from_value(json!({
            "items": [
                { "userName": "a", "nOrder": 42, "nTime": "2025-03-01T10:00:00+08:00" },
                { "userName": "b", "nOrder": "7" }
            ]
        }))
        .unwrap();
        assert_eq!(page.items[0].n_order, "42");
        assert_eq!(page.items[1].n_order, "7");
        assert_eq!(page.items[1].n_time, "");
    }

    #[test]
    fn chatlog_is_a_bare_array_with_type_codes() {
        let logs: Vec<ChatlogItem> = serde_json::from_value(json!([
            {
                "seq": 1700000000001i64,
                "time": "2025-03-01T10:00:00+08:00",
                "talker": "123@chatroom",
                "talkerName": "",
                "isChatRoom": true,
                "sender": "wxid_abc",
                "senderName": "Alice",
                "isSelf": false,
                "type": 1,
                "subType": 0,
                "content": "hi"
            }
        ]))
        .unwrap();
        assert_eq!(logs[0].kind, 1);
        assert!(logs[0].is_chat_room);
        assert_eq!(logs[0].speaker(), "Alice");
    }

    #[test]
    fn query_suffix_encodes_optional_filters() {
        let q = PageQuery::new(10, 20);
        assert_eq!(q.to_query_suffix(), "&limit=10&offset=20");

        let q = PageQuery::new(10, 0)
            .with_talker("123@chatroom")
            .with_time("2025-03-01");
        assert_eq!(
            q.to_query_suffix(),
            "&limit=10&offset=0&talker=123%40chatroom&time=2025-03-01"
        );
    }
}
