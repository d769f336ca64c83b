use serde::{Deserialize, Serialize};

/// 收件人字段：单个地址或地址列表
///
/// to/cc/bcc 统一使用该类型，规整时合并为逗号分隔的地址串，
/// 即SMTP传输层期望的收件人格式
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recipients {
    /// 单个地址
    One(String),
    /// 地址列表，保持调用方给定的顺序
    Many(Vec<String>),
}

impl Recipients {
    /// 规整为逗号分隔的地址串，例如 "a@x.com, b@y.com"
    pub fn join(&self) -> String {
        match self {
            Self::One(addr) => addr.trim().to_string(),
            Self::Many(addrs) => addrs
                .iter()
                .map(|addr| addr.trim())
                .filter(|addr| !addr.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::One(addr) => addr.trim().is_empty(),
            Self::Many(addrs) => addrs.iter().all(|addr| addr.trim().is_empty()),
        }
    }
}

impl Default for Recipients {
    fn default() -> Self {
        Self::One(String::new())
    }
}

impl From<&str> for Recipients {
    fn from(addr: &str) -> Self {
        Self::One(addr.to_string())
    }
}

impl From<String> for Recipients {
    fn from(addr: String) -> Self {
        Self::One(addr)
    }
}

impl From<Vec<String>> for Recipients {
    fn from(addrs: Vec<String>) -> Self {
        Self::Many(addrs)
    }
}

impl From<Vec<&str>> for Recipients {
    fn from(addrs: Vec<&str>) -> Self {
        Self::Many(addrs.into_iter().map(|addr| addr.to_string()).collect())
    }
}

impl From<&[&str]> for Recipients {
    fn from(addrs: &[&str]) -> Self {
        Self::Many(addrs.iter().map(|addr| addr.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_single() {
        let recipients = Recipients::from("a@x.com");
        assert_eq!(recipients.join(), "a@x.com");
    }

    #[test]
    fn test_join_many() {
        let recipients = Recipients::from(vec!["a@x.com", "b@y.com"]);
        assert_eq!(recipients.join(), "a@x.com, b@y.com");
    }

    #[test]
    fn test_join_trims_whitespace() {
        let recipients = Recipients::from(vec![" a@x.com ", "b@y.com"]);
        assert_eq!(recipients.join(), "a@x.com, b@y.com");
    }

    #[test]
    fn test_is_empty() {
        assert!(Recipients::default().is_empty());
        assert!(Recipients::Many(vec![]).is_empty());
        assert!(!Recipients::from("a@x.com").is_empty());
    }

    #[test]
    fn test_untagged_deserialize() {
        // 字符串和数组两种JSON形式都能解析
        let one: Recipients = serde_json::from_str(r#""a@x.com""#).unwrap();
        assert_eq!(one, Recipients::One("a@x.com".to_string()));

        let many: Recipients = serde_json::from_str(r#"["a@x.com", "b@y.com"]"#).unwrap();
        assert_eq!(
            many,
            Recipients::Many(vec!["a@x.com".to_string(), "b@y.com".to_string()])
        );
    }
}
