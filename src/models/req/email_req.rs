use serde::{Deserialize, Serialize};

use crate::models::recipients::Recipients;

/// 发送邮件请求
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailReq {
    /// 发件人地址，缺省使用凭证邮箱
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// 收件人
    pub to: Recipients,
    /// 抄送
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<Recipients>,
    /// 密送
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Recipients>,
    /// 邮件主题
    pub subject: String,
    /// HTML正文
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// 纯文本正文
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// 回复地址
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "to": ["a@x.com", "b@y.com"],
            "subject": "hello",
            "html": "<b>hi</b>",
            "replyTo": "noreply@x.com"
        }"#;
        let req: SendEmailReq = serde_json::from_str(json).unwrap();
        assert_eq!(req.to.join(), "a@x.com, b@y.com");
        assert_eq!(req.subject, "hello");
        assert_eq!(req.reply_to.as_deref(), Some("noreply@x.com"));
        assert!(req.from.is_none());
        assert!(req.text.is_none());
    }

    #[test]
    fn test_serialize_skips_none() {
        let req = SendEmailReq {
            to: Recipients::from("a@x.com"),
            subject: "hello".to_string(),
            text: Some("hi".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("cc"));
        assert!(!json.contains("replyTo"));
        assert!(json.contains(r#""to":"a@x.com""#));
    }
}
