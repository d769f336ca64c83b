use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SEND_ERROR, MISSING_CREDENTIALS_CODE};
use crate::error::MailError;

/// 发送成功数据
///
/// id 与 message_id 为同一个值的两份拷贝，对齐上游接口的返回形态
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendData {
    pub id: String,
    pub message_id: String,
}

/// 发送失败详情
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// 错误描述
    pub message: String,
    /// 错误码，例如 MISSING_CREDENTIALS 或SMTP状态码
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// 发送结果封套
///
/// data 与 error 互斥，二者有且仅有一个非空；所有公开发送操作
/// 都通过该封套返回结果，不向调用方抛出错误
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<SendData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

impl SendResponse {
    /// 成功封套
    pub fn success(message_id: impl Into<String>) -> Self {
        let message_id = message_id.into();
        Self {
            data: Some(SendData {
                id: message_id.clone(),
                message_id,
            }),
            error: None,
        }
    }

    /// 失败封套
    pub fn failure(err: MailError) -> Self {
        Self {
            data: None,
            error: Some(ErrorDetail::from(err)),
        }
    }

    pub fn is_success(&self) -> bool {
        self.data.is_some()
    }
}

impl From<MailError> for ErrorDetail {
    fn from(err: MailError) -> Self {
        match err {
            MailError::MissingCredentials => Self {
                message: err.to_string(),
                code: Some(MISSING_CREDENTIALS_CODE.to_string()),
            },
            MailError::TransportError { message, code } => Self {
                // 底层错误无描述时使用兜底文案
                message: if message.is_empty() {
                    DEFAULT_SEND_ERROR.to_string()
                } else {
                    message
                },
                code,
            },
            other => Self {
                message: other.to_string(),
                code: None,
            },
        }
    }
}
