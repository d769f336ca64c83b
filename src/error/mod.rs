// 错误处理模块
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("配置错误: {0}")]
    ConfigError(String),

    #[error("缺少邮箱凭证: 需要设置 MAILDROP_EMAIL 和 MAILDROP_PASSWORD 环境变量")]
    MissingCredentials,

    #[error("邮箱地址无效: {0}")]
    AddressError(String),

    #[error("邮件构建失败: {0}")]
    BuildError(String),

    #[error("SMTP传输错误: {message}")]
    TransportError {
        message: String,
        /// SMTP状态码，例如认证失败的 535
        code: Option<String>,
    },
}

pub type MailResult<T> = Result<T, MailError>;

// 从 lettre 地址解析错误转换
impl From<lettre::address::AddressError> for MailError {
    fn from(err: lettre::address::AddressError) -> Self {
        MailError::AddressError(err.to_string())
    }
}

// 从 lettre 邮件构建错误转换
impl From<lettre::error::Error> for MailError {
    fn from(err: lettre::error::Error) -> Self {
        MailError::BuildError(err.to_string())
    }
}

// 从 lettre SMTP 传输错误转换，保留服务端状态码
impl From<lettre::transport::smtp::Error> for MailError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        MailError::TransportError {
            code: err.status().map(|status| status.to_string()),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_error_conversion() {
        let err = "不是邮箱".parse::<lettre::Address>().unwrap_err();
        let mail_err: MailError = err.into();
        assert!(matches!(mail_err, MailError::AddressError(_)));
    }

    #[test]
    fn test_missing_credentials_display() {
        let msg = MailError::MissingCredentials.to_string();
        assert!(msg.contains("MAILDROP_EMAIL"));
        assert!(msg.contains("MAILDROP_PASSWORD"));
    }
}
