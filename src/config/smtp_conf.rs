use log::warn;
use serde::{Deserialize, Serialize};

use crate::enums::{Provider, ProviderConfig};

/// SMTP服务器配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmtpConfig {
    /// 服务器地址
    pub host: String,
    /// 端口
    pub port: u16,
    /// 是否TLS直连（SMTPS）；false 表示 STARTTLS
    pub secure: bool,
}

impl Default for SmtpConfig {
    /// 默认回退配置（Gmail 的连接参数）
    fn default() -> Self {
        Provider::Gmail.config().into()
    }
}

impl From<ProviderConfig> for SmtpConfig {
    fn from(config: ProviderConfig) -> Self {
        Self {
            host: config.host.to_string(),
            port: config.port,
            secure: config.secure,
        }
    }
}

impl SmtpConfig {
    pub fn new(host: impl Into<String>, port: u16, secure: bool) -> Self {
        Self {
            host: host.into(),
            port,
            secure,
        }
    }

    /// 根据邮箱地址解析SMTP配置
    ///
    /// 未识别的域名回退到默认配置并记录警告；需要把"未识别"当作错误的
    /// 调用方应改用 [`Provider::from_email`] 自行判断后显式传入配置
    pub fn resolve(email: &str) -> Self {
        match Provider::from_email(email) {
            Some(provider) => provider.config().into(),
            None => {
                warn!("未识别的邮箱服务商: {}，回退到默认SMTP配置", email);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_provider() {
        let config = SmtpConfig::resolve("user@yahoo.co.uk");
        assert_eq!(config.host, "smtp.mail.yahoo.com");
        assert_eq!(config.port, 465);
        assert!(config.secure);
    }

    #[test]
    fn test_resolve_unknown_domain_falls_back() {
        let config = SmtpConfig::resolve("user@example.org");
        assert_eq!(config.host, "smtp.gmail.com");
        assert_eq!(config.port, 587);
        assert!(!config.secure);
        assert_eq!(config, SmtpConfig::default());
    }

    #[test]
    fn test_resolve_malformed_address_falls_back() {
        let config = SmtpConfig::resolve("no-at-sign");
        assert_eq!(config, SmtpConfig::default());
    }
}
