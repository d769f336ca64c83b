use serde::{Deserialize, Serialize};
use std::fmt;

/// SMTP服务商连接配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProviderConfig {
    /// SMTP服务器地址
    pub host: &'static str,
    /// SMTP端口
    pub port: u16,
    /// 是否TLS直连（SMTPS，465端口模式）；false 表示 STARTTLS
    pub secure: bool,
}

/// 邮箱服务商枚举
///
/// 按组匹配邮箱域名，各组互不重叠，匹配顺序即 [`Provider::all`] 顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    /// Gmail
    Gmail,
    /// Outlook 系（outlook/hotmail/live/msn）
    Outlook,
    /// Yahoo 系
    Yahoo,
    /// Zoho（含任意 *.zoho.com 子域）
    Zoho,
    /// ProtonMail（仅支持本机 Bridge 中继）
    ProtonMail,
}

impl Provider {
    /// 获取SMTP连接配置
    pub const fn config(&self) -> ProviderConfig {
        match self {
            Self::Gmail => ProviderConfig {
                host: "smtp.gmail.com",
                port: 587,
                secure: false,
            },
            Self::Outlook => ProviderConfig {
                host: "smtp-mail.outlook.com",
                port: 587,
                secure: false,
            },
            Self::Yahoo => ProviderConfig {
                host: "smtp.mail.yahoo.com",
                port: 465,
                secure: true,
            },
            Self::Zoho => ProviderConfig {
                host: "smtp.zoho.com",
                port: 465,
                secure: true,
            },
            // ProtonMail 不提供公开SMTP入口，走本机 Bridge
            Self::ProtonMail => ProviderConfig {
                host: "127.0.0.1",
                port: 1025,
                secure: false,
            },
        }
    }

    /// 获取该服务商的邮箱域名列表
    pub const fn domains(&self) -> &'static [&'static str] {
        match self {
            Self::Gmail => &["gmail.com", "googlemail.com"],
            Self::Outlook => &["outlook.com", "hotmail.com", "live.com", "msn.com"],
            Self::Yahoo => &["yahoo.com", "yahoo.co.uk", "ymail.com"],
            Self::Zoho => &["zoho.com"],
            Self::ProtonMail => &["protonmail.com", "proton.me", "pm.me"],
        }
    }

    /// 获取SMTP服务器地址
    pub fn host(&self) -> &'static str {
        self.config().host
    }

    /// 获取SMTP端口
    pub fn port(&self) -> u16 {
        self.config().port
    }

    /// 是否TLS直连
    pub fn secure(&self) -> bool {
        self.config().secure
    }

    /// 判断域名是否属于该服务商
    pub fn matches_domain(&self, domain: &str) -> bool {
        if self.domains().iter().any(|d| *d == domain) {
            return true;
        }
        // Zoho 支持 smtp 子域登录，任意 *.zoho.com 归入 Zoho 组
        matches!(self, Self::Zoho) && domain.ends_with(".zoho.com")
    }

    /// 从邮箱域名解析服务商
    pub fn from_domain(domain: &str) -> Option<Self> {
        let domain = domain.trim().to_lowercase();
        Self::all()
            .into_iter()
            .find(|provider| provider.matches_domain(&domain))
    }

    /// 从完整邮箱地址解析服务商
    ///
    /// 取第一个 @ 之后的子串作为域名；无 @ 的地址退化为空域名，返回 None
    pub fn from_email(email: &str) -> Option<Self> {
        let domain = email.split_once('@').map(|(_, domain)| domain).unwrap_or("");
        Self::from_domain(domain)
    }

    /// 获取所有支持的服务商
    pub const fn all() -> [Self; 5] {
        [
            Self::Gmail,
            Self::Outlook,
            Self::Yahoo,
            Self::Zoho,
            Self::ProtonMail,
        ]
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Gmail => "gmail",
            Self::Outlook => "outlook",
            Self::Yahoo => "yahoo",
            Self::Zoho => "zoho",
            Self::ProtonMail => "protonmail",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gmail_config() {
        let config = Provider::Gmail.config();
        assert_eq!(config.host, "smtp.gmail.com");
        assert_eq!(config.port, 587);
        assert!(!config.secure);
    }

    #[test]
    fn test_from_email_all_domains() {
        // 每个支持的域名都必须解析到所属服务商组
        let cases = [
            ("gmail.com", Provider::Gmail),
            ("googlemail.com", Provider::Gmail),
            ("outlook.com", Provider::Outlook),
            ("hotmail.com", Provider::Outlook),
            ("live.com", Provider::Outlook),
            ("msn.com", Provider::Outlook),
            ("yahoo.com", Provider::Yahoo),
            ("yahoo.co.uk", Provider::Yahoo),
            ("ymail.com", Provider::Yahoo),
            ("zoho.com", Provider::Zoho),
            ("protonmail.com", Provider::ProtonMail),
            ("proton.me", Provider::ProtonMail),
            ("pm.me", Provider::ProtonMail),
        ];
        for (domain, expected) in cases {
            let email = format!("user@{}", domain);
            assert_eq!(Provider::from_email(&email), Some(expected), "{}", email);
        }
    }

    #[test]
    fn test_provider_triples() {
        assert_eq!(Provider::Outlook.host(), "smtp-mail.outlook.com");
        assert_eq!(Provider::Outlook.port(), 587);
        assert!(!Provider::Outlook.secure());

        assert_eq!(Provider::Yahoo.host(), "smtp.mail.yahoo.com");
        assert_eq!(Provider::Yahoo.port(), 465);
        assert!(Provider::Yahoo.secure());

        assert_eq!(Provider::Zoho.host(), "smtp.zoho.com");
        assert_eq!(Provider::Zoho.port(), 465);
        assert!(Provider::Zoho.secure());

        assert_eq!(Provider::ProtonMail.host(), "127.0.0.1");
        assert_eq!(Provider::ProtonMail.port(), 1025);
        assert!(!Provider::ProtonMail.secure());
    }

    #[test]
    fn test_zoho_subdomain() {
        assert_eq!(Provider::from_email("a@mail.zoho.com"), Some(Provider::Zoho));
        assert_eq!(Provider::from_email("a@eu.zoho.com"), Some(Provider::Zoho));
        // 形似但不属于 zoho.com 的域名不能误判
        assert_eq!(Provider::from_email("a@notzoho.com"), None);
    }

    #[test]
    fn test_from_email_unknown_domain() {
        assert_eq!(Provider::from_email("user@example.org"), None);
        assert_eq!(Provider::from_email("user@company.cn"), None);
    }

    #[test]
    fn test_from_email_malformed_address() {
        // 无 @ 的地址退化为空域名
        assert_eq!(Provider::from_email("not-an-email"), None);
        assert_eq!(Provider::from_email(""), None);
    }

    #[test]
    fn test_from_email_case_insensitive() {
        assert_eq!(Provider::from_email("User@GMAIL.COM"), Some(Provider::Gmail));
        assert_eq!(Provider::from_email("a@Outlook.Com"), Some(Provider::Outlook));
    }

    #[test]
    fn test_display() {
        assert_eq!(Provider::Gmail.to_string(), "gmail");
        assert_eq!(Provider::ProtonMail.to_string(), "protonmail");
    }
}
