use serde::{Deserialize, Serialize};

use crate::constants::{ENV_EMAIL, ENV_PASSWORD};

/// SMTP登录凭证
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// 邮箱账号
    pub email: String,
    /// 密码（Gmail/Yahoo 等需要应用专用密码）
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// 在进程边界读取环境变量凭证
    ///
    /// 先加载 .env 文件（如果存在），任一变量缺失或为空返回 None；
    /// 核心发送逻辑不直接读环境变量，凭证只在这里注入
    pub fn from_env() -> Option<Self> {
        dotenv::dotenv().ok();
        let email = std::env::var(ENV_EMAIL).ok().filter(|v| !v.is_empty())?;
        let password = std::env::var(ENV_PASSWORD).ok().filter(|v| !v.is_empty())?;
        Some(Self { email, password })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let credentials = Credentials::new("user@gmail.com", "app-password");
        assert_eq!(credentials.email, "user@gmail.com");
        assert_eq!(credentials.password, "app-password");
    }
}
