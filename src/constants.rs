/// 应用常量定义

/// 凭证邮箱环境变量
pub const ENV_EMAIL: &str = "MAILDROP_EMAIL";

/// 凭证密码环境变量（应用专用密码）
pub const ENV_PASSWORD: &str = "MAILDROP_PASSWORD";

/// 缺少凭证错误码
pub const MISSING_CREDENTIALS_CODE: &str = "MISSING_CREDENTIALS";

/// 发送失败且底层错误无描述时的兜底文案
pub const DEFAULT_SEND_ERROR: &str = "Failed to send email";
