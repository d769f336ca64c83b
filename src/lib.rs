// maildrop 邮件发送库
// 根据邮箱域名自动匹配SMTP服务商配置，通过 lettre 完成实际投递

pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod logger;
pub mod models;
pub mod response;
pub mod services;

// 重新导出常用类型和函数
pub use config::{Credentials, SmtpConfig};
pub use enums::{Provider, ProviderConfig};
pub use error::{MailError, MailResult};
pub use logger::{init_logger, init_logger_with_level};
pub use models::{OutgoingEmail, Recipients, SendEmailReq};
pub use response::{ErrorDetail, SendData, SendResponse};
pub use services::email::{Mailer, SmtpSender};

/// 初始化日志系统
///
/// 库本身不强制初始化日志，调用方也可以自行配置 log 实现
pub fn init() {
    logger::init_logger();
    log::info!("📧 maildrop 初始化完成");
}

/// 使用环境变量中的凭证发送邮件
///
/// 凭证从 MAILDROP_EMAIL 和 MAILDROP_PASSWORD 读取，任一缺失时
/// 直接返回 MISSING_CREDENTIALS 错误封套，不会构建SMTP传输。
/// 未指定 from 时默认使用环境变量中的邮箱地址。
pub async fn drop_mail(req: SendEmailReq) -> SendResponse {
    let credentials = match Credentials::from_env() {
        Some(credentials) => credentials,
        None => return SendResponse::failure(MailError::MissingCredentials),
    };
    send_with(credentials, req).await
}

/// 使用直接传入的凭证发送邮件
///
/// 与 [`drop_mail`] 行为一致，凭证由参数提供；
/// 未指定 from 时默认使用 email 参数。
pub async fn quick_drop(email: &str, password: &str, req: SendEmailReq) -> SendResponse {
    send_with(Credentials::new(email, password), req).await
}

async fn send_with(credentials: Credentials, req: SendEmailReq) -> SendResponse {
    // 每次调用独立构建传输，不跨调用复用
    let mailer = match Mailer::new(&credentials.email, &credentials.password) {
        Ok(mailer) => mailer,
        Err(err) => return SendResponse::failure(err),
    };
    mailer.send(req).await
}
