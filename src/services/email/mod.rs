use async_trait::async_trait;

use crate::error::MailError;
use crate::models::OutgoingEmail;

pub mod mailer;
pub mod transport;

pub use mailer::Mailer;
pub use transport::LettreSender;

/// SMTP发送接口
///
/// 传输实现与发送门面之间的接缝，测试时可注入捕获调用的桩实现
#[async_trait]
pub trait SmtpSender: Send + Sync {
    /// 获取发送端名称
    fn name(&self) -> &str;

    /// 投递一封已规整的邮件，返回投递使用的 Message-ID
    async fn deliver(&self, email: &OutgoingEmail) -> Result<String, MailError>;

    /// 校验SMTP连接与登录凭证
    async fn check(&self) -> Result<(), MailError>;
}
