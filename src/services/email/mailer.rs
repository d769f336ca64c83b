use std::sync::Arc;

use log::{error, info};
use uuid::Uuid;

use super::{LettreSender, SmtpSender};
use crate::config::{Credentials, SmtpConfig};
use crate::error::MailError;
use crate::models::{OutgoingEmail, SendEmailReq};
use crate::response::SendResponse;

/// 邮件发送门面
///
/// 绑定一份凭证和一个SMTP传输；发送结果一律通过 [`SendResponse`]
/// 封套返回，send 本身不会失败
pub struct Mailer {
    sender: Arc<dyn SmtpSender>,
    default_from: String,
}

impl Mailer {
    /// 根据邮箱域名自动识别服务商并构建
    pub fn new(email: &str, password: &str) -> Result<Self, MailError> {
        let config = SmtpConfig::resolve(email);
        Self::with_config(email, password, config)
    }

    /// 使用调用方指定的SMTP配置构建
    pub fn with_config(
        email: &str,
        password: &str,
        config: SmtpConfig,
    ) -> Result<Self, MailError> {
        let credentials = Credentials::new(email, password);
        info!(
            "构建SMTP传输: {}:{} (secure={})",
            config.host, config.port, config.secure
        );
        let sender = LettreSender::new(&config, &credentials)?;
        Ok(Self {
            sender: Arc::new(sender),
            default_from: credentials.email,
        })
    }

    /// 注入自定义发送端
    ///
    /// 用于替换传输实现或在测试中捕获投递参数
    pub fn with_sender(sender: Arc<dyn SmtpSender>, default_from: impl Into<String>) -> Self {
        Self {
            sender,
            default_from: default_from.into(),
        }
    }

    /// 发送邮件
    ///
    /// 规整收件人字段、补齐发件人、生成 Message-ID 后交给传输层；
    /// 成功时 data.id 与 data.message_id 为同一个值
    pub async fn send(&self, req: SendEmailReq) -> SendResponse {
        let email = self.normalize(req);
        info!(
            "发送邮件: from={}, to={}, subject={}",
            email.from, email.to, email.subject
        );

        match self.sender.deliver(&email).await {
            Ok(message_id) => {
                info!("邮件发送成功: {}", message_id);
                SendResponse::success(message_id)
            }
            Err(err) => {
                error!("邮件发送失败: {}", err);
                SendResponse::failure(err)
            }
        }
    }

    /// 校验SMTP连接与凭证
    ///
    /// 错误细节被折叠为 false，需要细节时使用 [`Mailer::verify_detailed`]
    pub async fn verify(&self) -> bool {
        self.verify_detailed().await.is_ok()
    }

    /// 校验SMTP连接与凭证，保留失败原因
    pub async fn verify_detailed(&self) -> Result<(), MailError> {
        self.sender.check().await
    }

    /// 该门面的默认发件人地址
    pub fn default_from(&self) -> &str {
        &self.default_from
    }

    fn normalize(&self, req: SendEmailReq) -> OutgoingEmail {
        OutgoingEmail {
            message_id: format!("<{}@maildrop>", Uuid::new_v4()),
            from: req.from.unwrap_or_else(|| self.default_from.clone()),
            to: req.to.join(),
            cc: req.cc.map(|recipients| recipients.join()),
            bcc: req.bcc.map(|recipients| recipients.join()),
            reply_to: req.reply_to,
            subject: req.subject,
            text: req.text,
            html: req.html,
        }
    }
}
