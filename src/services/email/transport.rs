use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Mailbox, Mailboxes, MultiPart};
use lettre::transport::smtp::authentication::Credentials as SmtpCredentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use log::debug;

use super::SmtpSender;
use crate::config::{Credentials, SmtpConfig};
use crate::error::MailError;
use crate::models::OutgoingEmail;

/// 基于 lettre 的SMTP发送实现
pub struct LettreSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    host: String,
}

impl LettreSender {
    /// 按SMTP配置与凭证构建传输
    ///
    /// secure 为 true 走TLS直连（SMTPS），否则走 STARTTLS
    pub fn new(config: &SmtpConfig, credentials: &Credentials) -> Result<Self, MailError> {
        let creds = SmtpCredentials::new(
            credentials.email.clone(),
            credentials.password.clone(),
        );

        let builder = if config.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
        };

        let transport = builder.port(config.port).credentials(creds).build();

        debug!(
            "SMTP传输已构建: {}:{} (secure={})",
            config.host, config.port, config.secure
        );

        Ok(Self {
            transport,
            host: config.host.clone(),
        })
    }

    /// 从规整后的邮件构建 lettre Message
    ///
    /// 收件人字段是逗号分隔的地址串，按 Mailboxes 语法解析后逐个加入
    fn build_message(email: &OutgoingEmail) -> Result<Message, MailError> {
        let mut builder = Message::builder()
            .message_id(Some(email.message_id.clone()))
            .from(email.from.parse::<Mailbox>()?)
            .subject(email.subject.clone());

        for mailbox in email.to.parse::<Mailboxes>()? {
            builder = builder.to(mailbox);
        }
        if let Some(cc) = &email.cc {
            for mailbox in cc.parse::<Mailboxes>()? {
                builder = builder.cc(mailbox);
            }
        }
        if let Some(bcc) = &email.bcc {
            for mailbox in bcc.parse::<Mailboxes>()? {
                builder = builder.bcc(mailbox);
            }
        }
        if let Some(reply_to) = &email.reply_to {
            builder = builder.reply_to(reply_to.parse::<Mailbox>()?);
        }

        let message = match (&email.html, &email.text) {
            (Some(html), Some(text)) => builder.multipart(
                MultiPart::alternative_plain_html(text.clone(), html.clone()),
            )?,
            (Some(html), None) => builder
                .header(ContentType::TEXT_HTML)
                .body(html.clone())?,
            (None, Some(text)) => builder
                .header(ContentType::TEXT_PLAIN)
                .body(text.clone())?,
            (None, None) => builder
                .header(ContentType::TEXT_PLAIN)
                .body(String::new())?,
        };

        Ok(message)
    }
}

#[async_trait]
impl SmtpSender for LettreSender {
    fn name(&self) -> &str {
        "lettre"
    }

    async fn deliver(&self, email: &OutgoingEmail) -> Result<String, MailError> {
        let message = Self::build_message(email)?;
        self.transport.send(message).await?;
        Ok(email.message_id.clone())
    }

    async fn check(&self) -> Result<(), MailError> {
        if self.transport.test_connection().await? {
            Ok(())
        } else {
            Err(MailError::TransportError {
                message: format!("SMTP连接测试未通过: {}", self.host),
                code: None,
            })
        }
    }
}
