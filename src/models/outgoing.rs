/// 规整后的待发邮件
///
/// 交给传输层的最终形态：from 已确定，收件人字段均已合并为
/// 逗号分隔的地址串，Message-ID 已生成
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    /// 预生成的 Message-ID
    pub message_id: String,
    /// 发件人地址
    pub from: String,
    /// 收件人，逗号分隔
    pub to: String,
    /// 抄送，逗号分隔
    pub cc: Option<String>,
    /// 密送，逗号分隔
    pub bcc: Option<String>,
    /// 回复地址
    pub reply_to: Option<String>,
    /// 邮件主题
    pub subject: String,
    /// 纯文本正文
    pub text: Option<String>,
    /// HTML正文
    pub html: Option<String>,
}
