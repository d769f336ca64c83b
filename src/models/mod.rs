// 数据模型模块

pub mod outgoing;
pub mod recipients;
pub mod req;

pub use outgoing::OutgoingEmail;
pub use recipients::Recipients;
pub use req::SendEmailReq;
