// 请求模型

pub mod email_req;

pub use email_req::SendEmailReq;
