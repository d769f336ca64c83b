// 服务模块

pub mod email;
