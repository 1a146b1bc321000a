//! 业务逻辑服务层

mod console_service;

pub use console_service::ConsoleService;
