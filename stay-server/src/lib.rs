//! Stay Server - 酒店渠道定价引擎
//!
//! # 架构概述
//!
//! - **定价引擎** (`pricing`): 扣费明细、入住率建议、促销模拟、渠道对比 (纯函数)
//! - **渠道模板** (`templates`): 内置 + 自定义扣费规则集
//! - **HTTP API** (`api`): RESTful 接口
//!
//! # 模块结构
//!
//! ```text
//! stay-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── pricing/       # 定价计算
//! ├── templates/     # 渠道模板注册表
//! ├── api/           # HTTP 路由和处理器
//! ├── routes/        # 路由装配与中间件
//! └── utils/         # 日志、校验
//! ```

pub mod api;
pub mod core;
pub mod pricing;
pub mod routes;
pub mod templates;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use routes::build_app;
pub use templates::{TemplateError, TemplateRegistry};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 按配置初始化日志 (.env 需在读取配置前加载)
pub fn setup_environment(config: &Config) {
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
   _____ __                _____
  / ___// /_____ ___  __  / ___/___  ______   _____  _____
  \__ \/ __/ __ `/ / / /  \__ \/ _ \/ ___/ | / / _ \/ ___/
 ___/ / /_/ /_/ / /_/ /  ___/ /  __/ /   | |/ /  __/ /
/____/\__/\__,_/\__, /  /____/\___/_/    |___/\___/_/
               /____/
    "#
    );
}
