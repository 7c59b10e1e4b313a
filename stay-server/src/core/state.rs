use std::sync::Arc;

use tokio::sync::RwLock;

use crate::core::Config;
use crate::templates::TemplateRegistry;

/// 服务器状态 - 所有请求处理器共享
///
/// 使用 Arc 实现浅拷贝，克隆成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | templates | Arc<RwLock<TemplateRegistry>> | 渠道模板 (内置 + 自定义) |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub templates: Arc<RwLock<TemplateRegistry>>,
}

impl ServerState {
    /// 使用内置渠道模板初始化
    pub fn initialize(config: &Config) -> Self {
        Self::with_templates(config.clone(), TemplateRegistry::with_defaults())
    }

    pub fn with_templates(config: Config, templates: TemplateRegistry) -> Self {
        let count = templates.len();
        tracing::debug!(templates = count, "Template registry loaded");
        Self {
            config,
            templates: Arc::new(RwLock::new(templates)),
        }
    }

    /// 请求未指定阈值时使用的入住率阈值
    pub fn default_threshold(&self) -> f64 {
        self.config.occupancy_threshold
    }
}
