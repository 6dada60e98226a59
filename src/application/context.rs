// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::model_registry::ModelRegistry;
use crate::domain::repositories::schema_repository::{SchemaError, SchemaIntrospector};
use crate::domain::services::operator_channel::OperatorChannel;
use crate::domain::services::plural_rules::{locale_has_pluralization, MessageSelector, PluralRules};
use crate::infrastructure::observability::tracing_channel::TracingChannel;
use std::collections::HashMap;
use std::sync::Arc;

/// 默认连接名
pub const DEFAULT_CONNECTION: &str = "default";

/// 默认语言区域
pub const DEFAULT_LOCALE: &str = "en";

/// 面板上下文
///
/// 聚合模型注册表、各连接的结构读取器、运维提示通道与语言区域，
/// 需要这些信息的函数都显式接收它。
pub struct PanelContext {
    registry: Arc<ModelRegistry>,
    connections: HashMap<String, Arc<dyn SchemaIntrospector>>,
    default_connection: String,
    operator: Arc<dyn OperatorChannel>,
    locale: String,
    plural_rules: Arc<dyn PluralRules>,
}

impl PanelContext {
    /// 创建上下文
    ///
    /// # 参数
    ///
    /// * `registry` - 模型注册表
    /// * `introspector` - 默认连接的结构读取器
    pub fn new(registry: Arc<ModelRegistry>, introspector: Arc<dyn SchemaIntrospector>) -> Self {
        let mut connections = HashMap::new();
        connections.insert(DEFAULT_CONNECTION.to_string(), introspector);

        Self {
            registry,
            connections,
            default_connection: DEFAULT_CONNECTION.to_string(),
            operator: Arc::new(TracingChannel),
            locale: DEFAULT_LOCALE.to_string(),
            plural_rules: Arc::new(MessageSelector::new()),
        }
    }

    /// 添加具名连接
    pub fn with_connection(
        mut self,
        name: impl Into<String>,
        introspector: Arc<dyn SchemaIntrospector>,
    ) -> Self {
        self.connections.insert(name.into(), introspector);
        self
    }

    /// 设置运维提示通道
    pub fn with_operator(mut self, operator: Arc<dyn OperatorChannel>) -> Self {
        self.operator = operator;
        self
    }

    /// 设置语言区域
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// 设置复数规则
    pub fn with_plural_rules(mut self, plural_rules: Arc<dyn PluralRules>) -> Self {
        self.plural_rules = plural_rules;
        self
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    pub fn operator(&self) -> &dyn OperatorChannel {
        self.operator.as_ref()
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// 按连接名取结构读取器，未指定连接名时使用默认连接
    pub fn introspector(
        &self,
        connection: Option<&str>,
    ) -> Result<Arc<dyn SchemaIntrospector>, SchemaError> {
        let name = connection.unwrap_or(&self.default_connection);
        self.connections
            .get(name)
            .cloned()
            .ok_or_else(|| SchemaError::ConnectionNotConfigured(name.to_string()))
    }

    /// 默认连接的结构读取器
    pub fn default_introspector(&self) -> Result<Arc<dyn SchemaIntrospector>, SchemaError> {
        self.introspector(None)
    }

    /// 当前语言区域是否区分单复数
    pub fn locale_has_pluralization(&self) -> bool {
        locale_has_pluralization(self.plural_rules.as_ref(), &self.locale)
    }
}
