// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::relationship::{RelationKind, Relationship};
use std::collections::BTreeMap;
use thiserror::Error;

/// 模型元数据错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// 方法不存在
    #[error("Method [{model}::{method}] does not exist")]
    MethodNotFound { model: String, method: String },
    /// 调用关联方法失败
    #[error("Invocation of [{method}] failed: {reason}")]
    Invocation { method: String, reason: String },
}

/// 方法可见性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

/// 方法声明的返回类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnType {
    /// 返回某种关联
    Relation(RelationKind),
    /// 其他具名类型
    Named(String),
}

/// 模型上声明的方法签名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    pub name: String,
    pub visibility: Visibility,
    pub is_static: bool,
    /// 参数个数
    pub parameters: usize,
    /// 声明的返回类型，未声明时为空
    pub return_type: Option<ReturnType>,
}

impl MethodSignature {
    /// 公开、非静态、无参数、未声明返回类型的方法
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            is_static: false,
            parameters: 0,
            return_type: None,
        }
    }

    pub fn returns(mut self, return_type: ReturnType) -> Self {
        self.return_type = Some(return_type);
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_parameters(mut self, parameters: usize) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// 是否为公开、非静态、无参数的实例方法
    pub fn is_plain_accessor(&self) -> bool {
        self.visibility == Visibility::Public && !self.is_static && self.parameters == 0
    }
}

/// 面板模型
///
/// 取代运行时反射：模型显式声明自己的表、连接、方法签名与关联，
/// 本库的所有猜测都只读取这些声明。
pub trait PanelModel: Send + Sync {
    /// 完整类型名，例如 `app::models::Post`
    fn class_name(&self) -> &str;

    /// 对应的数据表名
    fn table(&self) -> &str;

    /// 使用的数据库连接名，为空时使用默认连接
    fn connection_name(&self) -> Option<&str> {
        None
    }

    /// 声明的方法签名
    fn methods(&self) -> &[MethodSignature];

    /// 是否声明了指定名称的方法
    fn has_method(&self, name: &str) -> bool {
        self.methods().iter().any(|m| m.name == name)
    }

    /// 查找方法签名
    fn method(&self, name: &str) -> Result<&MethodSignature, ModelError> {
        self.methods()
            .iter()
            .find(|m| m.name == name)
            .ok_or_else(|| ModelError::MethodNotFound {
                model: self.class_name().to_string(),
                method: name.to_string(),
            })
    }

    /// 调用方法并取出它描述的关联
    ///
    /// 方法不返回关联时为 `Ok(None)`。
    fn relationship(&self, method: &str) -> Result<Option<Relationship>, ModelError>;
}

/// 以声明方式构建的模型
///
/// # 示例
///
/// ```
/// use panel_support::domain::models::model::DeclaredModel;
///
/// let post = DeclaredModel::new("app::models::Post", "posts")
///     .belongs_to("author", "app::models::User")
///     .has_many("comments", "app::models::Comment");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeclaredModel {
    class_name: String,
    table: String,
    connection: Option<String>,
    methods: Vec<MethodSignature>,
    relationships: BTreeMap<String, Relationship>,
}

impl DeclaredModel {
    pub fn new(class_name: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            table: table.into(),
            ..Default::default()
        }
    }

    /// 指定数据库连接名
    pub fn on_connection(mut self, connection: impl Into<String>) -> Self {
        self.connection = Some(connection.into());
        self
    }

    /// 声明一个不描述关联的方法
    pub fn method(mut self, signature: MethodSignature) -> Self {
        self.methods.retain(|m| m.name != signature.name);
        self.methods.push(signature);
        self
    }

    /// 声明一个返回关联的方法，返回类型按关联类型标注
    pub fn relation(
        self,
        accessor: impl Into<String>,
        kind: RelationKind,
        related: impl Into<String>,
    ) -> Self {
        let signature = MethodSignature::new(accessor).returns(ReturnType::Relation(kind));
        self.relation_with_signature(signature, Relationship::new(kind, related))
    }

    /// 以自定义签名声明关联方法，例如未标注返回类型的访问方法
    pub fn relation_with_signature(
        mut self,
        signature: MethodSignature,
        relationship: Relationship,
    ) -> Self {
        self.relationships.insert(signature.name.clone(), relationship);
        self.method(signature)
    }

    pub fn belongs_to(self, accessor: impl Into<String>, related: impl Into<String>) -> Self {
        self.relation(accessor, RelationKind::BelongsTo, related)
    }

    pub fn has_one(self, accessor: impl Into<String>, related: impl Into<String>) -> Self {
        self.relation(accessor, RelationKind::HasOne, related)
    }

    pub fn has_many(self, accessor: impl Into<String>, related: impl Into<String>) -> Self {
        self.relation(accessor, RelationKind::HasMany, related)
    }

    pub fn belongs_to_many(
        self,
        accessor: impl Into<String>,
        related: impl Into<String>,
    ) -> Self {
        self.relation(accessor, RelationKind::BelongsToMany, related)
    }
}

impl PanelModel for DeclaredModel {
    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn table(&self) -> &str {
        &self.table
    }

    fn connection_name(&self) -> Option<&str> {
        self.connection.as_deref()
    }

    fn methods(&self) -> &[MethodSignature] {
        &self.methods
    }

    fn relationship(&self, method: &str) -> Result<Option<Relationship>, ModelError> {
        if !self.has_method(method) {
            return Err(ModelError::MethodNotFound {
                model: self.class_name.clone(),
                method: method.to_string(),
            });
        }
        Ok(self.relationships.get(method).cloned())
    }
}
