// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::inflector::camel;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 视图组件属性的前缀，这类属性不向子组件传递
pub const COMPONENT_ATTRIBUTE_PREFIX: &str = "x-";

/// 视图组件属性集合
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeBag {
    attributes: Map<String, Value>,
}

impl AttributeBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// 读取属性
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// 设置单个属性
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// 全部属性
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// 整体替换属性
    pub fn set_attributes(&mut self, attributes: Map<String, Value>) {
        self.attributes = attributes;
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl From<Map<String, Value>> for AttributeBag {
    fn from(attributes: Map<String, Value>) -> Self {
        Self { attributes }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for AttributeBag {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            attributes: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// 整理需要向下传递的属性
///
/// 去掉 `x-` 开头的属性，为其余属性补充小驼峰形式的键，
/// 再合并回原始属性；键冲突时以原始属性为准。
pub fn prepare_inherited_attributes(mut bag: AttributeBag) -> AttributeBag {
    let original = std::mem::take(&mut bag.attributes);
    let mut prepared = Map::new();

    for (name, value) in &original {
        if !name.starts_with(COMPONENT_ATTRIBUTE_PREFIX) {
            prepared.insert(camel(name), value.clone());
        }
    }

    for (name, value) in original {
        if !name.starts_with(COMPONENT_ATTRIBUTE_PREFIX) {
            prepared.insert(name, value);
        }
    }

    bag.set_attributes(prepared);
    bag
}
