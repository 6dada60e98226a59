// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod column_properties;
pub mod model_label;
pub mod operator_channel;
pub mod plural_rules;
pub mod relationship_enumerator;
