// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use anyhow::{bail, Context};
use panel_support::application::context::PanelContext;
use panel_support::application::dto::column_report::{ColumnReport, TableReport};
use panel_support::application::use_cases::relationship_guesser::RelationshipGuesser;
use panel_support::application::use_cases::schema_reader::SchemaReader;
use panel_support::config::settings::Settings;
use panel_support::domain::models::model::DeclaredModel;
use panel_support::domain::repositories::model_registry::ModelRegistry;
use panel_support::domain::services::column_properties::get_column_property;
use panel_support::domain::services::model_label::get_model_label;
use panel_support::infrastructure::database::connection;
use panel_support::infrastructure::database::schema_introspector::SeaOrmSchemaIntrospector;
use panel_support::utils::inflector::FOREIGN_KEY_SUFFIX;
use panel_support::utils::telemetry;
use std::sync::Arc;
use tracing::info;

/// 主函数
///
/// 读取一张表的结构，输出每列的类型、注释属性以及猜测的关联表与标题列
///
/// 用法：`panel-inspect <table> [comment-property]`
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let Some(table) = args.next() else {
        bail!("usage: panel-inspect <table> [comment-property]");
    };
    let property = args.next();

    // 1. Load configuration
    let settings = Settings::new().context("failed to load configuration")?;

    // 2. Initialize logging
    telemetry::init_telemetry(settings.logging.json);
    info!("Inspecting table {}", table);

    // 3. Connect to database
    let db = Arc::new(connection::create_pool(&settings.database).await?);
    let introspector = Arc::new(SeaOrmSchemaIntrospector::new(db));

    // 4. Build context. Tables are registered as models under their own name.
    let registry = Arc::new(ModelRegistry::new());
    registry.register(DeclaredModel::new(table.clone(), table.clone()));
    let context = Arc::new(
        PanelContext::new(registry.clone(), introspector).with_locale(settings.locale.locale),
    );

    let reader = SchemaReader::new(context.clone());
    let guesser = RelationshipGuesser::new(context.clone());

    let Some(schema) = reader.get_model_table(&table).await else {
        bail!("unable to read table [{}]", table);
    };

    let mut columns = Vec::with_capacity(schema.columns.len());
    for column in &schema.columns {
        let mut report = ColumnReport::from_column(column);

        if let Some(property) = &property {
            report.properties = get_column_property(column, property);
        }

        if column.name.ends_with(FOREIGN_KEY_SUFFIX) {
            if let Some(related_table) = guesser.guess_relationship_table_name(column).await {
                registry.register(DeclaredModel::new(
                    related_table.clone(),
                    related_table.clone(),
                ));
                report.title_column = Some(
                    guesser
                        .guess_relationship_title_column_name(&related_table)
                        .await,
                );
                report.related_table = Some(related_table);
            }
        }

        columns.push(report);
    }

    let report = TableReport {
        label: get_model_label(&table),
        primary_key: schema
            .primary_key
            .map(|pk| pk.columns)
            .unwrap_or_default(),
        table: schema.name,
        columns,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    info!(
        "Locale {} has pluralization: {}",
        context.locale(),
        context.locale_has_pluralization()
    );

    Ok(())
}
