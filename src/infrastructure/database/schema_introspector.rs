// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::column::{Column, ColumnType};
use crate::domain::models::table::TableSchema;
use crate::domain::repositories::schema_repository::{SchemaError, SchemaIntrospector};
use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, Statement, Value};
use std::sync::Arc;
use tracing::debug;

const SQLITE_COLUMNS: &str = r#"SELECT name, type, "notnull" AS not_null, pk
FROM pragma_table_info(?)
ORDER BY cid"#;

const SQLITE_HAS_TABLE: &str =
    "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?";

const POSTGRES_COLUMNS: &str = r#"SELECT c.column_name::text AS column_name,
       c.data_type::text AS data_type,
       c.is_nullable::text AS is_nullable,
       pg_catalog.col_description(
           (quote_ident(c.table_schema) || '.' || quote_ident(c.table_name))::regclass::oid,
           c.ordinal_position::int
       ) AS column_comment
FROM information_schema.columns c
WHERE c.table_schema = current_schema() AND c.table_name = $1
ORDER BY c.ordinal_position"#;

const POSTGRES_PRIMARY_KEY: &str = r#"SELECT kcu.column_name::text AS column_name
FROM information_schema.table_constraints tc
JOIN information_schema.key_column_usage kcu
  ON tc.constraint_name = kcu.constraint_name
 AND tc.table_schema = kcu.table_schema
 AND tc.table_name = kcu.table_name
WHERE tc.constraint_type = 'PRIMARY KEY'
  AND tc.table_schema = current_schema()
  AND tc.table_name = $1
ORDER BY kcu.ordinal_position"#;

const POSTGRES_HAS_TABLE: &str = r#"SELECT table_name::text AS table_name
FROM information_schema.tables
WHERE table_schema = current_schema() AND table_name = $1"#;

/// 基于 SeaORM 连接的表结构读取实现
///
/// 支持 SQLite 与 PostgreSQL，其他驱动返回 [`SchemaError::UnsupportedBackend`]。
pub struct SeaOrmSchemaIntrospector {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl SeaOrmSchemaIntrospector {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn statement(backend: DbBackend, sql: &str, table: &str) -> Statement {
        Statement::from_sql_and_values(backend, sql, [Value::from(table)])
    }

    async fn sqlite_table(&self, table: &str) -> Result<TableSchema, SchemaError> {
        let rows = self
            .db
            .query_all(Self::statement(DbBackend::Sqlite, SQLITE_COLUMNS, table))
            .await?;

        let mut columns = Vec::with_capacity(rows.len());
        let mut primary_key: Vec<(i32, String)> = Vec::new();

        for row in rows {
            let name: String = row.try_get("", "name")?;
            let declared: String = row.try_get("", "type")?;
            let not_null: i32 = row.try_get("", "not_null")?;
            let pk: i32 = row.try_get("", "pk")?;

            if pk > 0 {
                primary_key.push((pk, name.clone()));
            }
            columns.push(
                Column::new(name, ColumnType::from_sql(&declared)).with_nullable(not_null == 0),
            );
        }

        if columns.is_empty() {
            return Err(SchemaError::TableNotFound(table.to_string()));
        }

        primary_key.sort_by_key(|(position, _)| *position);
        Ok(TableSchema::new(table, columns)
            .with_primary_key(primary_key.into_iter().map(|(_, name)| name)))
    }

    async fn postgres_table(&self, table: &str) -> Result<TableSchema, SchemaError> {
        let rows = self
            .db
            .query_all(Self::statement(DbBackend::Postgres, POSTGRES_COLUMNS, table))
            .await?;

        let mut columns = Vec::with_capacity(rows.len());
        for row in rows {
            let name: String = row.try_get("", "column_name")?;
            let declared: String = row.try_get("", "data_type")?;
            let is_nullable: String = row.try_get("", "is_nullable")?;
            let comment: Option<String> = row.try_get("", "column_comment")?;

            let mut column = Column::new(name, ColumnType::from_sql(&declared))
                .with_nullable(is_nullable.eq_ignore_ascii_case("YES"));
            column.comment = comment;
            columns.push(column);
        }

        if columns.is_empty() {
            return Err(SchemaError::TableNotFound(table.to_string()));
        }

        let key_rows = self
            .db
            .query_all(Self::statement(
                DbBackend::Postgres,
                POSTGRES_PRIMARY_KEY,
                table,
            ))
            .await?;
        let mut primary_key = Vec::with_capacity(key_rows.len());
        for row in key_rows {
            primary_key.push(row.try_get::<String>("", "column_name")?);
        }

        Ok(TableSchema::new(table, columns).with_primary_key(primary_key))
    }
}

#[async_trait]
impl SchemaIntrospector for SeaOrmSchemaIntrospector {
    async fn list_table_details(&self, table: &str) -> Result<TableSchema, SchemaError> {
        debug!("Reading table details for {}", table);
        match self.db.get_database_backend() {
            DbBackend::Sqlite => self.sqlite_table(table).await,
            DbBackend::Postgres => self.postgres_table(table).await,
            other => Err(SchemaError::UnsupportedBackend(format!("{:?}", other))),
        }
    }

    async fn has_table(&self, table: &str) -> Result<bool, SchemaError> {
        let backend = self.db.get_database_backend();
        let sql = match backend {
            DbBackend::Sqlite => SQLITE_HAS_TABLE,
            DbBackend::Postgres => POSTGRES_HAS_TABLE,
            other => return Err(SchemaError::UnsupportedBackend(format!("{:?}", other))),
        };

        let row = self
            .db
            .query_one(Self::statement(backend, sql, table))
            .await?;
        Ok(row.is_some())
    }
}
