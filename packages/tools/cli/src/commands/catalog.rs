//! 카탈로그 탐색 명령어

use serde::{Deserialize, Serialize};

use crate::commands::http;
use crate::config::CliConfig;
use crate::context::EffectiveContext;
use crate::OutputFormat;

pub async fn schemas(
    config: &CliConfig,
    ctx: &EffectiveContext,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let bridge = http::resolve_bridge_url(config, ctx)?;
    let client = http::client();

    #[derive(Serialize, Deserialize)]
    struct Resp {
        schemas: Vec<String>,
    }

    let resp: Resp = http::send_json(client.get(format!("{}/schemas", bridge))).await?;

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&resp.schemas)?);
        return Ok(());
    }

    println!("Schemas ({})", resp.schemas.len());
    for schema in resp.schemas {
        println!("- {}", schema);
    }
    Ok(())
}

pub async fn tables(
    config: &CliConfig,
    ctx: &EffectiveContext,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let schema = ctx.require_schema()?;
    let bridge = http::resolve_bridge_url(config, ctx)?;
    let client = http::client();

    #[derive(Serialize, Deserialize)]
    struct Resp {
        tables: Vec<Table>,
    }

    #[derive(Serialize, Deserialize)]
    struct Table {
        schema: String,
        name: String,
        kind: String,
    }

    let resp: Resp =
        http::send_json(client.get(format!("{}/schemas/{}/tables", bridge, schema))).await?;

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&resp.tables)?);
        return Ok(());
    }

    println!("Tables in {} ({})", schema, resp.tables.len());
    for table in resp.tables {
        println!("- {} ({})", table.name, table.kind);
    }
    Ok(())
}

pub async fn columns(
    config: &CliConfig,
    ctx: &EffectiveContext,
    table: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let schema = ctx.require_schema()?;
    let bridge = http::resolve_bridge_url(config, ctx)?;
    let client = http::client();

    #[derive(Serialize, Deserialize)]
    struct Resp {
        columns: Vec<Column>,
    }

    #[derive(Serialize, Deserialize)]
    struct Column {
        name: String,
        data_type: String,
        nullable: bool,
    }

    let resp: Resp = http::send_json(client.get(format!(
        "{}/schemas/{}/tables/{}/columns",
        bridge, schema, table
    )))
    .await?;

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&resp.columns)?);
        return Ok(());
    }

    println!("Columns of {}.{} ({})", schema, table, resp.columns.len());
    for column in resp.columns {
        let null_mark = if column.nullable { "null" } else { "not null" };
        println!("- {} ({}, {})", column.name, column.data_type, null_mark);
    }
    Ok(())
}
