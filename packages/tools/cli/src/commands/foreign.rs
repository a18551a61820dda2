//! 외래키 명령어

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::commands::http;
use crate::config::CliConfig;
use crate::context::EffectiveContext;
use crate::OutputFormat;

pub async fn keys(
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
        #[serde(rename = "foreignKeys")]
        foreign_keys: Vec<ForeignKey>,
    }

    #[derive(Serialize, Deserialize)]
    struct ForeignKey {
        column: String,
        foreign_schema: String,
        foreign_table: String,
        foreign_column: String,
    }

    let resp: Resp = http::send_json(client.get(format!(
        "{}/schemas/{}/tables/{}/foreign-keys",
        bridge, schema, table
    )))
    .await?;

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&resp.foreign_keys)?);
        return Ok(());
    }

    println!(
        "Foreign keys of {}.{} ({})",
        schema,
        table,
        resp.foreign_keys.len()
    );
    for fk in resp.foreign_keys {
        println!(
            "- {} -> {}.{}.{}",
            fk.column, fk.foreign_schema, fk.foreign_table, fk.foreign_column
        );
    }
    Ok(())
}

pub async fn records(
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
        #[serde(rename = "foreignRecords")]
        foreign_records: HashMap<String, Vec<RecordBody>>,
    }

    #[derive(Serialize, Deserialize)]
    struct RecordBody {
        id: Option<i64>,
        values: Value,
    }

    let resp: Resp = http::send_json(client.get(format!(
        "{}/schemas/{}/tables/{}/foreign-records",
        bridge, schema, table
    )))
    .await?;

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&resp.foreign_records)?);
        return Ok(());
    }

    println!(
        "Foreign records for {}.{} ({} column(s))",
        schema,
        table,
        resp.foreign_records.len()
    );
    for (column, records) in resp.foreign_records {
        println!("- {}: {} row(s)", column, records.len());
        for record in records {
            println!("  - {}", serde_json::to_string(&record.values)?);
        }
    }
    Ok(())
}
