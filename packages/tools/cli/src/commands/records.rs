//! 동적 CRUD 명령어

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::commands::http;
use crate::config::CliConfig;
use crate::context::EffectiveContext;
use crate::OutputFormat;

#[derive(Serialize, Deserialize)]
struct RecordBody {
    id: Option<i64>,
    values: Value,
}

fn parse_data(data: &str) -> anyhow::Result<Value> {
    let value: Value = serde_json::from_str(data)?;
    if !value.is_object() {
        return Err(anyhow::anyhow!("--data must be a JSON object of column values"));
    }
    Ok(value)
}

pub async fn list(
    config: &CliConfig,
    ctx: &EffectiveContext,
    table: &str,
    expand: bool,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let schema = ctx.require_schema()?;
    let bridge = http::resolve_bridge_url(config, ctx)?;
    let client = http::client();

    #[derive(Serialize, Deserialize)]
    struct Resp {
        records: Vec<RecordBody>,
    }

    let mut req = client.get(format!(
        "{}/schemas/{}/tables/{}/records",
        bridge, schema, table
    ));
    if expand {
        req = req.query(&[("expand", "true")]);
    }
    let resp: Resp = http::send_json(req).await?;

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&resp.records)?);
        return Ok(());
    }

    println!("Records in {}.{} ({})", schema, table, resp.records.len());
    for record in resp.records {
        println!("- {}", serde_json::to_string(&record.values)?);
    }
    Ok(())
}

pub async fn get(
    config: &CliConfig,
    ctx: &EffectiveContext,
    table: &str,
    id: i64,
    expand: bool,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let schema = ctx.require_schema()?;
    let bridge = http::resolve_bridge_url(config, ctx)?;
    let client = http::client();

    #[derive(Serialize, Deserialize)]
    struct Resp {
        record: RecordBody,
    }

    let mut req = client.get(format!(
        "{}/schemas/{}/tables/{}/records/{}",
        bridge, schema, table, id
    ));
    if expand {
        req = req.query(&[("expand", "true")]);
    }
    let resp: Resp = http::send_json(req).await?;

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&resp.record)?);
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(&resp.record.values)?);
    Ok(())
}

pub async fn insert(
    config: &CliConfig,
    ctx: &EffectiveContext,
    table: &str,
    data: &str,
) -> anyhow::Result<()> {
    let schema = ctx.require_schema()?;
    let bridge = http::resolve_bridge_url(config, ctx)?;
    let client = http::client();
    let values = parse_data(data)?;

    #[derive(Deserialize)]
    struct Resp {
        id: i64,
    }

    let resp: Resp = http::send_json(
        client
            .post(format!(
                "{}/schemas/{}/tables/{}/records",
                bridge, schema, table
            ))
            .json(&serde_json::json!({ "values": values })),
    )
    .await?;

    println!("Inserted record {} into {}.{}", resp.id, schema, table);
    Ok(())
}

pub async fn update(
    config: &CliConfig,
    ctx: &EffectiveContext,
    table: &str,
    id: i64,
    data: &str,
) -> anyhow::Result<()> {
    let schema = ctx.require_schema()?;
    let bridge = http::resolve_bridge_url(config, ctx)?;
    let client = http::client();
    let values = parse_data(data)?;

    #[derive(Deserialize)]
    struct Resp {
        affected: u64,
    }

    let resp: Resp = http::send_json(
        client
            .put(format!(
                "{}/schemas/{}/tables/{}/records/{}",
                bridge, schema, table, id
            ))
            .json(&serde_json::json!({ "values": values })),
    )
    .await?;

    println!("Updated {} record(s) in {}.{}", resp.affected, schema, table);
    Ok(())
}

pub async fn delete(
    config: &CliConfig,
    ctx: &EffectiveContext,
    table: &str,
    id: i64,
) -> anyhow::Result<()> {
    let schema = ctx.require_schema()?;
    let bridge = http::resolve_bridge_url(config, ctx)?;
    let client = http::client();

    #[derive(Deserialize)]
    struct Resp {
        affected: u64,
    }

    let resp: Resp = http::send_json(client.delete(format!(
        "{}/schemas/{}/tables/{}/records/{}",
        bridge, schema, table, id
    )))
    .await?;

    println!("Deleted {} record(s) from {}.{}", resp.affected, schema, table);
    Ok(())
}
