//! 컨텍스트 명령어

use crate::context::RepoContext;

pub fn set(bridge: Option<String>, schema: Option<String>) -> anyhow::Result<()> {
    let mut ctx = RepoContext::load().unwrap_or_default();

    if let Some(b) = bridge {
        ctx.bridge_url = Some(b);
    }
    if let Some(s) = schema {
        ctx.schema = Some(s);
    }

    ctx.save()?;
    println!("Context updated.");
    show()
}

pub fn show() -> anyhow::Result<()> {
    let ctx = RepoContext::load().unwrap_or_default();

    println!("Current context (.tbk/context.json):");
    println!("  bridge: {}", ctx.bridge_url.as_deref().unwrap_or("(not set)"));
    println!("  schema: {}", ctx.schema.as_deref().unwrap_or("(not set)"));

    Ok(())
}

pub fn clear() -> anyhow::Result<()> {
    RepoContext::clear()?;
    println!("Context cleared.");
    Ok(())
}
