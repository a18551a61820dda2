//! Tablekit CLI (`tbk`)
//!
//! Bridge를 통해 임의의 Postgres 테이블을 탐색하고 편집하는 operator
//! 도구입니다.

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod context;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "tbk")]
#[command(author, version, about = "Tablekit CLI - browse and edit any Postgres table", long_about = None)]
struct Cli {
    /// Bridge URL (overrides context)
    #[arg(long, global = true)]
    bridge: Option<String>,

    /// Schema (overrides context)
    #[arg(long, global = true)]
    schema: Option<String>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn is_json(self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

#[derive(Subcommand)]
enum Commands {
    // ─────────────────────────────────────────────────────────────────────────
    // Context
    // ─────────────────────────────────────────────────────────────────────────
    /// Manage repo context
    Context {
        #[command(subcommand)]
        action: ContextAction,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Catalog
    // ─────────────────────────────────────────────────────────────────────────
    /// List schemas
    Schemas,

    /// List tables in the current schema
    Tables,

    /// Show column metadata for a table
    Columns { table: String },

    // ─────────────────────────────────────────────────────────────────────────
    // Records
    // ─────────────────────────────────────────────────────────────────────────
    /// List records of a table
    Records {
        table: String,

        /// Hydrate foreign key columns with referenced rows
        #[arg(long)]
        expand: bool,
    },

    /// Show one record by id
    Record {
        table: String,
        id: i64,

        /// Hydrate foreign key columns with referenced rows
        #[arg(long)]
        expand: bool,
    },

    /// Insert a record (JSON object of column values)
    Insert {
        table: String,

        #[arg(long)]
        data: String,
    },

    /// Update a record by id (JSON object of column values)
    Update {
        table: String,
        id: i64,

        #[arg(long)]
        data: String,
    },

    /// Delete a record by id
    Delete { table: String, id: i64 },

    // ─────────────────────────────────────────────────────────────────────────
    // Foreign keys
    // ─────────────────────────────────────────────────────────────────────────
    /// Show foreign key constraints of a table
    ForeignKeys { table: String },

    /// Show candidate rows for each foreign key column
    ForeignRecords { table: String },
}

#[derive(Subcommand)]
enum ContextAction {
    /// Set repo context
    Set {
        #[arg(long)]
        bridge: Option<String>,
        #[arg(long)]
        schema: Option<String>,
    },
    /// Show current context
    Show,
    /// Clear context
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // 설정 로드
    let config = CliConfig::load()?;

    // 컨텍스트 결정 (CLI 옵션 > repo context)
    let ctx = context::resolve_context(cli.bridge.as_deref(), cli.schema.as_deref())?;
    let format = cli.format;

    // 명령 실행
    match cli.command {
        Commands::Context { action } => match action {
            ContextAction::Set { bridge, schema } => commands::context::set(bridge, schema),
            ContextAction::Show => commands::context::show(),
            ContextAction::Clear => commands::context::clear(),
        },

        Commands::Schemas => commands::catalog::schemas(&config, &ctx, format).await,
        Commands::Tables => commands::catalog::tables(&config, &ctx, format).await,
        Commands::Columns { table } => {
            commands::catalog::columns(&config, &ctx, &table, format).await
        }

        Commands::Records { table, expand } => {
            commands::records::list(&config, &ctx, &table, expand, format).await
        }
        Commands::Record { table, id, expand } => {
            commands::records::get(&config, &ctx, &table, id, expand, format).await
        }
        Commands::Insert { table, data } => {
            commands::records::insert(&config, &ctx, &table, &data).await
        }
        Commands::Update { table, id, data } => {
            commands::records::update(&config, &ctx, &table, id, &data).await
        }
        Commands::Delete { table, id } => {
            commands::records::delete(&config, &ctx, &table, id).await
        }

        Commands::ForeignKeys { table } => {
            commands::foreign::keys(&config, &ctx, &table, format).await
        }
        Commands::ForeignRecords { table } => {
            commands::foreign::records(&config, &ctx, &table, format).await
        }
    }
}
