//! download-schema: fetch a server's SDL document into a local file.

use std::path::PathBuf;

use clap::Parser;
use gql_scalars::config::HooksConfig;
use gql_scalars::download::download_schema;

#[derive(Parser, Debug)]
#[command(name = "download-schema", version, about = "Download a GraphQL schema (SDL) to a file")]
struct Args {
    /// Schema endpoint URL
    #[arg(long, env = "GQL_SCHEMA_ENDPOINT")]
    endpoint: Option<String>,

    /// Output file, overwritten if present
    #[arg(long, env = "GQL_SCHEMA_OUTPUT")]
    output: Option<PathBuf>,

    /// Hooks config JSON; its `download` section fills unset flags
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    if let Err(e) = run(args).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> gql_scalars::Result<()> {
    let from_config = match &args.config {
        Some(path) => HooksConfig::from_json_file(path)?.download,
        None => None,
    };

    let endpoint = args
        .endpoint
        .or_else(|| from_config.as_ref().map(|d| d.endpoint.clone()))
        .ok_or_else(|| gql_scalars::Error::Config("no endpoint given (--endpoint or config)".into()))?;
    let output = args
        .output
        .or_else(|| from_config.map(|d| d.output))
        .ok_or_else(|| gql_scalars::Error::Config("no output given (--output or config)".into()))?;

    tracing::info!(%endpoint, output = %output.display(), "downloading schema");
    download_schema(&endpoint, &output).await
}
