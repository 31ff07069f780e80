use anyhow::Result;
use clap::Parser;
use copyparty_assets::assets::{AssetService, CopypartyAssets};
use copyparty_assets::config::Config;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "copyparty-assets")]
#[command(about = "Upload assets to a copyparty server and print their public URLs")]
struct CliArgs {
    /// Object name to store under. Only valid with a single source.
    #[arg(long)]
    filename: Option<String>,

    /// Remote URLs, local paths, data: URLs or base64:// payloads.
    #[arg(value_name = "SOURCE", required = true)]
    sources: Vec<String>,
}

fn check_args(args: &CliArgs) -> std::result::Result<(), String> {
    if args.filename.is_some() && args.sources.len() > 1 {
        return Err("--filename can only be used with a single source".to_string());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "copyparty_assets=info,assets_copyparty=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();
    if let Err(e) = check_args(&args) {
        error!("{}", e);
        std::process::exit(2);
    }

    let assets = match Config::from_env().and_then(CopypartyAssets::new) {
        Ok(assets) => assets,
        Err(e) => {
            error!("Failed to initialize uploader: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Uploading {} source(s) to {}/{}",
        args.sources.len(),
        assets.config().endpoint,
        assets.config().bin
    );

    for source in &args.sources {
        match assets.upload(source, args.filename.as_deref()).await {
            Ok(url) => println!("{}", url),
            Err(e) => {
                error!("{}: {}", source, e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
