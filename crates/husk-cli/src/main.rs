mod config;

use clap::{Parser, Subcommand};
use config::HuskConfig;
use husk_core::HuskError;
use husk_host::server::{host_router, HostState};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "husk")]
#[command(about = "Host a prebuilt web bundle with runtime secret injection")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the bundle inside the host page
    Serve {
        #[arg(short, long, help = "Override the configured port")]
        port: Option<u16>,
        #[arg(short, long, help = "Override the configured bind address")]
        bind: Option<String>,
        #[arg(short = 'f', long, default_value = "husk.toml", help = "Path to config file")]
        config: String,
    },
    /// Run load + inject once and print the final HTML to stdout
    Render {
        #[arg(short = 'f', long, default_value = "husk.toml", help = "Path to config file")]
        config: String,
        #[arg(short, long, help = "Write the HTML to a file instead of stdout")]
        out: Option<String>,
    },
    /// Verify the bundle is present and report what would be served
    Check {
        #[arg(short = 'f', long, default_value = "husk.toml", help = "Path to config file")]
        config: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "husk=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            port,
            bind,
            config: config_path,
        } => run_serve(config_path, port, bind).await,
        Commands::Render {
            config: config_path,
            out,
        } => run_render(config_path, out),
        Commands::Check {
            config: config_path,
        } => run_check(config_path),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run_serve(
    config_path: String,
    port: Option<u16>,
    bind: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = HuskConfig::load_or_default(&config_path)?;
    let port = port.unwrap_or(config.server.port);
    let bind = bind.unwrap_or(config.server.bind);
    let bundle_dir = PathBuf::from(&config.bundle.dir);

    if !husk_bundle::index_path(&bundle_dir).exists() {
        info!(dir = %bundle_dir.display(), "bundle not found yet, remediation page will be served");
    }
    if config.secrets.is_empty() {
        info!("no secrets configured, env values will be empty strings");
    }

    let state = Arc::new(HostState::new(bundle_dir, config.secrets, config.frame));
    let router = host_router(state);

    let addr = format!("{}:{}", bind, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    println!("husk listening on {}", addr);
    println!("endpoints:");
    println!("  GET /        - host page (embedded frame)");
    println!("  GET /app     - injected bundle HTML");
    println!("  GET /health  - health check");
    println!("  GET /*       - bundle assets from {}", config.bundle.dir);

    axum::serve(listener, router).await?;

    Ok(())
}

fn run_render(config_path: String, out: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = HuskConfig::load_or_default(&config_path)?;
    let bundle_dir = PathBuf::from(&config.bundle.dir);

    match husk_bundle::prepare(&bundle_dir, &config.secrets) {
        Ok(html) => {
            match out {
                Some(path) => {
                    std::fs::write(&path, &html)?;
                    println!("wrote {} bytes to {}", html.len(), path);
                }
                None => print!("{}", html),
            }
            Ok(())
        }
        Err(HuskError::BundleMissing(path)) => {
            eprintln!("build folder not found: {}", path.display());
            eprintln!("quick fix:");
            eprintln!("  1. open your terminal");
            eprintln!("  2. run `npm install`");
            eprintln!("  3. run `npm run build`");
            eprintln!("  4. commit and push the dist/ folder");
            Err(HuskError::BundleMissing(path).into())
        }
        Err(e) => Err(e.into()),
    }
}

fn run_check(config_path: String) -> Result<(), Box<dyn std::error::Error>> {
    let config = HuskConfig::load_or_default(&config_path)?;
    let bundle_dir = PathBuf::from(&config.bundle.dir);
    let index = husk_bundle::index_path(&bundle_dir);

    println!("--- husk check ---");
    println!("bundle dir: {}", bundle_dir.display());

    if !index.exists() {
        println!("index.html: MISSING");
        println!("the host would serve the remediation page");
        return Ok(());
    }

    let html = husk_bundle::load_index(&bundle_dir)?;
    println!("index.html: {} bytes", html.len());

    if html.contains("<head>") {
        println!("<head> tag: found, secrets will be injected");
    } else {
        println!("<head> tag: MISSING, bundle would be served unchanged");
    }

    let s = &config.secrets;
    println!(
        "secrets: API_KEY {}, SUPABASE_URL {}, SUPABASE_KEY {}",
        set_or_empty(&s.api_key),
        set_or_empty(&s.supabase_url),
        set_or_empty(&s.supabase_key)
    );
    println!(
        "frame: height {}px, scrolling {}",
        config.frame.height,
        if config.frame.scrolling { "on" } else { "off" }
    );
    println!(
        "server: {}:{}",
        config.server.bind, config.server.port
    );

    Ok(())
}

fn set_or_empty(value: &str) -> &'static str {
    if value.is_empty() {
        "empty"
    } else {
        "set"
    }
}
