//! # Stipplecard CLI
//!
//! Command-line interface for rendering and serving stipple cards.
//!
//! ## Usage
//!
//! ```bash
//! # Serve cards over HTTP, saving each one under ./images
//! stipplecard serve
//!
//! # Serve, uploading each card to a blob store
//! STIPPLE_BLOB_TOKEN=... stipplecard serve --storage blob
//!
//! # Render one card to a file
//! stipplecard render --color "#3366CC" --seed 7 --out card.png
//! ```
//!
//! Logs are written at `info` by default; set `RUST_LOG` (e.g.
//! `RUST_LOG=stipplecard=debug,tower_http=debug`) to change it.

use clap::{Parser, Subcommand, ValueEnum};
use rand::{SeedableRng, rngs::StdRng};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use stipplecard::{
    StippleError,
    art::Stipple,
    color::{self, Palette},
    render,
    server::{self, DEFAULT_LISTEN_ADDR, ServerConfig},
    storage::{StorageConfig, blob::DEFAULT_BLOB_URL},
};

/// Stipplecard - complementary color stipple cards
#[derive(Parser, Debug)]
#[command(name = "stipplecard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve cards over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, env = "STIPPLE_LISTEN", default_value = DEFAULT_LISTEN_ADDR)]
        listen: String,

        /// Where rendered cards are persisted
        #[arg(long, env = "STIPPLE_STORAGE", value_enum, default_value_t = StorageKind::Local)]
        storage: StorageKind,

        /// Directory for local storage
        #[arg(long, env = "STIPPLE_IMAGES_DIR", default_value = "images")]
        images_dir: PathBuf,

        /// Blob store endpoint
        #[arg(long, env = "STIPPLE_BLOB_URL", default_value = DEFAULT_BLOB_URL)]
        blob_url: String,

        /// Bearer token for the blob store
        #[arg(long, env = "STIPPLE_BLOB_TOKEN", hide_env_values = true)]
        blob_token: Option<String>,
    },

    /// Render a single card to a PNG file
    Render {
        /// Seed color, e.g. "#3366CC" (random if omitted)
        #[arg(long)]
        color: Option<String>,

        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Output PNG path
        #[arg(long, value_name = "FILE", default_value = "card.png")]
        out: PathBuf,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum StorageKind {
    Local,
    Blob,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StippleError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            listen,
            storage,
            images_dir,
            blob_url,
            blob_token,
        } => {
            let storage = match storage {
                StorageKind::Local => StorageConfig::Local { dir: images_dir },
                StorageKind::Blob => StorageConfig::Blob {
                    base_url: blob_url,
                    token: blob_token,
                },
            };

            server::serve(ServerConfig {
                listen_addr: listen,
                storage,
            })
            .await
        }

        Commands::Render {
            color: requested,
            seed,
            out,
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let seed_color = requested.unwrap_or_else(|| color::random_color(&mut rng));
            let palette = Palette::from_seed(&seed_color);

            let stipple = Stipple::new(palette);
            println!("Rendering card ({})...", stipple);
            if !stipple.palette().base.is_finite() {
                println!("Warning: '{}' is not a hex color, dots will not show", seed_color);
            }
            let canvas = stipple.render(&mut rng);
            let png = render::encode_png(&canvas)?;
            tokio::fs::write(&out, &png).await?;
            println!("Saved to {}", out.display());
            Ok(())
        }
    }
}
