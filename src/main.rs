// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::indexing_slicing
    )
)]

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use gitlab_tag_protection::config::{load_provider_config, ConfigOverrides, ProviderConfig};
use gitlab_tag_protection::logging::{
    default_log_dir, init_logging, parse_rotation, LogConfig, LOG_FILENAME,
};
use gitlab_tag_protection::resource::{
    create_tag_protection, delete_tag_protection, import_tag_protection, read_tag_protection,
    schema, TagProtectionConfig, TagProtectionState,
};
use gitlab_tag_protection::GitLabClient;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

/// Manage GitLab protected tags as `gitlab_tag_protection` resources
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// GitLab personal or project access token
    #[arg(long, env = "GITLAB_TOKEN", global = true, hide_env_values = true)]
    token: Option<String>,

    /// GitLab API root (default: https://gitlab.com/api/v4/)
    #[arg(long, env = "GITLAB_BASE_URL", global = true)]
    base_url: Option<String>,

    /// PEM file with an additional trusted root certificate
    #[arg(long, env = "GITLAB_CACERT_FILE", global = true)]
    cacert_file: Option<PathBuf>,

    /// Skip TLS certificate verification (true/false)
    #[arg(long, env = "GITLAB_INSECURE", global = true)]
    insecure: Option<bool>,

    /// Enable JSON log format
    #[arg(long, env = "GITLAB_TAG_PROTECTION_LOG_JSON", global = true, default_value = "false")]
    log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "GITLAB_TAG_PROTECTION_LOG_ROTATION", global = true, default_value = "daily")]
    log_rotation: String,

    /// Custom log directory (default: ~/.gitlab-tag-protection/logs)
    #[arg(long, env = "GITLAB_TAG_PROTECTION_LOG_DIR", global = true)]
    log_dir: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Protect a tag pattern and print the resulting state
    Create {
        /// Project ID or namespace/name path
        #[arg(long)]
        project: String,
        /// Tag name or wildcard pattern
        #[arg(long)]
        tag: String,
        /// Role allowed to create matching tags
        #[arg(long)]
        create_access_level: String,
    },
    /// Read a protection by resource ID; prints null if it no longer exists
    Read {
        #[arg(long)]
        id: String,
    },
    /// Remove the protection for a project and tag
    Delete {
        #[arg(long)]
        project: String,
        #[arg(long)]
        tag: String,
    },
    /// Build state for an existing protection from "{project}:{tag}"
    Import { id: String },
    /// Print the resource schema
    Schema,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            token: self.token.clone(),
            base_url: self.base_url.clone(),
            cacert_file: self.cacert_file.clone(),
            insecure: self.insecure,
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

fn build_client(overrides: ConfigOverrides) -> Result<GitLabClient> {
    let config: ProviderConfig = load_provider_config()
        .wrap_err("Failed to load provider config")?
        .with_overrides(overrides);
    debug!("Using GitLab API at {}", config.gitlab.base_url);
    Ok(config.build_client()?)
}

async fn run(args: Args) -> Result<()> {
    let overrides = args.overrides();
    match args.command {
        Command::Create {
            project,
            tag,
            create_access_level,
        } => {
            let client = build_client(overrides)?;
            let config = TagProtectionConfig {
                project,
                tag,
                create_access_level,
            };
            let state = create_tag_protection(&client, &config).await?;
            print_json(&state)
        }
        Command::Read { id } => {
            let client = build_client(overrides)?;
            let state = read_tag_protection(&client, &id).await?;
            if state.is_none() {
                info!("Tag protection {} no longer exists", id);
            }
            print_json(&state)
        }
        Command::Delete { project, tag } => {
            let client = build_client(overrides)?;
            let state = TagProtectionState::new(project, tag, None);
            delete_tag_protection(&client, &state).await?;
            Ok(())
        }
        Command::Import { id } => print_json(&import_tag_protection(&id)?),
        Command::Schema => print_json(&schema()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = Args::parse();

    let log_dir = args.log_dir.as_deref().map_or_else(default_log_dir, PathBuf::from);
    let log_file = log_dir.join(LOG_FILENAME);

    let log_config = LogConfig {
        log_dir,
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        ..LogConfig::default()
    };

    if let Err(e) = init_logging(&log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return Err(e);
    }

    run(args).await
}
