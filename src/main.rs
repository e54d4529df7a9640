use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use paneshop::config::{Config, OrientationMode};
use paneshop::logging::init_tracing;
use paneshop::selection::FileStateBackend;
use paneshop::ui::runtime;

/// Two-pane product browser that adapts to terminal orientation.
#[derive(Debug, Parser)]
#[command(name = "paneshop", version, about)]
struct Cli {
    /// Config file (default: ~/.config/paneshop/config.toml).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override how orientation is reported.
    #[arg(long, value_enum)]
    orientation: Option<OrientationMode>,

    /// Where the selection is saved between runs.
    #[arg(long, value_name = "PATH")]
    state_file: Option<PathBuf>,

    /// Start with no selection and do not save one on exit.
    #[arg(long)]
    no_restore: bool,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<Config> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::load_from(&path)
            .with_context(|| format!("loading config from {}", path.display()))?;

        if let Some(mode) = self.orientation {
            config.ui.orientation = mode;
        }
        if let Some(state_file) = &self.state_file {
            config.state.path = Some(state_file.clone());
        }
        if self.no_restore {
            config.state.restore = false;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.load_config()?;

    let backend = config.state.restore.then(|| {
        FileStateBackend::new(
            config
                .state
                .path
                .clone()
                .unwrap_or_else(FileStateBackend::default_path),
        )
    });
    tracing::info!(
        state_file = backend.as_ref().map(|b| b.path().display().to_string()),
        orientation = ?config.ui.orientation,
        "paneshop starting"
    );

    runtime::run(
        &config,
        backend.as_ref().map(|b| b as &dyn paneshop::selection::StateBackend),
    )
    .context("running terminal UI")?;
    Ok(())
}
