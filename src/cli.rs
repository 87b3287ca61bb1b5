//! The CLI for `sitedraft`.

use crate::{
    ctx::SdContext, errors::SessionError, settings::Settings, subcommands::Subcommands,
};
use anyhow::{anyhow, Result};
use clap::{
    builder::styling::{AnsiColor, Color, Style},
    ArgAction, Args, Parser,
};
use tracing::Level;

const ABOUT: &str =
    "sitedraft edits a git-hosted static site through reviewable drafts, and publishes them.";

/// The CLI application for `sitedraft`.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
#[command(about = ABOUT, version, styles = cli_styles())]
pub struct Cli {
    /// Verbosity level (0-4)
    #[arg(short, action = ArgAction::Count)]
    pub v: u8,
    /// The site being edited
    #[command(flatten)]
    pub site: SiteArgs,
    /// The subcommand to run
    #[clap(subcommand)]
    pub subcommand: Subcommands,
}

/// Identity of the site and file being edited.
#[derive(Args, Debug, Clone, Eq, PartialEq)]
pub struct SiteArgs {
    /// Owner of the site's repository
    #[arg(long, env = "SITEDRAFT_OWNER")]
    pub owner: String,
    /// Name of the site's repository
    #[arg(long, env = "SITEDRAFT_REPO")]
    pub repo: String,
    /// The branch the site is built from
    #[arg(long, env = "SITEDRAFT_DEFAULT_BRANCH", default_value = "main")]
    pub default_branch: String,
    /// Public root of the deployed site
    #[arg(long, env = "SITEDRAFT_SITE_ROOT")]
    pub site_root: Option<String>,
    /// Branch to open the session on, if not the default branch
    #[arg(long)]
    pub branch: Option<String>,
    /// The file to edit
    #[arg(long, short)]
    pub file: Option<String>,
}

impl Cli {
    /// Run the CLI application with the given arguments.
    pub async fn run(self) -> Result<()> {
        let Self {
            site, subcommand, ..
        } = self.init_tracing_subscriber()?;

        let settings = Settings::load()?;
        let ctx = SdContext::open(settings, site)?;
        subcommand
            .run(ctx)
            .await
            .map_err(|e| match e.downcast_ref::<SessionError>() {
                Some(err) if err.is_retryable() => {
                    e.context("The site could not be reached. Try again.")
                }
                _ => e,
            })
    }

    /// Initializes the tracing subscriber
    ///
    /// # Returns
    /// - `Result<Self>` - Ok if successful, Err otherwise.
    pub(crate) fn init_tracing_subscriber(self) -> Result<Self> {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(match self.v {
                0 => Level::ERROR,
                1 => Level::WARN,
                2 => Level::INFO,
                3 => Level::DEBUG,
                _ => Level::TRACE,
            })
            .with_writer(std::io::stderr)
            .finish();

        tracing::subscriber::set_global_default(subscriber).map_err(|e| anyhow!(e))?;

        Ok(self)
    }
}

/// Styles for the CLI application.
const fn cli_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Yellow))),
        )
        .header(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Yellow))),
        )
        .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
        .invalid(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
        .error(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
        .valid(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::White))))
}
