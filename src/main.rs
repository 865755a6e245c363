use anyhow::Result;
use clap::Parser;
use ghrel::{commands, config, runtime::RealRuntime};
use std::path::PathBuf;

/// ghrel - GitHub release page generator
///
/// Fetch a project's releases from GitHub and render the download page:
/// the latest release with per-platform download links, a version selector
/// and the details of a chosen release.
///
/// If the GITHUB_TOKEN environment variable is set, it will be used for authentication.
///
/// Examples:
///   ghrel render -o releases.html      # Write the page for the default repository
///   ghrel --repo owner/repo list       # List versions of owner/repo
#[derive(Parser, Debug)]
#[command(author, version = env!("GHREL_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// The GitHub repository in the format "owner/repo"
    #[arg(
        long = "repo",
        env = "GHREL_REPO",
        value_name = "OWNER/REPO",
        global = true
    )]
    pub repo: Option<String>,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(
        long = "api-url",
        env = "GHREL_API_URL",
        value_name = "URL",
        global = true
    )]
    pub api_url: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Render the release page as HTML
    Render(RenderArgs),

    /// List available versions
    List(ListArgs),

    /// Show the details of one release
    Show(ShowArgs),
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Write the page to this file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Pre-select the release at this position in the version list
    #[arg(long, value_name = "INDEX")]
    pub select: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Print normalized releases as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Zero-based position of the release (0 is the latest)
    #[arg(value_name = "INDEX")]
    pub index: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = RealRuntime;

    let config = config::Config::load(&runtime, cli.repo.as_deref(), cli.api_url.as_deref())?;
    let provider = config::build_provider(&config)?;

    match cli.command {
        Commands::Render(args) => {
            commands::render(
                &runtime,
                &provider,
                &config.repo,
                args.output.as_deref(),
                args.select.as_deref(),
            )
            .await?
        }
        Commands::List(args) => commands::list(&runtime, &provider, &config.repo, args.json).await?,
        Commands::Show(args) => {
            commands::show(&runtime, &provider, &config.repo, &args.index).await?
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_render_parsing() {
        let cli = Cli::try_parse_from(["ghrel", "render", "-o", "out.html"]).unwrap();
        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.output, Some(PathBuf::from("out.html")));
                assert_eq!(args.select, None);
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_cli_render_select_parsing() {
        let cli = Cli::try_parse_from(["ghrel", "render", "--select", "2"]).unwrap();
        match cli.command {
            Commands::Render(args) => assert_eq!(args.select.as_deref(), Some("2")),
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_cli_global_repo_parsing() {
        let cli = Cli::try_parse_from(["ghrel", "--repo", "owner/repo", "list"]).unwrap();
        assert_eq!(cli.repo.as_deref(), Some("owner/repo"));

        let cli = Cli::try_parse_from(["ghrel", "list", "--repo", "owner/repo", "--json"]).unwrap();
        assert_eq!(cli.repo.as_deref(), Some("owner/repo"));
        match cli.command {
            Commands::List(args) => assert!(args.json),
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_show_parsing() {
        let cli = Cli::try_parse_from(["ghrel", "show", "3"]).unwrap();
        match cli.command {
            Commands::Show(args) => assert_eq!(args.index, "3"),
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_cli_no_subcommand_fails() {
        assert!(Cli::try_parse_from(["ghrel"]).is_err());
        assert!(Cli::try_parse_from(["ghrel", "show"]).is_err());
    }
}
