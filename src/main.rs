use clap::{Parser, Subcommand};
use inkpress::site::Site;
use inkpress::{config, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "inkpress")]
#[command(about = "Static site generator for markdown articles")]
#[command(long_about = "\
Static site generator for markdown articles

Run without arguments in a project directory to build the site.

Project structure:

  project/
  ├── site.toml                    # Config (optional, see gen-config)
  ├── CNAME                        # Copied to docs/CNAME (optional)
  ├── content/
  │   ├── 2024-01-01-hello.md      # Article (needs title + date)
  │   └── draft.md                 # No date = skipped
  ├── templates/
  │   ├── article.html             # One page per article
  │   ├── index.html               # docs/index.html
  │   └── archive.html             # docs/articles/index.html
  └── assets/                      # Copied to docs/assets (optional)

Article frontmatter:

  ---
  title: \"Hello, World!\"
  date: 2024-01-01
  summary: Optional one-liner
  ---
  # Markdown body

Files are listed newest-first by filename, so prefix them with a date.
The output directory is deleted and regenerated on every build.")]
#[command(version)]
struct Cli {
    /// Project root
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Config file (defaults to site.toml in the project root)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Build the site (default)
    Build,
    /// Validate content without writing output
    Check,
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command.as_ref().unwrap_or(&Command::Build) {
        Command::Build => {
            let site = open_site(&cli)?;
            println!("==> Building {}", cli.root.display());
            let report = site.build()?;
            output::print_build_output(&report);
            println!("==> Build complete: {}", report.output_dir.display());
        }
        Command::Check => {
            let site = open_site(&cli)?;
            println!("==> Checking {}", site.config().content_path(&cli.root).display());
            let collection = site.check()?;
            output::print_check_output(&collection);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load the config (explicit `--config` or `site.toml` under the root) and
/// prepare the site.
fn open_site(cli: &Cli) -> Result<Site, Box<dyn std::error::Error>> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| cli.root.join(config::CONFIG_FILE));
    let site_config = config::load_config_file(&config_path)?;
    Ok(Site::new(&cli.root, site_config)?)
}
