use anyhow::Result;
use clap::Parser;
use minus::Pager;
use std::path::PathBuf;
use walli_diff::Algorithm;
use walli_diff::areas::comparison::{Comparison, RenderOptions};
use walli_diff::artifacts::core::{PagerWriter, stdout_is_terminal};

#[derive(Parser)]
#[command(
    name = "walli-diff",
    version = "0.1.0",
    about = "Compare two files or project folders line by line",
    long_about = "Prints a line-by-line transcript of the differences between two files, \
    or between every file of two directory trees. Unchanged lines are indented, removed \
    lines are marked with '-' and added lines with '+'.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(index = 1, help = "The older file or directory")]
    older: PathBuf,
    #[arg(index = 2, help = "The newer file or directory")]
    newer: PathBuf,
    #[arg(
        short,
        long,
        value_enum,
        ignore_case = true,
        default_value_t = Algorithm::Myers,
        env = "WALLI_DIFF_ALGORITHM",
        help = "The diff algorithm to use"
    )]
    algorithm: Algorithm,
    #[arg(long, help = "Disable colored output")]
    no_color: bool,
    #[arg(long, help = "Write directly to stdout instead of a pager")]
    no_pager: bool,
    #[arg(long, help = "Only print per-file insertion and deletion counts")]
    stat: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let interactive = stdout_is_terminal();

    let color = interactive && !cli.no_color;
    colored::control::set_override(color);
    let options = RenderOptions::new(color, cli.stat);

    if interactive && !cli.no_pager {
        let pager = Pager::new();
        let comparison = Comparison::new(
            Box::new(PagerWriter::new(pager.clone())),
            cli.algorithm,
            options,
        );
        comparison.compare(&cli.older, &cli.newer).await?;

        PagerWriter::new(pager).page()?;
    } else {
        let comparison = Comparison::new(Box::new(std::io::stdout()), cli.algorithm, options);
        comparison.compare(&cli.older, &cli.newer).await?;
    }

    Ok(())
}
