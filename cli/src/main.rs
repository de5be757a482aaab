//! docmark CLI - render documentation trees to cross-linked Markdown

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docmark::{
    build_dictionary, load_tree, Generator, GeneratorOptions, JsonFormat, UnknownTagPolicy,
};

#[derive(Parser)]
#[command(name = "docmark")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Render documentation trees to cross-linked Markdown", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Markdown pages from a documentation tree
    #[command(alias = "gen")]
    Generate {
        /// Documentation tree (JSON)
        #[arg(value_name = "TREE")]
        input: PathBuf,

        /// Destination directory
        #[arg(short = 'd', long, value_name = "DIR")]
        destination: PathBuf,

        /// File whose contents become the overview of module pages
        #[arg(long, value_name = "FILE")]
        overview: Option<PathBuf>,

        /// Path from the site URL to the document root
        #[arg(long, value_name = "PATH", default_value = "/", env = "DOCMARK_BASE_PATH")]
        base_path: String,

        /// Only render packages matching <moduleNameRegex#packageNameRegex>
        #[arg(long, value_name = "FILTER")]
        target_packages: Option<String>,

        /// Handling of unrecognized block tags
        #[arg(long, value_enum, default_value = "skip")]
        unknown_tags: UnknownTags,

        /// Render pages on a single thread
        #[arg(long)]
        sequential: bool,
    },

    /// Print the type dictionary as JSON
    Dictionary {
        /// Documentation tree (JSON)
        #[arg(value_name = "TREE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Only include packages matching <moduleNameRegex#packageNameRegex>
        #[arg(long, value_name = "FILTER")]
        target_packages: Option<String>,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
enum UnknownTags {
    /// Leave unknown tags out
    Skip,
    /// Render them with an error marker
    Marker,
}

impl From<UnknownTags> for UnknownTagPolicy {
    fn from(value: UnknownTags) -> Self {
        match value {
            UnknownTags::Skip => UnknownTagPolicy::Skip,
            UnknownTags::Marker => UnknownTagPolicy::Marker,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            input,
            destination,
            overview,
            base_path,
            target_packages,
            unknown_tags,
            sequential,
        } => {
            let mut options = GeneratorOptions::new(destination)
                .with_base_path(base_path)
                .with_unknown_tags(unknown_tags.into())
                .with_parallel(!sequential);
            if let Some(path) = overview {
                options = options.with_overview(path);
            }
            if let Some(filter) = target_packages {
                options = options.with_target_packages(filter);
            }
            cmd_generate(&input, &options)
        }
        Commands::Dictionary {
            input,
            output,
            compact,
            target_packages,
        } => cmd_dictionary(
            &input,
            output.as_deref(),
            compact,
            target_packages.as_deref(),
        ),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_generate(input: &Path, options: &GeneratorOptions) -> Result<(), Box<dyn std::error::Error>> {
    // Validate before reading the tree so configuration errors surface first
    let generator = Generator::new(options)?;
    let tree = load_tree(input)?;
    log::debug!("Loaded {} elements from {}", tree.len(), input.display());

    let pages = generator.render_pages(&tree)?;

    let pb = ProgressBar::new(pages.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut written = 0;
    for page in &pages {
        pb.set_message(page.path.display().to_string());
        generator.write_page(page)?;
        written += 1;
        pb.inc(1);
    }
    pb.finish_with_message("Done!");

    println!(
        "\n{} {} pages written to {}",
        "Done!".green().bold(),
        written,
        generator.config().destination.display()
    );

    Ok(())
}

fn cmd_dictionary(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    target_packages: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let tree = load_tree(input)?;
    let dictionary = build_dictionary(&tree, target_packages)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = docmark::render::to_json(&dictionary, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "docmark".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Markdown documentation generator");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/docmark".dimmed());
    println!("License: MIT");
}
