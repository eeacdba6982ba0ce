//! htmlpart CLI - HTML part rendering tool

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use htmlpart::render::{body_to_json, total_stats};
use htmlpart::{load_file, HtmlPart, JsonFormat, LinkedResource, Node, RenderStats};

#[derive(Parser)]
#[command(name = "htmlpart")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Render HTML part documents to inline-styled markup", long_about = None)]
struct Cli {
    /// Input JSON document
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON document to HTML
    Render {
        /// Input JSON document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output HTML file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Write the resource manifest to this file
        #[arg(long, value_name = "FILE")]
        manifest: Option<PathBuf>,

        /// Content identifier prefix
        #[arg(long, env = "HTMLPART_CID_PREFIX")]
        cid_prefix: Option<String>,

        /// Content identifier domain
        #[arg(long, env = "HTMLPART_CID_DOMAIN")]
        cid_domain: Option<String>,

        /// Print render statistics
        #[arg(long)]
        stats: bool,
    },

    /// Render several JSON documents in parallel
    Batch {
        /// Input JSON documents
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: PathBuf,

        /// Content identifier prefix
        #[arg(long, env = "HTMLPART_CID_PREFIX")]
        cid_prefix: Option<String>,

        /// Content identifier domain
        #[arg(long, env = "HTMLPART_CID_DOMAIN")]
        cid_domain: Option<String>,
    },

    /// Render a document and load every inline resource
    Check {
        /// Input JSON document
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show document statistics
    Info {
        /// Input JSON document
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Render {
            input,
            output,
            manifest,
            cid_prefix,
            cid_domain,
            stats,
        }) => cmd_render(
            &input,
            output.as_deref(),
            manifest.as_deref(),
            builder(cid_prefix, cid_domain),
            stats,
        ),
        Some(Commands::Batch {
            inputs,
            output,
            cid_prefix,
            cid_domain,
        }) => cmd_batch(&inputs, &output, builder(cid_prefix, cid_domain)),
        Some(Commands::Check { input }) => cmd_check(&input),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: render to stdout if input is provided
            if let Some(input) = cli.input {
                cmd_render(&input, None, None, HtmlPart::new(), false)
            } else {
                println!("{}", "Usage: htmlpart <FILE.json>".yellow());
                println!("       htmlpart --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn builder(cid_prefix: Option<String>, cid_domain: Option<String>) -> HtmlPart {
    let mut builder = HtmlPart::new();
    if let Some(prefix) = cid_prefix {
        builder = builder.with_content_id_prefix(prefix);
    }
    if let Some(domain) = cid_domain {
        builder = builder.with_content_id_domain(domain);
    }
    builder
}

fn cmd_render(
    input: &Path,
    output: Option<&Path>,
    manifest: Option<&Path>,
    builder: HtmlPart,
    stats: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("rendering {}", input.display());
    let doc = load_file(input)?;
    let builder = if stats { builder.with_stats() } else { builder };
    let body = builder.render(&doc)?;
    log::info!(
        "{} bytes of markup, {} inline resources",
        body.markup_len(),
        body.resources.len()
    );

    if let Some(path) = output {
        fs::write(path, &body.markup)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", body.markup);
    }

    if let Some(path) = manifest {
        fs::write(path, body_to_json(&body, JsonFormat::Pretty)?)?;
        println!("{} {}", "Manifest saved to".green(), path.display());
    }

    if stats {
        println!();
        print_stats(&body.stats);
    }

    Ok(())
}

fn cmd_batch(
    inputs: &[PathBuf],
    output_dir: &Path,
    builder: HtmlPart,
) -> Result<(), Box<dyn std::error::Error>> {
    let stems = output_stems(inputs)?;
    fs::create_dir_all(output_dir)?;

    let pb = ProgressBar::new(inputs.len() as u64 * 2);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Loading documents...");
    let mut docs: Vec<Node> = Vec::with_capacity(inputs.len());
    for input in inputs {
        docs.push(load_file(input)?);
        pb.inc(1);
    }

    pb.set_message("Rendering...");
    let builder = builder.with_stats();
    let bodies = builder.render_all(&docs)?;

    pb.set_message("Writing output...");
    for (stem, body) in stems.iter().zip(&bodies) {
        let html = output_dir.join(format!("{}.html", stem));
        log::debug!("writing {}", html.display());
        fs::write(html, &body.markup)?;
        fs::write(
            output_dir.join(format!("{}.json", stem)),
            body_to_json(body, JsonFormat::Pretty)?,
        )?;
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    for (i, stem) in stems.iter().enumerate() {
        let branch = if i + 1 == stems.len() { "└─" } else { "├─" };
        println!("  {} {}.html, {}.json", branch.dimmed(), stem, stem);
    }

    let total = total_stats(&bodies);
    println!(
        "\n{} {} documents, {} inline resources",
        "Rendered".green().bold(),
        bodies.len(),
        total.image_count
    );

    Ok(())
}

/// Output file stems for a batch, one per input.
///
/// Inputs from different directories may share a file name; that is
/// rejected up front so no output silently overwrites another.
fn output_stems(inputs: &[PathBuf]) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let mut seen: HashMap<String, &Path> = HashMap::with_capacity(inputs.len());
    let mut stems = Vec::with_capacity(inputs.len());
    for input in inputs {
        let stem = input
            .file_stem()
            .ok_or_else(|| format!("Not a file: {}", input.display()))?
            .to_string_lossy()
            .into_owned();
        if let Some(previous) = seen.insert(stem.clone(), input) {
            return Err(format!(
                "Duplicate output name '{}': {} and {}",
                stem,
                previous.display(),
                input.display()
            )
            .into());
        }
        stems.push(stem);
    }
    Ok(stems)
}

fn cmd_check(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_file(input)?;
    let body = HtmlPart::new().render(&doc)?;
    let base = input.parent().unwrap_or_else(|| Path::new("."));
    log::info!(
        "checking {} inline resources of {}",
        body.resources.len(),
        input.display()
    );

    println!("{}", "Inline Resources".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let mut total = 0;
    for resource in &body.resources {
        // Relative paths are resolved against the document's directory
        let resolved = LinkedResource::new(
            resource.content_id.clone(),
            base.join(&resource.source_path).to_string_lossy(),
        );
        let inline = resolved.load()?;
        total += inline.size();
        println!(
            "{} {} {} ({} bytes)",
            resource.cid_url().bold(),
            inline.mime_type.dimmed(),
            resource.source_path,
            inline.size()
        );
    }

    println!(
        "\n{} {} resources, {} bytes",
        "OK".green().bold(),
        body.resources.len(),
        total
    );

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_file(input)?;
    let body = HtmlPart::new().with_stats().render(&doc)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Markup bytes".bold(), body.markup_len());
    println!("{}: {}", "Resources".bold(), body.resources.len());

    println!();
    print_stats(&body.stats);

    Ok(())
}

fn print_stats(stats: &RenderStats) {
    println!("{}", "Render Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!("{}: {}", "Rows".bold(), stats.row_count);
    println!("{}: {}", "Cells".bold(), stats.cell_count);
    println!("{}: {}", "Lists".bold(), stats.list_count);
    println!("{}: {}", "List items".bold(), stats.list_item_count);
    println!("{}: {}", "Links".bold(), stats.link_count);
    println!("{}: {}", "Images".bold(), stats.image_count);
    println!("{}: {}", "Tags".bold(), stats.tag_count);
    println!("{}: {}", "Text runs".bold(), stats.text_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    if stats.empty_count > 0 {
        println!(
            "{}: {}",
            "Skipped nodes".yellow().bold(),
            stats.empty_count
        );
    }
}

fn cmd_version() {
    println!("{} {}", "htmlpart".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("HTML part rendering tool");
    println!();
    println!(
        "Repository: {}",
        "https://github.com/iyulab/htmlpart".dimmed()
    );
    println!("License: MIT");
}
