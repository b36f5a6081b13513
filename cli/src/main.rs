//! unscan CLI - document structure reconstruction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unscan::{JsonFormat, LayoutConfig, ParseOptions, RenderOptions};

#[derive(Parser)]
#[command(name = "unscan")]
#[command(version)]
#[command(about = "Reconstruct document structure from OCR token dumps", long_about = None)]
struct Cli {
    /// Input TSV files
    #[arg(value_name = "FILE")]
    inputs: Vec<PathBuf>,

    /// Output directory
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert TSV dumps to all formats (DOCX, Markdown, text, JSON)
    Convert {
        /// Input TSV files
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Convert TSV dumps to a DOCX document
    Docx {
        /// Input TSV files
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Convert TSV dumps to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input TSV files
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Include YAML frontmatter
        #[arg(short, long)]
        frontmatter: bool,
    },

    /// Convert TSV dumps to plain text
    Text {
        /// Input TSV files
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Convert TSV dumps to JSON
    Json {
        /// Input TSV files
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show reconstructed document information
    Info {
        /// Input TSV file
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
        Some(Commands::Convert { inputs, output }) => cmd_convert(&inputs, output.as_deref()),
        Some(Commands::Docx { inputs, output }) => cmd_docx(&inputs, output.as_deref()),
        Some(Commands::Markdown {
            inputs,
            output,
            frontmatter,
        }) => cmd_markdown(&inputs, output.as_deref(), frontmatter),
        Some(Commands::Text { inputs, output }) => cmd_text(&inputs, output.as_deref()),
        Some(Commands::Json {
            inputs,
            output,
            compact,
        }) => cmd_json(&inputs, output.as_deref(), compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if inputs are provided
            if !cli.inputs.is_empty() {
                cmd_convert(&cli.inputs, cli.output.as_deref())
            } else {
                println!("{}", "Usage: unscan <FILE...> [-o OUTPUT]".yellow());
                println!("       unscan --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn reconstruct(inputs: &[PathBuf]) -> Result<unscan::Document, Box<dyn std::error::Error>> {
    // Lenient mode: keep going past malformed rows in real-world dumps.
    let mut doc = unscan::process_files_with_options(
        inputs,
        ParseOptions::new().lenient(),
        &LayoutConfig::default(),
    )?;
    if doc.metadata.title.is_none() {
        doc.metadata.title = inputs
            .first()
            .and_then(|p| p.file_stem())
            .map(|s| s.to_string_lossy().to_string());
    }
    Ok(doc)
}

fn cmd_convert(
    inputs: &[PathBuf],
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = inputs
            .first()
            .and_then(|p| p.file_stem())
            .unwrap_or_default()
            .to_string_lossy();
        PathBuf::from(format!("{}_output", stem))
    });

    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(4);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Reconstructing structure...");
    let doc = reconstruct(inputs)?;
    pb.inc(1);

    let render_options = RenderOptions::new().with_frontmatter(true);

    pb.set_message("Generating DOCX...");
    let docx = unscan::render::to_docx(&doc, &render_options)?;
    fs::write(output_dir.join("document.docx"), &docx)?;
    pb.inc(1);

    pb.set_message("Generating Markdown...");
    let markdown = unscan::render::to_markdown(&doc, &render_options)?;
    fs::write(output_dir.join("extract.md"), &markdown)?;
    pb.inc(1);

    pb.set_message("Generating text and JSON...");
    let text = unscan::render::to_text(&doc, &render_options)?;
    fs::write(output_dir.join("extract.txt"), &text)?;

    let json = unscan::render::to_json(&doc, JsonFormat::Pretty)?;
    fs::write(output_dir.join("content.json"), &json)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    println!("  {} document.docx", "├─".dimmed());
    println!("  {} extract.md", "├─".dimmed());
    println!("  {} extract.txt", "├─".dimmed());
    println!("  {} content.json", "└─".dimmed());

    Ok(())
}

fn cmd_docx(inputs: &[PathBuf], output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let doc = reconstruct(inputs)?;
    let bytes = unscan::render::to_docx(&doc, &RenderOptions::default())?;

    let path = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("document.docx"));
    fs::write(&path, &bytes)?;
    println!("{} {}", "Saved to".green(), path.display());

    Ok(())
}

fn cmd_markdown(
    inputs: &[PathBuf],
    output: Option<&Path>,
    frontmatter: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = reconstruct(inputs)?;
    let render_options = RenderOptions::new().with_frontmatter(frontmatter);
    let markdown = unscan::render::to_markdown(&doc, &render_options)?;

    if let Some(path) = output {
        fs::write(path, &markdown)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", markdown);
    }

    Ok(())
}

fn cmd_text(inputs: &[PathBuf], output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let doc = reconstruct(inputs)?;
    let text = unscan::render::to_text(&doc, &RenderOptions::default())?;

    if let Some(path) = output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }

    Ok(())
}

fn cmd_json(
    inputs: &[PathBuf],
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = reconstruct(inputs)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = unscan::render::to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let format = unscan::detect::detect_format_from_path(input)?;
    let doc = reconstruct(&[input.to_path_buf()])?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format);
    println!("{}: {}", "Pages".bold(), doc.metadata.page_count);
    println!("{}: {}", "Words".bold(), doc.metadata.word_count);
    println!("{}: {}", "Paragraphs".bold(), doc.paragraph_count());

    let headings = doc
        .pages
        .iter()
        .flat_map(|p| p.paragraphs.iter())
        .filter(|p| p.role.is_heading())
        .count();
    println!("{}: {}", "Headings".bold(), headings);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unscan".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document structure reconstruction tool");
    println!();
    println!(
        "Repository: {}",
        "https://github.com/unscan-rs/unscan".dimmed()
    );
    println!("License: MIT");
}
