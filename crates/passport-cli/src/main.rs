//! Passport CLI - export device passports to XLSX

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use passport_kit::prelude::*;
use passport_kit::{validate, SerialSequence};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "passport")]
#[command(author, version, about = "Device passport export tool")]
struct Cli {
    /// Log rendering details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a passport through its template and write an XLSX workbook
    Export {
        /// Template JSON file
        template: PathBuf,

        /// Passport JSON file
        passport: PathBuf,

        /// Output file (default: generated name inside --dir)
        #[arg(short, long, conflicts_with = "dir")]
        output: Option<PathBuf>,

        /// Output directory for the generated file name
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Number format for date cells without one
        #[arg(long)]
        date_format: Option<String>,

        /// Number format for date-time cells without one
        #[arg(long)]
        datetime_format: Option<String>,

        /// File name prefix
        #[arg(long)]
        prefix: Option<String>,

        /// Fail when any layout item had to be skipped
        #[arg(long)]
        strict: bool,
    },

    /// Check a template layout for dangling keys and overlapping items
    Validate {
        /// Template JSON file
        template: PathBuf,

        /// Treat every issue as an error
        #[arg(long)]
        strict: bool,
    },

    /// Show a template's fields and layout, or the cells a passport renders to
    Inspect {
        /// Template JSON file
        template: PathBuf,

        /// Passport JSON file to render
        passport: Option<PathBuf>,
    },

    /// Create empty passports for a template
    Scaffold {
        /// Template JSON file
        template: PathBuf,

        /// Asset tag prefix
        #[arg(long, default_value = "INV-")]
        tag_prefix: String,

        /// First asset tag number
        #[arg(long, default_value = "1")]
        start: u64,

        /// Zero-padded width of the asset tag number
        #[arg(long, default_value = "6")]
        width: usize,

        /// Number of passports to create
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Output directory (default: print to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Export {
            template,
            passport,
            output,
            dir,
            date_format,
            datetime_format,
            prefix,
            strict,
        } => {
            let mut options = ExportOptions::from_env();
            if let Some(format) = date_format {
                options = options.with_date_format(format);
            }
            if let Some(format) = datetime_format {
                options = options.with_datetime_format(format);
            }
            if let Some(prefix) = prefix {
                options = options.with_file_name_prefix(prefix);
            }
            export(&template, &passport, output.as_deref(), &dir, options, strict)
        }
        Commands::Validate { template, strict } => validate_template(&template, strict),
        Commands::Inspect { template, passport } => inspect(&template, passport.as_deref()),
        Commands::Scaffold {
            template,
            tag_prefix,
            start,
            width,
            count,
            output,
        } => scaffold(&template, &tag_prefix, start, width, count, output.as_deref()),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();
}

fn load_template(path: &Path) -> Result<Template> {
    Template::from_path(path)
        .with_context(|| format!("Failed to load template '{}'", path.display()))
}

fn load_passport(path: &Path) -> Result<Passport> {
    Passport::from_path(path)
        .with_context(|| format!("Failed to load passport '{}'", path.display()))
}

fn export(
    template_path: &Path,
    passport_path: &Path,
    output: Option<&Path>,
    dir: &Path,
    options: ExportOptions,
    strict: bool,
) -> Result<()> {
    let template = load_template(template_path)?;
    let passport = load_passport(passport_path)?;
    log::debug!("export options: {:?}", options);
    let exporter = PassportExporter::new(options);

    let export = exporter
        .export_bytes(&template, &passport)
        .with_context(|| format!("Failed to export passport '{}'", passport.asset_tag))?;

    for skipped in &export.report.skipped {
        eprintln!("Skipped {}", skipped);
    }
    if strict && !export.report.is_clean() {
        bail!(
            "{} layout items were skipped; nothing written",
            export.report.skipped.len()
        );
    }

    let path = match output {
        Some(path) => path.to_path_buf(),
        None => dir.join(&export.file_name),
    };
    std::fs::write(&path, &export.bytes)
        .with_context(|| format!("Failed to write '{}'", path.display()))?;

    eprintln!(
        "Wrote '{}' ({} bindings, {} tables, {} table rows)",
        path.display(),
        export.report.bindings,
        export.report.tables,
        export.report.table_rows
    );
    Ok(())
}

fn validate_template(path: &Path, strict: bool) -> Result<()> {
    let template = load_template(path)?;
    let issues = validate(&template);

    if issues.is_empty() {
        println!("{}: layout OK", path.display());
        return Ok(());
    }

    for issue in &issues {
        let level = if issue.is_fatal() { "error" } else { "warning" };
        println!("{}: {}", level, issue);
    }

    let fatal = issues.iter().filter(|issue| issue.is_fatal()).count();
    if fatal > 0 || strict {
        bail!("{} issues found in '{}'", issues.len(), path.display());
    }
    Ok(())
}

fn inspect(template_path: &Path, passport_path: Option<&Path>) -> Result<()> {
    let template = load_template(template_path)?;

    let Some(passport_path) = passport_path else {
        print_template(&template);
        return Ok(());
    };

    let passport = load_passport(passport_path)?;
    let (sheet, report) = default_exporter()
        .render(&template, &passport)
        .context("Failed to render passport")?;

    println!("Sheet: \"{}\"", sheet.name());
    if let Some(range) = sheet.used_range() {
        println!("Used range: {}", range);
    }
    for (address, cell) in sheet.cells() {
        println!(
            "{}\t{}\t{}\t{}",
            address,
            cell.value.type_name(),
            cell.value,
            cell.num_fmt.as_deref().unwrap_or("-")
        );
    }
    for range in sheet.merged_regions() {
        println!("merge\t{}", range);
    }
    for skipped in &report.skipped {
        println!("skipped\t{}", skipped);
    }
    Ok(())
}

fn print_template(template: &Template) {
    println!("Template: \"{}\" v{}", template.name, template.version);
    println!("Fields: {}", template.fields.len());
    for field in &template.fields {
        let kind = serde_json::to_value(field.field_type)
            .ok()
            .and_then(|value| value.as_str().map(str::to_string))
            .unwrap_or_default();
        println!("  {}\t{}\t{}", field.key, kind, field.label);
    }

    match &template.layout {
        Some(layout) => {
            println!("Layout:");
            println!("  Static cells: {}", layout.static_cells.len());
            println!("  Bindings: {}", layout.bindings.len());
            println!("  Tables: {}", layout.tables.len());
        }
        None => println!("Layout: none (export is not possible)"),
    }
}

fn scaffold(
    template_path: &Path,
    tag_prefix: &str,
    start: u64,
    width: usize,
    count: usize,
    output: Option<&Path>,
) -> Result<()> {
    let template = load_template(template_path)?;
    let tags = SerialSequence::new(tag_prefix, width, start);

    let mut stdout = io::stdout().lock();
    for _ in 0..count {
        let passport = Passport::scaffold(&template, tags.next_id());
        let json = serde_json::to_string_pretty(&passport).context("Failed to serialize passport")?;

        match output {
            Some(dir) => {
                let path = dir.join(format!("{}.json", passport.asset_tag));
                std::fs::write(&path, json)
                    .with_context(|| format!("Failed to write '{}'", path.display()))?;
                eprintln!("Wrote '{}'", path.display());
            }
            None => {
                writeln!(stdout, "{}", json).context("Failed to write to stdout")?;
            }
        }
    }
    Ok(())
}
