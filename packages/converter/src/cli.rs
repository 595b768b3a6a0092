//! Command-line interface for the converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{
    ConverterOptions, DEFAULT_BULLET_SECTIONS_FILE, DEFAULT_COMMON_JS_ADDON_FILE,
    DEFAULT_SECTIONS_FILE,
};
use crate::converter::{convert, ConversionSummary};
use crate::error::Result;

/// PatternPedia Converter - Turn a pattern repository XML file into a MediaWiki import.
#[derive(Parser)]
#[command(name = "patternpedia-converter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Run verbosely (debug logging unless RUST_LOG is set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a pattern repository into a MediaWiki export.
    Convert {
        /// The repository XML file to convert
        #[arg(short, long = "input-file")]
        input: PathBuf,

        /// The file the MediaWiki export is written to
        #[arg(short, long = "output-file")]
        output: PathBuf,

        /// The file the Common.js fragment is written to
        #[arg(short, long = "common-js-file")]
        common_js: PathBuf,

        /// The file the MediaWiki:Mainpage fragment is written to
        #[arg(short, long = "mainpage-file")]
        mainpage: PathBuf,

        /// Line-delimited list of section names
        #[arg(long, default_value = DEFAULT_SECTIONS_FILE)]
        sections: PathBuf,

        /// Line-delimited list of sections rendered as bullet lists
        #[arg(long, default_value = DEFAULT_BULLET_SECTIONS_FILE)]
        bullet_sections: PathBuf,

        /// YAML vocabulary file (overrides --sections and --bullet-sections)
        #[arg(long)]
        vocabulary: Option<PathBuf>,

        /// Script appended verbatim to the Common.js fragment
        #[arg(long, default_value = DEFAULT_COMMON_JS_ADDON_FILE)]
        common_js_addon: PathBuf,
    },
}

impl Commands {
    /// Resolve the convert arguments into run options.
    #[must_use]
    pub fn to_options(&self) -> ConverterOptions {
        let Self::Convert {
            input,
            output,
            common_js,
            mainpage,
            sections,
            bullet_sections,
            vocabulary,
            common_js_addon,
        } = self;

        let options = ConverterOptions::new(input, output, common_js, mainpage)
            .with_sections_files(sections, bullet_sections)
            .with_common_js_addon_file(common_js_addon);
        match vocabulary {
            Some(path) => options.with_vocabulary_file(path),
            None => options,
        }
    }
}

/// Run an already parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    let options = cli.command.to_options();
    convert_command(&options)
}

/// Execute the convert command.
fn convert_command(options: &ConverterOptions) -> Result<()> {
    println!(
        "{} {}",
        style("Converting").bold(),
        style(options.input_file.display()).cyan()
    );
    println!();

    // Create progress spinner
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Converting repository...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let summary = match convert(options) {
        Ok(summary) => summary,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();
    print_summary(&summary);

    Ok(())
}

fn print_summary(summary: &ConversionSummary) {
    println!("  Categories: {}", summary.categories);
    println!("  Properties: {}", summary.properties);
    println!("  Patterns: {}", summary.patterns);
    println!("  Layout: {}", style(summary.layout).green());
    match summary.depth {
        Some(depth) => println!("  Tree depth: {}", depth.as_usize()),
        None => println!(
            "  Tree depth: {}",
            style("tree cannot be generated").yellow().bold()
        ),
    }

    println!();
    for path in &summary.written {
        println!("{} {}", style("Saved to:").green().bold(), path.display());
    }
}
