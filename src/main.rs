//! sef-dump - inspect Story Editor SEF files from the command line.

use std::process::ExitCode;

use clap::Parser;

use sef::{read_sef, SefDocument};

#[derive(Parser)]
#[command(name = "sef-dump")]
#[command(version, about = "Dump the chapter structure of a SEF file", long_about = None)]
#[command(after_help = "EXAMPLES:
    sef-dump story.sef              Show the chapter tree
    sef-dump -c 2 story.sef         Print chapter 2's text
    sef-dump --json story.sef       Emit the whole document as JSON")]
struct Cli {
    /// Input SEF file
    #[arg(value_name = "INPUT")]
    input: String,

    /// Print the text of one chapter (0-based index)
    #[arg(short, long, value_name = "N")]
    chapter: Option<usize>,

    /// Emit the decoded document as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let document = match read_sef(&cli.input) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = if cli.json {
        show_json(&document)
    } else if let Some(index) = cli.chapter {
        show_chapter(&document, index)
    } else {
        show_tree(&cli.input, &document);
        Ok(())
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn show_json(document: &SefDocument) -> Result<(), String> {
    let json = serde_json::to_string_pretty(document).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn show_chapter(document: &SefDocument, index: usize) -> Result<(), String> {
    let chapter = document
        .chapters
        .get(index)
        .ok_or_else(|| format!("no chapter {index} ({} total)", document.chapters.len()))?;
    println!("{}", chapter.content);
    Ok(())
}

fn show_tree(path: &str, document: &SefDocument) {
    println!("File: {path}");
    if let Some(ref title) = document.title {
        println!("Title: {title}");
    }
    println!("Chapters: {}", document.chapters.len());
    for (i, chapter) in document.chapters.iter().enumerate() {
        println!(
            "{:>3}  {}{} ({} chars)",
            i,
            "  ".repeat(chapter.depth),
            chapter.title,
            chapter.content.chars().count()
        );
    }
    if document.fidelity.is_degraded() {
        eprintln!("warning: decode fidelity degraded: {:?}", document.fidelity);
    }
}
