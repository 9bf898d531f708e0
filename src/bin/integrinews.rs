//! Command line frontend for the IntegriNews classification core

use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Result};
use integrinews::{
    artifacts,
    extract::{self, NullDocumentSource},
    models::PooledScorer,
    pipelines::{fake_news::Classifier, Pipeline},
    session::{Session, Tally},
};
use pico_args::Arguments;

const HELP: &str = "\
Usage: integrinews [OPTIONS]

Classifies one article when --title is given, otherwise starts an
interactive session. In a session, enter a title, then the article text
terminated by an empty line; ':export PATH' writes the ledger to CSV and
':quit' exits. A body line of '@file PATH' reads the text from a file.

Options:
  -h, --help            Print help
  -p, --pipeline NAME   The pipeline to use (default: 'fake-news')
  -a, --artifacts DIR   Directory holding the model and vocabulary artifacts
  -t, --title TITLE     The article title
  -x, --text TEXT       The article text
  -f, --file PATH       Read the article text from a file instead
  -e, --export PATH     Export the session ledger to a CSV file on exit
";

#[derive(Debug)]
struct Args {
    /// Prints the usage menu
    help: bool,

    /// The pipeline to use
    pipeline: Option<String>,

    /// Directory holding the model and vocabulary artifacts
    artifacts: Option<PathBuf>,

    /// One-shot article title
    title: Option<String>,

    /// One-shot article text
    text: Option<String>,

    /// One-shot article text source file
    file: Option<PathBuf>,

    /// CSV destination for the ledger
    export: Option<PathBuf>,
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut pargs = Arguments::from_env();

    let args = Args {
        help: pargs.contains(["-h", "--help"]),
        pipeline: pargs.opt_value_from_str(["-p", "--pipeline"])?,
        artifacts: pargs.opt_value_from_str(["-a", "--artifacts"])?,
        title: pargs.opt_value_from_str(["-t", "--title"])?,
        text: pargs.opt_value_from_str(["-x", "--text"])?,
        file: pargs.opt_value_from_str(["-f", "--file"])?,
        export: pargs.opt_value_from_str(["-e", "--export"])?,
    };

    Ok(args)
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let args = parse_args()?;

    if args.help {
        println!("{}", HELP);
        return Ok(());
    }

    if let Some(pipeline) = args.pipeline.clone() {
        Pipeline::try_from(pipeline)?;
    }

    // Startup failures are fatal before anything interactive begins
    let base_dir = match &args.artifacts {
        Some(dir) => dir.clone(),
        None => artifacts::base_dir()?,
    };

    let vocabulary = artifacts::load_vocabulary(&base_dir)?;
    let scorer = artifacts::load_scorer(&base_dir)?;

    let classifier = Classifier::new(vocabulary, scorer);
    let mut session = Session::new();

    if args.title.is_some() || args.text.is_some() || args.file.is_some() {
        classify_once(&classifier, &mut session, &args)?;
    } else {
        run_session(&classifier, &mut session)?;
    }

    if let Some(path) = &args.export {
        session.export_csv(path)?;
        println!("Exported {} results to {}", session.len(), path.display());
    }

    Ok(())
}

/// Classify a single article given on the command line
fn classify_once(
    classifier: &Classifier<PooledScorer>,
    session: &mut Session,
    args: &Args,
) -> Result<()> {
    let title = args
        .title
        .clone()
        .ok_or_else(|| anyhow!("--title is required to classify"))?;

    let text = match (&args.text, &args.file) {
        (Some(text), None) => text.clone(),
        (None, Some(path)) => extract::extract_text(path, &NullDocumentSource)?,
        (Some(_), Some(_)) => return Err(anyhow!("--text and --file are mutually exclusive")),
        (None, None) => return Err(anyhow!("either --text or --file is required")),
    };

    let record = classifier.classify(session, &title, &text)?;

    println!("Classification Result: {}", record.result_text());
    print_tally(session.tally());

    Ok(())
}

/// The interactive session loop. Every error past this point is rendered to
/// the user and the loop continues; only startup failures abort the process.
fn run_session(classifier: &Classifier<PooledScorer>, session: &mut Session) -> Result<()> {
    println!("IntegriNews AI - Fake News Classifier");
    println!("Enter an article title to begin, ':export PATH' to save, ':quit' to exit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("\nTitle: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let title = line?.trim().to_string();

        if title == ":quit" {
            break;
        }

        if let Some(path) = title.strip_prefix(":export") {
            export(session, path.trim());
            continue;
        }

        if title.is_empty() {
            continue;
        }

        println!("Article text (finish with an empty line, or '@file PATH'):");

        let mut body = String::new();
        let mut aborted = false;

        while let Some(line) = lines.next() {
            let line = line?;

            if line.trim().is_empty() {
                break;
            }

            if let Some(path) = line.trim().strip_prefix("@file ") {
                match extract::extract_text(Path::new(path.trim()), &NullDocumentSource) {
                    Ok(text) => body = text,
                    Err(err) => {
                        log::error!("Failed to extract text from file: {}", err);
                        eprintln!("Error: failed to extract text from file: {}", err);
                        aborted = true;
                    }
                }
                break;
            }

            body.push_str(&line);
            body.push('\n');
        }

        if aborted {
            continue;
        }

        match classifier.classify(session, &title, &body) {
            Ok(record) => {
                println!("Classification Result: {}", record.result_text());
                print_tally(session.tally());
            }
            Err(err) => {
                log::error!("An error occurred during classification: {}", err);
                eprintln!("Error: {}", err);
            }
        }
    }

    Ok(())
}

/// Export the ledger, rendering any failure without ending the session
fn export(session: &Session, path: &str) {
    if path.is_empty() {
        eprintln!("Usage: :export PATH");
        return;
    }

    match session.export_csv(Path::new(path)) {
        Ok(()) => println!("Results exported successfully!"),
        Err(err) => {
            log::error!("Failed to export results: {}", err);
            eprintln!("Error: failed to export results: {}", err);
        }
    }
}

/// Print the fake/real ratio behind the frontend chart; an empty tally shows
/// the 50/50 placeholder
fn print_tally(tally: Tally) {
    let (real, fake) = if tally.is_empty() {
        (50.0, 50.0)
    } else {
        let total = tally.total() as f64;

        (
            tally.real as f64 * 100.0 / total,
            tally.fake as f64 * 100.0 / total,
        )
    };

    println!(
        "Classification Ratio: Real News {:.1}% | Fake News {:.1}%",
        real, fake
    );
}
