use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::info;

use termscan::TermScanner;

#[derive(Parser, Debug)]
#[command(name = "termscan")]
#[command(about = "Searches text for terms, expanding pronouns to their full person/number class")]
#[command(version)]
struct Args {
    /// Text to scan (runs the built-in demo queries when omitted)
    #[arg(long, requires = "terms")]
    text: Option<String>,

    /// Comma-separated term list; the separator is ", " (comma then space)
    #[arg(long, requires = "text")]
    terms: Option<String>,

    /// Emit one JSON record per scan instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct ScanRecord<'a> {
    text: &'a str,
    terms: &'a str,
    matches: &'a [String],
}

const DEMO_QUERIES: [(&str, &str); 4] = [
    ("The Customer is always right", "Customer, you"),
    ("The Customer is not our client", "Customer, us"),
    ("My rights cannot be abridged by myself, only the Client", "I, Client"),
    ("i) In this clause my documents are read", "Me"),
];

fn main() -> Result<()> {
    // WHY: structured JSON logging enables observability and debugging in production
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .init();

    let args = Args::parse();

    let scanner = TermScanner::with_default_rules()?;

    let queries: Vec<(String, String)> = match (&args.text, &args.terms) {
        (Some(text), Some(terms)) => vec![(text.clone(), terms.clone())],
        _ => DEMO_QUERIES
            .iter()
            .map(|(text, terms)| (text.to_string(), terms.to_string()))
            .collect(),
    };

    info!("Running {} term scan(s)", queries.len());

    for (text, terms) in &queries {
        let matches = scanner.find_term_instances(text, terms);

        if args.json {
            let record = ScanRecord {
                text,
                terms,
                matches: &matches,
            };
            println!("{}", serde_json::to_string(&record)?);
        } else {
            println!("text:    {text}");
            println!("terms:   {terms}");
            println!("matches: {matches:?}");
            println!();
        }
    }

    Ok(())
}
