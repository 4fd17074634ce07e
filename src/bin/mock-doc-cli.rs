use clap::{Parser, Subcommand};
use mock_doc_search_sdk::{DocSearchClient, PdfSummaryOptions, SdkError, SearchResult};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "mock-doc-cli")]
#[command(about = "Command line client for the mock document search API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://127.0.0.1:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the welcome message
    Root,
    /// Search documents
    Search {
        query: String,
        #[arg(short, long, allow_negative_numbers = true)]
        k: Option<i64>,
    },
    /// Summarise a query over documents given as `document_id=content` pairs
    Summarise {
        query: String,
        #[arg(value_parser = parse_context)]
        context: Vec<SearchResult>,
    },
    /// Search and summarise in one call
    SearchAndSummarise {
        query: String,
        #[arg(short, long, allow_negative_numbers = true)]
        k: Option<i64>,
    },
    /// Look up synonyms for a phrase
    Synonyms { query: String },
    /// Summarise a PDF document
    PdfSummary {
        document_id: String,
        #[arg(long)]
        system_prompt: Option<String>,
        #[arg(long)]
        sampling_method: Option<String>,
    },
    /// Add a document to the index
    AddToIndex { id: String, doc: String },
}

fn parse_context(raw: &str) -> Result<SearchResult, String> {
    let (document_id, content) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected document_id=content, got '{}'", raw))?;
    Ok(SearchResult {
        content: content.to_string(),
        document_id: document_id.to_string(),
        rank: None,
        score: None,
        passage_id: None,
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = DocSearchClient::new(&cli.url);

    let result = match cli.command {
        Commands::Root => client.root().await.map(|m| print_json(&m)),
        Commands::Search { query, k } => client.search(&query, k).await.map(|r| print_json(&r)),
        Commands::Summarise { query, context } => {
            client.summarise(&query, &context).await.map(print_text)
        }
        Commands::SearchAndSummarise { query, k } => {
            client.search_and_summarise(&query, k).await.map(print_text)
        }
        Commands::Synonyms { query } => client.synonyms(&query).await.map(|s| print_json(&s.term)),
        Commands::PdfSummary {
            document_id,
            system_prompt,
            sampling_method,
        } => {
            let options = PdfSummaryOptions {
                system_prompt,
                sampling_method,
            };
            client.pdf_summary(&document_id, &options).await.map(print_text)
        }
        Commands::AddToIndex { id, doc } => {
            client.add_to_index(&doc, &id).await.map(|m| print_json(&m))
        }
    };

    match result {
        Ok(printed) => printed?,
        Err(SdkError::Status { status, body }) => {
            eprintln!("Error: API returned status {}", status);
            eprintln!("Response: {}", body);
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_text(text: String) -> Result<(), serde_json::Error> {
    println!("{}", text);
    Ok(())
}
