mod fetcher;
mod parser;
mod prompt;
mod report;

use std::time::{Duration, Instant};

use clap::Parser;
use tracing::info;

use parser::sections::Marker;

const DEFAULT_URL: &str = "https://en.wikipedia.org/wiki/Microsoft";

#[derive(Parser)]
#[command(
    name = "section_wordfreq",
    about = "Most frequent words in the part of a web page between two headings"
)]
struct Cli {
    /// Page to fetch
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,
    /// Text contained in the heading that opens the section
    #[arg(long, default_value = "History")]
    start: String,
    /// Text contained in the heading that closes the section
    #[arg(long, default_value = "Corporate affairs")]
    end: String,
    /// Tag name of both headings
    #[arg(long, default_value = "h2")]
    heading_tag: String,
    /// Number of top words (prompted for when absent; blank means 10)
    #[arg(short = 'n', long, allow_hyphen_values = true)]
    top: Option<String>,
    /// Comma-separated words to exclude (prompted for when absent)
    #[arg(short = 'x', long)]
    exclude: Option<String>,
    /// Give up on the fetch after this many seconds (default: wait forever)
    #[arg(long)]
    timeout_secs: Option<u64>,
    /// Print rows as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let start = Marker::new(&cli.heading_tag, &cli.start)?;
    let end = Marker::new(&cli.heading_tag, &cli.end)?;

    let top_input = match cli.top {
        Some(v) => v,
        None => prompt::prompt_line("Enter the number of top words to return (default is 10): ")?,
    };
    let top_n = prompt::parse_top_n(&top_input)?;

    let exclude_input = match cli.exclude {
        Some(v) => v,
        None => prompt::prompt_line("Enter words to exclude (separated by commas): ")?,
    };
    let exclude = prompt::parse_exclusions(&exclude_input);

    let client = fetcher::build_client(cli.timeout_secs.map(Duration::from_secs))?;
    let html = match fetcher::fetch_page(&client, &cli.url).await {
        Ok(html) => html,
        Err(e) => {
            println!("\nRequest failed!");
            println!("Message: {}", e);
            return Ok(());
        }
    };

    let (section, counts) = parser::process_page(&html, &start, &end, &exclude);
    info!(
        "Section {:?} → {:?}: {} blocks, {} distinct words",
        start.text,
        end.text,
        section.blocks.len(),
        counts.len()
    );

    let rows = report::top_words(&counts, top_n);
    if cli.json {
        println!("{}", report::render_json(&rows)?);
    } else {
        report::print_table(&rows);
    }

    info!("Done in {}", format_duration(t0.elapsed()));
    Ok(())
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
