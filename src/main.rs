use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};

use awaji::commands::{CommandRegistry, CommandResult};
use awaji::config::Config;
use awaji::engine::{Aggregates, FilterConfig, Selection, compute_view, derive_facets};
use awaji::enrich;
use awaji::logging::init_logging;
use awaji::model::{SubsidyCase, io as dataset_io};
use awaji::parser::{self, DatasetHeader};
use awaji::render;
use awaji::session::Session;

#[derive(Parser)]
#[command(
    name = "awaji",
    version,
    about = "Search and summarise Awaji island subsidy awards."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Dataset JSON path (falls back to $AWAJI_DATA, then ~/.awaji/awaji_subsidy_cases.json)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// More log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Print the summary and matching cases for one set of filters
    Show {
        #[command(flatten)]
        filters: FilterArgs,

        /// Maximum rows to print
        #[arg(short, long)]
        limit: Option<usize>,

        /// Emit JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List the distinct cities, industries and rounds
    Facets {
        /// Emit JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Build a dataset from the published announcement text
    Parse {
        /// Announcement text file
        input: PathBuf,

        /// Where to write the dataset JSON
        #[arg(short, long)]
        output: PathBuf,

        /// Override the "last updated" note
        #[arg(long)]
        last_updated: Option<String>,
    },
    /// Merge verified company addresses into the dataset
    Enrich {
        /// JSON object mapping company name to address
        #[arg(short, long)]
        addresses: PathBuf,

        /// Replace the dataset's "last updated" note
        #[arg(long)]
        last_updated: Option<String>,

        /// Write here instead of overwriting the dataset
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Text to find in company names and business descriptions
    #[arg(short, long, default_value = "")]
    search: String,

    /// City, or `all`
    #[arg(long, default_value = "all")]
    city: Selection<String>,

    /// Industry, or `all`
    #[arg(long, default_value = "all")]
    industry: Selection<String>,

    /// Round number, or `all`
    #[arg(long, default_value = "all")]
    round: Selection<u32>,
}

impl From<FilterArgs> for FilterConfig {
    fn from(args: FilterArgs) -> Self {
        FilterConfig {
            search: args.search,
            city: args.city,
            industry: args.industry,
            round: args.round,
        }
    }
}

#[derive(Serialize)]
struct ShowOutput<'a> {
    filtered: usize,
    total_cases: u64,
    aggregates: &'a Aggregates,
    cases: Vec<&'a SubsidyCase>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Command::Parse {
            input,
            output,
            last_updated,
        }) => handle_parse(&input, &output, last_updated),
        Some(Command::Enrich {
            addresses,
            last_updated,
            output,
        }) => {
            let config = Config::from_env(cli.data)?;
            handle_enrich(&config, &addresses, last_updated.as_deref(), output)
        }
        Some(Command::Show {
            filters,
            limit,
            json,
        }) => {
            let config = Config::from_env(cli.data)?;
            handle_show(&config, filters.into(), limit, json)
        }
        Some(Command::Facets { json }) => {
            let config = Config::from_env(cli.data)?;
            handle_facets(&config, json)
        }
        None => {
            let config = Config::from_env(cli.data)?;
            run_repl(config).await
        }
    }
}

fn handle_show(
    config: &Config,
    filters: FilterConfig,
    limit: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let dataset = dataset_io::load(&config.data_path)?;
    let view = compute_view(&dataset, &filters);
    let limit = limit.unwrap_or(config.list_limit);

    if json {
        let output = ShowOutput {
            filtered: view.len(),
            total_cases: dataset.total_cases,
            aggregates: &view.aggregates,
            cases: view.cases(&dataset).take(limit).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print!("{}", render::header(&dataset, &config.data_label()));
    println!("  {}", render::filter_line(&filters));
    print!(
        "{}",
        render::summary_cards(&view, dataset.total_cases, config.top_n)
    );
    println!();
    print!(
        "{}",
        render::case_table(view.cases(&dataset), limit, config.description_width)
    );
    Ok(())
}

fn handle_facets(config: &Config, json: bool) -> anyhow::Result<()> {
    let dataset = dataset_io::load(&config.data_path)?;
    let facets = derive_facets(&dataset);
    if json {
        println!("{}", serde_json::to_string_pretty(&facets)?);
    } else {
        print!("{}", render::facets(&facets));
    }
    Ok(())
}

fn handle_parse(
    input: &Path,
    output: &Path,
    last_updated: Option<String>,
) -> anyhow::Result<()> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("failed to read announcement {}", input.display()))?;

    let mut header = DatasetHeader::default();
    if let Some(note) = last_updated {
        header.last_updated = note;
    }
    let dataset = parser::parse_dataset(&text, header);
    dataset_io::save(&dataset, output)?;

    println!("wrote {}", output.display());
    let view = compute_view(&dataset, &FilterConfig::default());
    print!("{}", render::breakdown(&view.aggregates, view.len()));
    Ok(())
}

fn handle_enrich(
    config: &Config,
    addresses: &Path,
    last_updated: Option<&str>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut dataset = dataset_io::load(&config.data_path)?;
    let book = enrich::load_address_book(addresses)?;

    let updates = enrich::apply_addresses(&mut dataset, &book, last_updated);
    for update in &updates {
        println!("updated: {} -> {}", update.company_name, update.address);
    }

    let target = output.unwrap_or_else(|| config.data_path.clone());
    dataset_io::save(&dataset, &target)?;
    println!("\n{} addresses applied, wrote {}", updates.len(), target.display());

    let coverage = enrich::coverage(&dataset);
    println!("with address:    {}", coverage.filled);
    println!("without address: {}", coverage.empty);
    println!("total:           {}", coverage.total);
    println!("fill rate:       {:.1}%", coverage.rate());

    let pending = enrich::pending_corporate(&dataset);
    if !pending.is_empty() {
        println!("\nincorporated companies still without address:");
        for (i, name) in pending.iter().enumerate() {
            println!("{:2}. {name}", i + 1);
        }
    }
    Ok(())
}

async fn run_repl(config: Config) -> anyhow::Result<()> {
    let mut session = Session::open(config)?;
    let registry = CommandRegistry::new();

    print!(
        "{}",
        render::header(session.dataset(), &session.config().data_label())
    );
    println!("{}", session.summary());
    println!("type to search, /help for commands");

    // async stdin so Ctrl+C is caught at the prompt too
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("\nawaji> ");
        io::stdout().flush()?;

        let line = tokio::select! {
            result = lines.next_line() => {
                match result {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        // Ctrl+D (EOF)
                        println!();
                        break;
                    }
                    Err(e) => {
                        eprintln!("input error: {}", e);
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let result = registry.dispatch(&line, &session.info()).await;
        match result {
            // plain text is the search term exactly as typed
            CommandResult::NotACommand => {
                session.search(&line);
                println!("{}", session.summary());
            }
            CommandResult::Handled => {}
            CommandResult::StateChanged(change) => {
                session.apply(change);
                println!("{}", session.summary());
            }
            CommandResult::Quit => break,
        }
    }

    println!("goodbye.");
    Ok(())
}
