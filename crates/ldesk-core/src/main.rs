use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use ldesk_annotate::AnnotationTask;
use ldesk_case::{search, CaseCategory, CaseId, CaseStatus, DashboardStats, Role, SystemClock};
use ldesk_core::render::{render_case_line, render_nav, render_stats, render_view};
use ldesk_core::shell::{self, ShellOutcome, HELP};
use ldesk_core::{CaseForm, DeskConfig, DeskController, DeskError};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "ldesk=info,ldesk_core=info,ldesk_case=info,ldesk_annotate=warn";

#[derive(Parser)]
#[command(name = "ldesk", version, about = "University legal desk: cases, statuses and AI drafting")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Act as this role (student, counsel, president)
    #[arg(long, global = true)]
    role: Option<Role>,

    /// Answer AI requests locally without calling the service
    #[arg(long, global = true)]
    offline: bool,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// List cases visible to the role
    List {
        /// Filter by id or title
        #[arg(long, short)]
        query: Option<String>,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one case
    Show {
        /// Case id, e.g. CASE-2024-001
        id: CaseId,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// File a new case
    Create {
        /// Subject line
        #[arg(long)]
        title: String,
        /// Details
        #[arg(long)]
        description: String,
        /// Category code or label
        #[arg(long)]
        category: Option<CaseCategory>,
        /// Referral date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        referral_date: Option<NaiveDate>,
    },
    /// Change case status
    SetStatus {
        /// Case id
        id: CaseId,
        /// New status code or label
        status: CaseStatus,
    },
    /// AI summary of a case
    Summarize {
        /// Case id
        id: CaseId,
    },
    /// AI legal opinion draft for a case
    Draft {
        /// Case id
        id: CaseId,
        /// Requested point of view
        #[arg(long)]
        stance: Option<String>,
    },
    /// Dashboard figures
    Stats {
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Menu for the role
    Nav,
    /// Interactive session
    Shell,
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let mut config = DeskConfig::load_or_default(cli.config.as_deref())
        .context("loading configuration")?
        .with_env();
    if let Some(role) = cli.role {
        config = config.with_initial_role(role);
    }

    let annotator = config
        .build_annotator(cli.offline)
        .context("building annotation backend")?;
    let mut desk = DeskController::from_config(&config, Arc::new(SystemClock), annotator);
    tracing::debug!(role = desk.role().code(), cases = desk.store().len(), "desk ready");

    match cli.command.unwrap_or(Command::Shell) {
        Command::List { query, json } => {
            let visible = desk.visible();
            let cases = match query.as_deref() {
                Some(q) => search(visible, q),
                None => visible,
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&cases)?);
            } else {
                for case in cases {
                    println!("{}", render_case_line(case));
                }
            }
        }
        Command::Show { id, json } => {
            let case = desk.select(&id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(case)?);
            } else {
                print!("{}", render_view(&desk.view()));
            }
        }
        Command::Create {
            title,
            description,
            category,
            referral_date,
        } => {
            let mut form = CaseForm::new(title, description);
            form.category = category;
            form.referral_date = referral_date;
            let id = desk.create_case(form)?;
            println!("{id}");
        }
        Command::SetStatus { id, status } => {
            let case = desk.update_status(&id, status)?;
            println!("{}", render_case_line(case));
        }
        Command::Summarize { id } => {
            desk.select(&id)?;
            println!("{}", desk.annotate(AnnotationTask::Summary).await?);
        }
        Command::Draft { id, stance } => {
            desk.select(&id)?;
            let task = desk.draft_task(stance.as_deref());
            println!("{}", desk.annotate(task).await?);
        }
        Command::Stats { json } => {
            if !desk.role().can_act_on_cases() {
                return Err(DeskError::NotAvailable { role: desk.role() }.into());
            }
            let stats = DashboardStats::compute(desk.store().as_slice());
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print!("{}", render_stats(&stats, desk.role() == Role::President));
            }
        }
        Command::Nav => print!("{}", render_nav(desk.nav(), desk.page())),
        Command::Shell => run_shell(&mut desk).await?,
    }

    Ok(())
}

async fn run_shell(desk: &mut DeskController) -> anyhow::Result<()> {
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{HELP}\n");
    print!("{}", render_view(&desk.view()));

    loop {
        stdout
            .write_all(format!("\n{}> ", desk.role().code()).as_bytes())
            .await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match shell::parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("error: {e}");
                continue;
            }
        };

        match shell::execute(desk, command).await {
            Ok(ShellOutcome::Continue(output)) => println!("{output}"),
            Ok(ShellOutcome::Quit) => break,
            Err(e) => eprintln!("error: {e}"),
        }
    }

    Ok(())
}
