//! Line-oriented session commands
//!
//! Parses one input line into a [`ShellCommand`] and runs it against a
//! controller. State lives in the controller for the whole session.

use crate::controller::DeskController;
use crate::error::DeskError;
use crate::form::CaseForm;
use crate::nav::Page;
use crate::render::{render_case_line, render_nav, render_stats, render_view};
use ldesk_annotate::AnnotationTask;
use chrono::NaiveDate;
use ldesk_case::{search, CaseCategory, CaseId, CaseStatus, DashboardStats, Role};

/// Help text
pub const HELP: &str = "\
commands:
  view                         show the current page or case
  list [query]                 visible cases, optionally filtered by id or title
  open <id>                    open a case
  back                         return to the list
  role <student|counsel|president>
  go <dashboard|all-cases|new-case|drafts>
  nav                          menu for the current role
  new <title> | <description> [| <category> [| <YYYY-MM-DD>]]
  status <status>              change status of the open case
  summarize                    AI summary of the open case
  draft [stance]               AI legal opinion for the open case
  save                         store the shown summary on the case
  stats                        dashboard figures
  help
  quit";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Print help
    Help,
    /// Render the current view
    View,
    /// List visible cases
    List {
        /// Id or title filter
        query: Option<String>,
    },
    /// Select a case
    Open(CaseId),
    /// Leave the detail view
    Back,
    /// Switch persona
    Role(Role),
    /// Go to a page
    Go(Page),
    /// Show the menu
    Nav,
    /// Submit a new case
    New(CaseForm),
    /// Change status of the open case
    Status(CaseStatus),
    /// Summarize the open case
    Summarize,
    /// Draft an opinion on the open case
    Draft {
        /// Requested stance
        stance: Option<String>,
    },
    /// Persist the shown summary
    Save,
    /// Dashboard figures
    Stats,
    /// End the session
    Quit,
}

/// Result of running one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellOutcome {
    /// Print and keep going
    Continue(String),
    /// End the session
    Quit,
}

fn rest(arg: &str) -> Option<String> {
    let arg = arg.trim();
    (!arg.is_empty()).then(|| arg.to_string())
}

/// Parse one line; blank lines yield `None`
///
/// # Errors
/// - `DeskError::Case` for malformed ids, statuses, roles or categories
/// - `DeskError::UnknownPage` for unknown pages
/// - `DeskError::UnknownCommand` for unknown command words
/// - `DeskError::InvalidForm` for missing arguments or a bad referral date
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, DeskError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, arg) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

    let command = match word.to_lowercase().as_str() {
        "help" | "?" => ShellCommand::Help,
        "view" => ShellCommand::View,
        "list" | "ls" => ShellCommand::List { query: rest(arg) },
        "open" | "show" => ShellCommand::Open(required(arg, "id")?.parse()?),
        "back" => ShellCommand::Back,
        "role" => ShellCommand::Role(required(arg, "role")?.parse()?),
        "go" => ShellCommand::Go(required(arg, "page")?.parse()?),
        "nav" => ShellCommand::Nav,
        "new" => ShellCommand::New(parse_form(arg)?),
        "status" => ShellCommand::Status(required(arg, "status")?.parse()?),
        "summarize" => ShellCommand::Summarize,
        "draft" => ShellCommand::Draft { stance: rest(arg) },
        "save" => ShellCommand::Save,
        "stats" => ShellCommand::Stats,
        "quit" | "exit" => ShellCommand::Quit,
        _ => return Err(DeskError::UnknownCommand(word.to_string())),
    };
    Ok(Some(command))
}

fn required<'a>(arg: &'a str, field: &'static str) -> Result<&'a str, DeskError> {
    let arg = arg.trim();
    if arg.is_empty() {
        Err(DeskError::InvalidForm { field })
    } else {
        Ok(arg)
    }
}

fn parse_form(arg: &str) -> Result<CaseForm, DeskError> {
    let mut parts = arg.split('|').map(str::trim);
    let title = parts.next().unwrap_or_default();
    let description = parts.next().unwrap_or_default();
    let mut form = CaseForm::new(title, description);
    if let Some(category) = parts.next().filter(|c| !c.is_empty()) {
        form = form.with_category(category.parse::<CaseCategory>()?);
    }
    if let Some(date) = parts.next().filter(|d| !d.is_empty()) {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| DeskError::InvalidForm { field: "referral_date" })?;
        form = form.with_referral_date(date);
    }
    Ok(form)
}

/// Run `command` against `desk`
///
/// # Errors
/// Whatever the controller reports; the session should print it and go on.
pub async fn execute(desk: &mut DeskController, command: ShellCommand) -> Result<ShellOutcome, DeskError> {
    let output = match command {
        ShellCommand::Help => HELP.to_string(),
        ShellCommand::View => render_view(&desk.view()),
        ShellCommand::List { query } => {
            let visible = desk.visible();
            let cases = match query.as_deref() {
                Some(q) => search(visible, q),
                None => visible,
            };
            if cases.is_empty() {
                "لا توجد قضايا".to_string()
            } else {
                cases.into_iter().map(render_case_line).collect::<Vec<_>>().join("\n")
            }
        }
        ShellCommand::Open(id) => {
            desk.select(&id)?;
            render_view(&desk.view())
        }
        ShellCommand::Back => {
            desk.back();
            render_view(&desk.view())
        }
        ShellCommand::Role(role) => {
            desk.switch_role(role);
            render_view(&desk.view())
        }
        ShellCommand::Go(page) => {
            desk.navigate(page);
            render_view(&desk.view())
        }
        ShellCommand::Nav => render_nav(desk.nav(), desk.page()),
        ShellCommand::New(form) => {
            let id = desk.create_case(form)?;
            format!("تم إنشاء الطلب {id}")
        }
        ShellCommand::Status(status) => {
            let id = desk.selected().cloned().ok_or(DeskError::NoSelection)?;
            desk.update_status(&id, status)?;
            render_view(&desk.view())
        }
        ShellCommand::Summarize => desk.annotate(AnnotationTask::Summary).await?,
        ShellCommand::Draft { stance } => {
            let task = desk.draft_task(stance.as_deref());
            desk.annotate(task).await?
        }
        ShellCommand::Save => {
            let case = desk.save_summary()?;
            format!("تم حفظ الملخص في {}", case.id())
        }
        ShellCommand::Stats => {
            if !desk.role().can_act_on_cases() {
                return Err(DeskError::NotAvailable { role: desk.role() });
            }
            let stats = DashboardStats::compute(desk.store().as_slice());
            render_stats(&stats, desk.role() == Role::President)
        }
        ShellCommand::Quit => return Ok(ShellOutcome::Quit),
    };
    Ok(ShellOutcome::Continue(output))
}
