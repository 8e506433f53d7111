//! Interactive session: login view and dashboard loop

use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use tracing::warn;

use accounts_core::{
    AlwaysConfirm, Clipboard, ClipboardError, ClipboardResult, Confirm, CopyField,
    MemoryClipboard, Platform, SystemClipboard,
};
use accounts_dashboard::{
    account_card, clear_query, close_add_form, copy_field, dashboard_view, delete_account,
    list_accounts, login, logout, navigate, open_add_form, resolve_selector, seed_demo_accounts,
    set_query, submit_add_form, toggle_password, AccountCard, AppState, CommandResult,
    DashboardConfig, DeleteOutcome, FormError, LoginForm, Route,
};

use crate::render;
use crate::Cli;

type ShellResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Consecutive unreadable login attempts before the session gives up
const MAX_INPUT_ERRORS: usize = 3;

/// One line typed at the dashboard prompt
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_subcommand = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
enum ShellCommand {
    /// Show all accounts
    #[command(alias = "ls")]
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Filter accounts
    #[command(alias = "find")]
    Search {
        #[arg(default_value = "", allow_hyphen_values = true)]
        query: String,
    },
    /// Clear the search
    Clear,
    /// Add an account
    #[command(alias = "new")]
    Add,
    /// Show one account
    Show {
        selector: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or hide a password
    Reveal { selector: String },
    /// Copy a field to the clipboard
    Copy { selector: String, field: String },
    /// Delete an account
    #[command(alias = "rm")]
    Delete { selector: String },
    /// Navigate to a path
    Go { path: String },
    /// Back to the login screen
    Logout,
    /// Command reference
    Help,
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// What the loop should do after a command
#[derive(Debug, PartialEq)]
enum Flow {
    Continue,
    Redraw,
    Quit,
}

/// Source of answers for the interactive prompts
trait Prompter {
    /// One line of input; `None` at end of input
    fn line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Hidden input
    fn secret(&mut self, prompt: &str) -> io::Result<String>;
}

/// Prompts on the controlling terminal
struct Terminal;

impl Prompter for Terminal {
    fn line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        read_line(prompt)
    }

    fn secret(&mut self, prompt: &str) -> io::Result<String> {
        prompt_password(prompt)
    }
}

/// Asks on stdin, defaulting to no
struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        match read_line(&format!("{} [y/N]: ", prompt)) {
            Ok(Some(answer)) => is_yes(&answer),
            _ => false,
        }
    }
}

/// Stand-in when no clipboard tool exists; every copy reports why
struct MissingClipboard;

impl Clipboard for MissingClipboard {
    fn set_text(&mut self, _text: &str) -> ClipboardResult<()> {
        Err(ClipboardError::Unavailable)
    }
}

/// Parse one prompt line. `search` takes the rest of the line as typed,
/// so repeated spaces and leading dashes reach the filter untouched.
fn parse_line(line: &str) -> Result<Option<ShellCommand>, clap::Error> {
    let line = line.trim_start();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

    match word {
        "" => Ok(None),
        "search" | "find" => Ok(Some(ShellCommand::Search {
            query: rest.trim_start().to_string(),
        })),
        _ => ShellLine::try_parse_from(line.split_whitespace()).map(|parsed| Some(parsed.command)),
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn build_clipboard(use_memory: bool, config: &DashboardConfig) -> Box<dyn Clipboard> {
    if use_memory {
        return Box::new(MemoryClipboard::new());
    }

    let detected = match config.clipboard_command.as_deref() {
        Some(command) => SystemClipboard::from_command(command),
        None => SystemClipboard::detect(),
    };

    match detected {
        Ok(clipboard) => Box::new(clipboard),
        Err(e) => {
            warn!("Clipboard disabled: {}", e);
            Box::new(MissingClipboard)
        }
    }
}

/// Run the session until the user quits or input ends
pub async fn run_session(cli: &Cli, config: DashboardConfig) -> ShellResult<()> {
    let mut clipboard = build_clipboard(cli.memory_clipboard, &config);
    let mut state = AppState::new(config);

    if cli.demo || state.config.seed_demo_accounts {
        seed_demo_accounts(&mut state);
    }

    let resolution = navigate(&mut state, &cli.start);
    if resolution.redirected {
        println!("Unknown path '{}', opening the dashboard.", cli.start);
    }

    let reveal_allowed = atty::is(atty::Stream::Stdout);

    loop {
        let keep_going = match state.route {
            Route::Login => login_view(&mut state, &mut Terminal).await,
            Route::Dashboard => {
                dashboard_loop(&mut state, clipboard.as_mut(), cli.yes, reveal_allowed)?
            }
        };

        if !keep_going {
            break;
        }
    }

    println!("Session ended. Accounts were not saved.");
    Ok(())
}

/// Prompt for credentials until the simulated login goes through.
/// Returns false when input ends or keeps failing.
async fn login_view(state: &mut AppState, prompter: &mut dyn Prompter) -> bool {
    render::login_header();
    let mut input_errors = 0;

    loop {
        let form = match read_login(prompter) {
            Ok(Some(form)) => form,
            Ok(None) => return false,
            Err(e) => {
                eprintln!("Error: {}", e);
                input_errors += 1;
                if input_errors >= MAX_INPUT_ERRORS {
                    eprintln!("Giving up after {} unreadable attempts", input_errors);
                    return false;
                }
                continue;
            }
        };
        input_errors = 0;

        if let Err(e) = form.validate() {
            eprintln!("Error: {}", e);
            continue;
        }

        println!("Signing in...");
        match login(state, &form).await {
            Ok(_) => return true,
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}

fn read_login(prompter: &mut dyn Prompter) -> io::Result<Option<LoginForm>> {
    let email = match prompter.line("Email: ")? {
        Some(email) => email,
        None => return Ok(None),
    };
    let password = prompter.secret("Password: ")?;
    Ok(Some(LoginForm::new(email.trim(), password)))
}

/// Dashboard prompt. Returns true when the route changed, false to quit.
fn dashboard_loop(
    state: &mut AppState,
    clipboard: &mut dyn Clipboard,
    assume_yes: bool,
    reveal_allowed: bool,
) -> ShellResult<bool> {
    draw(state, reveal_allowed);

    while state.route == Route::Dashboard {
        let line = match read_line("vault> ")? {
            Some(line) => line,
            None => return Ok(false),
        };

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("{}", e.render());
                continue;
            }
        };

        match execute(state, command, clipboard, assume_yes, reveal_allowed) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Redraw) => draw(state, reveal_allowed),
            Ok(Flow::Quit) => return Ok(false),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    Ok(true)
}

fn draw(state: &mut AppState, reveal_allowed: bool) {
    let view = dashboard_view(state);
    render::dashboard(&view, &state.config, reveal_allowed);
}

fn execute(
    state: &mut AppState,
    command: ShellCommand,
    clipboard: &mut dyn Clipboard,
    assume_yes: bool,
    reveal_allowed: bool,
) -> ShellResult<Flow> {
    match command {
        ShellCommand::List { json } => {
            if json {
                let listing = CommandResult::ok(list_accounts(state));
                println!("{}", serde_json::to_string_pretty(&listing)?);
                return Ok(Flow::Continue);
            }
            clear_query(state);
            Ok(Flow::Redraw)
        }
        ShellCommand::Search { query } => {
            set_query(state, query);
            Ok(Flow::Redraw)
        }
        ShellCommand::Clear => {
            clear_query(state);
            Ok(Flow::Redraw)
        }
        ShellCommand::Add => {
            handle_add(state, &mut Terminal)?;
            Ok(Flow::Continue)
        }
        ShellCommand::Show { selector, json } => {
            let card = match resolve_selector(state, &selector) {
                Ok(id) => account_card(state, &id),
                Err(e) => Err(e),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&CommandResult::from(card))?);
                return Ok(Flow::Continue);
            }

            let card = card?;
            let row = state.last_rows.iter().position(|r| *r == card.id).map(|i| i + 1);
            render::account_card(row, &card, &state.config, reveal_allowed);
            Ok(Flow::Continue)
        }
        ShellCommand::Reveal { selector } => {
            let id = resolve_selector(state, &selector)?;
            let visible = toggle_password(state, &id)?;
            if visible && !reveal_allowed {
                println!("Output is not a terminal; the password stays masked.");
            }
            Ok(Flow::Redraw)
        }
        ShellCommand::Copy { selector, field } => {
            let id = resolve_selector(state, &selector)?;
            let field: CopyField = field.parse()?;
            copy_field(state, &id, field, clipboard)?;
            println!("Copied {} to clipboard", field);
            Ok(Flow::Continue)
        }
        ShellCommand::Delete { selector } => {
            let id = resolve_selector(state, &selector)?;
            let outcome = if assume_yes {
                delete_account(state, &id, &mut AlwaysConfirm)
            } else {
                delete_account(state, &id, &mut StdinConfirm)
            };
            match outcome {
                DeleteOutcome::Deleted => {
                    println!("Account deleted");
                    Ok(Flow::Redraw)
                }
                DeleteOutcome::Cancelled => {
                    println!("Cancelled.");
                    Ok(Flow::Continue)
                }
                DeleteOutcome::NotFound => {
                    println!("Account already removed");
                    Ok(Flow::Continue)
                }
            }
        }
        ShellCommand::Go { path } => {
            let resolution = navigate(state, &path);
            if resolution.redirected {
                println!("Unknown path '{}', opening the dashboard.", path);
                return Ok(Flow::Redraw);
            }
            Ok(Flow::Continue)
        }
        ShellCommand::Logout => {
            logout(state);
            Ok(Flow::Continue)
        }
        ShellCommand::Help => {
            render::help();
            Ok(Flow::Continue)
        }
        ShellCommand::Quit => Ok(Flow::Quit),
    }
}

/// Walk the add-account form field by field. Any failure closes the form.
fn handle_add(state: &mut AppState, prompter: &mut dyn Prompter) -> ShellResult<()> {
    open_add_form(state);

    let result = fill_add_form(state, prompter);
    if result.is_err() {
        close_add_form(state);
    }

    let card = result?;
    println!("Account '{}' added [{}]", card.title, card.short_id);
    Ok(())
}

fn fill_add_form(state: &mut AppState, prompter: &mut dyn Prompter) -> ShellResult<AccountCard> {
    println!();
    println!("New account");
    println!("Platforms: {}", Platform::ALL_SLUGS.join(", "));

    let answer = prompter.line(&format!("Platform [{}]: ", state.form.platform))?.unwrap_or_default();
    let answer = answer.trim();
    if !answer.is_empty() {
        // A rejected slug must not become the next prompt's default
        let platform: Platform = answer
            .parse()
            .map_err(|_| FormError::UnknownPlatform(answer.to_string()))?;
        state.form.platform = platform.slug().to_string();
    }

    if state.form.needs_platform_name() {
        state.form.platform_name = prompter.line("Platform name: ")?.unwrap_or_default();
    }
    state.form.email = prompter.line("Email (optional): ")?.unwrap_or_default();
    state.form.username = prompter.line("Username (optional): ")?.unwrap_or_default();
    state.form.password = prompter.secret("Password: ")?;
    state.form.notes = prompter.line("Notes (optional): ")?.unwrap_or_default();

    Ok(submit_add_form(state)?)
}

// === Helper Functions ===

/// Print a prompt and read one line; `None` at end of input
fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn prompt_password(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    rpassword::read_password()
}
