//! Terminal rendering of dashboard views

use accounts_dashboard::{AccountCard, DashboardConfig, DashboardView};

/// Print the login header
pub fn login_header() {
    println!();
    println!("Welcome back");
    println!("Sign in to reach your vault");
    println!();
}

/// Print the dashboard for the current query
pub fn dashboard(view: &DashboardView, config: &DashboardConfig, reveal_allowed: bool) {
    println!();
    if !view.query.is_empty() {
        println!("Search: \"{}\"", view.query);
    }

    if view.is_empty() {
        println!("No saved accounts");
        println!();
        println!("Add your first account with: add");
        return;
    }

    for (idx, card) in view.cards.iter().enumerate() {
        account_card(Some(idx + 1), card, config, reveal_allowed);
    }

    println!();
    if view.cards.len() == view.total {
        println!("Total: {} account(s)", view.total);
    } else {
        println!("Showing {} of {} account(s)", view.cards.len(), view.total);
    }
}

/// Print a single card. `row` is the number users type to select it;
/// cards outside the last listing have none.
pub fn account_card(
    row: Option<usize>,
    card: &AccountCard,
    config: &DashboardConfig,
    reveal_allowed: bool,
) {
    println!();
    println!("{}", card_header(row, card));

    if let Some(ref email) = card.email {
        println!("      email     {}", email);
    }
    if let Some(ref username) = card.username {
        println!("      username  {}", username);
    }
    if let Some(password) = password_line(card, config, reveal_allowed) {
        println!("      password  {}", password);
    }
    if let Some(ref notes) = card.notes {
        println!("      notes     {}", notes);
    }
}

fn card_header(row: Option<usize>, card: &AccountCard) -> String {
    let marker = match row {
        Some(row) => format!("{:>2}.", row),
        None => "   ".to_string(),
    };
    format!(
        "  {} {:<28} [{}]  added {}",
        marker, card.title, card.short_id, card.added_on
    )
}

/// Password as it should appear; plaintext never goes to a non-terminal
fn password_line<'a>(
    card: &'a AccountCard,
    config: &'a DashboardConfig,
    reveal_allowed: bool,
) -> Option<&'a str> {
    let password = card.password.as_deref()?;
    if card.password_visible && !reveal_allowed {
        Some(config.password_mask.as_str())
    } else {
        Some(password)
    }
}

/// Print the in-session command reference
pub fn help() {
    println!();
    println!("Commands:");
    println!("  list [--json]                 Show all accounts");
    println!("  search <text>                 Filter by platform, username or email");
    println!("  clear                         Clear the search");
    println!("  add                           Add an account");
    println!("  show <n|id> [--json]          Show one account");
    println!("  reveal <n|id>                 Show or hide a password");
    println!("  copy <n|id> <field>           Copy email, username or password");
    println!("  delete <n|id>                 Delete an account");
    println!("  go <path>                     Navigate (/login, /)");
    println!("  logout                        Back to the login screen");
    println!("  quit                          End the session");
    println!();
    println!("<n> is the row number from the last listing, <id> an id prefix.");
}
