use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use crate::error::AdminError;

/// Prompt for the admin email on stdin. Input is echoed and trimmed; empty
/// input (including EOF) is fatal.
pub fn read_email() -> Result<String> {
    print!("Email: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read email from stdin")?;

    Ok(require_non_empty(&line, "Email")?)
}

/// Prompt for the admin password without echoing it to the terminal.
pub fn read_password() -> Result<String> {
    let line = rpassword::prompt_password("Password (hidden): ")
        .context("Failed to read password")?;

    Ok(require_non_empty(&line, "Password")?)
}

/// Trim surrounding whitespace and reject empty input.
fn require_non_empty(input: &str, field: &'static str) -> Result<String, AdminError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AdminError::InputMissing(field));
    }
    Ok(trimmed.to_string())
}
