pub mod branch;
pub mod config;
pub mod pull_request;
pub mod reference;

use tracing::info;

use crate::context::AppContext;
use crate::domain::reminder::Reminder;
use crate::error::AppResult;

pub(crate) fn show_reminder(reminder: Option<&Reminder>) {
    if let Some(reminder) = reminder {
        eprintln!("{}: {}", reminder.title(), reminder.message());
    }
}

pub(crate) async fn copy_to_clipboard(ctx: &AppContext, what: &str, text: &str) -> AppResult<()> {
    ctx.clipboard.copy(text).await?;
    info!("copied {what} to clipboard");
    eprintln!("Copied {what} to clipboard.");
    Ok(())
}
