use clap::{Args, ValueEnum};
use tracing::warn;

use crate::cmd::{copy_to_clipboard, show_reminder};
use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Args, Debug, Clone)]
pub struct PullRequestArgs {
    /// Ticket identifier, e.g. ABC-123.
    pub ticket_id: String,
    /// Ticket title.
    pub title: String,
    /// Copy the generated title or body to the clipboard.
    #[arg(long, value_enum)]
    pub copy: Option<PullRequestPart>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullRequestPart {
    Title,
    Body,
}

pub async fn run(ctx: &AppContext, args: PullRequestArgs) -> AppResult<()> {
    let Some(generated) = ctx
        .generator
        .generate_pull_request(&args.ticket_id, &args.title)
    else {
        warn!("ticket id and title are required; no pull request generated");
        return Ok(());
    };

    let bundle = &generated.value;
    println!("{}", bundle.title);
    println!();
    println!("{}", bundle.body);

    match args.copy {
        Some(PullRequestPart::Title) => {
            copy_to_clipboard(ctx, "pull request title", &bundle.title).await?
        }
        Some(PullRequestPart::Body) => {
            copy_to_clipboard(ctx, "pull request body", &bundle.body).await?
        }
        None => {}
    }
    show_reminder(generated.reminder.as_ref());
    Ok(())
}
