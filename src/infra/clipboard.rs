use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::services::ClipboardService;

/// Platform clipboard tools, tried in order until one succeeds.
const CANDIDATES: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("clip", &[]),
];

#[derive(Debug, Clone)]
struct ClipboardTool {
    program: String,
    args: Vec<String>,
}

pub struct SystemClipboard {
    tools: Vec<ClipboardTool>,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self {
            tools: CANDIDATES
                .iter()
                .map(|(program, args)| ClipboardTool {
                    program: program.to_string(),
                    args: args.iter().map(|arg| arg.to_string()).collect(),
                })
                .collect(),
        }
    }
}

impl SystemClipboard {
    #[cfg(test)]
    fn with_tools(tools: Vec<(String, Vec<String>)>) -> Self {
        Self {
            tools: tools
                .into_iter()
                .map(|(program, args)| ClipboardTool { program, args })
                .collect(),
        }
    }

    async fn pipe_into(tool: &ClipboardTool, text: &str) -> Result<(), String> {
        let mut child = Command::new(&tool.program)
            .args(&tool.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|err| format!("{}: {err}", tool.program))?;

        // stdin is dropped at the end of the match so the tool sees EOF.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()).await,
            None => Ok(()),
        };

        let status = child
            .wait()
            .await
            .map_err(|err| format!("{}: {err}", tool.program))?;
        written.map_err(|err| format!("{}: failed to write input: {err}", tool.program))?;
        if !status.success() {
            return Err(format!("{} exited with {status}", tool.program));
        }
        Ok(())
    }
}

#[async_trait]
impl ClipboardService for SystemClipboard {
    async fn copy(&self, text: &str) -> AppResult<()> {
        let mut failures = Vec::with_capacity(self.tools.len());
        for tool in &self.tools {
            match Self::pipe_into(tool, text).await {
                Ok(()) => {
                    debug!(program = %tool.program, bytes = text.len(), "copied to clipboard");
                    return Ok(());
                }
                Err(failure) => {
                    debug!(%failure, "clipboard tool failed, trying next");
                    failures.push(failure);
                }
            }
        }
        Err(AppError::Clipboard(format!(
            "no clipboard tool succeeded ({})",
            failures.join("; ")
        )))
    }
}
