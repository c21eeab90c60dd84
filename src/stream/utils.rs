// Helper functions for running yt-dlp

use std::path::Path;
use std::process::Stdio;
use tokio::io::AsyncReadExt;
use tokio::process::Command as TokioCommand;
use tokio::task::JoinHandle;
use tokio::time::{timeout, Duration};

use super::extractors::RawDiagnostics;
use super::tools::ToolType;

pub const TWITCH_BASE_URL: &str = "https://twitch.tv/";

/// Canonical stream URL for a channel
pub fn stream_url(channel: &str) -> String {
    format!("{}{}", TWITCH_BASE_URL, channel)
}

fn failed_run(process_error: String) -> RawDiagnostics {
    RawDiagnostics {
        process_error: Some(process_error),
        ..Default::default()
    }
}

/// Wait for a pipe drain. A failed read is logged and yields empty text.
async fn collect_output(
    task: JoinHandle<std::io::Result<Vec<u8>>>,
    tool: ToolType,
    stream: &str,
) -> String {
    match task.await {
        Ok(Ok(buf)) => String::from_utf8_lossy(&buf).into_owned(),
        Ok(Err(e)) => {
            tracing::debug!("failed to read {} {}: {}", tool.as_str(), stream, e);
            String::new()
        }
        Err(e) => {
            tracing::debug!("{} {} reader did not finish: {}", tool.as_str(), stream, e);
            String::new()
        }
    }
}

/// Run a command, capturing stdout and stderr separately.
///
/// Never returns an error itself: every failure ends up in the diagnostics so
/// it can be classified. Process errors name the tool, never `program`, since
/// a user-supplied path could contain words the classifier looks for.
pub async fn run_output(
    tool: ToolType,
    program: &Path,
    args: &[String],
    timeout_secs: Option<u64>,
) -> RawDiagnostics {
    tracing::debug!("running {} {}", program.display(), args.join(" "));

    let mut child = match TokioCommand::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            tracing::debug!("failed to start {}: {}", program.display(), e);
            return failed_run(format!("failed to start {}: {}", tool.as_str(), e));
        }
    };

    let (Some(mut stdout_pipe), Some(mut stderr_pipe)) = (child.stdout.take(), child.stderr.take())
    else {
        return failed_run(format!("failed to capture output from {}", tool.as_str()));
    };

    let stdout_task = tokio::spawn(async move {
        let mut buf = Vec::new();
        stdout_pipe.read_to_end(&mut buf).await.map(|_| buf)
    });
    let stderr_task = tokio::spawn(async move {
        let mut buf = Vec::new();
        stderr_pipe.read_to_end(&mut buf).await.map(|_| buf)
    });

    let status = match timeout_secs {
        Some(secs) => {
            let waited = timeout(Duration::from_secs(secs), child.wait()).await;
            match waited {
                Ok(status) => status,
                Err(_) => {
                    let _ = child.kill().await;
                    stdout_task.abort();
                    stderr_task.abort();
                    return failed_run(format!("timed out after {}s", secs));
                }
            }
        }
        None => child.wait().await,
    };

    let stdout = collect_output(stdout_task, tool, "stdout").await;
    let stderr = collect_output(stderr_task, tool, "stderr").await;

    let process_error = match status {
        Ok(status) if status.success() => None,
        Ok(status) => Some(status.to_string()),
        Err(e) => Some(format!("failed to wait for {}: {}", tool.as_str(), e)),
    };

    if let Some(err) = &process_error {
        tracing::debug!("{} failed: {}", program.display(), err);
    }

    RawDiagnostics {
        stdout,
        stderr,
        process_error,
    }
}
