//! Command-line client for the envlock server.
//!
//! Sends conversational commands (`lock qa`, `unlock qa`, `status`) to a
//! running `envlock-server` under the operator's display name and prints
//! the replies. With no command words it reads commands from stdin, one
//! per line, until EOF.

use std::io::Write;
use std::process;

use clap::Parser;
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// Lock, unlock and inspect shared dev environments.
#[derive(Parser, Debug)]
#[command(name = "envlock", about = "Lock, unlock and inspect shared dev environments")]
struct Cli {
    /// Base URL of the envlock server.
    #[arg(long, env = "ENVLOCK_SERVER", default_value = "http://127.0.0.1:3000")]
    server: String,

    /// Display name to act as.
    #[arg(long = "as", env = "ENVLOCK_USER", value_name = "NAME")]
    caller: String,

    /// Command to send, e.g. `lock qa`. Reads stdin when omitted.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    words: Vec<String>,
}

/// Errors talking to the server.
#[derive(Debug, thiserror::Error)]
enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Serialize)]
struct CommandRequest<'a> {
    text: &'a str,
    caller: &'a str,
}

#[derive(Deserialize)]
struct CommandResponse {
    reply: String,
}

struct Client {
    http: reqwest::Client,
    url: String,
    caller: String,
}

impl Client {
    fn new(server: &str, caller: String) -> Self {
        Client {
            http: reqwest::Client::new(),
            url: commands_url(server),
            caller,
        }
    }

    async fn send(&self, text: &str) -> Result<String, ClientError> {
        let response = self
            .http
            .post(&self.url)
            .json(&CommandRequest {
                text,
                caller: &self.caller,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let reply: CommandResponse = response.json().await?;
        Ok(reply.reply)
    }
}

fn commands_url(server: &str) -> String {
    format!("{}/commands", server.trim_end_matches('/'))
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let client = Client::new(&cli.server, cli.caller);
    let stdin = BufReader::new(tokio::io::stdin());

    let exit_code = match run(&client, &cli.words, stdin, &mut std::io::stdout()).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };
    process::exit(exit_code);
}

/// Sends `words` as one command, or every non-blank line of `input` when
/// `words` is empty. Stops at the first failed request.
async fn run<R, W>(
    client: &Client,
    words: &[String],
    input: R,
    out: &mut W,
) -> Result<(), ClientError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    if !words.is_empty() {
        let reply = client.send(&words.join(" ")).await?;
        writeln!(out, "{}", reply)?;
        return Ok(());
    }

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        let reply = client.send(text).await?;
        writeln!(out, "{}", reply)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use envlock_server::config::ServerConfig;
    use envlock_server::router::build_router;
    use envlock_server::state::AppState;
    use tokio::net::TcpListener;

    use super::*;

    /// Serves a fresh envlock router on an ephemeral local port and
    /// returns its base URL.
    async fn spawn_server() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = build_router(AppState::new(ServerConfig::default()));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn run_session(
        client: &Client,
        words: &[String],
        script: &str,
    ) -> (Result<(), ClientError>, String) {
        let mut out = Vec::new();
        let result = run(client, words, script.as_bytes(), &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn stdin_session_skips_blank_lines() {
        let base = spawn_server().await;
        let client = Client::new(&base, "alice".to_string());

        let (result, out) =
            run_session(&client, &[], "lock qa\n\n   \nstatus\nunlock qa\n").await;
        result.unwrap();
        assert_eq!(
            out,
            "qa locked by alice\nqa locked by alice\nEnvironment qa is now free\n"
        );
    }

    #[tokio::test]
    async fn one_shot_words_ignore_stdin() {
        let base = spawn_server().await;
        let alice = Client::new(&base, "alice".to_string());
        let bob = Client::new(&format!("{base}/"), "bob".to_string());

        let words = vec!["lock".to_string(), "qa".to_string()];
        let (result, out) = run_session(&alice, &words, "unlock qa\n").await;
        result.unwrap();
        assert_eq!(out, "qa locked by alice\n");

        let words = vec!["unlock".to_string(), "qa".to_string()];
        let (result, out) = run_session(&bob, &words, "").await;
        result.unwrap();
        assert_eq!(
            out,
            "You don't have permission to free and environment locked by alice\n"
        );
    }

    #[tokio::test]
    async fn non_success_status_ends_the_session() {
        let base = spawn_server().await;
        let client = Client::new(&format!("{base}/nope"), "alice".to_string());

        let (result, out) = run_session(&client, &[], "lock qa\nstatus\n").await;
        assert!(
            matches!(result, Err(ClientError::Status { status: 404, .. })),
            "unexpected result: {result:?}"
        );
        assert_eq!(out, "");
    }

    #[test]
    fn commands_url_tolerates_trailing_slash() {
        assert_eq!(commands_url("http://localhost:3000"), "http://localhost:3000/commands");
        assert_eq!(commands_url("http://localhost:3000/"), "http://localhost:3000/commands");
    }

    #[test]
    fn parses_one_shot_command() {
        let cli = Cli::try_parse_from(["envlock", "--as", "alice", "lock", "qa"]).unwrap();
        assert_eq!(cli.caller, "alice");
        assert_eq!(cli.words, vec!["lock", "qa"]);
    }

    #[test]
    fn no_words_means_interactive() {
        let cli = Cli::try_parse_from([
            "envlock",
            "--server",
            "http://envlock.internal:8080",
            "--as",
            "bob",
        ])
        .unwrap();
        assert_eq!(cli.server, "http://envlock.internal:8080");
        assert!(cli.words.is_empty());
    }
}
