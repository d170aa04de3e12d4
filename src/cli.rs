//! CLI — stdin/stdout REPL over the app.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast;

use crate::app::{App, View};
use crate::dashboard::{self, QuestStatus};
use crate::error::{AppError, Result};
use crate::resources::{self, CategoryFilter};
use crate::stepper::{Sender, SessionEvent, SubmitOutcome, GREETING};

const HELP: &str = "\
Commands:
  /chat                          open the learning companion
  /dashboard                     show your learning journey
  /resources [category] [query]  browse the resource library
  /paths                         show learning paths
  /back                          return to the landing page
  /quit                          exit
In the chat view, any other line is sent to the companion.";

/// A parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open(View),
    Resources { category: String, query: String },
    Paths,
    Back,
    Help,
    Quit,
    Say(String),
}

impl Command {
    /// Parse a line. Lines not starting with `/` are chat input.
    pub fn parse(line: &str) -> std::result::Result<Self, AppError> {
        let line = line.trim();
        let Some(rest) = line.strip_prefix('/') else {
            return Ok(Self::Say(line.to_string()));
        };

        let (name, args) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        let args = args.trim();
        match name {
            "chat" => Ok(Self::Open(View::Chat)),
            "dashboard" => Ok(Self::Open(View::Dashboard)),
            "resources" => {
                let (category, query) = match args.split_once(char::is_whitespace) {
                    Some((c, q)) => (c.to_string(), q.trim().to_string()),
                    None => (args.to_string(), String::new()),
                };
                Ok(Self::Resources { category, query })
            }
            "paths" => Ok(Self::Paths),
            "back" => Ok(Self::Back),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(AppError::UnknownCommand(other.to_string())),
        }
    }
}

pub fn render_landing() -> String {
    "\
LEARNQUEST — transform your ideas into learning adventures

  AI-Powered Learning   personalized learning paths
  Progressive Quests    complex topics broken into manageable steps
  Track Progress        monitor your journey with achievements
  Curated Resources     high-quality learning materials

Type /chat to start learning, or /help for all commands."
        .to_string()
}

pub fn render_dashboard() -> String {
    let summary = dashboard::summary();
    let mut out = format!(
        "Learning Journey — Level {} · {} / {} XP · {}% complete\n\
         {} completed · {} in progress · {} locked\n",
        summary.level,
        summary.xp_earned,
        summary.xp_total,
        summary.progress,
        summary.completed,
        summary.in_progress,
        summary.locked,
    );
    for quest in dashboard::quests() {
        let mark = match quest.status {
            QuestStatus::Completed => "[x]",
            QuestStatus::Current => "[>]",
            QuestStatus::Locked => "[ ]",
        };
        out.push_str(&format!(
            "\n{mark} L{} {} ({} XP)\n    {}",
            quest.level, quest.title, quest.points, quest.description
        ));
    }
    out
}

pub fn render_resources(category: &str, query: &str) -> std::result::Result<String, AppError> {
    let filter: CategoryFilter = category.parse()?;
    let found = resources::filter(query, filter);
    if found.is_empty() {
        return Ok("No resources match.".to_string());
    }
    let lines: Vec<String> = found
        .iter()
        .map(|r| {
            format!(
                "#{} {}{} — {} · {} · {:.1}★ · by {}\n    {}",
                r.id,
                r.title,
                if r.premium { " [PRO]" } else { "" },
                r.category,
                r.duration,
                r.rating,
                r.provider,
                r.technologies.join(", "),
            )
        })
        .collect();
    Ok(lines.join("\n"))
}

pub fn render_paths() -> String {
    resources::learning_paths()
        .iter()
        .map(|p| {
            format!(
                "{} — {}% ({}/{} resources, {})",
                p.title, p.progress, p.completed_resources, p.total_resources, p.estimated_time
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print assistant replies and progress for a session until it closes.
fn spawn_printer(mut rx: broadcast::Receiver<SessionEvent>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(SessionEvent::MessageAppended { message }) if message.sender == Sender::Assistant => {
                    println!("\n🤖 {}\n", message.text);
                }
                Ok(SessionEvent::StageAdvanced {
                    stage_number,
                    completion,
                    ..
                }) => {
                    eprintln!("   stage {stage_number}/5 · {completion}% complete");
                    eprint!("> ");
                }
                Ok(SessionEvent::Closed { .. }) | Err(broadcast::error::RecvError::Closed) => break,
                Ok(_) => {}
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(missed = n, "CLI printer lagged behind session events");
                }
            }
        }
    })
}

/// Run the REPL until EOF or `/quit`.
pub async fn run(app: Arc<App>) -> Result<()> {
    let reader = BufReader::new(tokio::io::stdin());
    let mut lines = reader.lines();

    println!("{}", render_landing());
    eprint!("> ");

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            eprint!("> ");
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{e}. Type /help for commands.");
                eprint!("> ");
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            Command::Back => {
                app.back().await;
                println!("{}", render_landing());
            }
            Command::Open(View::Chat) => {
                if app.view().await != View::Chat {
                    app.open(View::Chat).await;
                    if let Some(session) = app.session().await {
                        let _printer = spawn_printer(session.subscribe());
                    }
                    println!("\n🤖 {GREETING}\n");
                }
            }
            Command::Open(View::Dashboard) => {
                app.open(View::Dashboard).await;
                println!("{}", render_dashboard());
            }
            Command::Open(_) => {}
            Command::Resources { category, query } => {
                app.open(View::Resources).await;
                match render_resources(&category, &query) {
                    Ok(text) => println!("{text}"),
                    Err(e) => eprintln!("{e}"),
                }
            }
            Command::Paths => {
                app.open(View::Resources).await;
                println!("{}", render_paths());
            }
            Command::Say(text) => match app.submit(&text).await {
                Ok(SubmitOutcome::Accepted(_)) => {
                    eprintln!("⏳ thinking...");
                    continue;
                }
                Ok(SubmitOutcome::Busy) => eprintln!("⏳ still thinking, hang on..."),
                Ok(_) => {}
                Err(e) => eprintln!("{e}"),
            },
        }
        eprint!("> ");
    }

    app.shutdown().await;
    Ok(())
}
