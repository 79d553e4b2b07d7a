// FanChat assistant demo - a terminal stand-in for the chat UI.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fanchat_core::brain::Assistant;
use fanchat_core::session::{Role, Transcript};
use fanchat_core::store::ChatStore;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let store = ChatStore::sample();
    info!(posts = store.len(), creator = %store.creator.username, "loaded sample feed");

    let assistant = Assistant::new(store);
    let mut transcript = Transcript::new();

    // Same welcome the UI shows on an empty screen.
    println!("{}\n", assistant.answer("help"));
    println!("(type 'quit' to leave)\n");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if query.eq_ignore_ascii_case("quit") || query.eq_ignore_ascii_case("exit") {
            break;
        }

        transcript.record(Role::User, query);
        let response = assistant.answer(query);
        transcript.record(Role::Assistant, response.clone());

        println!("\n{response}\n");
    }

    info!(turns = transcript.len(), "session ended");
    Ok(())
}
