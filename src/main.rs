use review_lens::terminal::{self, Command};
use review_lens::{ClientConfig, ReviewSession};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = ClientConfig::from_env().expect("invalid client config");
    let session = ReviewSession::connect(&config).expect("http client init failed");
    tracing::info!(base_url = %config.base_url, "review-lens ready");

    // Re-render on every state change.
    let mut rx = session.subscribe();
    let renderer = tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let view = terminal::render(&rx.borrow_and_update());
            println!("{view}");
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "stdin read failed");
                break;
            }
        };
        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Query(text)) => session.on_query_changed(&text),
            Ok(Command::Pick(n)) => {
                let picked = session.snapshot().suggestions.get(n - 1).map(|s| s.title.clone());
                match picked {
                    Some(title) => session.select_suggestion(&title),
                    None => tracing::warn!(index = n, "no such suggestion"),
                }
            }
            Ok(Command::Analyze(Some(name))) => {
                let _ = session.analyze(&name);
            }
            Ok(Command::Analyze(None)) => {
                let _ = session.analyze_query();
            }
            Err(usage) => eprintln!("{usage}"),
        }
    }

    renderer.abort();
}
