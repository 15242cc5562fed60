use std::sync::Arc;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use musa_llm::LlmProvider;
use musa_runtime::ChatSession;

pub(super) async fn cmd_chat(config: musa_config::MusaConfig) -> musa_core::Result<()> {
    let api_key = config.require_gemini_key()?;
    let provider = Arc::new(musa_llm::GeminiProvider::new(api_key));
    provider.health_check().await?;

    let mut session = ChatSession::new(&config, provider)?;

    println!("⌚ مساعد متجر 3QRab — موسي");
    println!("   Type 'exit' or Ctrl+C to quit");
    println!("   Type '/summary' for the conversation digest");
    println!("   Type '/clear' to wipe the conversation history");
    println!();

    // Interactive loop reading from stdin
    let stdin = tokio::io::stdin();
    let reader = tokio::io::BufReader::new(stdin);
    use tokio::io::AsyncBufReadExt;
    let mut lines = reader.lines();

    loop {
        eprint!("{} ", style("you>").cyan());
        use std::io::Write;
        std::io::stderr().flush().ok();

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break, // EOF
            Err(_) => break,
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "exit" || trimmed == "quit" || trimmed == "/exit" {
            println!("👋 مع السلامة!");
            break;
        }
        if trimmed == "/summary" {
            let summary = session.summary();
            if summary.is_empty() {
                println!("(no conversation recorded yet)");
            } else {
                println!("{summary}");
            }
            println!();
            continue;
        }
        if trimmed == "/clear" {
            match session.clear() {
                Ok(()) => println!("🗑️  conversation history cleared"),
                Err(e) => println!("{} {e}", style("❌").red()),
            }
            println!();
            continue;
        }

        let spinner = thinking_spinner();
        let reply = session.handle_message(trimmed).await;
        spinner.finish_and_clear();

        println!("{} {}", style("موسي>").green(), reply.text);
        if !reply.recorded {
            eprintln!("{}", style("   (exchange not recorded)").dim());
        }
        println!();
    }

    Ok(())
}

fn thinking_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("🤔 جاري التفكير...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(120));
    spinner
}
