mod cli;

use std::io::{BufRead, Write as _};

use clap::Parser;
use cli::{Cli, Commands};
use page_assist::{
    ChatbotOptions, ChatbotWidget, Outcome, Page, ResourceSearch, Role, RuleSet, Sender,
    VideoSearch,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Chat {
            rules,
            delay,
            transcript,
        } => {
            let page = Page::sample();
            let rule_set = match rules {
                Some(path) => RuleSet::load_from_file(&path)?,
                None => RuleSet::default(),
            };
            let mut bot = ChatbotWidget::bind(&page)?
                .with_rules(rule_set)
                .with_options(ChatbotOptions::new().reply_delay(delay));
            bot.open();

            println!("💬 Chat widget open. Type a message, or an empty line to quit.");

            let stdin = std::io::stdin();
            let input = page.field(Role::ChatInput)?;
            let mut printed = 0;
            loop {
                print!("> ");
                std::io::stdout().flush()?;
                let Some(line) = stdin.lock().lines().next() else {
                    break;
                };
                let line = line?;
                if line.trim().is_empty() {
                    break;
                }

                input.set(&line);
                bot.submit();
                tokio::time::sleep(std::time::Duration::from_millis(delay + 50)).await;

                let snapshot = bot.transcript();
                for message in snapshot.all().iter().skip(printed) {
                    if message.sender == Sender::Bot {
                        println!("🤖 {}", message.text);
                    }
                }
                printed = snapshot.len();
            }

            bot.close();
            if let Some(path) = transcript {
                bot.transcript().persist_to_file(&path)?;
                println!("📝 Transcript written to {path}");
            }
        }
        Commands::Resources { domain, location } => {
            let page = Page::sample();
            let search = ResourceSearch::bind(&page)?;
            page.field(Role::DomainSelect)?.set(&domain);
            page.field(Role::LocationInput)?.set(&location);

            match search.submit() {
                Outcome::Rendered => println!("{}", page.region(Role::ResourceResults)?.markup()),
                Outcome::MissingInput => {
                    println!("{}", page.region(Role::ResourceError)?.markup())
                }
            }
        }
        Commands::Videos { query } => {
            let page = Page::sample();
            let search = VideoSearch::bind(&page)?;

            match search.search(Some(&query)) {
                Outcome::Rendered => println!("{}", page.region(Role::VideoResults)?.markup()),
                Outcome::MissingInput => {
                    for alert in page.alerts() {
                        eprintln!("⚠️  {alert}");
                    }
                }
            }
        }
    }

    Ok(())
}
