use anyhow::Result;
use feedwidget::{FallbackPolicy, FeedState, FeedWidget, HttpFeedSource};
use std::env;

/// サイトのフィードウィジェットが何を表示するかを確認する
///
/// Usage: check_feed [site_url] [--hide]
#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let policy = if args.iter().any(|a| a == "--hide") {
        FallbackPolicy::Hide
    } else {
        FallbackPolicy::Placeholder
    };
    let site_url = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .cloned()
        .unwrap_or_else(|| "http://localhost:3000".to_string());

    let source = HttpFeedSource::new(reqwest::Client::new(), &site_url);
    println!("Fetching: {}", source.url());

    let mut widget = FeedWidget::mount(source, policy);
    let state = widget.settled().await;

    println!("----------------------------------------");
    match &state {
        FeedState::Live(posts) => println!("State: LIVE ({} posts)", posts.len()),
        FeedState::Placeholder(posts) => println!("State: PLACEHOLDER ({} posts)", posts.len()),
        FeedState::Hidden => println!("State: HIDDEN (section omitted)"),
        FeedState::Loading => println!("State: LOADING (fetch task ended without a result)"),
    }
    println!("----------------------------------------");

    for card in widget.cards() {
        println!("[{}] {}", card.date, card.href);
        println!("  image: {}", card.image_src);
        if !card.caption.is_empty() {
            println!("  {}", card.caption);
        }
    }

    Ok(())
}
