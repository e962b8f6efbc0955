use std::time::Duration;

use newsfeed_rs::NewsClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    newsfeed_rs::init_tracing();

    // 1. Assemble the request URL. Query parameters are the caller's business.
    let api_key = std::env::var("GUARDIAN_API_KEY").unwrap_or_else(|_| "test".to_string());
    let query = std::env::args().nth(1).unwrap_or_else(|| "android".to_string());
    let url = format!(
        "https://content.guardianapis.com/search?q={query}&show-tags=contributor&show-fields=thumbnail&page-size=10&api-key={api_key}"
    );

    // 2. Lenient fetch: problems are logged and we simply get fewer (or no) items.
    let items = newsfeed_rs::fetch_news(&url).await;
    println!("--- {} articles for '{query}' ---", items.len());
    for item in &items {
        println!(
            "{} | {:<16} | {} ({})",
            item.publication_date, item.section_name, item.title, item.author
        );
    }
    println!();

    // 3. Strict fetch with a tighter connect timeout, to see why a listing is empty.
    let client = NewsClient::builder()
        .connect_timeout(Duration::from_secs(5))
        .user_agent("newsfeed-rs demo")
        .build()?;
    match client.news(&url).try_fetch().await {
        Ok(items) => println!("strict fetch returned {} articles", items.len()),
        Err(e) => println!("strict fetch failed: {e}"),
    }

    Ok(())
}
