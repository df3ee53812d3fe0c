use tvmaze_core::{ShowsWidget, TvMazeApi};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let term = std::env::args().nth(1).unwrap_or_else(|| "batman".to_string());
    let api = TvMazeApi::new()?;

    println!("🔍 Searching '{}'...\n", term);

    let shows = api.search_shows(&term).await?;

    println!("Found {} shows:", shows.len());
    for (i, show) in shows.iter().enumerate() {
        println!("  {}. {} - ID: {} - {}", i + 1, show.name, show.id, show.image);
    }

    let Some(first) = shows.first() else {
        return Ok(());
    };

    println!("\n🎬 Episodes of '{}' (ID: {}):\n", first.name, first.id);

    let widget = ShowsWidget::new()?;
    widget.submit_search(&term).await?;
    widget.show_episodes(first.id).await?;

    let view = widget.snapshot().await?;
    println!("{}", view.episodes_html);
    println!("\nCards rendered: {:?}", view.show_ids);

    Ok(())
}
