use anyhow::Result;
use clap::Parser;
use gridsnake::app::App;
use gridsnake::game::GameConfig;

#[derive(Parser)]
#[command(name = "gridsnake")]
#[command(version, about = "Grid-based snake in the terminal")]
struct Cli {
    /// Side length of the square grid
    #[arg(long, default_value = "20", value_parser = clap::value_parser!(i32).range(6..=100))]
    grid_size: i32,

    /// Milliseconds between simulation ticks
    #[arg(long, default_value = "100")]
    tick_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = if cli.grid_size == 20 {
        GameConfig::default()
    } else {
        GameConfig::new(cli.grid_size)
    };
    config.tick_interval_ms = cli.tick_ms;

    App::new(config).run().await
}
