use anyhow::Result;
use clap::Parser;
use torus_snake::app::App;
use torus_snake::game::GameConfig;

#[derive(Parser)]
#[command(name = "torus_snake")]
#[command(version, about = "Snake on a wraparound grid with timed bonus food")]
struct Cli {
    /// Initial game speed, 1 (slow) to 20 (fast)
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u8).range(1..=20))]
    speed: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::new(cli.speed);
    App::new(config).run().await
}
