use toptracks::{
    Res, cli,
    config::{self, Config},
    error, info,
    spotify::SpotifyClient,
};

async fn run() -> Res<()> {
    if let Some(path) = config::load_env()? {
        info!("Loaded environment from {}", path.display());
    }

    let config = Config::from_env();
    let client = SpotifyClient::new(&config)?;
    cli::top_tracks(&client, cli::ARTIST_ID).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        error!("{}", e);
    }
}
