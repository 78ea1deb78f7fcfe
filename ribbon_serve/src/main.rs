use gumdrop::Options;

use ribbon_config::LoadFromEnv as _;
use ribbon_helix::{config::Twitch, HelixClient, OAuth, StreamDirectory};
use ribbon_serve::start_server;

#[derive(Debug, Options)]
/// serves the blueribbon live stream directory
struct Args {
    /// print this help message
    help: bool,

    /// address to listen on
    #[options(default = "localhost")]
    address: String,

    /// port to listen on
    #[options(default = "5000")]
    port: u16,
}

fn get_env_var(key: &str) -> anyhow::Result<String> {
    std::env::var(key).or_else(|_| anyhow::bail!("cannot find env var for '{key}'"))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    simple_env_load::load_env_from([".dev.env"]);
    alto_logger::TermLogger::new(
        alto_logger::Options::default()
            .with_time(alto_logger::TimeConfig::relative_now())
            .with_style(alto_logger::StyleConfig::SingleLine),
    )?
    .init()?;

    let args = Args::parse_args_default_or_exit();

    let twitch = Twitch::load_from_env()?;

    let port = get_env_var("BLUERIBBON_PORT")
        .ok()
        .and_then(|c| c.parse().ok())
        .unwrap_or(args.port);

    let address = get_env_var("BLUERIBBON_ADDRESS")
        .ok()
        .unwrap_or(args.address);

    let allowed_origin = get_env_var("BLUERIBBON_ALLOWED_ORIGIN").ok();

    let oauth = OAuth::new(&twitch.client_id, &twitch.client_secret);
    let directory = StreamDirectory::new(HelixClient::new(oauth));

    start_server(
        format!("{address}:{port}"),
        directory,
        allowed_origin.as_deref(),
    )
    .await
}
