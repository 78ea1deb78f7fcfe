use gumdrop::Options;

use ribbon_helix::data::EnrichedStream;

mod fallback;
mod view;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Options)]
/// watches the blueribbon live stream directory
struct Args {
    /// print this help message
    help: bool,

    /// streams endpoint to poll
    #[options(default = "http://localhost:5000/api/streams")]
    endpoint: String,

    /// seconds between polls
    #[options(default = "30")]
    interval: u64,
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

    let endpoint = get_env_var("BLUERIBBON_STREAMS_ENDPOINT")
        .ok()
        .unwrap_or(args.endpoint);

    let agent = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .expect("valid client");

    log::info!("polling {endpoint} every {}s", args.interval);
    let mut interval = tokio::time::interval(std::time::Duration::from_secs(args.interval));

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let streams = match fetch_streams(&agent, &endpoint).await {
                    Ok(streams) => streams,
                    Err(error) => {
                        log::warn!("could not reach the stream directory: {error:#}");
                        fallback::sample_streams()
                    }
                };
                view::render(&streams);
            }
            _ = tokio::signal::ctrl_c() => {
                log::info!("shutting down");
                break;
            }
        }
    }

    Ok(())
}

async fn fetch_streams(
    agent: &reqwest::Client,
    endpoint: &str,
) -> anyhow::Result<Vec<EnrichedStream>> {
    #[derive(serde::Deserialize)]
    struct Streams {
        streams: Vec<EnrichedStream>,
    }

    let resp: Streams = agent
        .get(endpoint)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(resp.streams)
}
