mod cloud;
mod config;
mod lyrics;
mod netease;
mod pipeline;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "versecloud", version, about = "Artist lyrics word-cloud generator")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch lyrics and render the word cloud (default).
    Cloud(CloudArgs),
    /// Print an artist's hot songs to stdout (headless).
    Songs {
        artist_id: String,
    },
    /// Print a song's cleaned lyric text to stdout (headless).
    Lyrics {
        song_id: String,
    },
    /// Dump the raw lyric API JSON to stdout (headless).
    LyricsJson {
        song_id: String,
    },
}

#[derive(Debug, Default, Args)]
struct CloudArgs {
    /// NetEase artist id.
    #[arg(long)]
    artist_id: Option<String>,

    /// Artist display name, used for the output file name.
    #[arg(long)]
    artist_name: Option<String>,

    /// Tokenizer language: "en" or "cn".
    #[arg(long)]
    lang: Option<cloud::Language>,

    /// Directory to write the image into.
    #[arg(long)]
    output_dir: Option<std::path::PathBuf>,

    /// Skip opening the image in the system viewer.
    #[arg(long)]
    no_show: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();
    let mut cfg = config::load(cli.config.as_deref()).context("load config")?;

    match cli.command.unwrap_or(Command::Cloud(CloudArgs::default())) {
        Command::Cloud(args) => {
            if let Some(id) = args.artist_id {
                cfg.artist.id = id;
            }
            if let Some(name) = args.artist_name {
                cfg.artist.name = name;
            }
            if let Some(lang) = args.lang {
                cfg.language = lang;
            }
            if let Some(dir) = args.output_dir {
                cfg.output.dir = dir;
            }
            if args.no_show {
                cfg.output.show = false;
            }
            let path = pipeline::run(&cfg).await?;
            println!("{}", path.display());
        }
        Command::Songs { artist_id } => {
            let client = netease::NeteaseClient::new()?;
            let songs = client.hot_songs(&artist_id).await?;
            print_songs(&songs);
        }
        Command::Lyrics { song_id } => {
            let client = netease::NeteaseClient::new()?;
            match client.lyric(&song_id).await? {
                Some(text) => println!("{}", lyrics::strip_attribution(&text).trim()),
                None => println!("(no lyrics)"),
            }
        }
        Command::LyricsJson { song_id } => {
            let client = netease::NeteaseClient::new()?;
            let v = client.lyric_raw(&song_id).await?;
            println!("{}", serde_json::to_string_pretty(&v)?);
        }
    }

    Ok(())
}

fn print_songs(songs: &[netease::Song]) {
    for (i, s) in songs.iter().enumerate() {
        println!("{:02}. {}  (song_id={})", i + 1, s.name, s.id);
    }
}
