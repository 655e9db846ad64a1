use clap::{Parser, Subcommand};
use event_blossom::catalog::catalog;
use event_blossom::page;
use event_blossom::search::Query;
use event_blossom::settings::Settings;
use std::io::Write;

/// Serves the featured events page.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Settings file, with or without its extension.
    #[arg(long, default_value = "settings")]
    settings: String,

    /// Overrides the configured port.
    #[arg(long)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the page over HTTP (the default).
    Serve,
    /// Write the rendered page to stdout.
    Render {
        #[arg(long, default_value = "")]
        query: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut settings = Settings::load(&args.settings)?;
    if let Some(port) = args.port {
        settings.port = port;
    }

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let addr = format!("{}:{}", settings.bind_address, settings.port);
            log::info!(
                "Serving {} featured events on http://{}",
                catalog().len(),
                addr
            );
            gotham::start(addr, event_blossom::router(settings.site))?;
        }
        Command::Render { query } => {
            let body = page::render(&settings.site, catalog(), &Query::new(query))?;
            std::io::stdout().write_all(&body)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Args, Command};
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_to_serving() {
        let args = Args::parse_from(["event-blossom"]);
        assert_eq!(args.settings, "settings");
        assert!(args.port.is_none());
        assert!(args.command.is_none());
    }

    #[test]
    fn render_takes_a_query() {
        let args = Args::parse_from(["event-blossom", "--port", "9000", "render", "--query", "music"]);
        assert_eq!(args.port, Some(9000));
        match args.command {
            Some(Command::Render { query }) => assert_eq!(query, "music"),
            _ => panic!("expected render"),
        }
    }
}
