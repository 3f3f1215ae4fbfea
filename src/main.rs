use clap::Parser;
use spectator::cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spectator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { path }) => {
            spectator::cli::init::run(path)?;
        }
        Some(Commands::Migrate) => {
            spectator::cli::migrate::run(&cli.config)?;
        }
        Some(Commands::SortKey { text, sort_as }) => {
            spectator::cli::keys::print_sort_key(&cli.config, &text, &sort_as)?;
        }
        Some(Commands::Slug { id }) => {
            spectator::cli::keys::print_slug(&cli.config, id)?;
        }
        Some(Commands::DecodeSlug { slug }) => {
            spectator::cli::keys::print_decoded_slug(&cli.config, &slug)?;
        }
        Some(Commands::Slugify { text }) => {
            spectator::cli::keys::print_text_slug(&text)?;
        }
        Some(Commands::Creator { command }) => {
            spectator::cli::creator::run(&cli.config, command)?;
        }
        Some(Commands::Series { command }) => {
            spectator::cli::reading::run_series(&cli.config, command)?;
        }
        Some(Commands::Publication { command }) => {
            spectator::cli::reading::run_publication(&cli.config, command)?;
        }
        Some(Commands::Venue { command }) => {
            spectator::cli::events::run_venue(&cli.config, command)?;
        }
        Some(Commands::Work { command }) => {
            spectator::cli::events::run_work(&cli.config, command)?;
        }
        Some(Commands::Event { command }) => {
            spectator::cli::events::run_event(&cli.config, command)?;
        }
        Some(Commands::Reading { command }) => {
            spectator::cli::reading::run_reading(&cli.config, command)?;
        }
        None => {
            // No subcommand provided, print help
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
