use clap::Parser;
use post_filters::cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "post_filters=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Excerpt { file, markdown }) => {
            post_filters::cli::excerpt::run(file.as_deref(), markdown)?;
        }
        Some(Commands::Gravatar { email }) => {
            post_filters::cli::gravatar::run(&email)?;
        }
        Some(Commands::Static {
            path,
            title,
            static_dir,
            files_url,
        }) => {
            post_filters::cli::static_file::run(
                &cli.config,
                &path,
                title.as_deref(),
                static_dir.as_deref(),
                files_url.as_deref(),
            )?;
        }
        Some(Commands::Render {
            template,
            page,
            content,
            markdown,
        }) => {
            post_filters::cli::render::run(
                &cli.config,
                &template,
                page.as_deref(),
                content.as_deref(),
                markdown,
            )?;
        }
        None => {
            // No subcommand provided, print help
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
