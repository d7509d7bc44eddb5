use config::{get_config, write_default, Command, Config, Parser, ProjectDirs};
use palette::Theme;

mod error;
mod export;
mod report;
mod swatch;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(err) = run() {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> error::Result<()> {
    let mut args = Config::parse();
    let project = ProjectDirs::from("rs", "tinge", "tinge");
    let (config_path, config) = get_config(&mut args, project.as_ref());

    let theme = Theme::new((&config).into());

    match config.command.clone().unwrap_or_default() {
        Command::Palette => report::palette(&theme),
        Command::Inspect { color } => report::inspect(color, theme.accent_delta()),
        Command::Export { path } => export::export(&theme, path.as_deref())?,
        Command::Swatch {
            path,
            width,
            height,
            radius,
        } => swatch::write(
            &theme,
            path,
            &swatch::Sheet {
                width,
                height,
                radius,
            },
        )?,
        Command::Init => {
            tracing::info!("writing default config to {config_path:?}");
            write_default(&config_path);
        }
    }

    Ok(())
}
