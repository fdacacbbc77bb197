// src/main.rs
use glowstone_admin::core::constants::{APP_TITLE, VERSION};
use glowstone_admin::input::{run_interactive, run_piped};
use glowstone_admin::{create_handler, i18n, Config, Outbox, Result, SubcommandRegistry};
use std::io::{IsTerminal, Write};

#[tokio::main]
async fn main() -> Result<()> {
    // Panic handler
    std::panic::set_hook(Box::new(|panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), crossterm::cursor::Show);
        eprintln!("PANIC: {}", panic_info);
    }));

    let config = Config::load().await?;
    init_logger(&config.log_level);
    log::info!("{} v{} starting", APP_TITLE, VERSION);
    config.log_summary();

    if let Err(e) = i18n::init(&config.language) {
        log::error!(
            "Language '{}' unavailable ({}), using '{}'",
            config.language,
            e,
            i18n::DEFAULT_LANGUAGE
        );
    }

    let handler = create_handler(&config, Outbox::new());
    log::debug!("{}", SubcommandRegistry::global().debug_info());

    if std::io::stdin().is_terminal() {
        run_interactive(&handler).await
    } else {
        run_piped(&handler).await
    }
}

/// `RUST_LOG` wins over the configured level.
fn init_logger(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            write!(
                buf,
                "[{}] {}: {}\r\n",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
