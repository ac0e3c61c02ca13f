// src/main.rs
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use wordtrainer_dashboard::commands::health::HealthCommand;
use wordtrainer_dashboard::core::constants::{APP_TITLE, VERSION};
use wordtrainer_dashboard::server::{self, HealthBackend};
use wordtrainer_dashboard::{CommandHandler, Config, HealthState, Result, Session};

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = init_logger();
    let config = Config::load().await;
    if !env_filter {
        apply_log_level(&config.log_level);
    }
    log::info!("{} v{}", APP_TITLE, VERSION);

    match std::env::args().nth(1).as_deref() {
        Some("serve") => serve(&config).await,
        _ => shell(config).await,
    }
}

/// Starts logging before the config is read. Returns whether RUST_LOG is set,
/// in which case it wins over the configured level.
fn init_logger() -> bool {
    let env_filter = std::env::var_os(env_logger::DEFAULT_FILTER_ENV).is_some();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace"))
        .format_timestamp_secs()
        .init();
    if !env_filter {
        log::set_max_level(log::LevelFilter::Info);
    }
    env_filter
}

fn apply_log_level(level: &str) {
    match level.parse::<log::LevelFilter>() {
        Ok(filter) => log::set_max_level(filter),
        Err(_) => log::warn!("Unknown log_level '{}', keeping info", level),
    }
}

async fn serve(config: &Config) -> Result<()> {
    let backend = actix_web::web::Data::new(HealthBackend::from_config(&config.server));
    tokio::select! {
        result = server::run_dev_server(&config.server, backend) => result,
        _ = tokio::signal::ctrl_c() => {
            log::info!("Shutting down dev health endpoint");
            Ok(())
        }
    }
}

async fn shell(config: Config) -> Result<()> {
    log::info!("Health endpoint: {}", config.health_url());
    let session = wordtrainer_dashboard::start_session(config).await?;
    spawn_watchers(&session);

    let handler = CommandHandler::new(session.clone());
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout
        .write_all(format!("{} v{}\n> ", APP_TITLE, VERSION).as_bytes())
        .await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let result = handler.handle_input(&line).await;
        if !result.message.is_empty() {
            stdout
                .write_all(format!("{}\n", result.message).as_bytes())
                .await?;
        }
        if result.should_exit {
            break;
        }
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
    }

    Ok(())
}

/// Logs language switches and health transitions as they happen.
fn spawn_watchers(session: &Arc<Session>) {
    let mut language = session.store.subscribe();
    tokio::spawn(async move {
        while language.changed().await.is_ok() {
            let lang = *language.borrow_and_update();
            log::debug!("Display language now '{}'", lang);
        }
    });

    let Some(monitor) = &session.monitor else {
        return;
    };
    let mut health = monitor.subscribe();
    let session = session.clone();
    tokio::spawn(async move {
        let mut last_kind = None;
        while health.changed().await.is_ok() {
            let state = health.borrow_and_update().clone();
            let kind = match &state {
                HealthState::Loading => "loading",
                HealthState::Error(_) => "error",
                HealthState::Success(p) if p.is_healthy() => "healthy",
                HealthState::Success(_) => "unhealthy",
            };
            if last_kind != Some(kind) {
                log::info!("{}", HealthCommand::render(&session, &state).replace('\n', " | "));
                last_kind = Some(kind);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level_replaces_startup_level() {
        log::set_max_level(log::LevelFilter::Info);
        apply_log_level("debug");
        assert_eq!(log::max_level(), log::LevelFilter::Debug);

        apply_log_level("verbose");
        assert_eq!(log::max_level(), log::LevelFilter::Debug);
    }
}
