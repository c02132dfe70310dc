use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use std::time::Duration;

use crate::analytics::{AnalyticsEmitter, JsonLinesSink, TracingSink};
use crate::app::host::{EntryOutcome, TerminalHost};
use crate::config::{AnalyticsConfig, Config};
use crate::entry::{EntryOrchestrator, EntryProps, LocaleSwitcher};
use crate::i18n::LocaleService;
use crate::models::{load_recent_items, TemplateCatalog};
use crate::tui;

/// Builds the analytics emitter described by `config`.
///
/// Events always go to the log; a JSON-lines file is added when configured.
pub fn build_analytics(config: &AnalyticsConfig) -> Result<AnalyticsEmitter> {
    if !config.enabled {
        tracing::debug!("Analytics disabled");
        return Ok(AnalyticsEmitter::disabled());
    }

    let mut analytics = AnalyticsEmitter::disabled().with_sink(TracingSink);
    if let Some(path) = &config.log_file {
        analytics = analytics.with_sink(JsonLinesSink::open(path)?);
    }
    Ok(analytics)
}

/// Assembles the start screen for `host` from configuration.
pub fn build_orchestrator(
    config: &Config,
    host: TerminalHost,
) -> Result<EntryOrchestrator<TerminalHost>> {
    let recent_file = config.paths.recent_items_file()?;
    let recent_items = load_recent_items(&recent_file)?;
    tracing::debug!(
        "Loaded {} recent items from {}",
        recent_items.len(),
        recent_file.display()
    );

    let props = EntryProps {
        recent_items,
        show_download_link: config.ui.show_download_link,
    };
    let locale = LocaleSwitcher::new(LocaleService::shared(config.ui.language.as_str()));

    Ok(EntryOrchestrator::new(
        host,
        props,
        TemplateCatalog::builtin(),
        build_analytics(&config.analytics)?,
        locale,
    ))
}

/// Runs the start screen until the user decides or quits.
///
/// Returns `None` when the user quit without choosing.
pub fn run_start_screen(config: &Config) -> Result<Option<EntryOutcome>> {
    let host = TerminalHost::new(config.session.enabled);
    let orchestrator = build_orchestrator(config, host)?;

    let mut terminal = tui::setup_terminal()?;
    let mut screen = tui::EntryScreen::new(orchestrator, tui::Theme::from_mode(config.ui.theme_mode));
    let result = run_loop(&mut terminal, &mut screen);
    tui::restore_terminal(terminal)?;
    result?;

    Ok(screen.into_orchestrator().into_host().into_outcome())
}

fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut ratatui::Terminal<B>,
    screen: &mut tui::EntryScreen<TerminalHost>,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| screen.render(f))
            .context("Failed to draw start screen")?;

        if screen.orchestrator().host().outcome().is_some() {
            return Ok(());
        }

        // Poll for events with timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if screen.handle_key(key) {
                        tracing::info!("Start screen closed without a choice");
                        return Ok(());
                    }
                }
                Event::Paste(text) => screen.handle_paste(&text),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PathConfig;
    use tempfile::TempDir;

    #[test]
    fn test_build_orchestrator_reads_recent_items() {
        let dir = TempDir::new().unwrap();
        let recent = dir.path().join("recent.json");
        std::fs::write(&recent, r#"[{"fileName":"a.json"},{"fileName":"b.json"}]"#).unwrap();

        let config = Config {
            paths: PathConfig {
                recent_items: Some(recent),
            },
            ..Config::default()
        };
        let orchestrator = build_orchestrator(&config, TerminalHost::new(false)).unwrap();
        assert_eq!(orchestrator.recent_items().len(), 2);
        assert_eq!(orchestrator.current_language(), "en");
    }

    #[test]
    fn test_build_analytics_with_log_file() {
        let dir = TempDir::new().unwrap();
        let config = AnalyticsConfig {
            enabled: true,
            log_file: Some(dir.path().join("events.jsonl")),
        };
        assert_eq!(build_analytics(&config).unwrap().sink_count(), 2);

        let disabled = AnalyticsConfig {
            enabled: false,
            log_file: None,
        };
        assert_eq!(build_analytics(&disabled).unwrap().sink_count(), 0);
    }
}
