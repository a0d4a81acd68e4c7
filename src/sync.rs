// ABOUTME: Core sync workflow from configuration to Localizable.strings files
// ABOUTME: Fatal setup steps, order-preserving reconciliation, isolated per-locale work

use crate::{
    api::ApiClient,
    config::Config,
    observer::{Stage, SyncObserver},
    storage::{write_atomic, OutputLayout, STRINGS_FILE_NAME},
    Result,
};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// Stop after reconciliation without downloading or writing anything.
    pub dry_run: bool,
    pub format: Option<String>,
    pub output: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub requested: Vec<String>,
    pub available: Vec<String>,
    pub matched: Vec<String>,
    pub synced: Vec<String>,
    pub failed: Vec<(String, String)>,
}

impl SyncReport {
    pub fn nothing_to_download(&self) -> bool {
        self.matched.is_empty()
    }
}

/// Target locales that the server also has, in target order. Matching is
/// exact and case-sensitive; repeated targets are kept once.
pub fn reconcile_locales(target: &[String], available: &[String]) -> Vec<String> {
    let available: HashSet<&str> = available.iter().map(String::as_str).collect();
    let mut matched: Vec<String> = Vec::new();

    for locale in target {
        if available.contains(locale.as_str()) && !matched.contains(locale) {
            matched.push(locale.clone());
        }
    }

    matched
}

/// Loads the configuration file and runs the sync. Errors returned here are
/// fatal to the whole run; per-locale failures are recorded in the report.
pub fn run(
    config_path: &Path,
    options: &SyncOptions,
    observer: &mut dyn SyncObserver,
) -> Result<SyncReport> {
    let config = Config::load(config_path)?
        .with_format(options.format.clone())
        .with_localization_path(options.output.clone());

    observer.on_event(
        Stage::LoadConfig,
        None,
        &format!(
            "loaded {} ({} target locales, format {})",
            config_path.display(),
            config.target_locales.len(),
            config.format
        ),
    );

    sync_with_config(&config, options, observer)
}

pub fn sync_with_config(
    config: &Config,
    options: &SyncOptions,
    observer: &mut dyn SyncObserver,
) -> Result<SyncReport> {
    let mut client = ApiClient::new(config)?;

    client.authenticate()?;
    observer.on_event(Stage::Authenticate, None, "authenticated");

    let available = client.get_available_locales()?;
    observer.on_event(
        Stage::ListLocales,
        None,
        &format!("server has {} locales: {}", available.len(), available.join(", ")),
    );

    let matched = reconcile_locales(&config.target_locales, &available);
    let mut report = SyncReport {
        requested: config.target_locales.clone(),
        available,
        matched,
        ..SyncReport::default()
    };

    if report.nothing_to_download() {
        observer.on_event(
            Stage::Done,
            None,
            &format!(
                "nothing to download; none of the requested locales exist on the server: {}",
                report.requested.join(", ")
            ),
        );
        return Ok(report);
    }

    observer.on_event(
        Stage::Reconcile,
        None,
        &format!("will sync {}", report.matched.join(", ")),
    );

    if options.dry_run {
        observer.on_event(Stage::Done, None, "dry run, no files written");
        return Ok(report);
    }

    let layout = OutputLayout::new(&config.localization_path);
    let (synced, failed) = sync_locales(&client, &layout, &report.matched, observer);
    report.synced = synced;
    report.failed = failed;

    observer.on_event(
        Stage::Done,
        None,
        &format!(
            "synced {} of {} locales ({} failed)",
            report.synced.len(),
            report.matched.len(),
            report.failed.len()
        ),
    );

    Ok(report)
}

/// Processes each locale to completion before the next. A failure is
/// reported and recorded but never stops the loop.
pub fn sync_locales(
    client: &ApiClient,
    layout: &OutputLayout,
    locales: &[String],
    observer: &mut dyn SyncObserver,
) -> (Vec<String>, Vec<(String, String)>) {
    let mut synced = Vec::new();
    let mut failed = Vec::new();

    observer.on_batch_start(locales.len());

    for locale in locales {
        match sync_locale(client, layout, locale, observer) {
            Ok(path) => {
                observer.on_event(
                    Stage::Save,
                    Some(locale.as_str()),
                    &format!("saved {}", path.display()),
                );
                synced.push(locale.clone());
            }
            Err(e) => {
                warn!(locale = locale.as_str(), error = %e, "locale sync failed");
                observer.on_event(Stage::LocaleFailed, Some(locale.as_str()), &e.to_string());
                failed.push((locale.clone(), e.to_string()));
            }
        }
    }

    (synced, failed)
}

fn sync_locale(
    client: &ApiClient,
    layout: &OutputLayout,
    locale: &str,
    observer: &mut dyn SyncObserver,
) -> Result<PathBuf> {
    observer.on_event(Stage::Download, Some(locale), "downloading");
    let content = client.download_strings(locale)?;

    let dir = layout.ensure_locale_dir(locale)?;
    observer.on_event(
        Stage::EnsureDir,
        Some(locale),
        &format!("using {}", dir.display()),
    );

    let path = dir.join(STRINGS_FILE_NAME);
    write_atomic(&path, content.as_bytes())?;
    Ok(path)
}
