// ABOUTME: Progress reporting hooks for the sync workflow
// ABOUTME: Console output with a progress bar, plus a recorder for tests

use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    LoadConfig,
    Authenticate,
    ListLocales,
    Reconcile,
    EnsureDir,
    Download,
    Save,
    LocaleFailed,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::LoadConfig => "config",
            Stage::Authenticate => "auth",
            Stage::ListLocales => "locales",
            Stage::Reconcile => "reconcile",
            Stage::EnsureDir => "mkdir",
            Stage::Download => "download",
            Stage::Save => "save",
            Stage::LocaleFailed => "error",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

pub trait SyncObserver {
    fn on_event(&mut self, stage: Stage, locale: Option<&str>, message: &str);

    /// Called once before the per-locale loop with the number of locales.
    fn on_batch_start(&mut self, _total: usize) {}
}

#[derive(Default)]
pub struct ConsoleObserver {
    progress: Option<ProgressBar>,
}

impl ConsoleObserver {
    pub fn new() -> Self {
        Self::default()
    }

    fn line(stage: Stage, locale: Option<&str>, message: &str) -> String {
        match locale {
            Some(locale) => format!("[{}] {}: {}", stage, locale, message),
            None => format!("[{}] {}", stage, message),
        }
    }
}

impl SyncObserver for ConsoleObserver {
    fn on_batch_start(&mut self, total: usize) {
        let pb = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar().template("[{bar:40}] {pos}/{len} locales") {
            pb.set_style(style.progress_chars("##-"));
        }
        self.progress = Some(pb);
    }

    fn on_event(&mut self, stage: Stage, locale: Option<&str>, message: &str) {
        let line = Self::line(stage, locale, message);

        if stage == Stage::Done {
            if let Some(pb) = self.progress.take() {
                pb.finish_and_clear();
            }
            println!("{}", line);
            return;
        }

        let print = || {
            if stage == Stage::LocaleFailed {
                eprintln!("{}", line);
            } else {
                println!("{}", line);
            }
        };

        // A hidden bar (non-terminal output) still runs the closure
        match &self.progress {
            Some(pb) => {
                pb.suspend(print);
                if matches!(stage, Stage::Save | Stage::LocaleFailed) {
                    pb.inc(1);
                }
            }
            None => print(),
        }
    }
}

/// Collects events in memory.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub events: Vec<(Stage, Option<String>, String)>,
}

impl RecordingObserver {
    pub fn stages(&self) -> Vec<Stage> {
        self.events.iter().map(|(stage, _, _)| *stage).collect()
    }

    pub fn locales_at(&self, stage: Stage) -> Vec<String> {
        self.events
            .iter()
            .filter(|(s, _, _)| *s == stage)
            .filter_map(|(_, locale, _)| locale.clone())
            .collect()
    }
}

impl SyncObserver for RecordingObserver {
    fn on_event(&mut self, stage: Stage, locale: Option<&str>, message: &str) {
        self.events
            .push((stage, locale.map(String::from), message.to_string()));
    }
}
