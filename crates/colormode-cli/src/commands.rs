//! Subcommand implementations.

use std::io::Write;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use colormode::{
    ColorMode, Config, FileStore, OsPreference, RootElement, SystemPreference,
    SystemThemeController, ThemePreference, ThemePreferenceController,
};
use console::style;

type Controller<O> = ThemePreferenceController<FileStore, O, RootElement>;

fn mode_label(mode: ColorMode) -> console::StyledObject<&'static str> {
    match mode {
        ColorMode::Dark => style(mode.as_str()).magenta().bold(),
        ColorMode::Light => style(mode.as_str()).yellow().bold(),
    }
}

fn preference_label(preference: ThemePreference) -> String {
    match preference.mode() {
        Some(mode) => mode_label(mode).to_string(),
        None => style("unset").dim().to_string(),
    }
}

/// Prints stored, OS and effective modes without changing anything.
pub fn status<O: OsPreference>(
    out: &mut impl Write,
    store: FileStore,
    os: O,
    config: Config,
) -> Result<()> {
    let os_mode = os.current();
    let mut controller = Controller::with_config(store, os, RootElement::new(), config);
    let applied = controller.initialize();

    writeln!(out, "store:   {}", controller.store().path().display())?;
    writeln!(out, "stored:  {}", preference_label(controller.preference()))?;
    writeln!(out, "os:      {}", mode_label(os_mode))?;
    writeln!(out, "applied: {}", mode_label(applied))?;
    Ok(())
}

/// Resolves and applies the effective mode.
pub fn init<O: OsPreference>(
    out: &mut impl Write,
    store: FileStore,
    os: O,
    config: Config,
) -> Result<()> {
    let mut controller = Controller::with_config(store, os, RootElement::new(), config);
    let applied = controller.initialize();
    writeln!(
        out,
        "{} (classes: [{}])",
        mode_label(applied),
        controller.presentation().classes().join(" ")
    )?;
    Ok(())
}

/// Flips the effective mode and stores it.
pub fn toggle<O: OsPreference>(
    out: &mut impl Write,
    store: FileStore,
    os: O,
    config: Config,
) -> Result<()> {
    let path = store.path().to_path_buf();
    let mut controller = Controller::with_config(store, os, RootElement::new(), config);
    let before = controller.initialize();
    let after = controller
        .toggle()
        .with_context(|| format!("saving preference to {}", path.display()))?;
    writeln!(out, "{} -> {}", mode_label(before), mode_label(after))?;
    Ok(())
}

/// Follows the OS preference until `changes` changes were seen, or forever.
pub fn watch(
    out: &mut impl Write,
    mut os: SystemPreference,
    interval: Duration,
    changes: Option<usize>,
) -> Result<()> {
    let controller = SystemThemeController::attach(&mut os, RootElement::new());
    writeln!(out, "{}", mode_label(controller.borrow().applied()))?;

    let mut seen = 0;
    while changes.map_or(true, |limit| seen < limit) {
        thread::sleep(interval);
        if os.poll().is_some() {
            seen += 1;
            writeln!(out, "{}", mode_label(controller.borrow().applied()))?;
            out.flush()?;
        }
    }
    Ok(())
}
