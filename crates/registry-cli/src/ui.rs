//! Interactive event loop: the terminal stand-in for the form window.
//!
//! The UI collects the guest name and checkbox states and forwards them to
//! [`RegistryApp`]; the authoritative selection state always lives in the
//! core.

use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use registry_core::{app::RegistryApp, storage::TranscriptLog, time::Clock};
use registry_domain::GridPos;

use crate::{clock::SystemClock, error::CliError, output, render::StdoutPageRenderer};

const ACTIONS: [&str; 4] = ["Submit", "Print List", "Save/Clear", "Exit"];

pub fn run_loop(mut app: RegistryApp, log: &dyn TranscriptLog) -> Result<(), CliError> {
    let theme = ColorfulTheme::default();
    let clock = SystemClock;
    let mut guest_name = String::new();

    if let Some(title) = app.title() {
        output::section(title);
    }

    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("Action")
            .items(&ACTIONS)
            .default(0)
            .interact()?;
        match choice {
            0 => submit_action(&mut app, &theme, &mut guest_name)?,
            1 => print_action(&app, &clock),
            2 => save_and_clear_action(&mut app, log, &mut guest_name),
            _ => {
                exit_action(&app, log, &guest_name);
                break;
            }
        }
    }
    Ok(())
}

fn submit_action(
    app: &mut RegistryApp,
    theme: &ColorfulTheme,
    guest_name: &mut String,
) -> Result<(), CliError> {
    let entered: String = Input::with_theme(theme)
        .with_prompt("Guest name")
        .with_initial_text(guest_name.clone())
        .allow_empty(true)
        .interact_text()?;
    *guest_name = entered;

    // Offer only the items no earlier guest has taken, pre-checking any
    // still-selected ones.
    let (positions, labels, defaults) = claimable_items(app);
    if labels.is_empty() {
        if app.layout().is_some() {
            output::info("No items left to claim.");
        }
    } else {
        let picked = MultiSelect::with_theme(theme)
            .with_prompt("Items (space toggles, enter submits)")
            .items(&labels)
            .defaults(&defaults)
            .interact()?;
        if let Some(layout) = app.layout_mut() {
            for (index, pos) in positions.iter().enumerate() {
                if let Some(item) = layout.item_at_mut(*pos) {
                    item.selected = picked.contains(&index);
                }
            }
        }
    }

    let submission = app.submit(guest_name);
    if submission.labels.is_empty() {
        output::info(format!("Recorded \"{}\" with no items.", submission.guest_name));
    } else {
        output::success(format!(
            "Recorded {} item(s) for \"{}\".",
            submission.labels.len(),
            submission.guest_name
        ));
    }

    output::section("Selections");
    println!("{}", app.transcript().to_text());
    Ok(())
}

fn claimable_items(app: &RegistryApp) -> (Vec<GridPos>, Vec<String>, Vec<bool>) {
    let mut positions = Vec::new();
    let mut labels = Vec::new();
    let mut defaults = Vec::new();
    if let Some(layout) = app.layout() {
        for item in layout.items().filter(|item| !item.locked) {
            positions.push(item.pos);
            labels.push(item.label.clone());
            defaults.push(item.selected);
        }
    }
    (positions, labels, defaults)
}

fn print_action(app: &RegistryApp, clock: &dyn Clock) {
    let mut renderer = StdoutPageRenderer;
    match app.print_to(&mut renderer, clock.today()) {
        Ok(0) => output::info("Nothing to print yet."),
        Ok(pages) => output::success(format!("Printed {} page(s).", pages)),
        Err(err) => {
            tracing::warn!(%err, "printing failed");
            output::warning(format!("Printing failed: {}", err));
        }
    }
}

fn save_and_clear_action(app: &mut RegistryApp, log: &dyn TranscriptLog, guest_name: &mut String) {
    match app.save_and_clear(guest_name, log) {
        Ok(()) => output::success("Selections saved and cleared."),
        Err(err) => {
            tracing::warn!(%err, "saving the selection list failed");
            output::warning(format!("Saving failed: {}", err));
        }
    }
    guest_name.clear();
}

fn exit_action(app: &RegistryApp, log: &dyn TranscriptLog, guest_name: &str) {
    if let Err(err) = app.save_on_exit(guest_name, log) {
        tracing::warn!(%err, "save on exit failed");
        output::warning(format!("Saving on exit failed: {}", err));
    }
}
