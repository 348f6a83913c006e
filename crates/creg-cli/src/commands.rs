//! Subcommand implementations.

use anyhow::{Context, Result};
use comfy_table::Table;

use creg_app::{App, AppState, CatalogStatus, Message, Notice, Settings, SubmissionSink};
use creg_ingest::load_catalog;
use creg_model::{Catalog, CreditBand};

use crate::cli::{CoursesArgs, RegisterArgs};
use crate::render::course_table;

/// Outcome of `creg register`.
pub struct RegisterOutcome {
    pub state: AppState,
    /// `--submit` was given.
    pub submit_requested: bool,
    /// The sink accepted the registration.
    pub submitted: bool,
}

impl RegisterOutcome {
    pub fn load_failed(&self) -> bool {
        matches!(self.state.status, CatalogStatus::Failed(_))
    }

    pub fn exit_code(&self) -> i32 {
        if self.load_failed() || (self.submit_requested && !self.submitted) {
            1
        } else {
            0
        }
    }
}

pub fn run_courses(args: &CoursesArgs) -> Result<Table> {
    let catalog = load_catalog(&args.catalog)
        .with_context(|| format!("load catalog {}", args.catalog.display()))?;
    let courses = catalog.search(args.search.as_deref().unwrap_or_default());
    Ok(course_table(&courses, |_| false))
}

/// Load the catalog, replay the requested actions and optionally submit.
///
/// A catalog that fails to load is reported through the returned state, the
/// way the application shows it, not as an error.
pub fn run_register<S: SubmissionSink>(args: &RegisterArgs, sink: S) -> Result<RegisterOutcome> {
    let mut settings = Settings::load_optional(args.settings.as_deref())?;
    apply_option_flags(&mut settings, args);

    let loaded = load_catalog(&args.catalog);
    if let Ok(catalog) = &loaded {
        apply_band_flags(&mut settings, catalog, args)?;
    }

    let mut app = App::new(settings, sink);
    app.update(Message::CatalogLoaded(
        loaded.map_err(|error| error.to_string()),
    ))?;

    for code in &args.select {
        app.update(Message::toggle(code.as_str()))?;
    }
    for code in &args.add {
        app.update(Message::add(code.as_str()))?;
    }
    // Highest index first so earlier positions stay valid; each position once.
    let mut removals = args.remove.clone();
    removals.sort_unstable_by(|a, b| b.cmp(a));
    removals.dedup();
    for index in removals {
        app.update(Message::remove(index))?;
    }

    let mut submitted = false;
    if args.submit && app.state().status.is_loaded() {
        let before = app.state().notices.len();
        app.update(Message::RegisterClicked)
            .context("submit registration")?;
        submitted = app.state().notices[before..]
            .iter()
            .any(|notice| matches!(notice, Notice::Submitted { .. }));
    }

    let (state, _) = app.into_parts();
    Ok(RegisterOutcome {
        state,
        submit_requested: args.submit,
        submitted,
    })
}

fn apply_option_flags(settings: &mut Settings, args: &RegisterArgs) {
    let registration = &mut settings.registration;
    if let Some(mode) = args.mode {
        registration.mode = mode.into();
    }
    if let Some(policy) = args.policy {
        registration.validation.overflow = policy.into();
    }
    if let Some(severity) = args.below_minimum {
        registration.validation.below_minimum = severity.into();
    }
}

/// `--min`/`--max` override single bounds of the otherwise effective band.
fn apply_band_flags(settings: &mut Settings, catalog: &Catalog, args: &RegisterArgs) -> Result<()> {
    if args.min.is_none() && args.max.is_none() {
        return Ok(());
    }
    let base = settings.effective_band(catalog)?;
    let band = CreditBand::new(
        args.min.unwrap_or(base.min()),
        args.max.unwrap_or(base.max()),
    )
    .context("credit band from --min/--max")?;
    settings.band = Some(band);
    Ok(())
}
