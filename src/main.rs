use clap::{ArgMatches, Args, CommandFactory, FromArgMatches, Parser, Subcommand};
use seeker_profile::config::AppConfig;
use seeker_profile::demo;
use seeker_profile::error::AppError;
use seeker_profile::profile::{
    badge_progress, BadgeProgress, CompletenessReport, DerivedPreferences, DraftSession,
    ExperienceField, FieldKind, FieldPath, FieldValue, Profile, ProfileOverview, ProfileStore,
    StrengthReport,
};
use seeker_profile::telemetry;
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::info;

/// Missing categories listed before collapsing the rest into "+N more".
const MISSING_PREVIEW: usize = 3;

#[derive(Parser, Debug)]
#[command(
    name = "seeker-profile",
    about = "Edit and score job-seeker profiles from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print completeness and strength for a profile
    Evaluate(EvaluateArgs),
    /// Apply edits through a draft session, commit, and print the result
    Edit(EditArgs),
}

#[derive(Args, Debug)]
struct ProfileSource {
    /// Profile JSON document (defaults to PROFILE_PATH, then the demo profile)
    #[arg(long)]
    profile: Option<PathBuf>,
    /// Emit JSON instead of the text summary
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    #[command(flatten)]
    source: ProfileSource,
}

#[derive(Args, Debug)]
struct EditArgs {
    #[command(flatten)]
    source: ProfileSource,
    /// Replace a field, e.g. `preferences.location=Remote` (lists take commas)
    #[arg(long = "set", value_name = "PATH=VALUE", value_parser = parse_assignment)]
    set: Vec<(FieldPath, String)>,
    /// Set a notification toggle, e.g. `preferences.notifications.jobs=false`
    #[arg(long = "toggle", value_name = "PATH=BOOL", value_parser = parse_toggle)]
    toggle: Vec<(FieldPath, bool)>,
    /// Append a skill
    #[arg(long = "add-skill", value_name = "SKILL")]
    add_skill: Vec<String>,
    /// Remove a skill
    #[arg(long = "remove-skill", value_name = "SKILL")]
    remove_skill: Vec<String>,
    /// Include a job type
    #[arg(long = "job-type", value_name = "TYPE")]
    job_type: Vec<String>,
    /// Exclude a job type
    #[arg(long = "drop-job-type", value_name = "TYPE")]
    drop_job_type: Vec<String>,
    /// Append an experience entry, optionally naming the company
    #[arg(long = "add-experience", value_name = "COMPANY")]
    add_experience: Vec<String>,
    /// Replace one column of an experience entry, e.g. `0.company=Acme`
    #[arg(long = "experience", value_name = "IDX.FIELD=VALUE", value_parser = parse_experience)]
    experience: Vec<(usize, ExperienceField, String)>,
    /// Remove the experience entry at an index
    #[arg(long = "remove-experience", value_name = "IDX")]
    remove_experience: Vec<usize>,
}

/// One draft operation requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Edit {
    Set(FieldPath, String),
    Toggle(FieldPath, bool),
    AddSkill(String),
    RemoveSkill(String),
    IncludeJobType(String),
    ExcludeJobType(String),
    AddExperience(String),
    UpdateExperience(usize, ExperienceField, String),
    RemoveExperience(usize),
}

impl EditArgs {
    /// Edits in the order their flags appeared, whatever the flag kind.
    fn ordered_edits(&self, matches: &ArgMatches) -> Result<Vec<Edit>, AppError> {
        let mut edits = Vec::new();
        collect(matches, "set", &self.set, |(path, raw)| Edit::Set(path, raw), &mut edits);
        collect(matches, "toggle", &self.toggle, |(path, on)| Edit::Toggle(path, on), &mut edits);
        collect(matches, "add_skill", &self.add_skill, Edit::AddSkill, &mut edits);
        collect(matches, "remove_skill", &self.remove_skill, Edit::RemoveSkill, &mut edits);
        collect(matches, "job_type", &self.job_type, Edit::IncludeJobType, &mut edits);
        collect(matches, "drop_job_type", &self.drop_job_type, Edit::ExcludeJobType, &mut edits);
        collect(matches, "add_experience", &self.add_experience, Edit::AddExperience, &mut edits);
        collect(
            matches,
            "experience",
            &self.experience,
            |(index, field, value)| Edit::UpdateExperience(index, field, value),
            &mut edits,
        );
        collect(
            matches,
            "remove_experience",
            &self.remove_experience,
            Edit::RemoveExperience,
            &mut edits,
        );

        if edits.is_empty() {
            return Err(AppError::Usage(
                "edit needs at least one edit flag (see --help)".to_string(),
            ));
        }
        edits.sort_by_key(|(index, _)| *index);
        Ok(edits.into_iter().map(|(_, edit)| edit).collect())
    }
}

fn collect<T: Clone>(
    matches: &ArgMatches,
    id: &str,
    values: &[T],
    to_edit: impl Fn(T) -> Edit,
    out: &mut Vec<(usize, Edit)>,
) {
    if let Some(indices) = matches.indices_of(id) {
        out.extend(indices.zip(values.iter().cloned().map(to_edit)));
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EvaluationView {
    completeness: CompletenessReport,
    strength: StrengthReport,
    badges: BadgeProgress,
    overview: ProfileOverview,
}

impl EvaluationView {
    fn from_store(store: &ProfileStore) -> Self {
        let profile = store.profile();
        Self {
            completeness: store.completeness(),
            strength: store.strength(),
            badges: badge_progress(profile),
            overview: ProfileOverview::from_profile(profile),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EditView {
    revision: u64,
    changed_paths: Vec<String>,
    derived_preferences: DerivedPreferences,
    evaluation: EvaluationView,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|err| err.exit());
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, config.environment)?;

    match cli.command {
        Command::Evaluate(args) => run_evaluate(args, &config),
        Command::Edit(args) => {
            let edit_matches = matches
                .subcommand_matches("edit")
                .ok_or_else(|| AppError::Usage("missing edit arguments".to_string()))?;
            let edits = args.ordered_edits(edit_matches)?;
            run_edit(args, &edits, &config)
        }
    }
}

fn run_evaluate(args: EvaluateArgs, config: &AppConfig) -> Result<(), AppError> {
    let profile = load_profile(args.source.profile.as_deref(), config)?;
    let store = ProfileStore::new(profile);
    let view = EvaluationView::from_store(&store);

    if args.source.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        render_evaluation(&store.profile().name, &view);
    }
    Ok(())
}

fn run_edit(args: EditArgs, edits: &[Edit], config: &AppConfig) -> Result<(), AppError> {
    let profile = load_profile(args.source.profile.as_deref(), config)?;
    let mut store = ProfileStore::new(profile);

    let mut draft = store.begin_edit();
    apply_edits(&mut draft, edits)?;
    if !draft.is_dirty() {
        info!(session = %draft.id(), "edit produced no changes");
    }

    let outcome = store.commit(draft);
    let view = EditView {
        revision: outcome.record.revision,
        changed_paths: outcome.record.changed_paths,
        derived_preferences: outcome.derived_preferences,
        evaluation: EvaluationView::from_store(&store),
    };

    if args.source.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        render_edit(&store.profile().name, &view);
    }
    Ok(())
}

fn load_profile(explicit: Option<&Path>, config: &AppConfig) -> Result<Profile, AppError> {
    match explicit.or(config.profile_path.as_deref()) {
        Some(path) => {
            let reader = BufReader::new(File::open(path)?);
            let profile: Profile = serde_json::from_reader(reader)?;
            info!(path = %path.display(), "profile loaded");
            Ok(profile)
        }
        None => {
            info!("no profile document supplied; using the demo profile");
            Ok(demo::sample_profile())
        }
    }
}

fn apply_edits(draft: &mut DraftSession, edits: &[Edit]) -> Result<(), AppError> {
    for edit in edits {
        match edit {
            Edit::Set(path, raw) => draft.set_field(path, field_value(path, raw))?,
            Edit::Toggle(path, enabled) => draft.set_toggle(path, *enabled)?,
            Edit::AddSkill(skill) => {
                draft.add_skill(skill);
            }
            Edit::RemoveSkill(skill) => {
                draft.remove_skill(skill);
            }
            Edit::IncludeJobType(job_type) => {
                draft.set_job_type(job_type, true);
            }
            Edit::ExcludeJobType(job_type) => {
                draft.set_job_type(job_type, false);
            }
            Edit::AddExperience(company) => {
                let index = draft.add_experience_entry();
                if !company.trim().is_empty() {
                    draft.update_experience_field(index, ExperienceField::Company, company.trim());
                }
            }
            Edit::UpdateExperience(index, field, value) => {
                draft.update_experience_field(*index, *field, value.as_str());
            }
            Edit::RemoveExperience(index) => {
                draft.remove_experience_entry(*index);
            }
        }
    }
    Ok(())
}

/// Command-line text for a leaf. List leaves split on commas and an empty
/// image reference clears it; everything else is passed through as text.
fn field_value(path: &FieldPath, raw: &str) -> FieldValue {
    match path.kind() {
        FieldKind::List => FieldValue::List(
            raw.split(',')
                .map(|item| item.trim().to_string())
                .collect(),
        ),
        FieldKind::OptionalText if raw.trim().is_empty() => FieldValue::Absent,
        _ => FieldValue::text(raw),
    }
}

fn split_assignment(raw: &str) -> Result<(FieldPath, &str), String> {
    let (path, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected PATH=VALUE, got '{raw}'"))?;
    let path = path.parse::<FieldPath>().map_err(|err| err.to_string())?;
    Ok((path, value))
}

fn parse_assignment(raw: &str) -> Result<(FieldPath, String), String> {
    let (path, value) = split_assignment(raw)?;
    Ok((path, value.to_string()))
}

fn parse_experience(raw: &str) -> Result<(usize, ExperienceField, String), String> {
    let (target, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected IDX.FIELD=VALUE, got '{raw}'"))?;
    let (index, field) = target
        .split_once('.')
        .ok_or_else(|| format!("expected IDX.FIELD=VALUE, got '{raw}'"))?;
    let index = index
        .trim()
        .parse::<usize>()
        .map_err(|err| format!("invalid experience index '{index}' ({err})"))?;
    let field = ExperienceField::parse(field).ok_or_else(|| {
        format!("unknown experience field '{field}' (company, position, period, description)")
    })?;
    Ok((index, field, value.to_string()))
}

fn parse_toggle(raw: &str) -> Result<(FieldPath, bool), String> {
    let (path, value) = split_assignment(raw)?;
    let enabled = match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => true,
        "false" | "off" | "no" | "0" => false,
        other => return Err(format!("expected a boolean for '{path}', got '{other}'")),
    };
    Ok((path, enabled))
}

fn render_evaluation(name: &str, view: &EvaluationView) {
    let display_name = if name.is_empty() { "Unnamed profile" } else { name };
    println!("Profile: {display_name}");

    let completeness = &view.completeness;
    println!("\nCompleteness: {}%", completeness.percentage);
    println!("- completed: {}", join_or_none(&completeness.completed_labels()));
    println!("- pending: {}", join_or_none(&completeness.pending_labels()));

    let strength = &view.strength;
    println!(
        "\nStrength: {}% ({})",
        strength.percentage,
        strength.label.text()
    );
    if strength.is_complete() {
        println!("- every category complete");
    } else {
        let preview = strength.preview(MISSING_PREVIEW);
        for missing in preview.shown {
            println!("- missing {} [{}]", missing.name, missing.icon);
        }
        if preview.remaining > 0 {
            println!("- +{} more", preview.remaining);
        }
    }

    println!(
        "\nBadges earned: {}/{}",
        view.badges.earned, view.badges.total
    );

    let overview = &view.overview;
    println!("\nPreferences");
    println!("- location: {}", overview.preferred_location);
    println!("- job types: {}", overview.job_types);
    println!("- salary: {}", overview.salary_range);
    let mut skills = overview.skill_preview.join(", ");
    if overview.hidden_skills > 0 {
        skills.push_str(&format!(" (+{} more)", overview.hidden_skills));
    }
    if skills.is_empty() {
        skills.push_str("none");
    }
    println!("- skills: {skills}");
}

fn render_edit(name: &str, view: &EditView) {
    println!("Committed revision {}", view.revision);
    if view.changed_paths.is_empty() {
        println!("No fields changed");
    } else {
        println!("Changed: {}", view.changed_paths.join(", "));
    }

    let derived = &view.derived_preferences;
    println!("\nDerived job preferences");
    println!("- location: {}", derived.location);
    println!("- role: {}", derived.role);
    println!("- top skill: {}", derived.top_skill);
    println!();

    render_evaluation(name, &view.evaluation);
}

fn join_or_none(labels: &[&str]) -> String {
    if labels.is_empty() {
        "none".to_string()
    } else {
        labels.join(", ")
    }
}
