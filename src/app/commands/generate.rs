//! Sweep generation: expand the config, build and sort runs, assemble
//! scripts, then materialize the timestamped folder.

use std::collections::BTreeSet;
use std::io;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::layout::validate_output_path;
use crate::domain::timestamp::format_timestamp;
use crate::domain::{
    AppError, ParamSet, Run, RunBuilder, Script, SweepConfig, SweepLayout, assemble_scripts, expand,
    sort_runs,
};
use crate::ports::{ArtifactStore, Clock};

/// Everything that will be written, computed without touching the filesystem.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    config_yaml: String,
    params: Vec<ParamSet>,
    runs: Vec<Run>,
    scripts: Vec<Script>,
}

impl GenerationPlan {
    /// Expand `config`, build runs with `builder`, sort them by key, and
    /// partition them into `num_scripts` scripts (`0` = one per run).
    pub fn build(
        config: &SweepConfig,
        builder: &impl RunBuilder,
        num_scripts: usize,
    ) -> Result<Self, AppError> {
        let params = expand(config.params())?;
        debug!(count = params.len(), "expanded parameter mappings");

        let mut runs = builder.build_runs(&params)?;
        sort_runs(&mut runs);
        check_output_paths(&runs)?;

        let scripts = assemble_scripts(&runs, num_scripts, config.prologue(), config.epilogue());
        debug!(runs = runs.len(), scripts = scripts.len(), "assembled scripts");

        Ok(Self { config_yaml: config.to_yaml()?, params, runs, scripts })
    }

    pub fn params(&self) -> &[ParamSet] {
        &self.params
    }

    /// Runs in sorted order.
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn scripts(&self) -> &[Script] {
        &self.scripts
    }
}

/// Result of writing a plan to disk.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// The timestamped folder that was created.
    pub folder: PathBuf,
    /// Script files in index order.
    pub scripts: Vec<PathBuf>,
    pub run_count: usize,
    /// The `latest` symlink, when it was updated.
    pub latest: Option<PathBuf>,
}

/// Write `plan` into a fresh timestamped folder under the store root.
///
/// Fails without overwriting if the folder already exists. Nothing is rolled
/// back when a later step fails.
pub fn write<S: ArtifactStore, C: Clock>(
    ctx: &AppContext<S, C>,
    plan: &GenerationPlan,
    make_symlink: bool,
) -> Result<GenerationOutcome, AppError> {
    let store = ctx.store();
    let layout = SweepLayout::new(&format_timestamp(&ctx.clock().now()));

    store.ensure_root()?;
    store.create_dir(layout.folder()).map_err(|e| match e.kind() {
        io::ErrorKind::AlreadyExists => {
            AppError::DirectoryCollision(store.resolve_path(layout.folder()))
        }
        _ => e,
    })?;
    info!(folder = %store.resolve_path(layout.folder()).display(), "created sweep folder");

    store.write_file(&layout.config_file(), &plan.config_yaml)?;

    store.create_dir(&layout.scripts_dir())?;
    let mut script_paths = Vec::with_capacity(plan.scripts.len());
    for (index, script) in plan.scripts.iter().enumerate() {
        let path = layout.script_file(index);
        store.write_file(&path, &script.render())?;
        store.set_executable(&path)?;
        script_paths.push(store.resolve_path(&path));
    }

    store.create_dir(&layout.outputs_dir())?;
    for output_path in plan.runs.iter().filter_map(Run::output_path) {
        store.create_dir_all(&layout.output_dir(output_path)?)?;
    }

    let latest = if make_symlink {
        let link = SweepLayout::latest_link();
        store.replace_symlink(&link, layout.folder())?;
        info!(link_target = %layout.folder().display(), "updated latest symlink");
        Some(store.resolve_path(&link))
    } else {
        None
    };

    Ok(GenerationOutcome {
        folder: store.resolve_path(layout.folder()),
        scripts: script_paths,
        run_count: plan.runs.len(),
        latest,
    })
}

/// Plan and write in one step.
pub fn execute<S: ArtifactStore, C: Clock>(
    ctx: &AppContext<S, C>,
    config: &SweepConfig,
    builder: &impl RunBuilder,
    num_scripts: usize,
    make_symlink: bool,
) -> Result<GenerationOutcome, AppError> {
    let plan = GenerationPlan::build(config, builder, num_scripts)?;
    write(ctx, &plan, make_symlink)
}

fn check_output_paths(runs: &[Run]) -> Result<(), AppError> {
    let mut seen = BTreeSet::new();
    for output_path in runs.iter().filter_map(Run::output_path) {
        validate_output_path(output_path)?;
        if !seen.insert(output_path) {
            return Err(AppError::DuplicateOutputPath(output_path.to_string()));
        }
    }
    Ok(())
}
