//! `sweeper gen` implementation.

use std::path::PathBuf;

use clap::Args;

use crate::app::api::{self, GenerateOptions};
use crate::domain::{AppError, TemplateRunBuilder};

#[derive(Args)]
pub struct GenArgs {
    /// Sweep configuration file
    config: PathBuf,
    /// Command template, e.g. 'python train.py {{ args }}'
    #[arg(short, long)]
    command: String,
    /// Output directory template, relative to outputs/
    #[arg(short, long)]
    output: Option<String>,
    /// Root directory for generated folders (overrides 'root' in the config)
    #[arg(short, long)]
    root: Option<PathBuf>,
    /// Number of scripts; 0 or less gives one script per run
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    num_scripts: i64,
    /// Sort runs by these key-paths instead of by command text
    #[arg(short, long, value_delimiter = ',')]
    sort_by: Vec<String>,
    /// Do not update the 'latest' symlink
    #[arg(long)]
    no_symlink: bool,
    /// Print the scripts instead of writing them
    #[arg(long)]
    dry_run: bool,
}

pub fn run_gen(args: GenArgs) -> Result<(), AppError> {
    let mut builder = TemplateRunBuilder::new(&args.command)?.with_sort_by(args.sort_by);
    if let Some(output) = &args.output {
        builder = builder.with_output(output)?;
    }
    let num_scripts = usize::try_from(args.num_scripts).unwrap_or(0);

    if args.dry_run {
        let plan = api::plan(&args.config, &builder, num_scripts)?;
        for (index, script) in plan.scripts().iter().enumerate() {
            println!("# {}.sh", index);
            print!("{}", script.render());
        }
        println!("{} run(s) in {} script(s)", plan.runs().len(), plan.scripts().len());
        return Ok(());
    }

    let options = GenerateOptions { root: args.root, num_scripts, make_symlink: !args.no_symlink };
    let outcome = api::write(&args.config, &builder, &options)?;

    println!(
        "✅ Generated {} script(s) for {} run(s) in {}",
        outcome.scripts.len(),
        outcome.run_count,
        outcome.folder.display()
    );
    if let Some(latest) = &outcome.latest {
        println!("  {} -> {}", latest.display(), outcome.folder.display());
    }
    Ok(())
}
