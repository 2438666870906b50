//! Script assembly: round-robin partitioning of runs and shell rendering.

use crate::domain::run::Run;

/// One generated shell script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    prologue: String,
    epilogue: String,
    runs: Vec<Run>,
}

impl Script {
    pub fn new(prologue: impl Into<String>, epilogue: impl Into<String>, runs: Vec<Run>) -> Self {
        Self { prologue: prologue.into(), epilogue: epilogue.into(), runs }
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Render the script text.
    ///
    /// Each command is echoed immediately before it is executed.
    pub fn render(&self) -> String {
        let body = self
            .runs
            .iter()
            .map(|run| format!("echo {cmd}\n{cmd}", cmd = run.cmd()))
            .collect::<Vec<_>>();
        format!("{}\n\n{}\n\n{}\n", self.prologue, body.join("\n\n"), self.epilogue)
    }
}

/// Partition runs into `num_scripts` scripts by index modulo `num_scripts`.
///
/// `num_scripts == 0` means one script per run. Order within each script
/// follows the order of `runs`.
pub fn assemble_scripts(
    runs: &[Run],
    num_scripts: usize,
    prologue: &str,
    epilogue: &str,
) -> Vec<Script> {
    let count = if num_scripts == 0 { runs.len() } else { num_scripts };
    let mut groups: Vec<Vec<Run>> = vec![Vec::new(); count];
    for (i, run) in runs.iter().enumerate() {
        groups[i % count].push(run.clone());
    }
    groups.into_iter().map(|group| Script::new(prologue, epilogue, group)).collect()
}
