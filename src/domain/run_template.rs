//! Template-driven run construction.
//!
//! Templates see every key-path nested back into a structure
//! (`{{ model.depth }}`), the flat mapping as `params`, and `args`, the
//! mapping rendered as `--<path> <value>` flags in config order.

use minijinja::{Environment, UndefinedBehavior, Value};
use serde_yaml::Mapping;

use crate::domain::AppError;
use crate::domain::run::{Run, RunBuilder, RunKey};
use crate::domain::sweep::{ParamSet, Scalar};

const COMMAND_TEMPLATE: &str = "command";
const OUTPUT_TEMPLATE: &str = "output";

/// [`RunBuilder`] rendering commands and output paths from templates.
pub struct TemplateRunBuilder {
    env: Environment<'static>,
    has_output: bool,
    sort_by: Vec<String>,
}

impl TemplateRunBuilder {
    pub fn new(command: &str) -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_template_owned(COMMAND_TEMPLATE, command.to_string())
            .map_err(|e| AppError::template("command template", e))?;
        Ok(Self { env, has_output: false, sort_by: Vec::new() })
    }

    /// Render each run's output directory (relative to `outputs/`) from `template`.
    pub fn with_output(mut self, template: &str) -> Result<Self, AppError> {
        self.env
            .add_template_owned(OUTPUT_TEMPLATE, template.to_string())
            .map_err(|e| AppError::template("output template", e))?;
        self.has_output = true;
        Ok(self)
    }

    /// Sort runs by these key-paths instead of by command text.
    pub fn with_sort_by(mut self, paths: Vec<String>) -> Self {
        self.sort_by = paths;
        self
    }

    fn render(&self, name: &str, ctx: &Value) -> Result<String, AppError> {
        let template = self.env.get_template(name).map_err(|e| AppError::template(name, e))?;
        template.render(ctx).map_err(|e| AppError::template(format!("{} template", name), e))
    }

    fn sort_key(&self, params: &ParamSet) -> Result<Option<RunKey>, AppError> {
        if self.sort_by.is_empty() {
            return Ok(None);
        }
        let parts = self
            .sort_by
            .iter()
            .map(|path| {
                params.get(path).cloned().ok_or_else(|| {
                    AppError::template("sort key", format!("unknown key-path '{}'", path))
                })
            })
            .collect::<Result<Vec<Scalar>, _>>()?;
        Ok(Some(RunKey::new(parts)))
    }
}

impl RunBuilder for TemplateRunBuilder {
    fn build_run(&self, params: &ParamSet) -> Result<Run, AppError> {
        let ctx = template_context(params)?;

        let mut run = Run::new(self.render(COMMAND_TEMPLATE, &ctx)?.trim());
        if self.has_output {
            run = run.with_output_path(self.render(OUTPUT_TEMPLATE, &ctx)?.trim());
        }
        if let Some(key) = self.sort_key(params)? {
            run = run.with_key(key);
        }
        Ok(run)
    }
}

/// Render a mapping as command-line flags: `--lr 0.1 --model.depth 18`.
pub fn render_flags(params: &ParamSet) -> String {
    params.iter().map(|(k, v)| format!("--{} {}", k, v)).collect::<Vec<_>>().join(" ")
}

fn template_context(params: &ParamSet) -> Result<Value, AppError> {
    let mut ctx = Mapping::new();
    for (path, value) in params.iter() {
        insert_nested(&mut ctx, path, value)?;
    }
    let flat = serde_yaml::to_value(params).map_err(|e| AppError::template("context", e))?;
    ctx.insert("params".into(), flat);
    ctx.insert("args".into(), render_flags(params).into());
    Ok(Value::from_serialize(&ctx))
}

fn insert_nested(root: &mut Mapping, path: &str, value: &Scalar) -> Result<(), AppError> {
    let conflict = || {
        AppError::template("context", format!("key-path '{}' conflicts with another key-path", path))
    };

    let mut segments = path.split('.').peekable();
    let mut node = root;
    while let Some(segment) = segments.next() {
        let key = serde_yaml::Value::from(segment);
        if segments.peek().is_none() {
            if node.contains_key(&key) {
                return Err(conflict());
            }
            let leaf = serde_yaml::to_value(value).map_err(|e| AppError::template("context", e))?;
            node.insert(key, leaf);
            return Ok(());
        }
        let child = node.entry(key).or_insert_with(|| serde_yaml::Value::Mapping(Mapping::new()));
        node = match child {
            serde_yaml::Value::Mapping(map) => map,
            _ => return Err(conflict()),
        };
    }
    Ok(())
}
