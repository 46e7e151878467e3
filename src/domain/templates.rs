//! Embedded templates for generated artifacts.

use minijinja::{Environment, Error as TemplateError, ErrorKind};
use serde::Serialize;

use crate::domain::AppError;

pub const SETTINGS_TEMPLATE: &str = "settings.toml";
pub const UPDATE_SCRIPT_TEMPLATE: &str = "update.sh";

const SETTINGS_SOURCE: &str = include_str!("../assets/templates/settings.toml.j2");
const UPDATE_SCRIPT_SOURCE: &str = include_str!("../assets/templates/update.sh.j2");

fn toml_string(value: String) -> String {
    toml_edit::Value::from(value).to_string()
}

fn shell_quote(value: String) -> Result<String, TemplateError> {
    shlex::try_quote(&value).map(|quoted| quoted.into_owned()).map_err(|e| {
        TemplateError::new(ErrorKind::InvalidOperation, format!("cannot quote {value:?}: {e}"))
    })
}

fn build_environment() -> Result<Environment<'static>, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_filter("toml_string", toml_string);
    env.add_filter("shell_quote", shell_quote);

    env.add_template(SETTINGS_TEMPLATE, SETTINGS_SOURCE)
        .map_err(|e| AppError::template(SETTINGS_TEMPLATE, e))?;
    env.add_template(UPDATE_SCRIPT_TEMPLATE, UPDATE_SCRIPT_SOURCE)
        .map_err(|e| AppError::template(UPDATE_SCRIPT_TEMPLATE, e))?;
    Ok(env)
}

/// Render an embedded template with a typed context.
pub fn render<C: Serialize>(name: &str, ctx: &C) -> Result<String, AppError> {
    let env = build_environment()?;
    let template = env.get_template(name).map_err(|e| AppError::template(name, e))?;
    template.render(ctx).map_err(|e| AppError::template(name, e))
}
