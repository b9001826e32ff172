//! HTML pages rendered with minijinja.

use minijinja::{context, Environment, Value};
use svgg_core::{CREATE_PATH, STATIC_PATH};

/// Precompiled page templates.
#[derive(Debug)]
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("base.html", include_str!("../templates/base.html"))?;
        env.add_template("form.html", include_str!("../templates/form.html"))?;
        env.add_template("result.html", include_str!("../templates/result.html"))?;
        env.add_global("static_path", Value::from_safe_string(STATIC_PATH.into()));
        Ok(Self { env })
    }

    /// Landing page with the submission form.
    pub fn form(&self) -> Result<String, minijinja::Error> {
        self.env.get_template("form.html")?.render(context! { href => Value::from_safe_string(CREATE_PATH.into()) })
    }

    /// Page presenting a freshly created reference. `href` is auto-escaped.
    pub fn result(&self, href: &str) -> Result<String, minijinja::Error> {
        self.env.get_template("result.html")?.render(context! { href => href })
    }
}
