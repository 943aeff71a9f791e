//! Tag library: a named set of tags that can be invoked by name.
//!
//! ```
//! use formtag_forms::RenderEnv;
//! use formtag_template::context::TagArgs;
//! use formtag_template::library::TagLibrary;
//!
//! let mut lib = TagLibrary::new("site");
//! lib.register_tag("Hello", |_args, _env, out| {
//!     out.write_str("hello")?;
//!     Ok(())
//! });
//!
//! let mut out = String::new();
//! lib.execute("Hello", &TagArgs::new(), &RenderEnv::default(), &mut out).unwrap();
//! assert_eq!(out, "hello");
//! ```

use std::collections::HashMap;
use std::fmt::Write;

use formtag_core::{FormTagError, FormTagResult};
use formtag_forms::RenderEnv;

use crate::context::{TagArgs, TagContext};
use crate::parser::parse_invocation;
use crate::tags;

/// A tag function: reads its arguments and writes markup into `out`.
pub type TagFn = fn(&TagArgs, &RenderEnv<'_>, &mut dyn Write) -> FormTagResult<()>;

/// A named collection of tags.
pub struct TagLibrary {
    name: String,
    tags: HashMap<String, TagFn>,
}

impl TagLibrary {
    /// Creates a new empty library with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: HashMap::new(),
        }
    }

    /// A library named `form` with the built-in tags registered.
    pub fn with_builtins() -> Self {
        let mut lib = Self::new("form");
        tags::register_builtins(&mut lib);
        lib
    }

    /// Registers a tag, replacing any tag of the same name.
    pub fn register_tag(&mut self, name: impl Into<String>, func: TagFn) {
        self.tags.insert(name.into(), func);
    }

    /// Executes a tag by name.
    ///
    /// # Errors
    ///
    /// Returns [`FormTagError::TemplateSyntax`] if the tag is not found, or
    /// whatever error the tag itself returns.
    pub fn execute(
        &self,
        name: &str,
        args: &TagArgs,
        env: &RenderEnv<'_>,
        out: &mut dyn Write,
    ) -> FormTagResult<()> {
        let func = self.tags.get(name).ok_or_else(|| {
            FormTagError::TemplateSyntax(format!(
                "Tag '{name}' not found in library '{}'",
                self.name
            ))
        })?;
        func(args, env, out)
    }

    /// Parses a tag invocation, resolves its arguments against `context`,
    /// and executes it.
    pub fn render(
        &self,
        source: &str,
        context: &TagContext,
        env: &RenderEnv<'_>,
        out: &mut dyn Write,
    ) -> FormTagResult<()> {
        let invocation = parse_invocation(source)?;
        let args = invocation.resolve(context);
        tracing::debug!(tag = %invocation.name, library = %self.name, "executing tag");
        self.execute(&invocation.name, &args, env, out)
    }
}

impl Default for TagLibrary {
    fn default() -> Self {
        Self::with_builtins()
    }
}
