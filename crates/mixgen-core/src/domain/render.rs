//! Template rendering.
//!
//! A [`RenderContext`] carries the string variables and boolean flags bound
//! for one template application. The placeholder syntax is deliberately
//! small:
//!
//! - `{{name}}` — substitute the variable's string form
//! - `{{#if flag}} … {{else}} … {{/if}}` — include a branch based on a
//!   boolean flag; the else-branch is optional and blocks may nest
//!
//! A reference to an unbound variable or flag is a hard error. Scaffolded
//! files are committed as the project's skeleton, so silently emitting an
//! empty value would ship a broken file; failing fast points at the
//! packaging bug instead.
//!
//! Rendering is pure: no filesystem access, and identical inputs always
//! produce byte-identical output.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::domain::error::DomainError;

/// Variable bindings for one template application.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    vars: HashMap<String, String>,
    flags: HashMap<String, bool>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a string variable, consuming self for fluent construction.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Bind a boolean flag.
    pub fn with_flag(mut self, key: impl Into<String>, value: bool) -> Self {
        self.flags.insert(key.into(), value);
        self
    }

    pub fn var(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(|s| s.as_str())
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        self.flags.get(key).copied()
    }

    /// Render a template body.
    pub fn render(&self, template: &str) -> Result<String, DomainError> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find("{{") {
            out.push_str(&rest[..open]);
            let after = &rest[open + 2..];
            if after.starts_with('{') {
                // "{{{" - the first brace is literal text (Elixir tuples in
                // template bodies), the placeholder starts one char later.
                out.push('{');
                rest = &rest[open + 1..];
                continue;
            }
            let close = after.find("}}").ok_or_else(|| DomainError::MalformedTemplate {
                reason: "unterminated '{{'".into(),
            })?;
            let token = after[..close].trim();
            let tail = &after[close + 2..];

            if let Some(flag) = token.strip_prefix("#if ") {
                let flag = flag.trim();
                let block = split_conditional(tail)?;
                let enabled =
                    self.flags
                        .get(flag)
                        .copied()
                        .ok_or_else(|| DomainError::UnboundFlag {
                            name: flag.to_string(),
                        })?;
                let branch = if enabled {
                    block.then_branch
                } else {
                    block.else_branch.unwrap_or("")
                };
                out.push_str(&self.render(branch)?);
                rest = block.tail;
            } else if token == "else" || token == "/if" || token == "#if" {
                return Err(DomainError::MalformedTemplate {
                    reason: format!("'{{{{{token}}}}}' outside a conditional block"),
                });
            } else {
                let value = self.vars.get(token).ok_or_else(|| DomainError::UnboundVariable {
                    name: token.to_string(),
                })?;
                out.push_str(value);
                rest = tail;
            }
        }

        out.push_str(rest);
        Ok(out)
    }

    /// Render a destination path pattern. Same syntax as bodies, plus the
    /// constraints that the result is non-empty and relative.
    pub fn render_path(&self, pattern: &str) -> Result<PathBuf, DomainError> {
        let rendered = self.render(pattern)?;
        if rendered.is_empty() {
            return Err(DomainError::EmptyDestination {
                name: pattern.to_string(),
            });
        }
        let path = PathBuf::from(rendered);
        if path.is_absolute() {
            return Err(DomainError::AbsoluteDestination {
                path: path.display().to_string(),
            });
        }
        Ok(path)
    }
}

struct ConditionalBlock<'a> {
    then_branch: &'a str,
    else_branch: Option<&'a str>,
    tail: &'a str,
}

/// Split the text following a `{{#if flag}}` token into the then-branch,
/// optional else-branch, and the text after the matching `{{/if}}`,
/// respecting nested conditionals.
fn split_conditional(input: &str) -> Result<ConditionalBlock<'_>, DomainError> {
    let mut depth = 1usize;
    let mut cursor = 0usize;
    let mut else_span: Option<(usize, usize)> = None;

    while let Some(open_rel) = input[cursor..].find("{{") {
        let open = cursor + open_rel;
        let after = &input[open + 2..];
        let close = after.find("}}").ok_or_else(|| DomainError::MalformedTemplate {
            reason: "unterminated '{{'".into(),
        })?;
        let token = after[..close].trim();
        let end = open + 2 + close + 2;

        if token.starts_with("#if ") {
            depth += 1;
        } else if token == "/if" {
            depth -= 1;
            if depth == 0 {
                let (then_end, else_branch) = match else_span {
                    Some((else_open, else_end)) => (else_open, Some(&input[else_end..open])),
                    None => (open, None),
                };
                return Ok(ConditionalBlock {
                    then_branch: &input[..then_end],
                    else_branch,
                    tail: &input[end..],
                });
            }
        } else if token == "else" && depth == 1 {
            if else_span.is_some() {
                return Err(DomainError::MalformedTemplate {
                    reason: "duplicate '{{else}}' in conditional block".into(),
                });
            }
            else_span = Some((open, end));
        }

        cursor = end;
    }

    Err(DomainError::MalformedTemplate {
        reason: "conditional block missing '{{/if}}'".into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> RenderContext {
        RenderContext::new()
            .with_var("app", "shop")
            .with_var("module", "Shop")
            .with_flag("sup", true)
            .with_flag("ecto", false)
    }

    // ── substitution ──────────────────────────────────────────────────────

    #[test]
    fn substitutes_variables() {
        let out = ctx().render("defmodule {{module}} do # {{app}}").unwrap();
        assert_eq!(out, "defmodule Shop do # shop");
    }

    #[test]
    fn repeated_variable_is_replaced_each_time() {
        let out = ctx().render("{{app}}_dev {{app}}_test").unwrap();
        assert_eq!(out, "shop_dev shop_test");
    }

    #[test]
    fn triple_brace_keeps_outer_brace_literal() {
        // Elixir tuple syntax in template bodies: mod: {Shop.Application, []}
        let out = ctx().render("mod: {{{module}}.Application, []}").unwrap();
        assert_eq!(out, "mod: {Shop.Application, []}");
    }

    #[test]
    fn unbound_variable_is_an_error() {
        let err = ctx().render("{{missing}}").unwrap_err();
        assert!(matches!(err, DomainError::UnboundVariable { name } if name == "missing"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let template = "{{module}}{{#if sup}} sup{{/if}} {{app}}";
        let first = ctx().render(template).unwrap();
        for _ in 0..10 {
            assert_eq!(ctx().render(template).unwrap(), first);
        }
    }

    // ── conditionals ──────────────────────────────────────────────────────

    #[test]
    fn true_condition_keeps_block() {
        let out = ctx().render("a{{#if sup}}b{{/if}}c").unwrap();
        assert_eq!(out, "abc");
    }

    #[test]
    fn false_condition_omits_block_entirely() {
        let out = ctx().render("a{{#if ecto}}b{{/if}}c").unwrap();
        assert_eq!(out, "ac");
    }

    #[test]
    fn else_branch_taken_when_false() {
        let out = ctx().render("{{#if ecto}}db{{else}}plain{{/if}}").unwrap();
        assert_eq!(out, "plain");
    }

    #[test]
    fn else_branch_skipped_when_true() {
        let out = ctx().render("{{#if sup}}yes{{else}}no{{/if}}").unwrap();
        assert_eq!(out, "yes");
    }

    #[test]
    fn line_blocks_render_without_blank_lines() {
        // Inline convention: the branch owns its trailing newline, the tail
        // starts right after {{/if}}.
        let template = "one\n{{#if sup}}two\n{{/if}}three\n";
        assert_eq!(ctx().render(template).unwrap(), "one\ntwo\nthree\n");

        let template = "one\n{{#if ecto}}two\n{{/if}}three\n";
        assert_eq!(ctx().render(template).unwrap(), "one\nthree\n");
    }

    #[test]
    fn conditionals_nest() {
        let context = ctx().with_flag("docker", true);
        let template = "{{#if sup}}s{{#if docker}}d{{/if}}{{/if}}";
        assert_eq!(context.render(template).unwrap(), "sd");

        let context = ctx().with_flag("docker", true);
        let template = "{{#if ecto}}e{{#if docker}}d{{/if}}{{/if}}x";
        assert_eq!(context.render(template).unwrap(), "x");
    }

    #[test]
    fn variables_inside_taken_branch_are_rendered() {
        let out = ctx().render("{{#if sup}}mod: {{module}}{{/if}}").unwrap();
        assert_eq!(out, "mod: Shop");
    }

    #[test]
    fn unbound_variable_inside_skipped_branch_is_ignored() {
        // Only rendered content is resolved; the false branch never touches
        // its bindings.
        let out = ctx().render("{{#if ecto}}{{nonexistent}}{{/if}}ok").unwrap();
        assert_eq!(out, "ok");
    }

    #[test]
    fn unbound_flag_is_an_error() {
        let err = ctx().render("{{#if nope}}x{{/if}}").unwrap_err();
        assert!(matches!(err, DomainError::UnboundFlag { name } if name == "nope"));
    }

    // ── malformed input ───────────────────────────────────────────────────

    #[test]
    fn unterminated_placeholder_is_an_error() {
        assert!(matches!(
            ctx().render("{{app").unwrap_err(),
            DomainError::MalformedTemplate { .. }
        ));
    }

    #[test]
    fn missing_end_if_is_an_error() {
        assert!(matches!(
            ctx().render("{{#if sup}}x").unwrap_err(),
            DomainError::MalformedTemplate { .. }
        ));
    }

    #[test]
    fn stray_end_if_is_an_error() {
        assert!(matches!(
            ctx().render("x{{/if}}").unwrap_err(),
            DomainError::MalformedTemplate { .. }
        ));
    }

    #[test]
    fn duplicate_else_is_an_error() {
        assert!(matches!(
            ctx().render("{{#if sup}}a{{else}}b{{else}}c{{/if}}").unwrap_err(),
            DomainError::MalformedTemplate { .. }
        ));
    }

    // ── paths ─────────────────────────────────────────────────────────────

    #[test]
    fn path_patterns_use_the_same_syntax() {
        let path = ctx().render_path("lib/{{app}}/repo.ex").unwrap();
        assert_eq!(path, PathBuf::from("lib/shop/repo.ex"));
    }

    #[test]
    fn absolute_rendered_path_is_rejected() {
        let context = RenderContext::new().with_var("dir", "/etc");
        assert!(matches!(
            context.render_path("{{dir}}/passwd").unwrap_err(),
            DomainError::AbsoluteDestination { .. }
        ));
    }

    #[test]
    fn empty_rendered_path_is_rejected() {
        let context = RenderContext::new().with_var("dir", "");
        assert!(matches!(
            context.render_path("{{dir}}").unwrap_err(),
            DomainError::EmptyDestination { .. }
        ));
    }
}
