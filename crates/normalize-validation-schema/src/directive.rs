//! Directive-driven constraints.
//!
//! A field such as `name: String! @constraint(minLength: 5)` together with
//! the mapping `constraint.minLength = "min"` produces the call `min(5)`,
//! which the backend appends to the field's validator.

use crate::config::{ArgumentMapping, DirectiveConfig, ValueMapping};
use crate::context::Context;
use crate::ir::Directive;
use crate::traits::ValidatorCall;
use serde_json::Value;

/// Constraint calls for `directives`, in field declaration order.
///
/// Directives and arguments without a configured mapping are skipped.
pub fn directive_calls(directives: &[Directive], config: &DirectiveConfig) -> Vec<ValidatorCall> {
    if directives.is_empty() || config.is_empty() {
        return Vec::new();
    }

    let mut calls = Vec::new();
    for directive in directives {
        let Some(arguments) = config.get(&directive.name) else {
            continue;
        };
        for argument in &directive.arguments {
            let Some(mapping) = arguments.get(&argument.name) else {
                continue;
            };
            if let Some(call) = build_call(mapping, &argument.value) {
                calls.push(call);
            } else {
                tracing::debug!(
                    directive = %directive.name,
                    argument = %argument.name,
                    "directive mapping produced no call"
                );
            }
        }
    }
    calls
}

/// Append the constraints derived from `directives` to `expr`.
pub fn augment(expr: &str, directives: &[Directive], ctx: &Context<'_>) -> String {
    let calls = directive_calls(directives, &ctx.config.directives);
    ctx.builder.refine(expr, &calls)
}

fn build_call(mapping: &ArgumentMapping, value: &Value) -> Option<ValidatorCall> {
    match mapping {
        ArgumentMapping::Method(method) => Some(render_call(method, &["$1".to_string()], value)),
        ArgumentMapping::Call(template) => {
            let (method, args) = template.split_first()?;
            Some(render_call(method, args, value))
        }
        ArgumentMapping::ByValue(table) => match table.get(&value_key(value)?)? {
            ValueMapping::Method(method) => Some(ValidatorCall::new(method.clone(), Vec::new())),
            ValueMapping::Call(template) => {
                let (method, args) = template.split_first()?;
                Some(render_call(method, args, value))
            }
        },
    }
}

fn render_call(method: &str, templates: &[String], value: &Value) -> ValidatorCall {
    let values = argument_values(value);
    let args = templates
        .iter()
        .filter_map(|template| apply_template(template, values))
        .collect();
    ValidatorCall::new(method, args)
}

/// A list argument supplies one value per element; anything else supplies one.
fn argument_values(value: &Value) -> &[Value] {
    match value {
        Value::Array(items) => items,
        other => std::slice::from_ref(other),
    }
}

/// Key used to select a by-value mapping.
fn value_key(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(_) | Value::Number(_) => Some(value.to_string()),
        _ => None,
    }
}

/// Render one argument template against the directive's values.
///
/// `$N` alone renders the N-th value as a literal. Otherwise placeholders
/// are substituted with raw value text and the result becomes a string
/// literal. Empty results are dropped.
fn apply_template(template: &str, values: &[Value]) -> Option<String> {
    if let Some(position) = exact_placeholder(template) {
        return values.get(position).map(render_literal);
    }

    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();
    while let Some((start, c)) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }
        let mut end = start + 1;
        while let Some(&(i, d)) = chars.peek() {
            if !d.is_ascii_digit() {
                break;
            }
            end = i + d.len_utf8();
            chars.next();
        }
        if end == start + 1 {
            out.push('$');
            continue;
        }
        if let Some(value) = placeholder_position(&template[start + 1..end]).and_then(|p| values.get(p)) {
            out.push_str(&raw_text(value));
        }
    }

    if out.is_empty() {
        return None;
    }
    Some(render_string(&out))
}

/// Zero-based value position of a template that is exactly `$N`.
fn exact_placeholder(template: &str) -> Option<usize> {
    let digits = template.strip_prefix('$')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    placeholder_position(digits)
}

fn placeholder_position(digits: &str) -> Option<usize> {
    digits.parse::<usize>().ok()?.checked_sub(1)
}

fn raw_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn render_literal(value: &Value) -> String {
    match value {
        Value::String(s) => render_string(s),
        other => other.to_string(),
    }
}

/// Strings that look like a regular expression literal are emitted raw.
fn render_string(s: &str) -> String {
    if is_regex_literal(s) {
        s.to_string()
    } else {
        Value::String(s.to_string()).to_string()
    }
}

/// Whether `s` has the shape `/pattern/flags`.
fn is_regex_literal(s: &str) -> bool {
    let Some(body) = s.strip_prefix('/') else {
        return false;
    };
    let Some(close) = body.rfind('/') else {
        return false;
    };
    // `//` opens a line comment, not an empty pattern.
    close > 0 && !s.contains('\n') && body[close + 1..].chars().all(|c| "dgimsuy".contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationConfig;
    use serde_json::json;

    fn config(toml: &str) -> DirectiveConfig {
        GenerationConfig::from_toml_str(toml).unwrap().directives
    }

    fn call(method: &str, args: &[&str]) -> ValidatorCall {
        ValidatorCall::new(method, args.iter().map(|a| a.to_string()).collect())
    }

    #[test]
    fn no_directives_or_no_config_yields_nothing() {
        let directives = vec![Directive::new("constraint").with_argument("minLength", json!(5))];
        assert!(directive_calls(&directives, &DirectiveConfig::new()).is_empty());

        let config = config("[directives.constraint]\nminLength = \"min\"");
        assert!(directive_calls(&[], &config).is_empty());
    }

    #[test]
    fn method_shorthand_passes_value() {
        let config = config("[directives.constraint]\nminLength = \"min\"");
        let directives = vec![Directive::new("constraint").with_argument("minLength", json!(5))];
        assert_eq!(directive_calls(&directives, &config), vec![call("min", &["5"])]);
    }

    #[test]
    fn call_template_substitutes_and_quotes() {
        let config = config(
            "[directives.constraint]\nstartsWith = [\"regex\", \"/^$1/\", \"message\"]",
        );
        let directives =
            vec![Directive::new("constraint").with_argument("startsWith", json!("foo"))];
        assert_eq!(
            directive_calls(&directives, &config),
            vec![call("regex", &["/^foo/", "\"message\""])]
        );
    }

    #[test]
    fn string_values_are_quoted() {
        let config = config("[directives.constraint]\ncontains = \"includes\"");
        let directives = vec![Directive::new("constraint").with_argument("contains", json!("a\"b"))];
        assert_eq!(
            directive_calls(&directives, &config),
            vec![call("includes", &["\"a\\\"b\""])]
        );
    }

    #[test]
    fn list_values_fill_positional_placeholders() {
        let config = config("[directives.range]\nbetween = [\"refine\", \"$1\", \"$2\", \"$3\"]");
        let directives = vec![Directive::new("range").with_argument("between", json!([1, 10]))];
        assert_eq!(
            directive_calls(&directives, &config),
            vec![call("refine", &["1", "10"])]
        );
    }

    #[test]
    fn by_value_mapping_selects_on_argument() {
        let config = config(
            "[directives.constraint]\nformat = { email = \"email\", uri = [\"url\", \"$1\"] }",
        );
        let email = vec![Directive::new("constraint").with_argument("format", json!("email"))];
        assert_eq!(directive_calls(&email, &config), vec![call("email", &[])]);

        let uri = vec![Directive::new("constraint").with_argument("format", json!("uri"))];
        assert_eq!(directive_calls(&uri, &config), vec![call("url", &["\"uri\""])]);

        let other = vec![Directive::new("constraint").with_argument("format", json!("ipv4"))];
        assert!(directive_calls(&other, &config).is_empty());
    }

    #[test]
    fn order_follows_field_declaration() {
        let config = config(
            r#"
[directives.constraint]
minLength = "min"
maxLength = "max"

[directives.trim]
enabled = ["trim"]
"#,
        );
        let directives = vec![
            Directive::new("trim").with_argument("enabled", json!(true)),
            Directive::new("deprecated").with_argument("reason", json!("old")),
            Directive::new("constraint")
                .with_argument("maxLength", json!(10))
                .with_argument("minLength", json!(2))
                .with_argument("pattern", json!("x")),
        ];
        assert_eq!(
            directive_calls(&directives, &config),
            vec![call("trim", &[]), call("max", &["10"]), call("min", &["2"])]
        );
    }

    #[test]
    fn regex_literal_detection() {
        assert!(is_regex_literal("/^foo/"));
        assert!(is_regex_literal("/a/gi"));
        assert!(!is_regex_literal("/a/x"));
        assert!(!is_regex_literal("foo"));
        assert!(!is_regex_literal("/"));
        assert!(!is_regex_literal("//"));
        assert!(!is_regex_literal("//g"));
    }

    #[test]
    fn empty_pattern_is_quoted() {
        let config = config("[directives.constraint]\nstartsWith = [\"regex\", \"$1\"]");
        let directives = vec![Directive::new("constraint").with_argument("startsWith", json!("//"))];
        assert_eq!(
            directive_calls(&directives, &config),
            vec![call("regex", &["\"//\""])]
        );
    }
}
