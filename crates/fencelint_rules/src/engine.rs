//! Rule engine backed by rumdl's markdownlint-compatible rules.

use rumdl_lib::config::{Config, MarkdownFlavor, RuleConfig as RumdlRuleConfig};
use rumdl_lib::rule::{LintWarning, Rule};
use rumdl_lib::rules::all_rules;
use tracing::{trace, warn};

use crate::names::{MARKDOWNLINT_RULES, rule_names};
use crate::{Finding, RuleConfig, RuleError, RuleSetting};

/// Lints a markdown string against a rule configuration.
pub trait RuleEngine {
    /// Returns findings for `content`, sorted by line then rule id.
    fn lint(&self, content: &str, config: &RuleConfig) -> Result<Vec<Finding>, RuleError>;
}

/// The built-in engine: markdownlint rules as implemented by `rumdl`.
#[derive(Debug, Default, Clone)]
pub struct MarkdownRuleEngine;

impl MarkdownRuleEngine {
    /// Creates the engine.
    pub fn new() -> Self {
        Self
    }
}

impl RuleEngine for MarkdownRuleEngine {
    fn lint(&self, content: &str, config: &RuleConfig) -> Result<Vec<Finding>, RuleError> {
        let (rumdl_config, enabled) = translate_config(config)?;
        let rules: Vec<Box<dyn Rule>> = all_rules(&rumdl_config)
            .into_iter()
            .filter(|rule| enabled.contains(&rule.name()))
            .collect();
        if rules.is_empty() {
            return Ok(Vec::new());
        }

        let warnings = rumdl_lib::lint(
            content,
            &rules,
            false,
            MarkdownFlavor::Standard,
            None,
            Some(&rumdl_config),
        )
        .map_err(|e| RuleError::Lint(e.to_string()))?;

        let mut findings: Vec<Finding> = warnings
            .iter()
            .filter_map(|warning| to_finding(warning, &rules, content))
            .collect();

        findings.sort_by(|a, b| {
            a.line_number
                .cmp(&b.line_number)
                .then_with(|| a.rule_id().cmp(b.rule_id()))
        });

        Ok(findings)
    }
}

/// Translates a markdownlint configuration into rumdl's.
///
/// Returns the rumdl configuration and the ids of the rules to run.
fn translate_config(config: &RuleConfig) -> Result<(Config, Vec<&'static str>), RuleError> {
    let default_enabled = config.default_enabled();
    let mut rumdl_config = Config::default();
    let mut enabled = Vec::new();

    for names in MARKDOWNLINT_RULES {
        let id = names[0];
        let setting = config.resolve(names);
        if !setting.map_or(default_enabled, RuleSetting::is_enabled) {
            trace!("Skipping disabled rule {}", id);
            continue;
        }

        if let Some(RuleSetting::Options(options)) = setting {
            rumdl_config
                .rules
                .insert(id.to_string(), rule_options(id, options)?);
        }
        enabled.push(id);
    }

    Ok((rumdl_config, enabled))
}

/// Converts a markdownlint options object into a rumdl rule table.
fn rule_options(id: &str, options: &serde_json::Value) -> Result<RumdlRuleConfig, RuleError> {
    let serde_json::Value::Object(map) = options else {
        return Err(RuleError::invalid_options(id, "expected an object"));
    };

    let mut rule_config = RumdlRuleConfig::default();
    for (key, value) in map {
        let value = to_toml(value).ok_or_else(|| {
            RuleError::invalid_options(id, format!("`{}` has no TOML equivalent", key))
        })?;
        rule_config
            .values
            .insert(key.replace('_', "-").to_ascii_lowercase(), value);
    }
    Ok(rule_config)
}

fn to_toml(value: &serde_json::Value) -> Option<toml::Value> {
    let converted = match value {
        serde_json::Value::Null => return None,
        serde_json::Value::Bool(b) => toml::Value::Boolean(*b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => toml::Value::Integer(i),
            None => toml::Value::Float(n.as_f64()?),
        },
        serde_json::Value::String(s) => toml::Value::String(s.clone()),
        serde_json::Value::Array(items) => {
            toml::Value::Array(items.iter().map(to_toml).collect::<Option<_>>()?)
        }
        serde_json::Value::Object(map) => toml::Value::Table(
            map.iter()
                .map(|(k, v)| Some((k.clone(), to_toml(v)?)))
                .collect::<Option<_>>()?,
        ),
    };
    Some(converted)
}

fn to_finding(warning: &LintWarning, rules: &[Box<dyn Rule>], content: &str) -> Option<Finding> {
    let Some(name) = warning.rule_name.as_deref() else {
        warn!("Dropping warning without a rule name: {}", warning.message);
        return None;
    };

    let names = match rule_names(name) {
        Some(names) => names.iter().map(|n| n.to_string()).collect(),
        None => vec![name.to_string()],
    };
    let description = rules
        .iter()
        .find(|rule| rule.name() == name)
        .map_or("", |rule| rule.description());

    let column = char_column(content, warning.line, warning.column.max(1));
    let length = if warning.end_line == warning.line && warning.end_column > warning.column {
        char_column(content, warning.line, warning.end_column) - column
    } else {
        1
    };

    Some(
        Finding::new(names, description, warning.line)
            .with_detail(warning.message.clone())
            .with_range(column, length.max(1)),
    )
}

/// Converts a 1-based byte column on `line` into a 1-based character column.
fn char_column(content: &str, line: usize, byte_column: usize) -> usize {
    content
        .lines()
        .nth(line.saturating_sub(1))
        .and_then(|text| text.get(..byte_column.saturating_sub(1)))
        .map_or(byte_column, |prefix| prefix.chars().count() + 1)
}
