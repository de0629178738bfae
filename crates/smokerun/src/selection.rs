//! Target selection from positional arguments

use smokerun_config::{Plan, Target};
use tracing::warn;

/// The subset of plan targets chosen by the CLI arguments
#[derive(Debug, Clone)]
pub struct Selection {
    /// Selected targets, in plan order
    pub targets: Vec<Target>,

    /// Tokens that matched no configured target name
    pub unknown: Vec<String>,
}

impl Selection {
    /// Resolve positional tokens against the plan.
    ///
    /// Empty input selects every target. Tokens must exactly equal a target
    /// name; duplicates select a target once, and launch order is always
    /// plan order. Unknown tokens are reported but never fatal.
    pub fn resolve(plan: &Plan, requested: &[String]) -> Self {
        if requested.is_empty() {
            return Self {
                targets: plan.targets.clone(),
                unknown: Vec::new(),
            };
        }

        let targets = plan
            .targets
            .iter()
            .filter(|t| requested.iter().any(|token| token == t.name.as_str()))
            .cloned()
            .collect();

        let mut unknown: Vec<String> = Vec::new();
        for token in requested {
            if plan.get_target(token).is_none() && !unknown.contains(token) {
                unknown.push(token.clone());
            }
        }

        Self { targets, unknown }
    }

    /// Log a warning per unknown token
    pub fn warn_unknown(&self) {
        for token in &self.unknown {
            warn!(token = %token, "Ignoring unrecognized target");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smokerun_config::Plan;

    fn token(s: &str) -> String {
        s.to_string()
    }

    #[test]
    fn empty_arguments_select_all_targets() {
        let plan = Plan::builtin();
        let selection = Selection::resolve(&plan, &[]);

        let names: Vec<_> = selection.targets.iter().map(|t| t.name.as_str().to_owned()).collect();
        assert_eq!(names, vec!["thread", "http"]);
        assert!(selection.unknown.is_empty());
    }

    #[test]
    fn single_token_selects_one_target() {
        let plan = Plan::builtin();
        let selection = Selection::resolve(&plan, &[token("http")]);

        assert_eq!(selection.targets.len(), 1);
        assert_eq!(selection.targets[0].name.as_str(), "http");
        assert!(selection.unknown.is_empty());
    }

    #[test]
    fn unrecognized_tokens_select_nothing() {
        let plan = Plan::builtin();
        let selection = Selection::resolve(&plan, &[token("ftp"), token("smtp")]);

        assert!(selection.targets.is_empty());
        assert_eq!(selection.unknown, vec!["ftp", "smtp"]);
    }

    #[test]
    fn exact_match_only_no_substring_selection() {
        // "http" must not be selected by a token that merely contains it
        let plan = Plan::builtin();
        let selection = Selection::resolve(&plan, &[token("https"), token("xhttp")]);

        assert!(selection.targets.is_empty());
        assert_eq!(selection.unknown.len(), 2);
    }

    #[test]
    fn duplicates_select_once_in_plan_order() {
        let plan = Plan::builtin();
        let selection = Selection::resolve(&plan, &[token("http"), token("thread"), token("http")]);

        let names: Vec<_> = selection.targets.iter().map(|t| t.name.as_str().to_owned()).collect();
        assert_eq!(names, vec!["thread", "http"]);
        assert!(selection.unknown.is_empty());
    }
}
