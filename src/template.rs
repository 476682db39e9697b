use crate::config::{TemplateRule, TemplateVariant};
use regex::Regex;

/// Compiled URL-predicate to template-variant mapping
///
/// Rules are evaluated in declaration order; the first matching pattern wins.
/// URLs matching no rule render with the default `Blurb` variant, so adding a
/// new partner format is a configuration change rather than a code change.
#[derive(Debug)]
pub struct TemplateMap {
    rules: Vec<(Regex, TemplateVariant)>,
}

impl TemplateMap {
    /// Compile a set of rules into a template map
    pub fn new(rules: &[TemplateRule]) -> Result<Self, regex::Error> {
        let mut compiled = Vec::with_capacity(rules.len());
        for rule in rules {
            compiled.push((Regex::new(&rule.pattern)?, rule.variant));
        }
        Ok(Self { rules: compiled })
    }

    /// Resolve the template variant for a site URL
    pub fn variant_for(&self, url: &str) -> TemplateVariant {
        for (regex, variant) in &self.rules {
            if regex.is_match(url) {
                return *variant;
            }
        }
        TemplateVariant::Blurb
    }
}

impl Default for TemplateMap {
    fn default() -> Self {
        Self::new(&crate::config::PipelineConfig::default().templates)
            .expect("default template patterns should be valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TemplateRule;

    #[test]
    fn test_default_partner_rule() {
        let map = TemplateMap::default();

        assert_eq!(
            map.variant_for("https://www.buscandriu.com/news"),
            TemplateVariant::ListItem
        );
        assert_eq!(
            map.variant_for("https://example.com"),
            TemplateVariant::Blurb
        );
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let rules = vec![
            TemplateRule {
                pattern: r"partner\.example\.com".to_string(),
                variant: TemplateVariant::ListItem,
            },
            TemplateRule {
                pattern: r"example\.com".to_string(),
                variant: TemplateVariant::Blurb,
            },
        ];
        let map = TemplateMap::new(&rules).unwrap();

        assert_eq!(
            map.variant_for("https://partner.example.com/a"),
            TemplateVariant::ListItem
        );
        assert_eq!(
            map.variant_for("https://example.com/a"),
            TemplateVariant::Blurb
        );
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let rules = vec![TemplateRule {
            pattern: "[unclosed".to_string(),
            variant: TemplateVariant::ListItem,
        }];
        assert!(TemplateMap::new(&rules).is_err());
    }
}
