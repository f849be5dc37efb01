//! Static rule groups
//!
//! Groups are not persisted anywhere: the table is recomputed per invocation
//! from the current built-in rule listing, so `all` always reflects what the
//! store ships right now.

/// A named, static list of rule names
#[derive(Debug, Clone)]
pub struct RuleGroup {
    pub name: String,
    pub rules: Vec<String>,
}

/// Build the group table from the current built-in rule names
pub fn builtin_groups(builtin_rules: &[String]) -> Vec<RuleGroup> {
    vec![
        RuleGroup {
            name: "typescript".to_string(),
            rules: vec!["typescript".to_string()],
        },
        RuleGroup {
            name: "react".to_string(),
            rules: vec!["react".to_string()],
        },
        RuleGroup {
            name: "all".to_string(),
            rules: builtin_rules.to_vec(),
        },
    ]
}

/// Look up a group by name
pub fn find_group<'a>(groups: &'a [RuleGroup], name: &str) -> Option<&'a RuleGroup> {
    groups.iter().find(|g| g.name == name)
}

/// Names of all groups, in table order
pub fn group_names(groups: &[RuleGroup]) -> Vec<String> {
    groups.iter().map(|g| g.name.clone()).collect()
}
