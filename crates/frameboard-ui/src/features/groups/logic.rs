//! Pure helpers for group tabs and the create-group form.

use frameboard_api_models::GroupMap;

use crate::features::groups::state::GroupTab;

/// Trimmed group name, or `None` when nothing but whitespace was entered.
#[must_use]
pub fn validate_group_name(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Tabs for a group collection, ordered by creation time then id.
#[must_use]
pub fn tabs_from_groups(groups: &GroupMap) -> Vec<GroupTab> {
    let mut tabs: Vec<GroupTab> = groups
        .iter()
        .map(|(id, group)| GroupTab {
            id: id.clone(),
            name: group.name.clone(),
            created_at: group.created_at.clone(),
        })
        .collect();
    sort_tabs(&mut tabs);
    tabs
}

/// Order tabs by creation time, groups without one last, ties by id.
pub fn sort_tabs(tabs: &mut [GroupTab]) {
    tabs.sort_by(|left, right| {
        let key = |tab: &GroupTab| (tab.created_at.is_none(), tab.created_at.clone());
        key(left)
            .cmp(&key(right))
            .then_with(|| left.id.cmp(&right.id))
    });
}

/// `(value, label)` pairs for the default-group select, `none` first.
#[must_use]
pub fn default_group_options(tabs: &[GroupTab]) -> Vec<(String, String)> {
    std::iter::once((
        crate::features::devices::state::NO_DEFAULT_GROUP.to_string(),
        "None".to_string(),
    ))
    .chain(tabs.iter().map(|tab| (tab.id.clone(), tab.name.clone())))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use frameboard_api_models::Group;

    fn group(name: &str, created_at: Option<&str>) -> Group {
        Group {
            name: name.to_string(),
            album: None,
            random: true,
            created_at: created_at.map(str::to_string),
        }
    }

    #[test]
    fn names_are_trimmed_and_blank_rejected() {
        assert_eq!(validate_group_name("  Lobby "), Some("Lobby".to_string()));
        assert_eq!(validate_group_name("   "), None);
        assert_eq!(validate_group_name(""), None);
    }

    #[test]
    fn tabs_follow_creation_order() {
        let groups = GroupMap::from([
            ("a".to_string(), group("Late", Some("2024-05-02T10:00:00"))),
            ("b".to_string(), group("Early", Some("2024-05-01T10:00:00"))),
            ("c".to_string(), group("Unknown", None)),
        ]);
        let names: Vec<_> = tabs_from_groups(&groups)
            .into_iter()
            .map(|tab| tab.name)
            .collect();
        assert_eq!(names, vec!["Early", "Late", "Unknown"]);
    }

    #[test]
    fn options_start_with_sentinel() {
        let tabs = vec![GroupTab {
            id: "g1".into(),
            name: "Lobby".into(),
            created_at: None,
        }];
        let options = default_group_options(&tabs);
        assert_eq!(options[0].0, "none");
        assert_eq!(options[1], ("g1".to_string(), "Lobby".to_string()));
        assert_eq!(options.len(), 2);
    }
}
