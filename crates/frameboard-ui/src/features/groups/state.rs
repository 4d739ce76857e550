//! Group slice of the app store.

use frameboard_api_models::{Album, DeviceMap, Group, GroupMap, GroupMember};

use crate::features::groups::logic::{sort_tabs, tabs_from_groups};

/// One group tab (and its matching default-group option).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupTab {
    /// Group id, rendered as `data-group-id`.
    pub id: String,
    /// Tab label.
    pub name: String,
    /// Creation time used for ordering.
    pub created_at: Option<String>,
}

/// Detail panel of the selected group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupPanel {
    /// Group shown.
    pub group_id: String,
    /// Editable name.
    pub name: String,
    /// Selected album, `None` when unset.
    pub album: Option<String>,
    /// Random-order flag.
    pub random: bool,
    /// Album dropdown entries.
    pub albums: Vec<Album>,
    /// Member list.
    pub members: Vec<GroupMember>,
}

impl GroupPanel {
    fn from_group(group_id: String, group: &Group) -> Self {
        Self {
            group_id,
            name: group.name.clone(),
            album: group.selected_album().map(str::to_string),
            random: group.random,
            albums: Vec::new(),
            members: Vec::new(),
        }
    }
}

/// Create-group modal.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CreateModal {
    /// Visible.
    pub open: bool,
    /// Name field content.
    pub name: String,
}

/// Tabs, panel and modal.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct GroupsState {
    /// Ordered tabs.
    pub tabs: Vec<GroupTab>,
    /// Panel of the active tab.
    pub panel: Option<GroupPanel>,
    /// Create-group modal.
    pub modal: CreateModal,
}

impl GroupsState {
    /// Id of the active tab.
    #[must_use]
    pub fn active_group(&self) -> Option<&str> {
        self.panel.as_ref().map(|panel| panel.group_id.as_str())
    }

    /// Whether a tab with this id exists.
    #[must_use]
    pub fn has_group(&self, group_id: &str) -> bool {
        self.tabs.iter().any(|tab| tab.id == group_id)
    }

    /// Groups whose member list is currently rendered.
    #[must_use]
    pub fn rendered_groups(&self) -> Vec<String> {
        self.active_group().map(str::to_string).into_iter().collect()
    }

    fn panel_for(&mut self, group_id: &str) -> Option<&mut GroupPanel> {
        self.panel
            .as_mut()
            .filter(|panel| panel.group_id == group_id)
    }
}

/// Drop every tab; the panel stays until a tab is selected again.
pub fn clear_tabs(state: &mut GroupsState) {
    state.tabs.clear();
}

/// Rebuild the tabs from the authoritative collection.
pub fn replace_tabs(state: &mut GroupsState, groups: &GroupMap) {
    state.tabs = tabs_from_groups(groups);
}

/// Add the tab of a newly created group and close the modal.
pub fn add_tab(state: &mut GroupsState, group_id: String, name: String) {
    state.tabs.retain(|tab| tab.id != group_id);
    state.tabs.push(GroupTab {
        id: group_id,
        name,
        created_at: None,
    });
    sort_tabs(&mut state.tabs);
    state.modal = CreateModal::default();
}

/// Show the panel of a selected group.
pub fn select(state: &mut GroupsState, group_id: String, group: &Group) {
    if let Some(tab) = state.tabs.iter_mut().find(|tab| tab.id == group_id) {
        tab.name.clone_from(&group.name);
    }
    state.panel = Some(GroupPanel::from_group(group_id, group));
}

/// Fill the album dropdown; ignored when another group is shown.
pub fn set_albums(state: &mut GroupsState, group_id: &str, albums: Vec<Album>) {
    if let Some(panel) = state.panel_for(group_id) {
        panel.albums = albums;
    }
}

/// Fill the member list; ignored when another group is shown.
pub fn set_members(state: &mut GroupsState, group_id: &str, members: Vec<GroupMember>) {
    if let Some(panel) = state.panel_for(group_id) {
        panel.members = members;
    }
}

/// Relabel the tab after an accepted rename.
///
/// The panel's name field belongs to the user while typing; confirmations
/// for earlier keystrokes may land after later edits.
pub fn rename(state: &mut GroupsState, group_id: &str, name: &str) {
    if let Some(tab) = state.tabs.iter_mut().find(|tab| tab.id == group_id) {
        tab.name = name.to_string();
    }
}

/// Drop panel members the device collection now places elsewhere.
pub fn drop_moved_members(state: &mut GroupsState, devices: &DeviceMap) {
    if let Some(panel) = state.panel.as_mut() {
        let group_id = panel.group_id.as_str();
        panel.members.retain(|member| {
            devices
                .get(&member.device_id)
                .is_none_or(|device| device.assigned_group() == Some(group_id))
        });
    }
}

/// Keep the typed name in the panel while the request is in flight.
pub fn edit_name(state: &mut GroupsState, group_id: &str, name: &str) {
    if let Some(panel) = state.panel_for(group_id) {
        panel.name = name.to_string();
    }
}

/// Record an accepted album change.
pub fn set_album(state: &mut GroupsState, group_id: &str, album: Option<String>) {
    if let Some(panel) = state.panel_for(group_id) {
        panel.album = album;
    }
}

/// Record an accepted random-order change.
pub fn set_random(state: &mut GroupsState, group_id: &str, random: bool) {
    if let Some(panel) = state.panel_for(group_id) {
        panel.random = random;
    }
}

/// Remove a deleted group's tab and clear the panel.
pub fn remove(state: &mut GroupsState, group_id: &str) {
    state.tabs.retain(|tab| tab.id != group_id);
    state.panel = None;
}

/// Open the create-group modal with an empty name.
pub fn open_modal(state: &mut GroupsState) {
    state.modal = CreateModal {
        open: true,
        name: String::new(),
    };
}

/// Close the modal and forget the typed name.
pub fn close_modal(state: &mut GroupsState) {
    state.modal = CreateModal::default();
}
