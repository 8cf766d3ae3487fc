//! Collision groups
//!
//! Group names are interned to small ids when bodies are registered, so the
//! per-frame collider lookup is an index instead of a string hash.

use std::collections::HashMap;

use crate::body::BodyId;

/// Interned collision-group name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub(crate) u16);

impl GroupId {
    /// Every registered body is a member
    pub const ALL: GroupId = GroupId(0);
    /// Never has members: colliding against it means colliding with nothing
    pub const NONE: GroupId = GroupId(1);

    pub const ALL_NAME: &'static str = "_all";
    pub const NONE_NAME: &'static str = "_none";

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn is_reserved(self) -> bool {
        self == Self::ALL || self == Self::NONE
    }
}

pub(crate) struct GroupTable {
    names: Vec<String>,
    ids: HashMap<String, GroupId>,
    members: Vec<Vec<BodyId>>,
}

impl GroupTable {
    pub(crate) fn new() -> Self {
        let mut table = GroupTable {
            names: Vec::new(),
            ids: HashMap::new(),
            members: Vec::new(),
        };
        table.intern(GroupId::ALL_NAME);
        table.intern(GroupId::NONE_NAME);
        table
    }

    pub(crate) fn intern(&mut self, name: &str) -> GroupId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let Ok(raw) = u16::try_from(self.names.len()) else {
            engine_warn!("intern: group table full, '{}' collides with nothing", name);
            return GroupId::NONE;
        };
        let id = GroupId(raw);
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        self.members.push(Vec::new());
        id
    }

    pub(crate) fn lookup(&self, name: &str) -> Option<GroupId> {
        self.ids.get(name).copied()
    }

    pub(crate) fn name(&self, id: GroupId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }

    pub(crate) fn members(&self, id: GroupId) -> &[BodyId] {
        self.members.get(id.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Add `body` to each of `groups` (reserved ids skipped, duplicates
    /// ignored) and to `ALL`.
    pub(crate) fn register(&mut self, body: BodyId, groups: &[GroupId]) {
        for &group in groups {
            if group.is_reserved() {
                continue;
            }
            if let Some(list) = self.members.get_mut(group.index()) {
                if !list.contains(&body) {
                    list.push(body);
                }
            }
        }
        self.members[GroupId::ALL.index()].push(body);
    }

    pub(crate) fn unregister(&mut self, body: BodyId) {
        for list in self.members.iter_mut() {
            list.retain(|&member| member != body);
        }
    }

    pub(crate) fn clear_members(&mut self) {
        for list in self.members.iter_mut() {
            list.clear();
        }
    }
}
