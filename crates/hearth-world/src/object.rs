//! The capability shared by every entity in the world.
//!
//! Rooms, exits, and players all carry an [`ObjectData`]: a display name
//! with its case-folded lookup form, a description, capability flags, and
//! an optional owner. The [`Object`] trait exposes that data uniformly;
//! each entity only has to say where its `ObjectData` lives.

use std::sync::{Arc, Weak};

use hearth_types::{EntityKind, Flags, Key};
use parking_lot::{MappedRwLockReadGuard, MappedRwLockWriteGuard};

use crate::player::Player;

/// Text shown for an entity whose description was never set.
pub const DEFAULT_DESCRIPTION: &str = "You see nothing special.";

/// Case-fold a name for lookups and uniqueness checks.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Attribute set common to rooms, exits, and players.
#[derive(Debug, Clone, Default)]
pub struct ObjectData {
    name: String,
    normal_name: String,
    description: String,
    flags: Flags,
    /// Ignored on players, which are never owned.
    owner: Weak<Player>,
}

impl ObjectData {
    /// Create object data with the given display name.
    pub fn new(name: &str) -> Self {
        let mut data = Self::default();
        data.set_name(name);
        data
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the display name and recompute the normalized name.
    pub fn set_name(&mut self, name: &str) {
        name.trim().clone_into(&mut self.name);
        self.normal_name = normalize(name);
    }

    /// Case-folded name used for comparisons.
    pub fn normal_name(&self) -> &str {
        &self.normal_name
    }

    /// Description, or [`DEFAULT_DESCRIPTION`] when none was set.
    pub fn description(&self) -> &str {
        if self.description.is_empty() {
            DEFAULT_DESCRIPTION
        } else {
            &self.description
        }
    }

    /// Replace the description. An empty string restores the default.
    pub fn set_description(&mut self, description: &str) {
        description.trim().clone_into(&mut self.description);
    }

    /// Current capability flags.
    pub const fn flags(&self) -> Flags {
        self.flags
    }

    /// Grant a flag without disturbing the others.
    pub const fn set_flag(&mut self, flag: Flags) {
        self.flags.insert(flag);
    }

    /// Revoke a flag without disturbing the others.
    pub const fn clear_flag(&mut self, flag: Flags) {
        self.flags.remove(flag);
    }

    /// The owning player, if one was set and is still alive.
    pub fn owner(&self) -> Option<Arc<Player>> {
        self.owner.upgrade()
    }

    /// Record `owner` as the administrator of this entity.
    pub fn set_owner(&mut self, owner: &Arc<Player>) {
        self.owner = Arc::downgrade(owner);
    }
}

/// Uniform access to the [`ObjectData`] of any entity.
///
/// Implementors provide the key, the kind, and guarded access to their
/// `ObjectData`; everything else is provided. Each provided method takes
/// the entity's lock for the duration of the call only, so none of them
/// may be called while the caller already holds that entity's lock.
pub trait Object {
    /// Immutable unique key.
    fn key(&self) -> Key;

    /// Concrete kind of the entity.
    fn kind(&self) -> EntityKind;

    /// Shared access to the object data.
    fn object(&self) -> MappedRwLockReadGuard<'_, ObjectData>;

    /// Exclusive access to the object data.
    fn object_mut(&self) -> MappedRwLockWriteGuard<'_, ObjectData>;

    /// Display name.
    fn name(&self) -> String {
        self.object().name().to_owned()
    }

    /// Replace the display name.
    fn set_name(&self, name: &str) {
        self.object_mut().set_name(name);
    }

    /// Case-folded name.
    fn normal_name(&self) -> String {
        self.object().normal_name().to_owned()
    }

    /// Description, with the "nothing special" placeholder when empty.
    fn description(&self) -> String {
        self.object().description().to_owned()
    }

    /// Replace the description.
    fn set_description(&self, description: &str) {
        self.object_mut().set_description(description);
    }

    /// Current flags.
    fn flags(&self) -> Flags {
        self.object().flags()
    }

    /// Grant a flag.
    fn set_flag(&self, flag: Flags) {
        self.object_mut().set_flag(flag);
    }

    /// Revoke a flag.
    fn clear_flag(&self, flag: Flags) {
        self.object_mut().clear_flag(flag);
    }

    /// Check whether any bit of `flag` is granted.
    fn is_set(&self, flag: Flags) -> bool {
        self.object().flags().intersects(flag)
    }

    /// The owning player, if any.
    fn owner(&self) -> Option<Arc<Player>> {
        self.object().owner()
    }

    /// Set the owning player.
    fn set_owner(&self, owner: &Arc<Player>) {
        self.object_mut().set_owner(owner);
    }

    /// Check whether `player` owns this entity.
    fn is_owned_by(&self, player: &Player) -> bool {
        self.owner().is_some_and(|owner| owner.key() == player.key())
    }

    /// Name followed by key, e.g. `The Hall(#1)`.
    fn display_with_key(&self) -> String {
        format!("{}({})", self.name(), self.key())
    }
}
