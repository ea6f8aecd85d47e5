//! Per-tick change flags reported by renderables.

/// Aspect of a renderable that needs re-upload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UpdateType {
    /// Rebuild everything.
    Reset,
    /// Positions moved.
    UpdatePositions,
    /// Image handles changed.
    UpdateImages,
    /// Label text or tint changed.
    UpdateLabels,
}

impl UpdateType {
    const ALL: [UpdateType; 4] = [
        UpdateType::Reset,
        UpdateType::UpdatePositions,
        UpdateType::UpdateImages,
        UpdateType::UpdateLabels,
    ];

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of [`UpdateType`]s, stored as a bitmask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct UpdateSet(u8);

impl UpdateSet {
    /// No pending changes.
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn of(kind: UpdateType) -> Self {
        Self(kind.bit())
    }

    pub fn insert(&mut self, kind: UpdateType) {
        self.0 |= kind.bit();
    }

    pub fn contains(self, kind: UpdateType) -> bool {
        self.0 & kind.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn iter(self) -> impl Iterator<Item = UpdateType> {
        UpdateType::ALL
            .into_iter()
            .filter(move |kind| self.contains(*kind))
    }
}

impl FromIterator<UpdateType> for UpdateSet {
    fn from_iter<I: IntoIterator<Item = UpdateType>>(iter: I) -> Self {
        let mut set = Self::empty();
        for kind in iter {
            set.insert(kind);
        }
        set
    }
}
