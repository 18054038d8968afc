//! Feature types: the reflective shapes a facet factory can be applied to.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// A single reflective shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeatureType {
    Object,
    Property,
    Collection,
    Action,
    ActionParameter,
}

impl FeatureType {
    pub const ALL: [FeatureType; 5] = [
        FeatureType::Object,
        FeatureType::Property,
        FeatureType::Collection,
        FeatureType::Action,
        FeatureType::ActionParameter,
    ];

    const fn bit(self) -> u8 {
        match self {
            FeatureType::Object => 1,
            FeatureType::Property => 1 << 1,
            FeatureType::Collection => 1 << 2,
            FeatureType::Action => 1 << 3,
            FeatureType::ActionParameter => 1 << 4,
        }
    }
}

/// Bitset over [`FeatureType`].
///
/// Each facet factory declares one of these; the reflector only invokes an
/// entry point for a shape contained in the mask.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FeatureTypes(u8);

impl FeatureTypes {
    pub const NONE: Self = Self(0);
    pub const OBJECTS: Self = Self(FeatureType::Object.bit());
    pub const PROPERTIES: Self = Self(FeatureType::Property.bit());
    pub const COLLECTIONS: Self = Self(FeatureType::Collection.bit());
    pub const ACTIONS: Self = Self(FeatureType::Action.bit());
    pub const ACTION_PARAMETERS: Self = Self(FeatureType::ActionParameter.bit());

    pub const PROPERTIES_AND_COLLECTIONS: Self = Self(Self::PROPERTIES.0 | Self::COLLECTIONS.0);
    pub const PROPERTIES_AND_ACTION_PARAMETERS: Self =
        Self(Self::PROPERTIES.0 | Self::ACTION_PARAMETERS.0);
    pub const PROPERTIES_COLLECTIONS_AND_ACTIONS: Self =
        Self(Self::PROPERTIES.0 | Self::COLLECTIONS.0 | Self::ACTIONS.0);
    pub const ACTIONS_AND_ACTION_PARAMETERS: Self =
        Self(Self::ACTIONS.0 | Self::ACTION_PARAMETERS.0);
    pub const COLLECTIONS_AND_ACTIONS: Self = Self(Self::COLLECTIONS.0 | Self::ACTIONS.0);
    pub const OBJECTS_AND_PROPERTIES: Self = Self(Self::OBJECTS.0 | Self::PROPERTIES.0);
    pub const EVERYTHING: Self = Self(0b1_1111);
    pub const EVERYTHING_BUT_COLLECTIONS: Self = Self(Self::EVERYTHING.0 & !Self::COLLECTIONS.0);

    /// Check whether `feature` is in the mask.
    pub const fn contains(self, feature: FeatureType) -> bool {
        self.0 & feature.bit() != 0
    }

    /// Union of two masks.
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the shapes contained in the mask, in declaration order.
    pub fn iter(self) -> impl Iterator<Item = FeatureType> {
        FeatureType::ALL
            .into_iter()
            .filter(move |feature| self.contains(*feature))
    }
}

impl From<FeatureType> for FeatureTypes {
    fn from(feature: FeatureType) -> Self {
        Self(feature.bit())
    }
}

impl BitOr for FeatureTypes {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for FeatureTypes {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for FeatureTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
