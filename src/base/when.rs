/// Timing for conditional hiding, disabling and immutability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WhenTo {
    #[default]
    Always,
    Never,
    OncePersisted,
    UntilPersisted,
}

impl WhenTo {
    /// Whether the condition holds for an object in the given persistence state.
    pub fn applies(self, persistent: bool) -> bool {
        match self {
            WhenTo::Always => true,
            WhenTo::Never => false,
            WhenTo::OncePersisted => persistent,
            WhenTo::UntilPersisted => !persistent,
        }
    }
}
