/// A non-player character (merchants, task masters).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Npc {
    pub code: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: String,
}
