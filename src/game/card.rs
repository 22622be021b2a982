use std::fmt;

/// Name of an image resource, conventionally `<Prefix>_<Index>.<ext>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(value: impl Into<String>) -> Self {
        AssetId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The pairing key: everything before the first `separator`, or the whole
    /// identifier when the separator does not occur.
    pub fn prefix(&self, separator: char) -> &str {
        match self.0.split_once(separator) {
            Some((head, _)) => head,
            None => &self.0,
        }
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetId {
    fn from(value: &str) -> Self {
        AssetId::new(value)
    }
}

impl From<String> for AssetId {
    fn from(value: String) -> Self {
        AssetId(value)
    }
}

/// Board position of a slot. Doubles as the display handle handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub usize);

#[derive(Clone, Debug, PartialEq)]
pub struct PlayCard {
    pub asset: AssetId,
    pub prefix: String,
    pub matched: bool,
}

impl PlayCard {
    pub fn new(asset: AssetId, separator: char) -> Self {
        let prefix = asset.prefix(separator).to_string();
        PlayCard {
            asset,
            prefix,
            matched: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CardSlot {
    Play(PlayCard),
    Placeholder,
}

impl CardSlot {
    pub fn as_play(&self) -> Option<&PlayCard> {
        match self {
            CardSlot::Play(card) => Some(card),
            CardSlot::Placeholder => None,
        }
    }

    pub fn as_play_mut(&mut self) -> Option<&mut PlayCard> {
        match self {
            CardSlot::Play(card) => Some(card),
            CardSlot::Placeholder => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, CardSlot::Placeholder)
    }
}
