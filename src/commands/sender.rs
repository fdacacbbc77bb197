//! The entity issuing a command: the console, a player, a command block...

/// Position inside a named world.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub world: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Location {
    pub fn new(world: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            world: world.into(),
            x,
            y,
            z,
        }
    }

    pub fn block_x(&self) -> i64 {
        self.x.floor() as i64
    }

    pub fn block_z(&self) -> i64 {
        self.z.floor() as i64
    }

    /// Chunks are 16x16 columns of blocks.
    pub fn chunk_x(&self) -> i64 {
        self.block_x() >> 4
    }

    pub fn chunk_z(&self) -> i64 {
        self.block_z() >> 4
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{:.1},{:.1},{:.1}", self.world, self.x, self.y, self.z)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SenderKind {
    Console,
    Player,
    Block,
    Entity,
}

pub trait Caller {
    fn name(&self) -> &str;

    fn kind(&self) -> SenderKind;

    /// Locale tag used to pick the message bundle, e.g. `en` or `de_DE`.
    fn locale(&self) -> &str {
        crate::i18n::DEFAULT_LANGUAGE
    }

    /// Where the caller is. Callers without a location are not physical.
    fn location(&self) -> Option<Location> {
        None
    }

    fn has_permission(&self, node: &str) -> bool;

    fn send_message(&self, message: &str);

    /// Moves the caller. Returns false if the caller cannot be moved.
    fn teleport(&self, _destination: Location) -> bool {
        false
    }

    fn is_player(&self) -> bool {
        self.kind() == SenderKind::Player
    }

    fn is_physical(&self) -> bool {
        self.location().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_coordinates_floor_negative_positions() {
        let location = Location::new("world", -0.5, 64.0, 31.9);
        assert_eq!(location.chunk_x(), -1);
        assert_eq!(location.chunk_z(), 1);

        let origin = Location::new("world", 15.99, 0.0, 16.0);
        assert_eq!(origin.chunk_x(), 0);
        assert_eq!(origin.chunk_z(), 1);
    }

    #[test]
    fn display_is_compact() {
        assert_eq!(
            Location::new("world", 1.0, 2.5, -3.0).to_string(),
            "world@1.0,2.5,-3.0"
        );
    }
}
