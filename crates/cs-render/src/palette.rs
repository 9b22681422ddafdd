//! Colours, packed as `0x00RRGGBB`.

use cs_grid::Tile;

pub const GREEN: u32 = 0x00_00FF00;
pub const RED:   u32 = 0x00_FF0000;
pub const BLACK: u32 = 0x00_000000;
pub const WHITE: u32 = 0x00_FFFFFF;

/// Background of a tile of the given type.
#[inline]
pub fn tile_color(tile: Tile) -> u32 {
    match tile {
        Tile::Grass => GREEN,
        Tile::Road  => RED,
    }
}

/// Fill behind a car's body.
pub const CAR_TILE: u32 = RED;

/// The car itself.
pub const CAR_BODY: u32 = BLACK;

/// Destination marker.
pub const DESTINATION: u32 = WHITE;
