pub mod layout;

// Re-exports for convenience
pub use layout::{PlacedTile, TileLayout};
