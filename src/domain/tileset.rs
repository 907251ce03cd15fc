use thiserror::Error;

/// Errors raised while preparing the tileset atlas. Both are fatal at
/// startup; the viewer cannot draw anything without a usable atlas.
#[derive(Debug, Error)]
pub enum TilesetError {
    #[error("failed to load tileset image {path}: {reason}")]
    Load { path: String, reason: String },
    #[error("tileset atlas {width}x{height} does not divide evenly into {tile_size}px tiles")]
    Misaligned {
        width: u32,
        height: u32,
        tile_size: u32,
    },
}

/// AtlasLayout describes how tile indices map into the tileset image.
/// Tiles are packed left-to-right, top-to-bottom, `tiles_per_row` per row.
#[derive(Debug, Clone, Copy)]
pub struct AtlasLayout {
    pub tile_size: u32,
    pub tiles_per_row: u32,
    pub atlas_width: u32,
    pub atlas_height: u32,
}

impl AtlasLayout {
    pub fn new(
        tile_size: u32,
        tiles_per_row: u32,
        atlas_width: u32,
        atlas_height: u32,
    ) -> Result<Self, TilesetError> {
        if atlas_width % tile_size != 0
            || atlas_height % tile_size != 0
            || tiles_per_row * tile_size > atlas_width
        {
            return Err(TilesetError::Misaligned {
                width: atlas_width,
                height: atlas_height,
                tile_size,
            });
        }
        Ok(Self {
            tile_size,
            tiles_per_row,
            atlas_width,
            atlas_height,
        })
    }

    /// Number of distinct tile indices the atlas provides
    pub const fn tile_count(&self) -> u16 {
        (self.tiles_per_row * self.tiles_per_row) as u16
    }

    /// Pixel rectangle (x, y, w, h) of a tile index inside the atlas image
    pub fn source_rect(&self, tile_index: u16) -> (f32, f32, f32, f32) {
        let index = tile_index as u32;
        let x = (index % self.tiles_per_row) * self.tile_size;
        let y = (index / self.tiles_per_row) * self.tile_size;
        (
            x as f32,
            y as f32,
            self.tile_size as f32,
            self.tile_size as f32,
        )
    }

    /// Normalized UV rectangle (u, v, du, dv) of a tile index
    pub fn uv_rect(&self, tile_index: u16) -> (f32, f32, f32, f32) {
        let (x, y, w, h) = self.source_rect(tile_index);
        (
            x / self.atlas_width as f32,
            y / self.atlas_height as f32,
            w / self.atlas_width as f32,
            h / self.atlas_height as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_rect_walks_rows() {
        let atlas = AtlasLayout::new(16, 8, 128, 128).unwrap();
        assert_eq!(atlas.tile_count(), 64);
        assert_eq!(atlas.source_rect(0), (0.0, 0.0, 16.0, 16.0));
        assert_eq!(atlas.source_rect(7), (112.0, 0.0, 16.0, 16.0));
        // Index 8 wraps to the second row
        assert_eq!(atlas.source_rect(8), (0.0, 16.0, 16.0, 16.0));
        assert_eq!(atlas.source_rect(63), (112.0, 112.0, 16.0, 16.0));
    }

    #[test]
    fn test_uv_rect_is_normalized() {
        let atlas = AtlasLayout::new(16, 8, 128, 128).unwrap();
        let (u, v, du, dv) = atlas.uv_rect(9);
        assert!((u - 16.0 / 128.0).abs() < 1e-6);
        assert!((v - 16.0 / 128.0).abs() < 1e-6);
        assert!((du - 16.0 / 128.0).abs() < 1e-6);
        assert!((dv - 16.0 / 128.0).abs() < 1e-6);
    }

    #[test]
    fn test_misaligned_atlas_rejected() {
        assert!(matches!(
            AtlasLayout::new(16, 8, 100, 128),
            Err(TilesetError::Misaligned { .. })
        ));
        // Atlas too narrow for the declared tiles per row
        assert!(matches!(
            AtlasLayout::new(16, 8, 64, 64),
            Err(TilesetError::Misaligned { .. })
        ));
    }
}
