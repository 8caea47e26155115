use crate::foundation::core::TileMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FilterMode {
    Nearest,
    Linear,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AddressMode {
    ClampToEdge,
    Repeat,
    Mirror,
    /// Transparent black outside unit bounds. Requires native support on the
    /// execution target; see [`SubpassBackend::supports_decal_address_mode`].
    ///
    /// [`SubpassBackend::supports_decal_address_mode`]: crate::SubpassBackend::supports_decal_address_mode
    Decal,
}

/// Descriptor the backend uses to look up a sampler resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SamplerDescriptor {
    pub min_filter: FilterMode,
    pub mag_filter: FilterMode,
    pub address_x: AddressMode,
    pub address_y: AddressMode,
}

impl Default for SamplerDescriptor {
    fn default() -> Self {
        Self {
            min_filter: FilterMode::Nearest,
            mag_filter: FilterMode::Nearest,
            address_x: AddressMode::ClampToEdge,
            address_y: AddressMode::ClampToEdge,
        }
    }
}

impl SamplerDescriptor {
    pub fn linear_clamp() -> Self {
        Self::default().with_linear_filtering()
    }

    pub fn with_linear_filtering(mut self) -> Self {
        self.min_filter = FilterMode::Linear;
        self.mag_filter = FilterMode::Linear;
        self
    }

    /// Apply a tile mode to both address axes.
    ///
    /// `Decal` without native support leaves the existing addressing in
    /// place; the caller is expected to select the decal-fallback blur shader
    /// instead.
    pub fn with_tile_mode(mut self, tile_mode: TileMode, supports_decal: bool) -> Self {
        let address = match tile_mode {
            TileMode::Clamp => AddressMode::ClampToEdge,
            TileMode::Repeat => AddressMode::Repeat,
            TileMode::Mirror => AddressMode::Mirror,
            TileMode::Decal => {
                if supports_decal {
                    AddressMode::Decal
                } else {
                    return self;
                }
            }
        };
        self.address_x = address;
        self.address_y = address;
        self
    }
}
