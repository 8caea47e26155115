use crate::foundation::error::{HalationError, HalationResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Pixel dimensions of a texture or subpass target. Both axes are > 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ISize {
    pub width: u32,
    pub height: u32,
}

impl ISize {
    pub fn new(width: u32, height: u32) -> HalationResult<Self> {
        if width == 0 || height == 0 {
            return Err(HalationError::validation("ISize axes must be > 0"));
        }
        Ok(Self { width, height })
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Sampling behavior outside unit texture bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TileMode {
    /// Edge pixels extend outward.
    Clamp,
    /// The texture tiles.
    Repeat,
    /// The texture tiles, mirrored at each boundary.
    Mirror,
    /// Transparent black outside the texture.
    Decal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BlendMode {
    /// Standard “source over destination” (premultiplied alpha).
    SourceOver,
}

/// Placement of a content node in the scene: its transform into local space
/// plus the compositing state carried through to the filter output.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneNode {
    pub transform: Affine,
    pub blend: BlendMode,
    pub clip_depth: u32,
}

impl Default for SceneNode {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            blend: BlendMode::SourceOver,
            clip_depth: 0,
        }
    }
}

/// The axis-aligned region, in local space, that content may paint into.
///
/// `Unbounded` means "no coverage determinable"; expansion arithmetic on it
/// stays `Unbounded` rather than defaulting to a guessed rectangle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Coverage {
    Unbounded,
    Bounded(Rect),
}

impl Coverage {
    /// Grow a bounded region by `amount` (absolute, per axis) on every side.
    pub fn expand(self, amount: Vec2) -> Self {
        match self {
            Self::Unbounded => Self::Unbounded,
            Self::Bounded(rect) => Self::Bounded(rect.inflate(amount.x.abs(), amount.y.abs())),
        }
    }

    pub fn is_unbounded(self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// A bounded region with zero or negative area paints nothing.
    pub fn is_empty(self) -> bool {
        match self {
            Self::Unbounded => false,
            Self::Bounded(rect) => rect.width() <= 0.0 || rect.height() <= 0.0,
        }
    }

    pub fn bounded(self) -> Option<Rect> {
        match self {
            Self::Unbounded => None,
            Self::Bounded(rect) => Some(rect),
        }
    }
}
