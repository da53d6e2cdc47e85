//! RGB and RGBA colors with components in `[0, 1]`.
//!
//! Packed integer forms use the `0xAARRGGBB` layout. Unpacking divides each channel by 255 and
//! packing saturates `channel * 255` to `[0, 255]` before truncating.

define_tuple_type!(
    /// An RGB color, `x = red`, `y = green`, `z = blue`.
    Color3f, glam::Vec3, [f32; 3], new, [x, y, z]
);
define_tuple_type!(
    /// An RGBA color, `w = alpha`.
    Color4f, glam::Vec4, [f32; 4], new, [x, y, z, w]
);

impl_zero_default!(Color3f);
impl_component_mul!(Color3f => glam::Vec3, Color4f => glam::Vec4);
impl_tuple3_ops!(Color3f);
impl_tuple4_ops!(Color4f);

#[inline]
fn unpack_channel(bits: u32, shift: u32) -> f32 {
    ((bits >> shift) & 0xff) as f32 / 255.0
}

#[inline]
fn pack_channel(c: f32, shift: u32) -> u32 {
    // `as` saturates and maps NaN to zero
    ((c * 255.0).clamp(0.0, 255.0) as u8 as u32) << shift
}

impl Color3f {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unpack a `0x..RRGGBB` integer. The alpha byte is ignored.
    pub fn from_rgb(bits: u32) -> Self {
        Self {
            x: unpack_channel(bits, 16),
            y: unpack_channel(bits, 8),
            z: unpack_channel(bits, 0),
        }
    }

    /// Pack into `0xFFRRGGBB`.
    pub fn to_rgb(self) -> u32 {
        0xff00_0000 | pack_channel(self.x, 16) | pack_channel(self.y, 8) | pack_channel(self.z, 0)
    }
}

impl Color4f {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Create an opaque color.
    #[inline]
    pub const fn new3(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// An opaque color from an RGB color.
    #[inline]
    pub fn from_color3(c: Color3f) -> Self {
        Self::new3(c.x, c.y, c.z)
    }

    /// Unpack a `0xAARRGGBB` integer.
    pub fn from_argb(bits: u32) -> Self {
        Self {
            x: unpack_channel(bits, 16),
            y: unpack_channel(bits, 8),
            z: unpack_channel(bits, 0),
            w: unpack_channel(bits, 24),
        }
    }

    /// Pack into `0xAARRGGBB`.
    pub fn to_argb(self) -> u32 {
        pack_channel(self.w, 24)
            | pack_channel(self.x, 16)
            | pack_channel(self.y, 8)
            | pack_channel(self.z, 0)
    }
}

impl Default for Color4f {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<Color3f> for Color4f {
    #[inline]
    fn from(c: Color3f) -> Self {
        Self::from_color3(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unpack_argb() {
        let c = Color4f::from_argb(0xFFFF0000);
        assert_eq!(c, Color4f::new(1.0, 0.0, 0.0, 1.0));
        let c = Color4f::from_argb(0x80402010);
        assert_relative_eq!(c.w, 128.0 / 255.0);
        assert_relative_eq!(c.x, 64.0 / 255.0);
        assert_relative_eq!(c.y, 32.0 / 255.0);
        assert_relative_eq!(c.z, 16.0 / 255.0);
    }

    #[test]
    fn test_pack_round_trip() {
        for bits in [0x00000000u32, 0xFFFFFFFF, 0x80402010, 0x12345678] {
            assert_eq!(Color4f::from_argb(bits).to_argb(), bits);
        }
        assert_eq!(Color3f::from_rgb(0x00ABCDEF).to_rgb(), 0xFFABCDEF);
    }

    #[test]
    fn test_pack_saturates() {
        assert_eq!(Color3f::new(2.0, -1.0, 0.5).to_rgb(), 0xFFFF007F);
        assert_eq!(Color4f::new(f32::NAN, 0.0, 0.0, 1.0).to_argb(), 0xFF000000);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Color4f::default(), Color4f::BLACK);
        assert_eq!(Color3f::default(), Color3f::BLACK);
        assert_eq!(Color4f::from(Color3f::WHITE), Color4f::WHITE);
        assert_eq!(Color4f::new3(0.5, 0.5, 0.5).w, 1.0);
    }
}
