/// Four signed bytes, usually a packed color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tuple4b {
    /// The first component.
    pub x: i8,
    /// The second component.
    pub y: i8,
    /// The third component.
    pub z: i8,
    /// The fourth component.
    pub w: i8,
}

impl Tuple4b {
    /// Create a tuple from its components.
    #[inline]
    pub const fn new(x: i8, y: i8, z: i8, w: i8) -> Self {
        Self { x, y, z, w }
    }

    /// Convert the tuple to an array.
    #[inline]
    pub fn to_array(self) -> [i8; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Component-wise absolute value. `i8::MIN` stays `i8::MIN`.
    #[inline]
    pub fn abs(self) -> Self {
        Self {
            x: self.x.wrapping_abs(),
            y: self.y.wrapping_abs(),
            z: self.z.wrapping_abs(),
            w: self.w.wrapping_abs(),
        }
    }
}

impl From<[i8; 4]> for Tuple4b {
    #[inline]
    fn from([x, y, z, w]: [i8; 4]) -> Self {
        Self { x, y, z, w }
    }
}

impl From<Tuple4b> for [i8; 4] {
    #[inline]
    fn from(t: Tuple4b) -> Self {
        t.to_array()
    }
}

impl From<[u8; 4]> for Tuple4b {
    #[inline]
    fn from(bytes: [u8; 4]) -> Self {
        Self::from(bytes.map(|b| b as i8))
    }
}

impl From<Tuple4b> for [u8; 4] {
    #[inline]
    fn from(t: Tuple4b) -> Self {
        t.to_array().map(|b| b as u8)
    }
}

// bytes print unsigned
impl std::fmt::Display for Tuple4b {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.x as u8, self.y as u8, self.z as u8, self.w as u8
        )
    }
}
