/// Horizontal alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum AlignX {
    #[default]
    Left,
    CenterX,
    Right,
}

impl AlignX {
    /// Maps the horizontal half of an alignment token: `l`, `c` or `r`.
    pub fn from_token(c: char) -> Option<Self> {
        match c {
            'l' => Some(AlignX::Left),
            'c' => Some(AlignX::CenterX),
            'r' => Some(AlignX::Right),
            _ => None,
        }
    }
}

/// Vertical alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum AlignY {
    #[default]
    Top,
    CenterY,
    Bottom,
}

impl AlignY {
    /// Maps the vertical half of an alignment token: `t`, `c` or `b`.
    pub fn from_token(c: char) -> Option<Self> {
        match c {
            't' => Some(AlignY::Top),
            'c' => Some(AlignY::CenterY),
            'b' => Some(AlignY::Bottom),
            _ => None,
        }
    }
}
