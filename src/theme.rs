use crossterm::style::Color;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub canvas: Color,
    pub player: Color,
    pub player_stroke: Color,
    pub pickup: Color,
}

const fn rgb(hex: u32) -> Color {
    Color::Rgb { r: (hex >> 16) as u8, g: (hex >> 8) as u8, b: hex as u8 }
}

pub const LIGHT: Theme = Theme {
    name: "light",
    canvas: rgb(0xF7F7F7),
    player: rgb(0x257180),
    player_stroke: rgb(0xF2E5BF),
    pickup: rgb(0xFD8B51),
};

pub const DARK: Theme = Theme {
    name: "dark",
    canvas: rgb(0x282828),
    player: rgb(0x257180),
    player_stroke: rgb(0xF2E5BF),
    pickup: rgb(0xFD8B51),
};

impl Theme {
    pub fn toggled(&self) -> Theme {
        if *self == LIGHT { DARK } else { LIGHT }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_split_into_channels() {
        assert_eq!(rgb(0x257180), Color::Rgb { r: 0x25, g: 0x71, b: 0x80 });
        assert_eq!(DARK.canvas, Color::Rgb { r: 0x28, g: 0x28, b: 0x28 });
    }

    #[test]
    fn toggle_flips_between_light_and_dark() {
        assert_eq!(LIGHT.toggled(), DARK);
        assert_eq!(DARK.toggled(), LIGHT);
        assert_eq!(LIGHT.toggled().toggled(), LIGHT);
    }
}
