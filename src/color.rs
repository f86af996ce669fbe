// Simple color struct, created from an unsigned 32 representing RRGGBBAA
#[derive(Copy, Clone)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = (num >> 0) as u8;

        Color { r, g, b, a }
    }

    // Canvas 2d styles are string-valued
    pub fn to_css(&self) -> String {
        self.to_css_with_alpha(self.a as f64 / 255.0)
    }

    pub fn to_css_with_alpha(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u32_unpacks_rrggbbaa() {
        let cyan = Color::from_u32(0x00ffffff);
        assert_eq!(cyan.r, 0x00);
        assert_eq!(cyan.g, 0xff);
        assert_eq!(cyan.b, 0xff);
        assert_eq!(cyan.a, 0xff);
    }

    #[test]
    fn css_string_carries_alpha() {
        let cyan = Color::from_u32(0x00ffffff);
        assert_eq!(cyan.to_css(), "rgba(0, 255, 255, 1)");
        assert_eq!(cyan.to_css_with_alpha(0.5), "rgba(0, 255, 255, 0.5)");
    }
}
