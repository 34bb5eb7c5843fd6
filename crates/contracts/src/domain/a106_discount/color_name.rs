//! Human name of a `#rrggbb` color, by nearest match in a small palette

const PALETTE: &[(&str, (u8, u8, u8))] = &[
    ("Black", (0x00, 0x00, 0x00)),
    ("White", (0xFF, 0xFF, 0xFF)),
    ("Gray", (0x80, 0x80, 0x80)),
    ("Silver", (0xC0, 0xC0, 0xC0)),
    ("Red", (0xFF, 0x00, 0x00)),
    ("Maroon", (0x80, 0x00, 0x00)),
    ("Crimson", (0xDC, 0x14, 0x3C)),
    ("Pink", (0xFF, 0xC0, 0xCB)),
    ("Orange", (0xFF, 0xA5, 0x00)),
    ("Coral", (0xFF, 0x7F, 0x50)),
    ("Brown", (0xA5, 0x2A, 0x2A)),
    ("Chocolate", (0xD2, 0x69, 0x1E)),
    ("Beige", (0xF5, 0xF5, 0xDC)),
    ("Gold", (0xFF, 0xD7, 0x00)),
    ("Yellow", (0xFF, 0xFF, 0x00)),
    ("Olive", (0x80, 0x80, 0x00)),
    ("Lime", (0x00, 0xFF, 0x00)),
    ("Green", (0x00, 0x80, 0x00)),
    ("Teal", (0x00, 0x80, 0x80)),
    ("Cyan", (0x00, 0xFF, 0xFF)),
    ("Sky Blue", (0x87, 0xCE, 0xEB)),
    ("Blue", (0x00, 0x00, 0xFF)),
    ("Navy", (0x00, 0x00, 0x80)),
    ("Indigo", (0x4B, 0x00, 0x82)),
    ("Purple", (0x80, 0x00, 0x80)),
    ("Violet", (0xEE, 0x82, 0xEE)),
    ("Magenta", (0xFF, 0x00, 0xFF)),
];

/// `#RGB` / `#RRGGBB` (leading `#` optional)
fn parse_hex(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };
    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Nearest palette name, or the input itself when it is not a hex color
pub fn color_name(value: &str) -> String {
    let Some((r, g, b)) = parse_hex(value) else {
        return value.to_string();
    };
    PALETTE
        .iter()
        .min_by_key(|(_, (pr, pg, pb))| {
            let dr = r as i32 - *pr as i32;
            let dg = g as i32 - *pg as i32;
            let db = b as i32 - *pb as i32;
            dr * dr + dg * dg + db * db
        })
        .map(|(name, _)| name.to_string())
        .unwrap_or_else(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_and_nearest() {
        assert_eq!(color_name("#ff0000"), "Red");
        assert_eq!(color_name("#FE0101"), "Red");
        assert_eq!(color_name("000"), "Black");
        assert_eq!(color_name("#000081"), "Navy");
    }

    #[test]
    fn test_not_a_color() {
        assert_eq!(color_name("XL"), "XL");
        assert_eq!(color_name("#zzzzzz"), "#zzzzzz");
    }
}
