/// Maps a character to its WinAnsiEncoding (Windows-1252) byte.
///
/// Line breaks have no representation inside a text run and map to `None`,
/// like any character outside the code page.
pub fn win_ansi_byte(ch: char) -> Option<u8> {
    let byte = match ch as u32 {
        0x0A | 0x0D => return None,
        // ASCII range
        0x00..=0x7F => ch as u8,
        // Latin-1 Supplement that overlaps with Windows-1252
        0xA0..=0xFF => ch as u8,
        0x20AC => 0x80, // Euro sign
        0x201A => 0x82, // Single low quotation mark
        0x0192 => 0x83, // Latin small letter f with hook
        0x201E => 0x84, // Double low quotation mark
        0x2026 => 0x85, // Horizontal ellipsis
        0x2020 => 0x86, // Dagger
        0x2021 => 0x87, // Double dagger
        0x02C6 => 0x88, // Circumflex accent
        0x2030 => 0x89, // Per mille sign
        0x0160 => 0x8A, // Latin capital letter S with caron
        0x2039 => 0x8B, // Single left angle quotation mark
        0x0152 => 0x8C, // Latin capital ligature OE
        0x017D => 0x8E, // Latin capital letter Z with caron
        0x2018 => 0x91, // Left single quotation mark
        0x2019 => 0x92, // Right single quotation mark
        0x201C => 0x93, // Left double quotation mark
        0x201D => 0x94, // Right double quotation mark
        0x2022 => 0x95, // Bullet
        0x2013 => 0x96, // En dash
        0x2014 => 0x97, // Em dash
        0x02DC => 0x98, // Small tilde
        0x2122 => 0x99, // Trade mark sign
        0x0161 => 0x9A, // Latin small letter s with caron
        0x203A => 0x9B, // Single right angle quotation mark
        0x0153 => 0x9C, // Latin small ligature oe
        0x017E => 0x9E, // Latin small letter z with caron
        0x0178 => 0x9F, // Latin capital letter Y with diaeresis
        _ => return None,
    };
    Some(byte)
}

/// Encodes `text` as WinAnsiEncoding bytes.
///
/// Fails with the first character that has no WinAnsi byte; nothing is ever
/// replaced by a substitute glyph.
pub fn encode_win_ansi(text: &str) -> Result<Vec<u8>, char> {
    let mut bytes = Vec::with_capacity(text.len());
    for ch in text.chars() {
        bytes.push(win_ansi_byte(ch).ok_or(ch)?);
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_is_identity() {
        let text = "The quick brown fox (and \\friends) 0123456789";
        assert_eq!(encode_win_ansi(text).unwrap(), text.as_bytes());
    }

    #[test]
    fn test_latin1_is_single_byte() {
        assert_eq!(encode_win_ansi("café").unwrap(), vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(encode_win_ansi("\u{00A0}").unwrap(), vec![0xA0]);
    }

    #[test]
    fn test_windows_1252_specials() {
        assert_eq!(
            encode_win_ansi("\u{20AC}\u{2014}\u{201C}\u{201D}\u{2022}").unwrap(),
            vec![0x80, 0x97, 0x93, 0x94, 0x95]
        );
    }

    #[test]
    fn test_unmapped_character_is_reported() {
        assert_eq!(encode_win_ansi("ok \u{4e2d}\u{6587}"), Err('\u{4e2d}'));
        assert_eq!(encode_win_ansi("rocket \u{1F680}"), Err('\u{1F680}'));
        // C1 control range is not part of the code page
        assert_eq!(encode_win_ansi("\u{0081}"), Err('\u{0081}'));
    }

    #[test]
    fn test_line_breaks_rejected() {
        assert_eq!(encode_win_ansi("two\nlines"), Err('\n'));
        assert_eq!(encode_win_ansi("carriage\rreturn"), Err('\r'));
        assert_eq!(win_ansi_byte('\t'), Some(b'\t'));
    }
}
