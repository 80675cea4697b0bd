use std::fmt;
use std::str::FromStr;

/// The Latin faces of the standard 14 fonts. Every conforming reader ships
/// these, so they are referenced by name and never embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StandardFont {
    /// Helvetica (sans-serif)
    #[default]
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    /// Times Roman (serif)
    TimesRoman,
    TimesBold,
    TimesItalic,
    TimesBoldItalic,
    /// Courier (monospace)
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
}

impl StandardFont {
    pub const ALL: [StandardFont; 12] = [
        StandardFont::Helvetica,
        StandardFont::HelveticaBold,
        StandardFont::HelveticaOblique,
        StandardFont::HelveticaBoldOblique,
        StandardFont::TimesRoman,
        StandardFont::TimesBold,
        StandardFont::TimesItalic,
        StandardFont::TimesBoldItalic,
        StandardFont::Courier,
        StandardFont::CourierBold,
        StandardFont::CourierOblique,
        StandardFont::CourierBoldOblique,
    ];

    /// The `/BaseFont` name.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
            StandardFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
            StandardFont::TimesRoman => "Times-Roman",
            StandardFont::TimesBold => "Times-Bold",
            StandardFont::TimesItalic => "Times-Italic",
            StandardFont::TimesBoldItalic => "Times-BoldItalic",
            StandardFont::Courier => "Courier",
            StandardFont::CourierBold => "Courier-Bold",
            StandardFont::CourierOblique => "Courier-Oblique",
            StandardFont::CourierBoldOblique => "Courier-BoldOblique",
        }
    }
}

impl fmt::Display for StandardFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pdf_name())
    }
}

impl FromStr for StandardFont {
    type Err = String;

    /// Accepts the `/BaseFont` name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StandardFont::ALL
            .into_iter()
            .find(|font| font.pdf_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown standard font: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_pdf_names() {
        assert_eq!(StandardFont::Helvetica.pdf_name(), "Helvetica");
        assert_eq!(
            StandardFont::HelveticaBoldOblique.pdf_name(),
            "Helvetica-BoldOblique"
        );
        assert_eq!(StandardFont::TimesRoman.pdf_name(), "Times-Roman");
        assert_eq!(StandardFont::CourierBold.pdf_name(), "Courier-Bold");
    }

    #[test]
    fn test_default_is_helvetica() {
        assert_eq!(StandardFont::default(), StandardFont::Helvetica);
    }

    #[test]
    fn test_parse_round_trips_every_font() {
        for font in StandardFont::ALL {
            assert_eq!(font.pdf_name().parse::<StandardFont>(), Ok(font));
        }
        assert_eq!("courier".parse::<StandardFont>(), Ok(StandardFont::Courier));
        assert!("Symbol".parse::<StandardFont>().is_err());
    }
}
