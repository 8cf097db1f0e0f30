use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

/// The fixed set of families the font pickers offer. Serialized as the CSS
/// family name so stored records read naturally in the panel JSON.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontFamily {
    Inter,
    Roboto,
    Montserrat,
    Poppins,
    Oswald,
    #[serde(rename = "Playfair Display")]
    PlayfairDisplay,
    #[serde(rename = "Bebas Neue")]
    BebasNeue,
    Lato,
}

impl FontFamily {
    pub const ALL: [FontFamily; 8] = [
        FontFamily::Inter,
        FontFamily::Roboto,
        FontFamily::Montserrat,
        FontFamily::Poppins,
        FontFamily::Oswald,
        FontFamily::PlayfairDisplay,
        FontFamily::BebasNeue,
        FontFamily::Lato,
    ];

    pub fn css_name(self) -> &'static str {
        match self {
            FontFamily::Inter => "Inter",
            FontFamily::Roboto => "Roboto",
            FontFamily::Montserrat => "Montserrat",
            FontFamily::Poppins => "Poppins",
            FontFamily::Oswald => "Oswald",
            FontFamily::PlayfairDisplay => "Playfair Display",
            FontFamily::BebasNeue => "Bebas Neue",
            FontFamily::Lato => "Lato",
        }
    }

    /// Google Fonts stylesheet URL for the weights the panel uses. Loading is
    /// fire-and-forget on the display side; rendering starts with a fallback
    /// font and never waits for this resource.
    pub fn stylesheet_url(self) -> String {
        format!(
            "https://fonts.googleapis.com/css2?family={}:wght@400;500;600;700&display=swap",
            self.css_name().replace(' ', "+")
        )
    }
}

impl Default for FontFamily {
    fn default() -> Self {
        FontFamily::Inter
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

impl FromStr for FontFamily {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|family| family.css_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow!("unknown font family: {}", s))
    }
}
