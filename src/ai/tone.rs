use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Requested tone of the drafted reply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    /// Let the model pick between the concrete tones
    #[default]
    AutoDetect,
    Formal,
    Friendly,
    Persuasive,
}

impl Tone {
    pub const ALL: [Tone; 4] = [
        Tone::AutoDetect,
        Tone::Formal,
        Tone::Friendly,
        Tone::Persuasive,
    ];

    /// Tones the model may choose from when auto-detecting
    pub const CONCRETE: [Tone; 3] = [Tone::Formal, Tone::Friendly, Tone::Persuasive];

    pub fn label(self) -> &'static str {
        match self {
            Tone::AutoDetect => "Auto-detect",
            Tone::Formal => "Formal",
            Tone::Friendly => "Friendly",
            Tone::Persuasive => "Persuasive",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" | "auto-detect" | "autodetect" => Ok(Tone::AutoDetect),
            "formal" => Ok(Tone::Formal),
            "friendly" => Ok(Tone::Friendly),
            "persuasive" => Ok(Tone::Persuasive),
            other => Err(format!(
                "Unknown tone '{}'. Expected one of: auto-detect, formal, friendly, persuasive",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Tone::Persuasive.next(), Tone::AutoDetect);
        assert_eq!(Tone::AutoDetect.prev(), Tone::Persuasive);
        assert_eq!(Tone::Formal.next(), Tone::Friendly);
    }

    #[test]
    fn test_from_str_accepts_labels() {
        assert_eq!("Auto-detect".parse::<Tone>().unwrap(), Tone::AutoDetect);
        assert_eq!("auto".parse::<Tone>().unwrap(), Tone::AutoDetect);
        assert_eq!(" FRIENDLY ".parse::<Tone>().unwrap(), Tone::Friendly);
        assert!("angry".parse::<Tone>().is_err());
    }

    #[test]
    fn test_display_matches_label() {
        for tone in Tone::ALL {
            assert_eq!(tone.to_string(), tone.label());
        }
    }
}
