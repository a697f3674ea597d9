use serde::{Deserialize, Serialize};

use super::language::{Language, LocalizedText};

/// Rounding precision applied to every frequency of an exercise.
///
/// One precision is chosen per generated dataset and used for both the
/// decimal and the percentage form of each frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPrecision {
    /// Round to the nearest unit (no decimal).
    Unit,
    /// Round to one decimal place.
    Tenth,
    /// Round to two decimal places.
    Hundredth,
}

impl RoundingPrecision {
    pub const ALL: [Self; 3] = [Self::Unit, Self::Tenth, Self::Hundredth];

    /// Number of digits kept after the decimal separator.
    #[must_use]
    pub const fn decimals(self) -> u8 {
        match self {
            Self::Unit => 0,
            Self::Tenth => 1,
            Self::Hundredth => 2,
        }
    }

    /// Short phrase such as "to the nearest tenth".
    #[must_use]
    pub const fn phrase(self, language: Language) -> &'static str {
        let text = match self {
            Self::Unit => LocalizedText::new("à l'unité près", "to the nearest unit"),
            Self::Tenth => LocalizedText::new("au dixième près", "to the nearest tenth"),
            Self::Hundredth => LocalizedText::new("au centième près", "to the nearest hundredth"),
        };
        text.get(language)
    }

    /// Instruction sentence shown with the exercise.
    #[must_use]
    pub const fn instruction(self, language: Language) -> &'static str {
        let text = match self {
            Self::Unit => LocalizedText::new(
                "Arrondis les fréquences à l'unité près : aucun chiffre après la virgule.",
                "Round the frequencies to the nearest unit: no digit after the decimal point.",
            ),
            Self::Tenth => LocalizedText::new(
                "Arrondis les fréquences au dixième près : un chiffre après la virgule.",
                "Round the frequencies to the nearest tenth: one digit after the decimal point.",
            ),
            Self::Hundredth => LocalizedText::new(
                "Arrondis les fréquences au centième près : deux chiffres après la virgule.",
                "Round the frequencies to the nearest hundredth: two digits after the decimal point.",
            ),
        };
        text.get(language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimals() {
        let decimals = RoundingPrecision::ALL.map(RoundingPrecision::decimals);
        assert_eq!(decimals, [0, 1, 2]);
    }

    #[test]
    fn test_texts_are_localized() {
        for precision in RoundingPrecision::ALL {
            assert_ne!(
                precision.phrase(Language::Fr),
                precision.phrase(Language::En)
            );
            assert!(
                precision
                    .instruction(Language::Fr)
                    .contains(precision.phrase(Language::Fr))
            );
        }
    }
}
