use std::ops::RangeInclusive;

use rand::Rng;

use super::language::{Language, LocalizedText};

/// Probability that a value drawn for a round-number attribute is snapped to
/// the nearest multiple of 5.
const ROUND_NUMBER_PROBABILITY: f64 = 0.5;

/// A characteristic surveyed in an exercise ("caractère étudié").
///
/// Each attribute has an inclusive integer range of possible values, an
/// optional unit and localized display texts.
///
/// # Example
///
/// ```
/// use statmaster_engine::{Attribute, Language};
///
/// const SHOE_SIZE: Attribute = Attribute::new("shoe_size", 34, 44)
///     .title("Pointure", "Shoe size")
///     .axis_label("Pointure", "Shoe size");
///
/// assert_eq!(SHOE_SIZE.value_count(), 11);
/// assert_eq!(SHOE_SIZE.title_in(Language::En), "Shoe size");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
    id: &'static str,
    min: u32,
    max: u32,
    unit: Option<&'static str>,
    title: LocalizedText,
    axis_label: LocalizedText,
    prefers_round_numbers: bool,
}

impl Attribute {
    /// Creates an attribute with values in `min..=max`.
    ///
    /// Titles default to the identifier until set with [`Self::title`] and
    /// [`Self::axis_label`].
    ///
    /// # Panics
    ///
    /// Panics if `min > max` (at compile time for `const` catalogs).
    #[must_use]
    pub const fn new(id: &'static str, min: u32, max: u32) -> Self {
        assert!(min <= max, "attribute range must not be empty");
        Self {
            id,
            min,
            max,
            unit: None,
            title: LocalizedText::new(id, id),
            axis_label: LocalizedText::new(id, id),
            prefers_round_numbers: false,
        }
    }

    #[must_use]
    pub const fn unit(self, unit: &'static str) -> Self {
        Self {
            unit: Some(unit),
            ..self
        }
    }

    #[must_use]
    pub const fn title(self, fr: &'static str, en: &'static str) -> Self {
        Self {
            title: LocalizedText::new(fr, en),
            ..self
        }
    }

    #[must_use]
    pub const fn axis_label(self, fr: &'static str, en: &'static str) -> Self {
        Self {
            axis_label: LocalizedText::new(fr, en),
            ..self
        }
    }

    /// Makes multiples of 5 more likely when drawing values.
    ///
    /// Used for quantities people naturally round (minutes, euros).
    #[must_use]
    pub const fn prefer_round_numbers(self) -> Self {
        Self {
            prefers_round_numbers: true,
            ..self
        }
    }

    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.id
    }

    #[must_use]
    pub const fn min(&self) -> u32 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }

    #[must_use]
    pub const fn range(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }

    #[must_use]
    pub const fn unit_symbol(&self) -> Option<&'static str> {
        self.unit
    }

    #[must_use]
    pub const fn title_in(&self, language: Language) -> &'static str {
        self.title.get(language)
    }

    #[must_use]
    pub const fn axis_label_in(&self, language: Language) -> &'static str {
        self.axis_label.get(language)
    }

    #[must_use]
    pub const fn prefers_round_numbers(&self) -> bool {
        self.prefers_round_numbers
    }

    /// Number of distinct integers in the attribute's range.
    #[must_use]
    pub fn value_count(&self) -> usize {
        let count = u64::from(self.max) - u64::from(self.min) + 1;
        usize::try_from(count).unwrap_or(usize::MAX)
    }

    /// Draws one value uniformly from the range.
    ///
    /// For attributes that prefer round numbers, the value is snapped to the
    /// nearest multiple of 5 with probability 1/2, as long as that multiple is
    /// still in range.
    pub fn draw_value<R>(&self, rng: &mut R) -> u32
    where
        R: Rng + ?Sized,
    {
        let value = rng.random_range(self.range());
        if self.prefers_round_numbers && rng.random_bool(ROUND_NUMBER_PROBABILITY) {
            let snapped = value.saturating_add(2) / 5 * 5;
            if self.range().contains(&snapped) {
                return snapped;
            }
        }
        value
    }
}

/// Every attribute an exercise can be generated from.
pub const ATTRIBUTES: &[Attribute] = &[
    Attribute::new("siblings", 0, 5)
        .title("Nombre de frères et sœurs", "Number of siblings")
        .axis_label("Nombre de frères et sœurs", "Number of siblings"),
    Attribute::new("pets", 0, 4)
        .title("Nombre d'animaux de compagnie", "Number of pets")
        .axis_label("Nombre d'animaux", "Number of pets"),
    Attribute::new("books_read", 0, 8)
        .title("Livres lus le mois dernier", "Books read last month")
        .axis_label("Nombre de livres", "Number of books"),
    Attribute::new("sleep_hours", 6, 11)
        .unit("h")
        .title("Heures de sommeil par nuit", "Hours of sleep per night")
        .axis_label("Durée de sommeil (h)", "Sleep duration (h)"),
    Attribute::new("commute_time", 5, 45)
        .unit("min")
        .title("Temps de trajet jusqu'au collège", "Travel time to school")
        .axis_label("Temps de trajet (min)", "Travel time (min)")
        .prefer_round_numbers(),
    Attribute::new("pocket_money", 0, 30)
        .unit("€")
        .title("Argent de poche par semaine", "Weekly pocket money")
        .axis_label("Argent de poche (€)", "Pocket money (€)")
        .prefer_round_numbers(),
    Attribute::new("shoe_size", 34, 44)
        .title("Pointure", "Shoe size")
        .axis_label("Pointure", "Shoe size"),
    Attribute::new("math_grade", 4, 20)
        .title("Note au contrôle de mathématiques (sur 20)", "Math test grade (out of 20)")
        .axis_label("Note sur 20", "Grade out of 20"),
    Attribute::new("screen_time", 1, 8)
        .unit("h")
        .title("Temps d'écran par jour", "Daily screen time")
        .axis_label("Temps d'écran (h)", "Screen time (h)"),
    Attribute::new("sport_hours", 0, 10)
        .unit("h")
        .title("Heures de sport par semaine", "Hours of sport per week")
        .axis_label("Sport (h)", "Sport (h)"),
    Attribute::new("text_messages", 0, 40)
        .title("Messages envoyés par jour", "Text messages sent per day")
        .axis_label("Nombre de messages", "Number of messages"),
    Attribute::new("height", 140, 175)
        .unit("cm")
        .title("Taille des élèves", "Height of the students")
        .axis_label("Taille (cm)", "Height (cm)"),
    Attribute::new("goals_scored", 0, 6)
        .title("Buts marqués par match", "Goals scored per match")
        .axis_label("Nombre de buts", "Number of goals"),
    Attribute::new("dice_roll", 1, 6)
        .title("Résultat d'un lancer de dé", "Result of a die roll")
        .axis_label("Face obtenue", "Face rolled"),
    Attribute::new("household_size", 2, 8)
        .title("Nombre de personnes dans le foyer", "Number of people in the household")
        .axis_label("Personnes par foyer", "People per household"),
    Attribute::new("cinema_visits", 0, 6)
        .title("Séances de cinéma ce trimestre", "Cinema visits this term")
        .axis_label("Nombre de séances", "Number of visits"),
    Attribute::new("distance_to_school", 1, 15)
        .unit("km")
        .title("Distance entre la maison et le collège", "Distance from home to school")
        .axis_label("Distance (km)", "Distance (km)"),
    Attribute::new("backpack_weight", 3, 12)
        .unit("kg")
        .title("Masse du cartable", "Backpack weight")
        .axis_label("Masse (kg)", "Weight (kg)"),
    Attribute::new("fruit_portions", 0, 5)
        .title("Portions de fruits par jour", "Portions of fruit per day")
        .axis_label("Nombre de portions", "Number of portions"),
    Attribute::new("max_temperature", 12, 30)
        .unit("°C")
        .title("Température maximale de la journée", "Highest temperature of the day")
        .axis_label("Température (°C)", "Temperature (°C)"),
    Attribute::new("dictation_mistakes", 0, 10)
        .title("Fautes à la dictée", "Mistakes in the dictation")
        .axis_label("Nombre de fautes", "Number of mistakes"),
    Attribute::new("homework_hours", 1, 12)
        .unit("h")
        .title("Heures de devoirs par semaine", "Hours of homework per week")
        .axis_label("Devoirs (h)", "Homework (h)"),
];

/// Looks up an attribute by identifier.
///
/// ```
/// use statmaster_engine::find_attribute;
///
/// assert_eq!(find_attribute("pocket_money").unwrap().unit_symbol(), Some("€"));
/// assert!(find_attribute("unknown").is_none());
/// ```
#[must_use]
pub fn find_attribute(id: &str) -> Option<&'static Attribute> {
    ATTRIBUTES.iter().find(|attribute| attribute.id == id)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_catalog_size() {
        assert_eq!(ATTRIBUTES.len(), 22);
    }

    #[test]
    fn test_catalog_ranges_and_ids() {
        let mut ids = HashSet::new();
        for attribute in ATTRIBUTES {
            assert!(attribute.min() <= attribute.max(), "{}", attribute.id());
            assert!(ids.insert(attribute.id()), "duplicate id {}", attribute.id());
            for lang in Language::ALL {
                assert!(!attribute.title_in(lang).is_empty());
                assert!(!attribute.axis_label_in(lang).is_empty());
            }
        }
    }

    #[test]
    fn test_round_number_attributes() {
        let ids = ATTRIBUTES
            .iter()
            .filter(|a| a.prefers_round_numbers())
            .map(Attribute::id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["commute_time", "pocket_money"]);
    }

    #[test]
    fn test_draw_value_stays_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for attribute in ATTRIBUTES {
            for _ in 0..200 {
                let value = attribute.draw_value(&mut rng);
                assert!(attribute.range().contains(&value), "{}", attribute.id());
            }
        }
    }

    #[test]
    fn test_round_numbers_are_favoured() {
        let mut rng = Pcg32::seed_from_u64(11);
        let attribute = find_attribute("commute_time").unwrap();
        let draws = 2000;
        let multiples = (0..draws)
            .filter(|_| attribute.draw_value(&mut rng) % 5 == 0)
            .count();
        // uniform draws alone would give about 9/41 (22%)
        assert!(multiples > draws / 2, "{multiples} multiples of 5");
    }

    #[test]
    fn test_snapping_never_leaves_the_range() {
        let attribute = Attribute::new("narrow", 6, 7).prefer_round_numbers();
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..200 {
            let value = attribute.draw_value(&mut rng);
            assert!((6..=7).contains(&value));
        }
    }

    #[test]
    fn test_value_count() {
        assert_eq!(Attribute::new("single", 3, 3).value_count(), 1);
        assert_eq!(Attribute::new("digits", 0, 9).value_count(), 10);
    }
}
