//! Rule-based English noun lemmatizer.
//!
//! [`Lemmatizer`] reduces plural noun forms to their dictionary base form
//! (`"jumps"` → `"jump"`, `"cities"` → `"city"`, `"children"` → `"child"`).
//! It works in three stages:
//!
//! 1. Irregular plurals are looked up in a fixed table.
//! 2. Words that merely *look* plural (`"news"`, `"always"`, `"bus"`) are
//!    returned unchanged.
//! 3. Suffix detachment rules are tried in order; the first one that applies
//!    wins.
//!
//! Verb and adjective inflections (`"-ing"`, `"-ed"`, `"-er"`) are left
//! untouched, matching noun-only lemmatization.  The reducer is pure and
//! deterministic.

// ---------------------------------------------------------------------------
// Static tables
// ---------------------------------------------------------------------------

static IRREGULAR: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("people", "person"),
    ("mice", "mouse"),
    ("lice", "louse"),
    ("geese", "goose"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("oxen", "ox"),
    ("knives", "knife"),
    ("wives", "wife"),
    ("lives", "life"),
    ("leaves", "leaf"),
    ("wolves", "wolf"),
    ("halves", "half"),
    ("shelves", "shelf"),
    ("loaves", "loaf"),
    ("thieves", "thief"),
    ("calves", "calf"),
    ("selves", "self"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("vertices", "vertex"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("theses", "thesis"),
    ("diagnoses", "diagnosis"),
    ("phenomena", "phenomenon"),
    ("criteria", "criterion"),
    ("cacti", "cactus"),
    ("fungi", "fungus"),
    ("buses", "bus"),
    ("quizzes", "quiz"),
    ("movies", "movie"),
    ("cookies", "cookie"),
    ("calories", "calorie"),
    ("zombies", "zombie"),
    ("rookies", "rookie"),
    ("ties", "tie"),
    ("lies", "lie"),
    ("pies", "pie"),
    ("aches", "ache"),
    ("headaches", "headache"),
    ("caches", "cache"),
    ("niches", "niche"),
    ("potatoes", "potato"),
    ("tomatoes", "tomato"),
    ("heroes", "hero"),
    ("echoes", "echo"),
    ("vetoes", "veto"),
    ("torpedoes", "torpedo"),
    ("volcanoes", "volcano"),
    ("mosquitoes", "mosquito"),
    ("buffaloes", "buffalo"),
    ("dominoes", "domino"),
];

/// Words ending in `s` that are already base forms.
static INVARIANT: &[&str] = &[
    "always", "perhaps", "sometimes", "whereas", "towards", "afterwards", "besides", "news",
    "series", "species", "means", "physics", "mathematics", "economics", "politics", "ethics",
    "lens", "gas", "chaos", "canvas", "atlas", "alias", "bias", "iris", "christmas", "yes",
    "specimen", "abdomen", "acumen", "regimen", "omen", "amen", "stamen", "ramen", "semen",
];

/// Suffix detachment rules, tried in order: `(suffix, replacement)`.
static SUFFIX_RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("ies", "y"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("xes", "x"),
    ("zzes", "zz"),
    ("men", "man"),
    ("s", ""),
];

/// Endings that block the bare `"s"` rule (`"glass"`, `"virus"`, `"basis"`).
static KEEP_ENDINGS: &[&str] = &["ss", "us", "is"];

/// Shortest base form a rule may produce.
const MIN_BASE_LEN: usize = 3;

// ---------------------------------------------------------------------------
// Lemmatizer
// ---------------------------------------------------------------------------

/// Deterministic noun lemmatizer for lowercase, alphabetic tokens.
///
/// # Example
/// ```rust
/// use polyglot_assistant::nlp::Lemmatizer;
///
/// let lemmatizer = Lemmatizer::new();
/// assert_eq!(lemmatizer.lemmatize("jumps"), "jump");
/// assert_eq!(lemmatizer.lemmatize("dog"), "dog");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Lemmatizer;

impl Lemmatizer {
    pub fn new() -> Self {
        Self
    }

    /// Reduce `word` to its base form.  Input is expected to be lowercase.
    pub fn lemmatize(&self, word: &str) -> String {
        if let Some((_, base)) = IRREGULAR.iter().find(|(plural, _)| *plural == word) {
            return (*base).to_string();
        }
        if INVARIANT.contains(&word) {
            return word.to_string();
        }

        for (suffix, replacement) in SUFFIX_RULES {
            let Some(stem) = word.strip_suffix(suffix) else {
                continue;
            };
            if suffix.len() == 1 && KEEP_ENDINGS.iter().any(|e| word.ends_with(e)) {
                break;
            }
            let base = format!("{stem}{replacement}");
            if base.chars().count() < MIN_BASE_LEN {
                // Too short to be a real plural ("ups", "ids").
                break;
            }
            return base;
        }

        word.to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn lem(word: &str) -> String {
        Lemmatizer::new().lemmatize(word)
    }

    #[test]
    fn regular_plurals() {
        assert_eq!(lem("jumps"), "jump");
        assert_eq!(lem("dogs"), "dog");
        assert_eq!(lem("houses"), "house");
        assert_eq!(lem("days"), "day");
    }

    #[test]
    fn sibilant_plurals() {
        assert_eq!(lem("classes"), "class");
        assert_eq!(lem("boxes"), "box");
        assert_eq!(lem("watches"), "watch");
        assert_eq!(lem("wishes"), "wish");
    }

    #[test]
    fn ies_becomes_y() {
        assert_eq!(lem("cities"), "city");
        assert_eq!(lem("flies"), "fly");
    }

    #[test]
    fn irregular_plurals() {
        assert_eq!(lem("children"), "child");
        assert_eq!(lem("mice"), "mouse");
        assert_eq!(lem("wolves"), "wolf");
        assert_eq!(lem("movies"), "movie");
    }

    #[test]
    fn doubled_z_plurals() {
        assert_eq!(lem("buzzes"), "buzz");
        assert_eq!(lem("fizzes"), "fizz");
        assert_eq!(lem("sizes"), "size");
        assert_eq!(lem("prizes"), "prize");
    }

    #[test]
    fn oes_plurals() {
        assert_eq!(lem("potatoes"), "potato");
        assert_eq!(lem("heroes"), "hero");
        assert_eq!(lem("shoes"), "shoe");
        assert_eq!(lem("toes"), "toe");
    }

    #[test]
    fn compound_men() {
        assert_eq!(lem("firemen"), "fireman");
        assert_eq!(lem("specimen"), "specimen");
        assert_eq!(lem("ramen"), "ramen");
        assert_eq!(lem("semen"), "semen");
    }

    #[test]
    fn base_forms_are_untouched() {
        for w in ["quick", "brown", "fox", "lazy", "dog", "time", "date", "weather", "hello"] {
            assert_eq!(lem(w), w);
        }
    }

    #[test]
    fn words_that_only_look_plural() {
        for w in ["glass", "virus", "basis", "bus", "gas", "news", "always", "yes", "ups"] {
            assert_eq!(lem(w), w);
        }
    }

    #[test]
    fn verb_inflections_are_left_alone() {
        assert_eq!(lem("jumping"), "jumping");
        assert_eq!(lem("jumped"), "jumped");
    }
}
