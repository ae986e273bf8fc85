/// Sentinel stored on a card when no search result could be found. Rendered
/// as a built-in "no image" tile, never fetched.
pub const PLACEHOLDER_IMAGE: &str = "flashdeck://image-not-found";

/// One flashcard: a word paired with a display image. `image` is either a URL
/// returned by the search collaborator or [`PLACEHOLDER_IMAGE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: usize,
    pub word: String,
    pub image: String,
}

impl Card {
    pub fn new(id: usize, word: String, image: Option<String>) -> Self {
        Self { id, word, image: image.unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()) }
    }

    pub fn has_image(&self) -> bool {
        self.image != PLACEHOLDER_IMAGE
    }
}

/// The current card set. The whole set is replaced on submit; per-card
/// updates carry the generation they were issued against so a refresh that
/// resolves after a newer submit is dropped instead of landing on the wrong
/// deck.
#[derive(Debug, Default)]
pub struct Deck {
    cards: Vec<Card>,
    generation: u64,
}

impl Deck {
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Replaces the entire set, in the order given.
    pub fn replace(&mut self, cards: Vec<Card>) {
        self.cards = cards;
        self.generation += 1;
    }

    /// Applies a resolved image to a single card. Returns false (and leaves
    /// the deck untouched) when the update is stale or out of bounds.
    pub fn set_image(&mut self, generation: u64, index: usize, image: String) -> bool {
        if generation != self.generation {
            return false;
        }

        match self.cards.get_mut(index) {
            Some(card) => {
                card.image = image;
                true
            }
            None => false,
        }
    }

    /// Sets a user-provided image URL on one card, bypassing search. The URL
    /// must already have passed [`validate_manual_url`].
    pub fn set_manual_image(&mut self, index: usize, url: String) -> bool {
        self.set_image(self.generation, index, url)
    }
}

/// Splits raw input into the word list: trim, drop one trailing comma, split
/// on `,`, trim each token. Empty tokens from consecutive commas are kept
/// as-is (matches the observed behavior; the resulting card just gets a
/// placeholder image).
pub fn parse_word_list(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_suffix(',').unwrap_or(trimmed);

    trimmed.split(',').map(|word| word.trim().to_string()).collect()
}

/// Submit guard: the input must reduce to something other than nothing or a
/// bare comma.
pub fn can_submit(raw: &str) -> bool {
    let trimmed = raw.trim();
    !trimmed.is_empty() && trimmed != ","
}

/// Manual link entry accepts a URL that is non-empty after trimming and
/// carries a secure scheme.
pub fn validate_manual_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if !trimmed.is_empty() && trimmed.contains("https") {
        Some(trimmed.to_string())
    } else {
        None
    }
}

/// Search bias appended to every query. Plain refresh and submit use clipart,
/// the themed refresh swaps in the kids' favorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTheme {
    Clipart,
    PawPatrol,
}

impl SearchTheme {
    pub fn query_for(&self, word: &str) -> String {
        match self {
            SearchTheme::Clipart => format!("{} clipart", word),
            SearchTheme::PawPatrol => format!("{} pawpatrol", word),
        }
    }
}

/// Raw RGBA pixels decoded on a worker thread, turned into a texture on the
/// GUI thread.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_words_in_order_with_trimming() {
        assert_eq!(parse_word_list("cat, dog ,"), vec!["cat", "dog"]);
        assert_eq!(parse_word_list("  apple ,banana, cherry"), vec!["apple", "banana", "cherry"]);
        assert_eq!(parse_word_list("solo"), vec!["solo"]);
    }

    #[test]
    fn keeps_empty_tokens_from_consecutive_commas() {
        // Observed behavior: "cat,,dog" yields an empty middle word.
        assert_eq!(parse_word_list("cat,,dog"), vec!["cat", "", "dog"]);
    }

    #[test]
    fn strips_only_one_trailing_comma() {
        assert_eq!(parse_word_list("cat,,"), vec!["cat", ""]);
    }

    #[test]
    fn submit_guard_rejects_degenerate_input() {
        assert!(!can_submit(""));
        assert!(!can_submit("   "));
        assert!(!can_submit(","));
        assert!(!can_submit("  ,  "));
        assert!(can_submit("cat"));
        assert!(can_submit("cat,"));
    }

    #[test]
    fn manual_url_requires_secure_scheme() {
        assert_eq!(validate_manual_url("http://insecure.example/img.png"), None);
        assert_eq!(validate_manual_url(""), None);
        assert_eq!(validate_manual_url("   "), None);
        assert_eq!(
            validate_manual_url("https://example.com/img.png"),
            Some("https://example.com/img.png".to_string())
        );
        assert_eq!(
            validate_manual_url("  https://example.com/img.png  "),
            Some("https://example.com/img.png".to_string())
        );
    }

    #[test]
    fn card_without_result_gets_placeholder() {
        let card = Card::new(0, "cat".to_string(), None);
        assert_eq!(card.image, PLACEHOLDER_IMAGE);
        assert!(!card.has_image());

        let card = Card::new(1, "dog".to_string(), Some("https://a/b.png".to_string()));
        assert!(card.has_image());
    }

    #[test]
    fn replace_swaps_whole_set_and_bumps_generation() {
        let mut deck = Deck::default();
        assert!(deck.is_empty());

        deck.replace(vec![Card::new(0, "cat".to_string(), None)]);
        let first_gen = deck.generation();

        deck.replace(vec![
            Card::new(0, "sun".to_string(), None),
            Card::new(1, "moon".to_string(), None),
        ]);
        assert_eq!(deck.cards().len(), 2);
        assert_eq!(deck.cards()[0].word, "sun");
        assert_eq!(deck.cards()[1].word, "moon");
        assert!(deck.generation() > first_gen);
    }

    #[test]
    fn set_image_touches_only_the_addressed_card() {
        let mut deck = Deck::default();
        deck.replace(vec![
            Card::new(0, "cat".to_string(), Some("https://a/cat.png".to_string())),
            Card::new(1, "dog".to_string(), Some("https://a/dog.png".to_string())),
        ]);

        let before = deck.cards()[0].clone();
        assert!(deck.set_image(deck.generation(), 1, "https://a/dog2.png".to_string()));

        assert_eq!(deck.cards()[0], before);
        assert_eq!(deck.cards()[1].image, "https://a/dog2.png");
    }

    #[test]
    fn stale_generation_update_is_dropped() {
        let mut deck = Deck::default();
        deck.replace(vec![Card::new(0, "cat".to_string(), None)]);
        let old_gen = deck.generation();

        deck.replace(vec![Card::new(0, "dog".to_string(), None)]);
        assert!(!deck.set_image(old_gen, 0, "https://a/cat.png".to_string()));
        assert_eq!(deck.cards()[0].image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn manual_image_overrides_the_current_card() {
        let mut deck = Deck::default();
        deck.replace(vec![Card::new(0, "cat".to_string(), None)]);

        let url = validate_manual_url("https://example.com/img.png").unwrap();
        assert!(deck.set_manual_image(0, url));
        assert_eq!(deck.cards()[0].image, "https://example.com/img.png");
    }

    #[test]
    fn out_of_bounds_update_is_dropped() {
        let mut deck = Deck::default();
        deck.replace(vec![Card::new(0, "cat".to_string(), None)]);
        assert!(!deck.set_image(deck.generation(), 5, "https://a/x.png".to_string()));
    }

    #[test]
    fn themed_queries_bias_the_search() {
        assert_eq!(SearchTheme::Clipart.query_for("cat"), "cat clipart");
        assert_eq!(SearchTheme::PawPatrol.query_for("cat"), "cat pawpatrol");
    }
}
