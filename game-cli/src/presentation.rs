use game_core::MIN_WORD_LENGTH;
use game_types::Rejection;

/// Title and body shown to the player when a word is turned down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectionMessage {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    English,
    Spanish,
}

impl Locale {
    /// Pick display text to match a dictionary language tag such as `es_ES`
    pub fn from_language(language: &str) -> Self {
        let primary = language
            .split(['_', '-'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "es" => Locale::Spanish,
            _ => Locale::English,
        }
    }

    pub fn rejection_message(
        &self,
        rejection: Rejection,
        word: &str,
        root_word: &str,
    ) -> RejectionMessage {
        let (title, message) = match (self, rejection) {
            (Locale::English, Rejection::TooShort) => (
                format!("'{word}' is too short"),
                format!("Words must be at least {MIN_WORD_LENGTH} letters long"),
            ),
            (Locale::English, Rejection::IsRootWord) => (
                "Nice try".to_string(),
                "You can't use the starting word as an answer".to_string(),
            ),
            (Locale::English, Rejection::AlreadyUsed) => (
                format!("You already used '{word}'"),
                "Words can't be repeated".to_string(),
            ),
            (Locale::English, Rejection::NotConstructible) => (
                format!("'{word}' can't be made from '{root_word}'"),
                "Use only letters from the starting word, each as often as it appears there"
                    .to_string(),
            ),
            (Locale::English, Rejection::NotInDictionary) => (
                format!("'{word}' isn't a word"),
                "Only words in the dictionary count".to_string(),
            ),
            (Locale::Spanish, Rejection::TooShort) => (
                format!("La palabra '{word}' es muy corta"),
                format!("Las palabras deben tener al menos {MIN_WORD_LENGTH} letras"),
            ),
            (Locale::Spanish, Rejection::IsRootWord) => (
                "Ehm.. no!".to_string(),
                "No puedes utilizar la palabra proporcionada como respuesta".to_string(),
            ),
            (Locale::Spanish, Rejection::AlreadyUsed) => (
                format!("Ya escribiste la palabra '{word}'"),
                "No puedes repetir palabras".to_string(),
            ),
            (Locale::Spanish, Rejection::NotConstructible) => (
                format!("La palabra '{word}' no está contenida en {root_word}"),
                "Solo los caracteres con la misma acentuación son válidos o alguna letra no existe en la palabra"
                    .to_string(),
            ),
            (Locale::Spanish, Rejection::NotInDictionary) => (
                format!("La palabra '{word}' no existe"),
                "Solo son válidas las palabras incluidas en el diccionario".to_string(),
            ),
        };

        RejectionMessage { title, message }
    }

    pub fn root_word_line(&self, root_word: &str) -> String {
        match self {
            Locale::English => format!("Your word: {root_word}"),
            Locale::Spanish => format!("Tu palabra: {root_word}"),
        }
    }

    pub fn score_line(&self, score: u32) -> String {
        match self {
            Locale::English => format!("Score {score}"),
            Locale::Spanish => format!("Puntos {score}"),
        }
    }

    pub fn no_words_line(&self) -> &'static str {
        match self {
            Locale::English => "No words yet",
            Locale::Spanish => "Todavía no hay palabras",
        }
    }

    pub fn help_text(&self) -> &'static str {
        match self {
            Locale::English => {
                "Type a word made from the letters above and press enter.\n\
                 :new    start a new game\n\
                 :words  list your words\n\
                 :score  show your score\n\
                 :help   show this help\n\
                 :quit   leave the game"
            }
            Locale::Spanish => {
                "Escribe una palabra con las letras de arriba y pulsa enter.\n\
                 :new    nueva partida\n\
                 :words  ver tus palabras\n\
                 :score  ver tu puntuación\n\
                 :help   ver esta ayuda\n\
                 :quit   salir"
            }
        }
    }
}
