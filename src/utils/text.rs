// Text utils

use icu::segmenter::WordSegmenter;
use serde::Deserialize;
use std::collections::HashSet;

use crate::error::{PipelineError, Result};

// Spanish stopwords (NLTK corpus)
pub const SPANISH_STOP_WORDS: &[&str] = &[
    "de", "la", "que", "el", "en", "y", "a", "los", "del", "se", "las", "por", "un", "para", "con",
    "no", "una", "su", "al", "lo", "como", "más", "pero", "sus", "le", "ya", "o", "este", "sí",
    "porque", "esta", "entre", "cuando", "muy", "sin", "sobre", "también", "me", "hasta", "hay",
    "donde", "quien", "desde", "todo", "nos", "durante", "todos", "uno", "les", "ni", "contra",
    "otros", "ese", "eso", "ante", "ellos", "e", "esto", "mí", "antes", "algunos", "qué", "unos",
    "yo", "otro", "otras", "otra", "él", "tanto", "esa", "estos", "mucho", "quienes", "nada",
    "muchos", "cual", "poco", "ella", "estar", "estas", "algunas", "algo", "nosotros", "mi", "mis",
    "tú", "te", "ti", "tu", "tus", "ellas", "nosotras", "vosotros", "vosotras", "os", "mío", "mía",
    "míos", "mías", "tuyo", "tuya", "tuyos", "tuyas", "suyo", "suya", "suyos", "suyas", "nuestro",
    "nuestra", "nuestros", "nuestras", "vuestro", "vuestra", "vuestros", "vuestras", "esos", "esas",
    "estoy", "estás", "está", "estamos", "estáis", "están", "esté", "estés", "estemos", "estéis",
    "estén", "estaré", "estarás", "estará", "estaremos", "estaréis", "estarán", "estaría",
    "estarías", "estaríamos", "estaríais", "estarían", "estaba", "estabas", "estábamos",
    "estabais", "estaban", "estuve", "estuviste", "estuvo", "estuvimos", "estuvisteis",
    "estuvieron", "estuviera", "estuvieras", "estuviéramos", "estuvierais", "estuvieran",
    "estuviese", "estuvieses", "estuviésemos", "estuvieseis", "estuviesen", "estando", "estado",
    "estada", "estados", "estadas", "estad", "he", "has", "ha", "hemos", "habéis", "han", "haya",
    "hayas", "hayamos", "hayáis", "hayan", "habré", "habrás", "habrá", "habremos", "habréis",
    "habrán", "habría", "habrías", "habríamos", "habríais", "habrían", "había", "habías",
    "habíamos", "habíais", "habían", "hube", "hubiste", "hubo", "hubimos", "hubisteis", "hubieron",
    "hubiera", "hubieras", "hubiéramos", "hubierais", "hubieran", "hubiese", "hubieses",
    "hubiésemos", "hubieseis", "hubiesen", "habiendo", "habido", "habida", "habidos", "habidas",
    "soy", "eres", "es", "somos", "sois", "son", "sea", "seas", "seamos", "seáis", "sean", "seré",
    "serás", "será", "seremos", "seréis", "serán", "sería", "serías", "seríamos", "seríais",
    "serían", "era", "eras", "éramos", "erais", "eran", "fui", "fuiste", "fue", "fuimos",
    "fuisteis", "fueron", "fuera", "fueras", "fuéramos", "fuerais", "fueran", "fuese", "fueses",
    "fuésemos", "fueseis", "fuesen", "sintiendo", "sentido", "sentida", "sentidos", "sentidas",
    "siente", "sentid", "tengo", "tienes", "tiene", "tenemos", "tenéis", "tienen", "tenga",
    "tengas", "tengamos", "tengáis", "tengan", "tendré", "tendrás", "tendrá", "tendremos",
    "tendréis", "tendrán", "tendría", "tendrías", "tendríamos", "tendríais", "tendrían", "tenía",
    "tenías", "teníamos", "teníais", "tenían", "tuve", "tuviste", "tuvo", "tuvimos", "tuvisteis",
    "tuvieron", "tuviera", "tuvieras", "tuviéramos", "tuvierais", "tuvieran", "tuviese",
    "tuvieses", "tuviésemos", "tuvieseis", "tuviesen", "teniendo", "tenido", "tenida", "tenidos",
    "tenidas", "tened",
];

// English stopwords (NLTK corpus)
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// Languages with a bundled stop-word list.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StopWordLanguage {
    #[default]
    Spanish,
    English,
}

impl StopWordLanguage {
    pub fn words(&self) -> &'static [&'static str] {
        match self {
            StopWordLanguage::Spanish => SPANISH_STOP_WORDS,
            StopWordLanguage::English => ENGLISH_STOP_WORDS,
        }
    }
}

/// A lower-cased stop-word set, built once per run and handed to the token counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn for_language(language: StopWordLanguage) -> Self {
        Self::from_words(language.words().iter().copied())
    }

    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        StopWords {
            words: words.into_iter().map(str::to_lowercase).collect(),
        }
    }

    pub fn with_extra<'a>(mut self, extra: impl IntoIterator<Item = &'a str>) -> Self {
        self.words.extend(extra.into_iter().map(str::to_lowercase));
        self
    }

    /// Expects an already lower-cased token.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Splits text into word-like units using ICU word boundaries.
///
/// Every non-whitespace segment between two boundaries is returned, so
/// punctuation and numbers come back as their own tokens (`"corre!"` yields
/// `"corre"` and `"!"`). Hyphenated compounds stay whole (`"franco-alemán"`),
/// and a leading `¡` or `¿` stays attached to the word it opens (`"¡Gol"`).
pub fn split_into_words(text: &str) -> Result<Vec<&str>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    let segmenter = WordSegmenter::new_auto();
    let mut spans = Vec::new();
    let mut prev_break = 0;

    for current_break in segmenter.segment_str(text) {
        if current_break <= prev_break {
            continue;
        }
        let segment = text.get(prev_break..current_break).ok_or_else(|| {
            PipelineError::TokenizationError(format!(
                "word boundary {}..{} is not on a character boundary",
                prev_break, current_break
            ))
        })?;
        push_trimmed_span(&mut spans, segment, prev_break);
        prev_break = current_break;
    }

    if prev_break < text.len() {
        push_trimmed_span(&mut spans, &text[prev_break..], prev_break);
    }
    Ok(join_spans(text, &spans))
}

/// Records the byte range of `segment` without surrounding whitespace.
fn push_trimmed_span(spans: &mut Vec<(usize, usize)>, segment: &str, offset: usize) {
    let trimmed = segment.trim();
    if trimmed.is_empty() {
        return;
    }
    let start = offset + segment.len() - segment.trim_start().len();
    spans.push((start, start + trimmed.len()));
}

fn is_opening_mark(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c == '¡' || c == '¿')
}

/// Merges segments that touch with no whitespace between them: a `-` with a
/// word on each side, and opening `¡`/`¿` marks with the word that follows.
fn join_spans<'a>(text: &'a str, spans: &[(usize, usize)]) -> Vec<&'a str> {
    let mut joined: Vec<(usize, usize)> = Vec::with_capacity(spans.len());
    let mut i = 0;
    while i < spans.len() {
        let (start, end) = spans[i];

        if &text[start..end] == "-" {
            let compound_end = match (joined.last(), spans.get(i + 1)) {
                (Some(&(_, last_end)), Some(&(next_start, next_end)))
                    if last_end == start && next_start == end =>
                {
                    Some(next_end)
                }
                _ => None,
            };
            if let (Some(next_end), Some(last)) = (compound_end, joined.last_mut()) {
                last.1 = next_end;
                i += 2;
                continue;
            }
        }

        let after_mark = joined
            .last()
            .is_some_and(|&(last_start, last_end)| {
                last_end == start && is_opening_mark(&text[last_start..last_end])
            });
        match joined.last_mut() {
            Some(last) if after_mark => last.1 = end,
            _ => joined.push((start, end)),
        }
        i += 1;
    }
    joined.into_iter().map(|(start, end)| &text[start..end]).collect()
}

/// True for non-empty tokens made only of alphabetic characters.
pub fn is_alphabetic_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

/// Counts the tokens of `text` that are alphabetic and, once lower-cased,
/// not stop words.
pub fn count_content_tokens(text: &str, stop_words: &StopWords) -> Result<usize> {
    let count = split_into_words(text)?
        .into_iter()
        .filter(|token| is_alphabetic_token(token))
        .map(str::to_lowercase)
        .filter(|token| !stop_words.contains(token))
        .count();
    Ok(count)
}
