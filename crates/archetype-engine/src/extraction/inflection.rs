//! Naive inflection stripping.
//!
//! Maps `"searches"` to `"search"` and `"decided"` to `"decide"` without a
//! stemmer: every plausible base form is generated and the first one that is
//! a lexicon term wins. Words that only occur inside phrases are the second
//! choice.

use smallvec::SmallVec;

use archetype_lexicon::Lexicon;

/// Candidate base forms of `token`, most conservative first. The token
/// itself is always the first candidate.
pub fn candidates(token: &str) -> SmallVec<[String; 8]> {
    let mut out: SmallVec<[String; 8]> = SmallVec::new();
    out.push(token.to_string());

    if let Some(stem) = token.strip_suffix("ies").filter(|s| s.len() >= 2) {
        out.push(format!("{stem}y"));
    }
    if let Some(stem) = token.strip_suffix("es").filter(|s| s.len() >= 3) {
        out.push(stem.to_string());
    }
    if !token.ends_with("ss") {
        if let Some(stem) = token.strip_suffix('s').filter(|s| s.len() >= 3) {
            out.push(stem.to_string());
        }
    }
    if let Some(stem) = token.strip_suffix("ing").filter(|s| s.len() >= 3) {
        out.push(stem.to_string());
        out.push(format!("{stem}e"));
        out.extend(undouble(stem));
    }
    if let Some(stem) = token.strip_suffix("ed").filter(|s| s.len() >= 3) {
        out.push(format!("{stem}e"));
        out.push(stem.to_string());
        out.extend(undouble(stem));
    }
    out
}

/// `"plann"` -> `"plan"`: drops a doubled final consonant.
fn undouble(stem: &str) -> Option<String> {
    let mut rev = stem.chars().rev();
    let (last, prev) = (rev.next()?, rev.next()?);
    if last == prev && last.is_ascii_alphabetic() && !"aeiou".contains(last) {
        Some(stem[..stem.len() - last.len_utf8()].to_string())
    } else {
        None
    }
}

/// The canonical form of `token` under `lexicon`: the first candidate that
/// is itself a term, else the first that appears inside some phrase, else
/// the token unchanged.
pub fn canonicalize(token: &str, lexicon: &Lexicon) -> String {
    let forms = candidates(token);
    forms
        .iter()
        .find(|c| lexicon.term_id(c).is_some())
        .or_else(|| forms.iter().find(|c| lexicon.is_known_word(c)))
        .cloned()
        .unwrap_or_else(|| token.to_string())
}
