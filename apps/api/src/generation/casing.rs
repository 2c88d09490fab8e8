/// Word-initial capitalisation used for idea titles.
///
/// A cased character is uppercased when it starts the string or follows an
/// uncased character (space, digit, punctuation), and lowercased otherwise.
/// Apostrophes therefore start a new word: "beginner's" → "Beginner'S".
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_cased = false;

    for ch in text.chars() {
        let cased = ch.is_uppercase() || ch.is_lowercase();
        if cased && previous_cased {
            out.extend(ch.to_lowercase());
        } else if cased {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        previous_cased = cased;
    }

    out
}
