/// Instruction preamble sent ahead of every word. The word is appended
/// directly after the trailing `**Word:** ` marker.
pub const FLASHCARD_INSTRUCTIONS: &str = r#"You are an AI designed to generate flashcards for learning Japanese. 

**Instructions:**
Generate a flashcard in **structured JSON format only** based on the given Japanese word. The flashcard should include:
- The **word** in Kanji (if available).
- The **pronunciation** in Hiragana/Katakana and no english characters.
- The **meaning** in English.
- An **example sentence** in Japanese.
- The **English translation** of the example sentence.

Here is an example of the expected output:

{
  "front": {
    "word": "勉強",
    "pronunciation": "べんきょう"
  },
  "back": {
    "meaning": "Study, Learning",
    "example_sentence": {
      "japanese": "毎日、日本語を勉強しています。",
      "english": "I study Japanese every day."
    }
  }
}

Now, generate a flashcard for the following word:
**Word:** "#;

/// Builds the generation prompt for a single word. The word is not validated.
pub fn build_prompt(word: &str) -> String {
    format!("{FLASHCARD_INSTRUCTIONS}{word}")
}
