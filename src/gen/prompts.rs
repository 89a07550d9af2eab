/// Fixed teaching instruction sent with every generation request. The example
/// policy matters: caller-provided phrases must come back verbatim, bare
/// words get exactly two invented sentences.
pub const SYSTEM_INSTRUCTION: &str = "\
You are a Chinese language teacher building vocabulary flashcards. \
For every word produce the simplified form, the traditional form, the pinyin \
with tone marks, and a concise English definition. \
If an input line pairs a word with an example phrase (for example \
'苹果: 我爱吃苹果'), you must reuse that exact phrase verbatim as the one and \
only example sentence for that word. Do not invent a different example. \
If a line gives only a bare word, write exactly two natural example sentences \
for it. Every example sentence needs simplified and traditional text, pinyin, \
and an English translation. Give the deck a short descriptive title.";

pub fn topic_prompt(topic: &str) -> String {
    format!(
        "Create a Chinese vocabulary deck of 10 commonly used words or phrases \
         for this topic: {topic}"
    )
}

pub fn content_prompt(content: &str) -> String {
    format!(
        "Create a Chinese vocabulary deck from the following input, one word or \
         phrase per line. Keep the line order:\n{content}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_pins_caller_phrases_verbatim() {
        assert!(SYSTEM_INSTRUCTION.contains("reuse that exact phrase verbatim"));
        assert!(SYSTEM_INSTRUCTION.contains("one and only example sentence"));
        assert!(SYSTEM_INSTRUCTION.contains("我爱吃苹果"));
    }

    #[test]
    fn instruction_asks_two_examples_for_bare_words() {
        assert!(SYSTEM_INSTRUCTION.contains("exactly two natural example sentences"));
    }

    #[test]
    fn prompts_embed_the_payload_verbatim() {
        assert!(topic_prompt("水果").contains("水果"));

        let content = "苹果: 我爱吃苹果\n香蕉";
        assert!(content_prompt(content).contains(content));
    }
}
