//! Prompt templates for the three model-backed operations, plus the
//! input truncation and reply post-processing that surround them.

/// Character budget for the context forwarded by `/generate`.
pub const ANSWER_CONTEXT_CHARS: usize = 8000;
/// Character budget for the context forwarded by `/topics`.
pub const TOPICS_CONTEXT_CHARS: usize = 6000;

pub const RELATED_PREFIX: &str = "This is not explicitly in the lecture, but generally speaking...";
pub const OUT_OF_SCOPE: &str = "This question is out of the scope of this lecture.";

/// Returns at most `max_chars` characters from the start of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn answer_prompt(context: &str, query: &str) -> String {
    let context = truncate_chars(context, ANSWER_CONTEXT_CHARS);
    format!(
        "You are a strictly academic teaching assistant.\n\
         Your goal is to answer the student's question based on the provided Context (lecture notes).\n\
         \n\
         Follow this logic strictly in order:\n\
         1. **Direct Answer:** If the answer is explicitly found in the Context below, answer it using ONLY the context.\n\
         2. **Definition:** If the user asks for a definition of a term that is MENTIONED in the Context \
         (e.g., as a title, header, or bullet point) but not defined there, use your general knowledge \
         to provide a standard academic definition.\n\
         3. **Related but Missing:** If the question is NOT in the context but is clearly related to the \
         **same subject matter or domain as the Context** (e.g., if the doc is about 'Roman History' and \
         the question asks about 'Julius Caesar', or if the doc is about 'Biology' and the question asks \
         about 'Cells'), answer it using your general knowledge, but START your answer with: \"{RELATED_PREFIX}\"\n\
         4. **Unrelated:** If the question is completely unrelated to the domain of the Context \
         (e.g., asking about cooking when the doc is about physics), say: \"{OUT_OF_SCOPE}\"\n\
         \n\
         Context:\n\
         {context}\n\
         \n\
         Question: {query}\n\
         Answer:\n"
    )
}

pub fn topics_prompt(context: &str) -> String {
    let context = truncate_chars(context, TOPICS_CONTEXT_CHARS);
    format!(
        "Analyze the following text and extract its main sections or topic titles.\n\
         Return ONLY a newline-separated list of topic titles (no numbering or explanations).\n\
         \n\
         Text:\n\
         {context}\n\
         \n\
         Topics:\n"
    )
}

pub fn categorize_prompt<S: AsRef<str>>(query: &str, topics: &[S]) -> String {
    let formatted = format_topic_list(topics);
    format!(
        "Given the following list of topics, identify which single topic is most relevant to the question.\n\
         Return ONLY the exact topic title from the list.\n\
         \n\
         Topics:\n\
         {formatted}\n\
         \n\
         Question: {query}\n\
         \n\
         Most Relevant Topic:\n"
    )
}

/// Renders topics as a bulleted block, one `- title` per line.
pub fn format_topic_list<S: AsRef<str>>(topics: &[S]) -> String {
    topics
        .iter()
        .map(|topic| format!("- {}", topic.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Splits a model reply into topic titles, dropping blank lines.
pub fn parse_topics(reply: &str) -> Vec<String> {
    reply
        .trim()
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text_whole() {
        assert_eq!(truncate_chars("cells", 10), "cells");
        assert_eq!(truncate_chars("cells", 5), "cells");
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        let text = "épée";
        assert_eq!(truncate_chars(text, 2), "ép");
        assert_eq!(truncate_chars(text, 0), "");
    }

    #[test]
    fn answer_prompt_embeds_policy_context_and_question() {
        let prompt = answer_prompt("Mitosis is cell division.", "What is mitosis?");
        assert!(prompt.contains("Context:\nMitosis is cell division.\n"));
        assert!(prompt.contains("Question: What is mitosis?\nAnswer:"));
        assert!(prompt.contains(RELATED_PREFIX));
        assert!(prompt.contains(OUT_OF_SCOPE));
        assert!(prompt.contains("1. **Direct Answer:**"));
        assert!(prompt.contains("4. **Unrelated:**"));
    }

    #[test]
    fn answer_prompt_truncates_context() {
        let context = format!("{}{}", "a".repeat(ANSWER_CONTEXT_CHARS), "TAIL");
        let prompt = answer_prompt(&context, "q");
        assert!(prompt.contains(&"a".repeat(ANSWER_CONTEXT_CHARS)));
        assert!(!prompt.contains("TAIL"));
    }

    #[test]
    fn topics_prompt_uses_shorter_budget() {
        let context = format!("{}{}", "b".repeat(TOPICS_CONTEXT_CHARS), "TAIL");
        let prompt = topics_prompt(&context);
        assert!(prompt.contains(&"b".repeat(TOPICS_CONTEXT_CHARS)));
        assert!(!prompt.contains(&"b".repeat(TOPICS_CONTEXT_CHARS + 1)));
        assert!(!prompt.contains("TAIL"));
        assert!(prompt.contains("no numbering or explanations"));
    }

    #[test]
    fn categorize_prompt_lists_topics_in_order() {
        let prompt = categorize_prompt("What powers the cell?", &["Cells", "Mitochondria"]);
        assert!(prompt.contains("Topics:\n- Cells\n- Mitochondria\n"));
        assert!(prompt.contains("Question: What powers the cell?"));
        assert!(prompt.ends_with("Most Relevant Topic:\n"));
    }

    #[test]
    fn parse_topics_drops_blank_lines_and_keeps_order() {
        assert_eq!(
            parse_topics("Cells\n\nMitochondria\n"),
            vec!["Cells".to_string(), "Mitochondria".to_string()]
        );
        assert_eq!(
            parse_topics("  Osmosis \r\n   \n Diffusion"),
            vec!["Osmosis".to_string(), "Diffusion".to_string()]
        );
        assert!(parse_topics("\n \n").is_empty());
    }
}
