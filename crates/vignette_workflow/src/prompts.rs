//! Prompt templates for every workflow stage.
//!
//! Pure functions: no I/O, no state.

/// Ask for a short story seeded by the caller's premise.
///
/// # Examples
///
/// ```
/// let prompt = vignette_workflow::prompts::write_story("a lonely robot");
/// assert!(prompt.contains("a lonely robot"));
/// ```
pub fn write_story(premise: &str) -> String {
    format!(
        "Given the context:\n{premise}\n\nWrite a small story based on the context."
    )
}

/// Ask for a revision of the story already present in the conversation.
pub fn update_story(premise: &str) -> String {
    format!(
        "Update the story you wrote using the following context:\n{premise}\n\n\
         Return the whole updated story."
    )
}

/// Ask for the story to be split into `count` parts as a numbered JSON object.
///
/// The reply is expected to satisfy [`crate::parse_parts`].
pub fn split_into_parts(story: &str, count: usize) -> String {
    format!(
        r#"Split the following story into {count} parts. For each part, return a short title and a visual description suitable for image generation. Your return must be a JSON object with the following format:

{{
    "1": {{
        "title": "Title of part 1",
        "description": "Description of part 1"
    }},
    "2": {{
        "title": "Title of part 2",
        "description": "Description of part 2"
    }},
    ...
}}

Use exactly {count} keys, numbered from 1 to {count}. You have to finish the story in the final part.

Story:
{story}
"#
    )
}

/// Render one part's visual description as an illustration prompt.
pub fn illustrate_part(description: &str) -> String {
    format!("Given the context:\n{description}\n\nGenerate an image in the hand drawn style.")
}
