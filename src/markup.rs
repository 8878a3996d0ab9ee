use crate::types::Sender;

/// Entity-escapes a user-supplied value before it is interpolated into markup.
/// Every template below runs its inputs through this; raw values never reach a
/// region.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Header block for the resource results region.
pub fn results_header(domain: &str, location: &str) -> String {
    format!(
        "<h3>Displaying mock results for {} in {}</h3>\
         <ul><li>Local support centres</li><li>Eligibility guides</li><li>Application forms</li></ul>",
        escape(domain),
        escape(location)
    )
}

/// Placeholder block for the video results container.
pub fn video_placeholder(term: &str) -> String {
    format!(
        "<p>Showing mock video results for \"{}\"...</p>",
        escape(term)
    )
}

/// Inline error message block.
pub fn inline_error(text: &str) -> String {
    format!("<p class=\"error\">{}</p>", escape(text))
}

/// A single chat message block, tagged by sender.
pub fn message_block(sender: Sender, text: &str) -> String {
    format!(
        "<div class=\"msg {}\">{}</div>",
        sender.class(),
        escape(text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_handles_markup_characters() {
        assert_eq!(
            escape("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
        assert_eq!(escape("fish & chips"), "fish &amp; chips");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn results_header_embeds_both_values() {
        let header = results_header("Pension", "Austin");
        assert!(header.contains("Displaying mock results for Pension in Austin"));
    }

    #[test]
    fn video_placeholder_quotes_the_term() {
        let block = video_placeholder("yoga");
        assert!(block.contains("Showing mock video results for \"yoga\"..."));
    }

    #[test]
    fn message_block_is_tagged_by_sender() {
        assert!(message_block(Sender::User, "hi").contains("msg user"));
        assert!(message_block(Sender::Bot, "hi").contains("msg bot"));
    }

    #[test]
    fn templates_escape_injected_values() {
        let block = message_block(Sender::User, "<img src=x>");
        assert!(!block.contains("<img"));
        assert!(block.contains("&lt;img src=x&gt;"));
    }
}
