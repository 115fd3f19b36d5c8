//! Supporting page fragments around the results grid.

use crate::escape::escape_html;

/// Render the searching-stage narration line.
pub fn render_progress(text: &str) -> String {
    format!(
        r#"<div class="search-progress" data-section="progress">{}</div>"#,
        escape_html(text)
    )
}

/// Render the transient error alert with its dismiss control.
pub fn render_error_alert(message: &str) -> String {
    format!(
        r#"<div class="error-alert" data-section="error">
    <span class="error-text">{}</span>
    <button class="btn btn-icon" data-action="dismiss-error">&times;</button>
</div>"#,
        escape_html(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_escapes_text() {
        let html = render_progress("Searching <everywhere>...");
        assert!(html.contains("Searching &lt;everywhere&gt;..."));
    }

    #[test]
    fn test_error_alert_has_dismiss_binding() {
        let html = render_error_alert("Search failed. Please try again.");
        assert!(html.contains("Search failed. Please try again."));
        assert!(html.contains(r#"data-action="dismiss-error""#));
    }
}
