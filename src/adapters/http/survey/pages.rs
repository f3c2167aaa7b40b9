//! Server-rendered HTML pages for the survey flow.

use crate::domain::survey::{Question, Survey};
use crate::domain::visitor::Notice;

use super::routes::question_path;

const CSS: &str = r#"
body { font-family: sans-serif; max-width: 640px; margin: 2rem auto; padding: 0 1rem; color: #222; }
h1 { font-size: 1.6rem; }
.notices { list-style: none; padding: 0; }
.notice { padding: 0.6rem 0.8rem; border-radius: 4px; margin-bottom: 0.5rem; }
.notice.warning { background: #fff3cd; border: 1px solid #ffe69c; }
.notice.info { background: #e7f1ff; border: 1px solid #b6d4fe; }
.progress { color: #666; font-size: 0.9rem; }
.choice { display: block; margin: 0.4rem 0; }
button { margin-top: 1rem; padding: 0.5rem 1.2rem; }
"#;

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn layout(title: &str, notices: &[Notice], body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
{notices}{body}
</body>
</html>"#,
        title = escape_html(title),
        css = CSS,
        notices = render_notices(notices),
        body = body,
    )
}

fn render_notices(notices: &[Notice]) -> String {
    if notices.is_empty() {
        return String::new();
    }

    let items: String = notices
        .iter()
        .map(|n| {
            format!(
                r#"        <li class="notice {}">{}</li>
"#,
                n.level.as_str(),
                escape_html(&n.message)
            )
        })
        .collect();

    format!("    <ul class=\"notices\">\n{}    </ul>\n", items)
}

/// Title, instructions, and the start button.
pub fn start_page(survey: &Survey, notices: &[Notice]) -> String {
    let body = format!(
        r#"    <h1>{title}</h1>
    <p class="instructions">{instructions}</p>
    <form method="POST" action="/start">
        <button type="submit">Start Survey</button>
    </form>"#,
        title = escape_html(survey.title()),
        instructions = escape_html(survey.instructions()),
    );
    layout(survey.title(), notices, &body)
}

/// One question as a radio-button form posting back to its own URL.
pub fn question_page(
    survey: &Survey,
    index: usize,
    question_count: usize,
    question: &Question,
    notices: &[Notice],
) -> String {
    let choices: String = question
        .choices()
        .iter()
        .enumerate()
        .map(|(i, choice)| {
            let label = escape_html(choice);
            format!(
                r#"        <label class="choice" for="choice-{i}">
            <input type="radio" id="choice-{i}" name="answer" value="{label}"> {label}
        </label>
"#,
                i = i,
                label = label,
            )
        })
        .collect();

    let body = format!(
        r#"    <p class="progress">Question {number} of {total}</p>
    <h1>{prompt}</h1>
    <form method="POST" action="{action}">
{choices}        <button type="submit">Next</button>
    </form>"#,
        number = index + 1,
        total = question_count,
        prompt = escape_html(question.prompt()),
        action = question_path(index),
        choices = choices,
    );
    layout(survey.title(), notices, &body)
}

/// Terminal page shown once every question is answered.
pub fn thank_you_page(survey: &Survey, notices: &[Notice]) -> String {
    let body = "    <h1>Thank You!</h1>\n    <p>Your responses have been recorded.</p>";
    layout(survey.title(), notices, body)
}

/// Generic failure page.
pub fn error_page(message: &str) -> String {
    let body = format!(
        "    <h1>Something went wrong</h1>\n    <p>{}</p>",
        escape_html(message)
    );
    layout("Error", &[], &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::survey::satisfaction_survey;

    #[test]
    fn escape_html_escapes_specials() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn start_page_shows_title_instructions_and_start_form() {
        let survey = satisfaction_survey().unwrap();
        let html = start_page(&survey, &[]);
        assert!(html.contains("<h1>Customer Satisfaction Survey</h1>"));
        assert!(html.contains("Please fill out a survey"));
        assert!(html.contains(r#"action="/start""#));
        assert!(!html.contains(r#"<ul class="notices">"#));
    }

    #[test]
    fn question_page_lists_choices_as_radios() {
        let survey = satisfaction_survey().unwrap();
        let question = survey.question_at(2).unwrap();
        let html = question_page(&survey, 2, 4, question, &[]);

        assert!(html.contains("Question 3 of 4"));
        assert!(html.contains(r#"action="/questions/2""#));
        assert!(html.contains(r#"value="Less than $10,000""#));
        assert_eq!(html.matches(r#"type="radio""#).count(), 2);
    }

    #[test]
    fn notices_render_with_level_class() {
        let survey = satisfaction_survey().unwrap();
        let html = thank_you_page(&survey, &[Notice::invalid_question()]);
        assert!(html.contains(r#"class="notice warning""#));
        assert!(html.contains("You&#39;re trying to access an invalid question!"));
        assert!(html.contains("Thank You!"));
    }

    #[test]
    fn survey_text_is_escaped() {
        let question = Question::new("<script>?", vec!["<b>".to_string()]).unwrap();
        let survey = Survey::new("T", "", vec![question.clone()]).unwrap();
        let html = question_page(&survey, 0, 1, &question, &[]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;b&gt;"));
    }
}
