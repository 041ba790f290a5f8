//! Result region content for each tool.

use ratatui::prelude::*;

use ct_core::{ToolId, ToolResult};

use crate::animation::{Fade, Pose, reveal_centre};

/// Final colour of a tool's result text.
fn accent(tool: ToolId) -> Color {
    match tool {
        ToolId::Prompt => Color::Magenta,
        _ => Color::Yellow,
    }
}

/// Colour for a given fade level, ramping up to `full`.
fn faded(fade: Fade, full: Color) -> Color {
    match fade {
        Fade::Dim => Color::DarkGray,
        Fade::Mid => Color::Gray,
        Fade::Full => full,
    }
}

/// Build the styled lines for a result in the given pose.
pub fn result_lines(result: &ToolResult, pose: Pose) -> Vec<Line<'static>> {
    let tool = result.tool();
    let mut lines: Vec<Line<'static>> = Vec::new();
    for _ in 0..pose.row_offset {
        lines.push(Line::from(""));
    }

    let indent = " ".repeat(pose.col_offset as usize);
    let label_style = Style::default().fg(faded(pose.fade, Color::Yellow)).bold();
    let value_style = match tool {
        ToolId::Scene => Style::default().fg(faded(pose.fade, Color::White)),
        _ => Style::default().fg(faded(pose.fade, accent(tool))).bold(),
    };

    for (label, value) in result.fields() {
        let text = reveal_centre(value, pose.reveal);
        let mut spans = vec![Span::raw(indent.clone())];
        if let Some(label) = label {
            spans.push(Span::styled(format!("{label}:"), label_style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(text, value_style));
        lines.push(Line::from(spans));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ct_core::{NameResult, PromptResult, SceneResult};

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn scene() -> ToolResult {
        ToolResult::Scene(SceneResult {
            location: "A grocery store at 3am".into(),
            relationship: "Long-lost pen pals".into(),
            conflict: "One owes the other a huge favor".into(),
        })
    }

    #[test]
    fn scene_has_three_labelled_lines() {
        let lines = result_lines(&scene(), Pose::settled());
        let texts: Vec<String> = lines.iter().map(text).collect();
        assert_eq!(
            texts,
            [
                "Location: A grocery store at 3am",
                "Relationship: Long-lost pen pals",
                "Conflict: One owes the other a huge favor",
            ]
        );
    }

    #[test]
    fn settled_prompt_is_magenta() {
        let prompt = ToolResult::Prompt(PromptResult {
            text: "Everyone speaks in rhymes".into(),
        });
        let lines = result_lines(&prompt, Pose::settled());
        let span = lines[0].spans.last().unwrap();
        assert_eq!(span.style.fg, Some(Color::Magenta));
    }

    #[test]
    fn offsets_and_fade_apply() {
        let name = ToolResult::Name(NameResult {
            full_name: "Tiny Bonkowitz".into(),
        });
        let pose = Pose {
            row_offset: 1,
            col_offset: 3,
            reveal: 1.0,
            fade: Fade::Dim,
        };
        let lines = result_lines(&name, pose);
        assert_eq!(lines.len(), 2);
        assert_eq!(text(&lines[1]), "   Tiny Bonkowitz");
        assert_eq!(lines[1].spans[1].style.fg, Some(Color::DarkGray));
    }
}
