//! Rendering of the input field.

use super::model::Model;

impl Model {
    /// Renders the prompt followed by the visible part of the text. The
    /// character under the cursor is drawn with the cursor style while the
    /// field is focused.
    pub fn view(&self) -> String {
        if self.value.is_empty() && !self.placeholder.is_empty() {
            return self.placeholder_view();
        }

        let end = self.offset_right.min(self.value.len());
        let start = self.offset.min(end);
        let visible = &self.value[start..end];
        let pos = self.pos.saturating_sub(start);

        let mut v = String::new();
        if !self.focus {
            let text: String = visible.iter().collect();
            v.push_str(&self.text_style.render(&text));
        } else {
            let before: String = visible[..pos.min(visible.len())].iter().collect();
            v.push_str(&self.text_style.render(&before));

            if pos < visible.len() {
                v.push_str(&self.cursor_style.render(&visible[pos].to_string()));
                let after: String = visible[pos + 1..].iter().collect();
                if !after.is_empty() {
                    v.push_str(&self.text_style.render(&after));
                }
            } else {
                v.push_str(&self.cursor_style.render(" "));
            }
        }

        format!("{}{}", self.prompt_style.render(&self.prompt), v)
    }

    fn placeholder_view(&self) -> String {
        let mut chars = self.placeholder.chars();
        let mut v = String::new();
        if self.focus {
            if let Some(first) = chars.next() {
                v.push_str(&self.cursor_style.render(&first.to_string()));
            }
        }
        let rest: String = chars.collect();
        if !rest.is_empty() {
            v.push_str(&self.placeholder_style.render(&rest));
        }
        format!("{}{}", self.prompt_style.render(&self.prompt), v)
    }
}
