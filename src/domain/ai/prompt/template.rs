//! 프롬프트 템플릿 렌더링
//!
//! `{{field}}` 자리표시자를 입력값으로 치환하는 순수 함수입니다.
//! 조건문이나 반복문은 지원하지 않습니다.

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// 템플릿의 `{{name}}` 자리표시자를 `fields` 값으로 치환합니다.
///
/// 한 번의 순회로 치환하므로 입력값 안의 `{{...}}`는 다시 해석되지 않습니다.
/// 알 수 없는 자리표시자는 원문 그대로 남깁니다.
pub fn render(template: &str, fields: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];

        let Some(end) = after_open.find(CLOSE) else {
            out.push_str(&rest[start..]);
            return out;
        };

        let key = after_open[..end].trim();
        match fields.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + OPEN.len() + end + CLOSE.len()]),
        }

        rest = &after_open[end + CLOSE.len()..];
    }

    out.push_str(rest);
    out
}

/// 템플릿에 등장하는 자리표시자 이름 목록
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        let after_open = &rest[start + OPEN.len()..];
        let Some(end) = after_open.find(CLOSE) else {
            break;
        };
        names.push(after_open[..end].trim());
        rest = &after_open[end + CLOSE.len()..];
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_substitute_known_fields() {
        // Arrange
        let template = "Name: {{name}}\nCategory: {{ category }}";

        // Act
        let rendered = render(template, &[("name", "Ibuprofen"), ("category", "Analgesic")]);

        // Assert
        assert_eq!(rendered, "Name: Ibuprofen\nCategory: Analgesic");
    }

    #[test]
    fn should_keep_unknown_placeholders() {
        let rendered = render("Hello {{who}}", &[("name", "x")]);

        assert_eq!(rendered, "Hello {{who}}");
    }

    #[test]
    fn should_not_reinterpret_placeholders_inside_values() {
        // Arrange
        let template = "{{description}} / {{usage}}";

        // Act
        let rendered = render(template, &[("description", "{{usage}}"), ("usage", "twice daily")]);

        // Assert
        assert_eq!(rendered, "{{usage}} / twice daily");
    }

    #[test]
    fn should_substitute_empty_values() {
        let rendered = render("[{{usage}}]", &[("usage", "")]);

        assert_eq!(rendered, "[]");
    }

    #[test]
    fn should_leave_unterminated_placeholder_untouched() {
        let rendered = render("a {{name", &[("name", "x")]);

        assert_eq!(rendered, "a {{name");
    }

    #[test]
    fn should_list_placeholders_in_order() {
        let names = placeholders("{{name}} and {{ usage }} then {{name}}");

        assert_eq!(names, vec!["name", "usage", "name"]);
    }
}
