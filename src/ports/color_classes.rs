// src/ports/color_classes.rs
use crate::domain::ColorClass;
use crate::ports::markup::Element;

/// Turn Notion color classes into inline `color:` styles.
///
/// Every `highlight-*` / `block-color-*` class is removed. Text colors found
/// in the color map are merged into `style`; background colors and unknown
/// keys only lose their class. Other classes are left alone, and an emptied
/// `class` attribute is dropped.
pub fn normalize_color_classes(element: &mut Element) {
    let Some(class_attr) = element.attr("class") else {
        return;
    };

    let mut kept: Vec<String> = Vec::new();
    let mut declarations: Vec<String> = Vec::new();

    for class in class_attr.split_whitespace() {
        match ColorClass::parse(class) {
            Some(color) => declarations.extend(color.declaration()),
            None => kept.push(class.to_string()),
        }
    }

    for declaration in &declarations {
        element.merge_style(declaration);
    }

    if kept.is_empty() {
        element.remove_attr("class");
    } else {
        element.set_attr("class", kept.join(" "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn span_with(class: &str, style: Option<&str>) -> Element {
        let mut element = Element::new("span");
        element.set_attr("class", class);
        if let Some(style) = style {
            element.set_attr("style", style);
        }
        element
    }

    #[rstest]
    #[case("highlight-red", Some("color:red"))]
    #[case("block-color-red", Some("color:red"))]
    #[case("highlight-yellow", Some("color:gold"))]
    #[case("highlight-red_background", None)]
    #[case("block-color-teal_background", None)]
    #[case("highlight-mauve", None)]
    fn given_single_color_class_when_normalizing_then_applies_style_and_drops_class(
        #[case] class: &str,
        #[case] expected_style: Option<&str>,
    ) {
        // Arrange
        let mut element = span_with(class, None);

        // Act
        normalize_color_classes(&mut element);

        // Assert
        assert_eq!(element.attr("style"), expected_style);
        assert_eq!(element.attr("class"), None);
    }

    #[test]
    fn given_mixed_classes_when_normalizing_then_keeps_unrelated_classes() {
        let mut element = span_with("discussion-id highlight-blue", None);

        normalize_color_classes(&mut element);

        assert_eq!(element.attr("class"), Some("discussion-id"));
        assert_eq!(element.attr("style"), Some("color:blue"));
    }

    #[test]
    fn given_existing_style_when_normalizing_then_merges_color() {
        let mut element = span_with("highlight-purple", Some("font-weight:600;"));

        normalize_color_classes(&mut element);

        assert_eq!(element.attr("style"), Some("font-weight:600;color:purple"));
    }

    #[test]
    fn given_text_and_background_classes_when_normalizing_then_only_text_color_applies() {
        let mut element = span_with("highlight-orange highlight-orange_background", None);

        normalize_color_classes(&mut element);

        assert_eq!(element.attr("style"), Some("color:orange"));
        assert_eq!(element.attr("class"), None);
    }

    #[test]
    fn given_no_class_attribute_when_normalizing_then_leaves_element_untouched() {
        let mut element = Element::new("span");
        element.set_attr("style", "color:green");

        normalize_color_classes(&mut element);

        assert_eq!(element.attrs, vec![("style".to_string(), "color:green".to_string())]);
    }
}
