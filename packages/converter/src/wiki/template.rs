//! The `Template:Pattern` page.
//!
//! Every pattern page is a `{{Pattern}}` invocation; this template lays the
//! sections out. The structural block depends on the selected [`Layout`];
//! sections it does not render go to catch-all panels below it.

use super::pages::{pattern_invocation, Page};
use super::text::{camel_case_to_minus_split, prettify};
use crate::config::{SectionVocabulary, TEMPLATE_ICON_WIDTH, TEMPLATE_PAGE_TITLE};
use crate::layout::{plan_sections, Layout, LayoutSelection, Placement};
use crate::types::Property;

/// Build the pattern template page.
#[must_use]
pub fn template_page(
    vocabulary: &SectionVocabulary,
    selection: &LayoutSelection,
    properties: &[Property],
) -> Page {
    let mut text = noinclude_block(vocabulary);
    text.push_str("<includeonly>\n__NOTOC__\n<div class=\"pattern\">\n\n");
    text.push_str(&layout_block(selection.layout, properties));
    text.push_str(&catch_all_blocks(vocabulary, selection));
    text.push_str("<div class=\"hidden\" id=\"reference-data\">\n");
    for property in properties {
        let name = property.name_without_prefix();
        text.push_str(&format!(
            "<div id=\"{}-data\">{{{{#show: {{{{FULLPAGENAME}}}} |?{name} |format=array|link=subject}}}}</div>\n",
            camel_case_to_minus_split(name)
        ));
    }
    text.push_str("</div>\n\n</div>\n[[Category:{{{category}}}]]\n</includeonly>\n");

    Page::new(TEMPLATE_PAGE_TITLE, text)
}

/// Usage instructions showing an empty invocation.
fn noinclude_block(vocabulary: &SectionVocabulary) -> String {
    format!(
        "<noinclude>\n\
         This is the \"Pattern\" template. It should be called in the following format:\n\
         <pre>\n\
         {}\n\
         </pre>\n\
         Edit the page to see the template text.\n\
         </noinclude>\n",
        pattern_invocation(&vocabulary.instantiate())
    )
}

fn icon_image() -> String {
    format!("[[File:{{{{{{icon}}}}}}|{TEMPLATE_ICON_WIDTH}]]")
}

/// Icon cell next to a highlighted text cell.
fn icon_row(section: &str) -> String {
    format!(
        "<div class=\"row\" style=\"margin-bottom:20px;\">\n\
         <div class=\"col-lg-3\">\n\
         <div>{}</div>\n\
         </div>\n\
         <div class=\"col-lg-9 question-wrapper\">\n\
         <div class=\"question\">\n\
         <div class=\"text\">{{{{{{{section}}}}}}}</div>\n\
         </div>\n\
         </div>\n\
         </div>\n",
        icon_image()
    )
}

/// Markup of the layout's structural block.
fn layout_block(layout: Layout, properties: &[Property]) -> String {
    let left = match layout {
        Layout::Classic => format!(
            "<div class=\"row\">\n\
             <div class=\"col-lg-12\">\n\
             <div class=\"intent well well-lg\">{{{{{{intent}}}}}}</div>\n\
             </div>\n\
             </div>\n\
             {}",
            icon_row("question")
        ),
        Layout::Compact => icon_row("short-solution"),
        Layout::ClassicWithoutIntent => icon_row("question"),
        Layout::ClassicWithoutQuestion => format!(
            "<div class=\"row\" style=\"margin-bottom:20px;\">\n\
             <div>\n\
             <div class=\"icon\">{}</div>\n\
             </div>\n\
             <div class=\"col-lg-9 question-wrapper\">\n\
             <div class=\"intent well well-lg\">\n\
             {{{{{{intent}}}}}}\n\
             </div>\n\
             </div>\n\
             </div>\n",
            icon_image()
        ),
        Layout::Unstructured => return String::new(),
    };

    format!(
        "<div class=\"row\">\n\
         <div class=\"col-lg-8\">\n\
         {left}\
         </div>\n\
         <div class=\"col-lg-4\">\n\
         {}\
         </div>\n\
         </div>\n\n",
        references_block(properties)
    )
}

/// References infobox with one list per property.
fn references_block(properties: &[Property]) -> String {
    let mut text = String::from(
        "<div class=\"infobox panel panel-default\">\n\
         <div class=\"panel-heading\">References</div>\n\
         <div class=\"panel-body\">\n\
         <div class=\"row\">\n\
         <div class=\"col-lg-12\">\n",
    );
    for property in properties {
        let key = camel_case_to_minus_split(property.name_without_prefix());
        text.push_str(&format!(
            "<div id=\"{key}-info-section\">\n\
             <h5>{}</h5>\n\
             <ul id=\"{key}-list\"></ul>\n\
             </div>\n",
            prettify(&key)
        ));
    }
    text.push_str("\n</div>\n</div>\n</div>\n</div>\n");
    text
}

/// Blocks for the sections the layout does not render.
fn catch_all_blocks(vocabulary: &SectionVocabulary, selection: &LayoutSelection) -> String {
    let mut text = String::new();
    for section in plan_sections(vocabulary, selection) {
        match section.placement {
            Placement::Layout | Placement::CategoryMarker => {}
            Placement::IconBlock => {
                text.push_str(&format!(
                    "<div style=\"margin-bottom:20px;\">\n{}\n</div>\n\n",
                    icon_image()
                ));
            }
            Placement::Panel => {
                text.push_str(&format!(
                    "<div class=\"panel panel-default\">\n\
                     <div class=\"panel-heading\">{}</div>\n\
                     <div class=\"panel-body\">\n\
                     {{{{{{{}}}}}}}\n\
                     </div>\n\
                     </div>\n\n",
                    prettify(&section.name),
                    section.name
                ));
            }
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::select_layout;
    use pretty_assertions::assert_eq;

    fn render(sections: &str, properties: &[Property]) -> String {
        let vocabulary = SectionVocabulary::from_lists(sections, "").unwrap();
        let selection = select_layout(&vocabulary);
        template_page(&vocabulary, &selection, properties).text
    }

    fn includeonly(text: &str) -> &str {
        text.split("<includeonly>").nth(1).unwrap()
    }

    #[test]
    fn test_title_and_wrapper() {
        let vocabulary = SectionVocabulary::from_lists("intent", "").unwrap();
        let page = template_page(&vocabulary, &select_layout(&vocabulary), &[]);

        assert_eq!(page.title, "Template:Pattern");
        assert!(page.text.starts_with("<noinclude>\n"));
        assert!(page.text.contains("<pre>\n{{Pattern\n|intent=\n\n}}\n</pre>\n"));
        assert!(page
            .text
            .ends_with("</div>\n\n</div>\n[[Category:{{{category}}}]]\n</includeonly>\n"));
    }

    #[test]
    fn test_classic_layout() {
        let text = render("intent\nicon\nquestion", &[]);
        let body = includeonly(&text);

        assert!(body.contains("<div class=\"intent well well-lg\">{{{intent}}}</div>\n"));
        assert!(body.contains("<div>[[File:{{{icon}}}|118px]]</div>\n"));
        assert!(body.contains("<div class=\"text\">{{{question}}}</div>\n"));
        assert!(!body.contains("panel-heading\">Intent<"));
        assert_eq!(body.matches("{{{icon}}}").count(), 1);
    }

    #[test]
    fn test_compact_layout() {
        let body_text = render("icon\nshort-solution\nsolution", &[]);
        let body = includeonly(&body_text);

        assert!(body.contains("<div class=\"text\">{{{short-solution}}}</div>\n"));
        assert!(body.contains("<div class=\"panel-heading\">Solution</div>\n<div class=\"panel-body\">\n{{{solution}}}\n</div>\n"));
    }

    #[test]
    fn test_classic_without_question_layout() {
        let text = render("intent\nicon", &[]);
        assert!(text.contains("<div class=\"icon\">[[File:{{{icon}}}|118px]]</div>\n"));
        assert!(text.contains("<div class=\"intent well well-lg\">\n{{{intent}}}\n</div>\n"));
    }

    #[test]
    fn test_unstructured_icon_block() {
        let text = render("icon\ncontext", &[]);
        let body = includeonly(&text);

        assert!(!body.contains("References"));
        assert!(body.contains("<div style=\"margin-bottom:20px;\">\n[[File:{{{icon}}}|118px]]\n</div>\n\n"));
        assert!(body.contains("{{{context}}}"));
    }

    #[test]
    fn test_category_section_is_only_the_marker() {
        let text = render("intent\ncategory", &[]);
        let body = includeonly(&text);

        assert_eq!(body.matches("{{{category}}}").count(), 1);
        assert!(!body.contains("panel-heading\">Category<"));
    }

    #[test]
    fn test_references_and_reference_data() {
        let properties = [Property::new("HasRelatedPattern", "Page", "")];
        let text = render("intent\nicon\nquestion", &properties);

        assert!(text.contains(
            "<div id=\"has-related-pattern-info-section\">\n<h5>Has Related Pattern</h5>\n<ul id=\"has-related-pattern-list\"></ul>\n</div>\n"
        ));
        assert!(text.contains(
            "<div id=\"has-related-pattern-data\">{{#show: {{FULLPAGENAME}} |?HasRelatedPattern |format=array|link=subject}}</div>\n"
        ));
    }

    #[test]
    fn test_every_section_rendered_once() {
        let names = ["intent", "icon", "question", "short-solution", "context", "known-uses"];
        let text = render(&names.join("\n"), &[]);
        let body = includeonly(&text);

        for name in names {
            assert_eq!(body.matches(&format!("{{{{{{{name}}}}}}}")).count(), 1, "{name}");
        }
    }
}
