//! Script fragments for `MediaWiki:Common.js` and `MediaWiki:Mainpage`.

use super::pages::Page;
use super::text::{camel_case_to_minus_split, uncapitalize};
use crate::config::{COMMON_JS_PAGE_TITLE, MEDIAWIKI_MAINPAGE_TITLE};
use crate::types::{Category, Property};

const COMMON_JS_HEADER: &str =
    "/* Any JavaScript here will be loaded for all users on every page load. */\n\n";

/// Script block that moves one property's query results into its
/// references list and hides the list when it stays empty.
fn property_block(property: &Property) -> String {
    let name = property.name_without_prefix();
    let variable = uncapitalize(name);
    let key = camel_case_to_minus_split(name);
    format!(
        "var {variable}Data = $('#reference-data #{key}-data').children();\n\
         \n\
         $.each({variable}Data, function(index, element) {{\n\
         if (element == \"\")\n\
         return;\n\
         var li = $(\"<li />\").append(element);\n\
         $('#{key}-list').append(li);\n\
         }});\n\
         \n\
         if ($('#{key}-list li').length == 0)\n\
         $('#{key}-info-section').addClass('hidden');\n\
         \n\
         \n"
    )
}

/// Build the Common.js fragment, with `addon` appended verbatim.
#[must_use]
pub fn common_js_page(properties: &[Property], addon: &str) -> Page {
    let mut text = String::from(COMMON_JS_HEADER);
    for property in properties {
        text.push_str(&property_block(property));
    }
    text.push_str(addon);
    Page::new(COMMON_JS_PAGE_TITLE, text)
}

/// Build the `MediaWiki:Mainpage` fragment naming the root category.
#[must_use]
pub fn mediawiki_mainpage(root: Option<&Category>) -> Page {
    let text = root
        .map(|root| root.name_without_prefix().to_string())
        .unwrap_or_default();
    Page::new(MEDIAWIKI_MAINPAGE_TITLE, text)
}
