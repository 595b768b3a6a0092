//! MediaWiki output: entity pages, the pattern template, navigation pages,
//! script fragments and the export document.

mod common_js;
mod navigation;
mod pages;
mod template;
mod text;
mod writer;

pub use common_js::{common_js_page, mediawiki_mainpage};
pub use navigation::{mainpage_page, sidebar_page};
pub use pages::{category_text, pattern_invocation, property_text, Page};
pub use template::template_page;
pub use text::{camel_case_to_minus_split, escape_page_text, prettify, ul_list, uncapitalize};
pub use writer::{render_export, render_page, save_atomic};
