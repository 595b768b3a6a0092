//! Navigation pages rendered from the category tree.
//!
//! The sidebar groups entries into collapsible panels, the custom mainpage
//! shows icon tables. Both branch on the depth of the tree. When the tree
//! cannot be built the navigation part is left empty.

use super::pages::{category_text, Page};
use crate::config::{
    CATEGORY_PREFIX, MAINPAGE_CELLS_PER_ROW, MAINPAGE_ICON_WIDTH, SIDEBAR_PAGE_TITLE,
};
use crate::tree::{CategoryTree, EntryKind, TreeBuilder, TreeDepth, TreeEntry};
use crate::types::Repository;

/// Link to an entry: a page link for patterns, a category link otherwise.
fn entry_link(entry: &TreeEntry) -> String {
    match entry.kind {
        EntryKind::Pattern => format!("[[{}]]", entry.name),
        EntryKind::Category => format!("[[:{CATEGORY_PREFIX}{0} | {0}]]", entry.name),
    }
}

/// Link target of an entry.
fn entry_target(entry: &TreeEntry) -> String {
    match entry.kind {
        EntryKind::Pattern => entry.name.clone(),
        EntryKind::Category => format!(":{CATEGORY_PREFIX}{}", entry.name),
    }
}

/// Collapsible sidebar groups with deterministic ids.
#[derive(Default)]
struct SidebarWriter {
    text: String,
    groups: usize,
}

impl SidebarWriter {
    fn group(&mut self, heading: &str, items: &[String]) {
        self.groups += 1;
        let id = format!("sidebar-group-{}", self.groups);
        self.text.push_str(&format!(
            "<div class=\"panel panel-default sidebar-element\">\n\
             <div class=\"panel-heading\" data-toggle=\"collapse\" data-target=\"#{id}\">\n\
             {heading}\n\
             </div>\n\
             <div class=\"panel-body collapse in\" id=\"{id}\">\n"
        ));
        for item in items {
            self.text.push_str(item);
            self.text.push('\n');
        }
        self.text.push_str("</div>\n</div>\n");
    }
}

fn sidebar_text(tree: &CategoryTree) -> String {
    let mut writer = SidebarWriter::default();
    match tree.depth {
        TreeDepth::One => {
            let items: Vec<String> = tree
                .levels
                .iter()
                .map(|one| format!("* {}", entry_link(&one.entry)))
                .collect();
            writer.group(&tree.root, &items);
        }
        TreeDepth::Two => {
            for one in &tree.levels {
                let items: Vec<String> = one
                    .children
                    .iter()
                    .map(|two| format!("* {}", entry_link(&two.entry)))
                    .collect();
                writer.group(&one.entry.name, &items);
            }
        }
        TreeDepth::Three => {
            for one in &tree.levels {
                let mut items = Vec::new();
                for two in &one.children {
                    items.push(format!("* {}", entry_link(&two.entry)));
                    items.extend(
                        two.children
                            .iter()
                            .map(|three| format!("** {}", entry_link(three))),
                    );
                }
                writer.group(&one.entry.name, &items);
            }
        }
    }
    writer.text
}

/// Build the `Bootstrap:Sidebar` page.
#[must_use]
pub fn sidebar_page(tree: &TreeBuilder<'_>) -> Page {
    let text = match tree.tree() {
        Ok(tree) => sidebar_text(tree),
        Err(err) => {
            tracing::warn!("{err}; sidebar left empty");
            String::new()
        }
    };
    Page::new(SIDEBAR_PAGE_TITLE, text)
}

/// One mainpage table, breaking rows after every sixth cell.
struct IconTable<'r> {
    repository: &'r Repository,
    text: String,
    cells: usize,
}

impl<'r> IconTable<'r> {
    fn new(repository: &'r Repository) -> Self {
        Self {
            repository,
            text: String::from("{|\n"),
            cells: 0,
        }
    }

    fn cell(&mut self, entry: &TreeEntry) {
        let name = &entry.name;
        let icon = match entry.kind {
            EntryKind::Pattern => self.repository.pattern_icon(name),
            EntryKind::Category => "",
        };
        self.text.push_str(&format!(
            "| align=\"center\" width=16,666%|[[File:{icon}|{MAINPAGE_ICON_WIDTH}|center|link={target}]][[{target}|{name}]]\n",
            target = entry_target(entry),
        ));
        self.cells += 1;
        if self.cells == MAINPAGE_CELLS_PER_ROW {
            self.cells = 0;
            self.text.push_str("|-\n");
        }
    }

    fn finish(mut self) -> String {
        self.text.push_str("|}\n");
        self.text
    }
}

fn mainpage_tables(repository: &Repository, tree: &CategoryTree) -> String {
    match tree.depth {
        TreeDepth::One => {
            let mut table = IconTable::new(repository);
            for one in &tree.levels {
                table.cell(&one.entry);
            }
            table.finish()
        }
        TreeDepth::Two => tree
            .levels
            .iter()
            .map(|one| {
                let mut table = IconTable::new(repository);
                for two in &one.children {
                    table.cell(&two.entry);
                }
                format!("== {} ==\n{}", one.entry.name, table.finish())
            })
            .collect(),
        TreeDepth::Three => tree
            .levels
            .iter()
            .map(|one| {
                let mut table = IconTable::new(repository);
                for two in &one.children {
                    if two.entry.is_pattern() {
                        table.cell(&two.entry);
                    }
                    for three in &two.children {
                        table.cell(three);
                    }
                }
                format!("== {} ==\n{}", one.entry.name, table.finish())
            })
            .collect(),
    }
}

/// Build the custom mainpage, titled after the root category.
#[must_use]
pub fn mainpage_page(repository: &Repository, tree: &TreeBuilder<'_>) -> Page {
    let (title, description) = repository
        .root()
        .map(|root| (root.name_without_prefix().to_string(), category_text(root)))
        .unwrap_or_default();

    let mut text = format!("__NOTOC__ __NOEDITSECTION__\n{description}\n");
    match tree.tree() {
        Ok(tree) => text.push_str(&mainpage_tables(repository, tree)),
        Err(err) => tracing::warn!("{err}; mainpage tables left empty"),
    }
    Page::new(title, text)
}
