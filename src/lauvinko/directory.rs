//! Section directory
//!
//!     The site's pages form a fixed tree of sections, defined once as nested JSON:
//!
//!     ```json
//!     {"subsections": [{"name": "grammar", "title": "Grammar", "subsections": [...]}]}
//!     ```
//!
//!     The directory flattens that tree into entries keyed by name. Parents are stored as
//!     names, not references, and reading order is the depth-first order of the definition.
//!     It is built at start-up and only read afterwards.

use serde::Deserialize;
use std::collections::HashMap;

/// One section as defined in the contents file.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionBlob {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subsections: Vec<SectionBlob>,
}

/// Root of the contents file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentsDefinition {
    #[serde(default)]
    pub subsections: Vec<SectionBlob>,
}

/// A section in the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionDefinition {
    pub name: String,
    pub title: String,
    pub subsections: Vec<String>,
    pub parent: Option<String>,
}

/// Neighbours of a page in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation<'a> {
    pub prev: Option<&'a SectionDefinition>,
    pub next: Option<&'a SectionDefinition>,
    pub parent: Option<&'a SectionDefinition>,
}

/// Numbered entry of the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    /// Section number path, e.g. `[2, 1]` for 2.1.
    pub number: Vec<usize>,
    pub name: String,
    pub title: String,
}

impl OutlineEntry {
    pub fn label(&self) -> String {
        let number: Vec<String> = self.number.iter().map(|n| n.to_string()).collect();
        format!("{} {}", number.join("."), self.title)
    }

    pub fn depth(&self) -> usize {
        self.number.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SectionDirectory {
    entries: HashMap<String, SectionDefinition>,
    roots: Vec<String>,
    order: Vec<String>,
}

impl SectionDirectory {
    pub fn from_definition(definition: &ContentsDefinition) -> Self {
        let mut directory = SectionDirectory::default();
        for section in &definition.subsections {
            directory.roots.push(section.name.clone());
            directory.insert(section, None);
        }
        directory
    }

    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        let definition: ContentsDefinition = serde_json::from_str(source)?;
        Ok(Self::from_definition(&definition))
    }

    fn insert(&mut self, section: &SectionBlob, parent: Option<&str>) {
        self.order.push(section.name.clone());
        for subsection in &section.subsections {
            self.insert(subsection, Some(&section.name));
        }

        self.entries.insert(
            section.name.clone(),
            SectionDefinition {
                name: section.name.clone(),
                title: section
                    .title
                    .clone()
                    .unwrap_or_else(|| title_case(&section.name)),
                subsections: section.subsections.iter().map(|s| s.name.clone()).collect(),
                parent: parent.map(str::to_string),
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&SectionDefinition> {
        self.entries.get(name)
    }

    /// Title of a section, logging unknown names.
    pub fn title(&self, name: &str) -> Option<&str> {
        let title = self.get(name).map(|section| section.title.as_str());
        if title.is_none() {
            tracing::warn!("unknown section {:?}", name);
        }
        title
    }

    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    /// Position of a section in reading order.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.order.iter().position(|entry| entry == name)
    }

    pub fn by_index(&self, index: usize) -> Option<&SectionDefinition> {
        self.order.get(index).and_then(|name| self.get(name))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Previous, next and parent sections of a page. A page not in the directory has none.
    pub fn navigation(&self, name: &str) -> Navigation<'_> {
        let index = self.index_of(name);
        Navigation {
            prev: index
                .and_then(|i| i.checked_sub(1))
                .and_then(|i| self.by_index(i)),
            next: index.and_then(|i| self.by_index(i + 1)),
            parent: self
                .get(name)
                .and_then(|section| section.parent.as_deref())
                .and_then(|parent| self.get(parent)),
        }
    }

    /// Numbered table of contents in reading order.
    pub fn outline(&self) -> Vec<OutlineEntry> {
        let mut out = Vec::new();
        self.push_outline(&self.roots, &[], &mut out);
        out
    }

    fn push_outline(&self, names: &[String], prefix: &[usize], out: &mut Vec<OutlineEntry>) {
        for (i, name) in names.iter().enumerate() {
            let Some(section) = self.get(name) else {
                continue;
            };
            let mut number = prefix.to_vec();
            number.push(i + 1);
            out.push(OutlineEntry {
                number: number.clone(),
                name: section.name.clone(),
                title: section.title.clone(),
            });
            self.push_outline(&section.subsections, &number, out);
        }
    }
}

/// `word_order` → `Word Order`
fn title_case(name: &str) -> String {
    name.replace('_', " ")
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> SectionDirectory {
        SectionDirectory::from_json(
            r#"{"subsections": [{"name": "x", "title": "X", "subsections": [{"name": "y", "title": "Y"}]}]}"#,
        )
        .unwrap()
    }

    fn larger() -> SectionDirectory {
        SectionDirectory::from_json(
            r#"{"subsections": [
                {"name": "introduction"},
                {"name": "grammar", "subsections": [
                    {"name": "word_order"},
                    {"name": "verbs", "title": "Verbal Morphology", "subsections": [
                        {"name": "aspect"}
                    ]}
                ]},
                {"name": "dictionary"}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn indexes_in_reading_order() {
        let dir = small();
        assert_eq!(dir.index_of("y"), Some(1));
        assert_eq!(dir.by_index(0).unwrap().name, "x");
        assert_eq!(dir.index_of("missing"), None);
        assert!(dir.by_index(2).is_none());
    }

    #[test]
    fn navigation_of_leaf() {
        let dir = small();
        let nav = dir.navigation("y");
        assert_eq!(nav.parent.unwrap().name, "x");
        assert_eq!(nav.prev.unwrap().name, "x");
        assert!(nav.next.is_none());
    }

    #[test]
    fn navigation_of_first_root() {
        let dir = small();
        let nav = dir.navigation("x");
        assert!(nav.prev.is_none());
        assert!(nav.parent.is_none());
        assert_eq!(nav.next.unwrap().name, "y");
    }

    #[test]
    fn unknown_page_has_no_neighbours() {
        let dir = small();
        let nav = dir.navigation("nowhere");
        assert_eq!(
            nav,
            Navigation {
                prev: None,
                next: None,
                parent: None
            }
        );
    }

    #[test]
    fn missing_titles_are_title_cased() {
        let dir = larger();
        assert_eq!(dir.get("word_order").unwrap().title, "Word Order");
        assert_eq!(dir.get("verbs").unwrap().title, "Verbal Morphology");
        assert_eq!(dir.title("nowhere"), None);
    }

    #[test]
    fn records_children_and_parents() {
        let dir = larger();
        let grammar = dir.get("grammar").unwrap();
        assert_eq!(grammar.subsections, vec!["word_order", "verbs"]);
        assert_eq!(dir.get("aspect").unwrap().parent.as_deref(), Some("verbs"));
        assert_eq!(dir.roots(), &["introduction", "grammar", "dictionary"]);
    }

    #[test]
    fn numbers_the_outline() {
        let labels: Vec<String> = larger().outline().iter().map(OutlineEntry::label).collect();
        assert_eq!(
            labels,
            vec![
                "1 Introduction",
                "2 Grammar",
                "2.1 Word Order",
                "2.2 Verbal Morphology",
                "2.2.1 Aspect",
                "3 Dictionary",
            ]
        );
    }
}
