use crate::lauvinko::directory::{OutlineEntry, SectionDirectory};
use crate::lauvinko::gloss::SiteLinks;
use crate::lauvinko::html;
use markup5ever_rcdom::Handle;

/// The table of contents as nested lists, one numbered link per section.
pub fn render_contents(directory: &SectionDirectory, links: &SiteLinks) -> Handle {
    let entries = directory.outline();
    let mut index = 0;
    html::element_with(
        "div",
        &[("class", "scroll"), ("style", "max-height: 75vh")],
        vec![render_level(&entries, &mut index, 1, links)],
    )
}

/// Render consecutive entries at `depth`, consuming deeper entries into nested lists.
fn render_level(entries: &[OutlineEntry], index: &mut usize, depth: usize, links: &SiteLinks) -> Handle {
    let list = html::element("ul", &[]);

    while let Some(entry) = entries.get(*index) {
        if entry.depth() < depth {
            break;
        }
        *index += 1;

        let item = html::element_with(
            "a",
            &[("href", &links.page_url(&entry.name, None))],
            vec![html::element_with("li", &[], vec![html::text(&entry.label())])],
        );
        let wrapper = html::element_with("div", &[], vec![item]);

        if entries.get(*index).is_some_and(|next| next.depth() > depth) {
            html::append(&wrapper, render_level(entries, index, depth + 1, links));
        }
        html::append(&list, wrapper);
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lauvinko::html::{elements_by_tag, to_html};

    #[test]
    fn nests_numbered_links() {
        let directory = SectionDirectory::from_json(
            r#"{"subsections": [
                {"name": "grammar", "subsections": [{"name": "verbs", "subsections": [{"name": "aspect"}]}]},
                {"name": "texts"}
            ]}"#,
        )
        .unwrap();
        let out = render_contents(&directory, &SiteLinks::default());

        assert_eq!(elements_by_tag(&out, "ul").len(), 3);
        insta::assert_snapshot!(to_html(&[out]).unwrap(), @r#"<div class="scroll" style="max-height: 75vh"><ul><div><a href="/grammar"><li>1 Grammar</li></a><ul><div><a href="/verbs"><li>1.1 Verbs</li></a><ul><div><a href="/aspect"><li>1.1.1 Aspect</li></a></div></ul></div></ul></div><div><a href="/texts"><li>2 Texts</li></a></div></ul></div>"#);
    }

    #[test]
    fn empty_directory_is_an_empty_list() {
        let out = render_contents(&SectionDirectory::default(), &SiteLinks::default());
        assert_eq!(
            to_html(&[out]).unwrap(),
            r#"<div class="scroll" style="max-height: 75vh"><ul></ul></div>"#
        );
    }
}
