use super::text::render_text_document;
use super::{PageStatus, TextView};
use crate::lauvinko::directory::SectionDirectory;
use crate::lauvinko::document::Block;
use crate::lauvinko::error::RenderError;
use crate::lauvinko::gloss::{GlossCache, SiteLinks};
use crate::lauvinko::html::{self, Fragment};
use crate::lauvinko::render::{render_block, RenderContext};
use markup5ever_rcdom::Handle;

const LOAD_FAILED: &str = "There was a problem loading the page.";

/// Site-wide inputs of a page render.
#[derive(Debug, Clone, Copy)]
pub struct PageShell<'a> {
    pub directory: &'a SectionDirectory,
    pub links: &'a SiteLinks,
    pub text_view: TextView,
    pub show_title: bool,
}

impl<'a> PageShell<'a> {
    pub fn new(directory: &'a SectionDirectory, links: &'a SiteLinks) -> Self {
        Self {
            directory,
            links,
            text_view: TextView::default(),
            show_title: true,
        }
    }
}

/// Render a page as it stands: title, navigation, whatever content has arrived and links
/// to the page's subsections.
pub fn render_page(
    name: &str,
    status: &PageStatus,
    glosses: &GlossCache,
    shell: &PageShell,
) -> Result<Handle, RenderError> {
    let page = html::element("div", &[("class", "page")]);
    html::append_all(&page, render_header(name, shell));

    match status {
        PageStatus::Pending => {}
        PageStatus::Failed => html::append(
            &page,
            html::element_with("p", &[], vec![html::text(LOAD_FAILED)]),
        ),
        PageStatus::Loaded(document) => {
            let ctx = RenderContext::new(shell.directory, glosses, shell.links, name);
            let content = match document.blocks.first() {
                Some(Block::CodeFence { .. }) => {
                    render_text_document(&document.blocks, &ctx, shell.text_view)?
                }
                _ => document
                    .blocks
                    .iter()
                    .map(|block| {
                        render_block(block, &ctx).map(|out| html::element_with("div", &[], vec![out]))
                    })
                    .collect::<Result<Fragment, RenderError>>()?,
            };
            html::append_all(&page, content);
        }
    }

    let subsections = shell
        .directory
        .get(name)
        .map(|section| section.subsections.as_slice())
        .unwrap_or_default();
    html::append(&page, render_section_links(subsections, shell));

    Ok(page)
}

fn render_header(name: &str, shell: &PageShell) -> Fragment {
    let mut out = Vec::new();
    let section = shell.directory.get(name);

    if shell.show_title {
        if let Some(section) = section {
            out.push(html::element_with(
                "h1",
                &[("style", "margin-top: 3vh")],
                vec![html::text(&section.title)],
            ));
        }
    }

    let nav = shell.directory.navigation(name);
    let prev = nav
        .prev
        .map(|prev| go_up(&shell.links.page_url(&prev.name, None), &format!("← {}", prev.title)));
    let up = match nav.parent {
        Some(parent) => go_up(
            &shell.links.page_url(&parent.name, None),
            &format!("Go up to {}", parent.title),
        ),
        None => go_up(&shell.links.page_url("", None), "Go up to index page"),
    };
    let next = nav
        .next
        .map(|next| go_up(&shell.links.page_url(&next.name, None), &format!("{} →", next.title)));

    let column = |link: Option<Handle>| {
        html::element_with("div", &[("class", "col-12 col-md-4")], link.into_iter().collect())
    };
    out.push(html::element_with(
        "div",
        &[("class", "row")],
        vec![column(prev), column(Some(up)), column(next)],
    ));
    out
}

fn go_up(href: &str, label: &str) -> Handle {
    html::element_with(
        "p",
        &[("class", "go-up")],
        vec![html::element_with("a", &[("href", href)], vec![html::text(label)])],
    )
}

/// Bootstrap column width for a row of `count` links.
fn link_width(count: usize) -> usize {
    match count {
        2 => 6,
        4 => 3,
        _ => 4,
    }
}

fn render_section_links(sections: &[String], shell: &PageShell) -> Handle {
    let class = format!("go-down col-12 col-md-{}", link_width(sections.len()));
    let row = html::element("div", &[("class", "row")]);

    for name in sections {
        let title = shell.directory.title(name).unwrap_or(name);
        let card = html::element_with(
            "a",
            &[("href", &shell.links.page_url(name, None))],
            vec![html::element_with(
                "div",
                &[],
                vec![html::element_with("h3", &[], vec![html::text(title)])],
            )],
        );
        html::append(&row, html::element_with("div", &[("class", &class)], vec![card]));
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lauvinko::document::{Document, InlineNode};
    use crate::lauvinko::html::{elements_by_tag, text_content, to_html};
    use rstest::rstest;

    fn directory() -> SectionDirectory {
        SectionDirectory::from_json(
            r#"{"subsections": [
                {"name": "grammar", "subsections": [{"name": "nouns"}, {"name": "verbs"}]},
                {"name": "texts"}
            ]}"#,
        )
        .unwrap()
    }

    fn paragraph(text: &str) -> Block {
        Block::Paragraph {
            children: vec![InlineNode::RawText {
                content: text.into(),
            }],
        }
    }

    fn render(name: &str, status: &PageStatus) -> Handle {
        let directory = directory();
        let links = SiteLinks::default();
        let shell = PageShell::new(&directory, &links);
        render_page(name, status, &GlossCache::new(), &shell).unwrap()
    }

    fn nav_texts(page: &Handle) -> Vec<String> {
        elements_by_tag(page, "p")
            .iter()
            .filter(|p| to_html(&[(*p).clone()]).unwrap().contains("go-up"))
            .map(text_content)
            .collect()
    }

    #[test]
    fn navigation_of_middle_page() {
        let page = render("nouns", &PageStatus::Pending);
        assert_eq!(
            nav_texts(&page),
            vec!["← Grammar", "Go up to Grammar", "Verbs →"]
        );
        assert_eq!(text_content(&elements_by_tag(&page, "h1")[0]), "Nouns");
    }

    #[test]
    fn root_page_goes_up_to_index() {
        let page = render("grammar", &PageStatus::Pending);
        assert_eq!(nav_texts(&page), vec!["Go up to index page", "Nouns →"]);
        let html = to_html(&[page]).unwrap();
        assert!(html.contains(r#"<a href="/">Go up to index page</a>"#));
    }

    #[test]
    fn failed_page_shows_notice() {
        let page = render("texts", &PageStatus::Failed);
        assert!(to_html(&[page])
            .unwrap()
            .contains("<p>There was a problem loading the page.</p>"));
    }

    #[test]
    fn loaded_page_wraps_each_block() {
        let document = Document {
            blocks: vec![paragraph("one"), Block::ThematicBreak],
        };
        let html = to_html(&[render("texts", &PageStatus::Loaded(document))]).unwrap();
        assert!(html.contains(r#"<div><div class="paragraph">one</div></div><div><hr></div>"#));
    }

    #[test]
    fn lists_subsection_links() {
        let page = render("grammar", &PageStatus::Pending);
        let html = to_html(&[page]).unwrap();
        assert!(html.contains(
            r#"<div class="go-down col-12 col-md-6"><a href="/nouns"><div><h3>Nouns</h3></div></a></div>"#
        ));
    }

    #[test]
    fn unknown_page_has_no_title() {
        let page = render("elsewhere", &PageStatus::Pending);
        assert!(elements_by_tag(&page, "h1").is_empty());
        assert_eq!(nav_texts(&page), vec!["Go up to index page"]);
    }

    #[rstest]
    #[case(1, 4)]
    #[case(2, 6)]
    #[case(3, 4)]
    #[case(4, 3)]
    fn link_widths(#[case] count: usize, #[case] width: usize) {
        assert_eq!(link_width(count), width);
    }
}
