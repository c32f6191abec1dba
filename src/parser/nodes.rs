use scraper::{ElementRef, Html, Selector};

/// One entry in a sub-page's sibling stream.
#[derive(Debug, Clone, PartialEq)]
pub enum PageNode {
    /// A city/region heading (`<h4>`).
    Heading(String),
    /// Any other element, flattened to its text. Left untrimmed.
    Text(String),
}

/// Walk a sub-page into its node stream: the first `<h4>` followed by every
/// later element sibling that carries text. Pages without an `<h4>` yield an
/// empty stream.
pub fn page_nodes(html: &str) -> Vec<PageNode> {
    let document = Html::parse_document(html);
    let heading_selector = Selector::parse("h4").unwrap();

    let first = match document.select(&heading_selector).next() {
        Some(el) => el,
        None => return Vec::new(),
    };

    let mut nodes = vec![PageNode::Heading(first.text().collect())];
    for sibling in first.next_siblings() {
        if let Some(element) = ElementRef::wrap(sibling) {
            let text: String = element.text().collect();
            if text.is_empty() {
                continue;
            }
            if element.value().name() == "h4" {
                nodes.push(PageNode::Heading(text));
            } else {
                nodes.push(PageNode::Text(text));
            }
        }
    }

    nodes
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_on_first_h4() {
        let html = "<p>intro copy</p><h4>Ohio</h4><p>Acme Tank Services</p>";
        let nodes = page_nodes(html);
        assert_eq!(
            nodes,
            vec![
                PageNode::Heading("Ohio".into()),
                PageNode::Text("Acme Tank Services".into()),
            ]
        );
    }

    #[test]
    fn no_heading_yields_empty_stream() {
        assert!(page_nodes("<p>just paragraphs</p>").is_empty());
    }

    #[test]
    fn textless_elements_dropped() {
        let html = "<h4>Ohio</h4><p></p><p>Acme Tank</p><br><p>10 Dock Rd, Toledo, OH 43604</p>";
        let nodes = page_nodes(html);
        assert_eq!(
            nodes,
            vec![
                PageNode::Heading("Ohio".into()),
                PageNode::Text("Acme Tank".into()),
                PageNode::Text("10 Dock Rd, Toledo, OH 43604".into()),
            ]
        );
    }

    #[test]
    fn nested_markup_flattens_to_text() {
        let html = "<h4>Ohio</h4><p><strong>Acme</strong> Tank</p>";
        let nodes = page_nodes(html);
        assert_eq!(nodes[1], PageNode::Text("Acme Tank".into()));
    }

    #[test]
    fn later_headings_stay_in_the_stream() {
        let html = "<h4>Ohio</h4><p>Acme Tank</p><h4>Texas</h4><p>Lone Star Repair</p>";
        let nodes = page_nodes(html);
        assert_eq!(
            nodes,
            vec![
                PageNode::Heading("Ohio".into()),
                PageNode::Text("Acme Tank".into()),
                PageNode::Heading("Texas".into()),
                PageNode::Text("Lone Star Repair".into()),
            ]
        );
    }
}
