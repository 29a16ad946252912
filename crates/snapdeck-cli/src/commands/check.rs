use anyhow::Result;
use serde::Serialize;

use snapdeck_core::pager::ChromeState;
use snapdeck_core::PageDocument;

#[derive(Debug, Serialize)]
struct Outline<'a> {
    brand: &'a str,
    blocks: usize,
    languages: Vec<&'a str>,
    sections: Vec<SectionEntry<'a>>,
    /// Id of the block carrying the animated quote
    quote: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct SectionEntry<'a> {
    index: usize,
    id: &'a str,
    title: &'a str,
    /// Side pager label pointing at this section
    label: Option<String>,
    /// Classes the header carries while this section is active
    header: Vec<&'static str>,
    /// Classes the side pager carries while this section is active
    pager: Vec<&'static str>,
}

fn outline(page: &PageDocument) -> Outline<'_> {
    let widget = page.pager_widget();
    let sections = page.section_list();

    let sections = sections
        .iter()
        .enumerate()
        .filter_map(|(index, id)| {
            let block = page.blocks.get(page.block_index(id)?)?;
            let label = widget
                .items()
                .iter()
                .find(|item| item.target_id() == Some(id))
                .map(|item| item.label.clone());
            let chrome = ChromeState::for_section(&sections, id);
            Some(SectionEntry {
                index,
                id: block.id.as_str(),
                title: block.title.as_str(),
                label,
                header: chrome.header_classes(),
                pager: chrome.pager_classes(),
            })
        })
        .collect();

    Outline {
        brand: &page.site.brand,
        blocks: page.blocks.len(),
        languages: page.languages.iter().map(|l| l.label.as_str()).collect(),
        sections,
        quote: page
            .quote()
            .and_then(|(idx, _)| page.blocks.get(idx))
            .map(|b| b.id.as_str()),
    }
}

pub fn run(page: &PageDocument, json: bool) -> Result<()> {
    let outline = outline(page);

    if json {
        println!("{}", serde_json::to_string_pretty(&outline)?);
        return Ok(());
    }

    println!("{}: {} blocks, {} sections\n", outline.brand, outline.blocks, outline.sections.len());
    if outline.sections.is_empty() {
        println!("No sections. Block ids like p1, p2, ... become pager sections.");
        return Ok(());
    }

    for entry in &outline.sections {
        let title = if entry.title.is_empty() {
            "(untitled)"
        } else {
            entry.title
        };
        let label = entry.label.as_deref().unwrap_or("--");
        let mut chrome = entry.header.join(" ");
        if !entry.pager.is_empty() {
            chrome.push_str(" / pager ");
            chrome.push_str(&entry.pager.join(" "));
        }
        println!("  {:<4} {:<6} {:<32} [{}]", label, entry.id, title, chrome);
    }
    if let Some(quote) = outline.quote {
        println!("\nQuote in {}", quote);
    }
    if !outline.languages.is_empty() {
        println!("Languages: {}", outline.languages.join(", "));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapdeck_core::pager::HIDDEN_CLASS;

    #[test]
    fn test_demo_outline() {
        let page = PageDocument::demo().unwrap();
        let outline = outline(&page);
        assert_eq!(outline.sections.len(), 9);
        assert_eq!(outline.sections[4].id, "p5");
        assert_eq!(outline.sections[4].label.as_deref(), Some("05"));
        assert_eq!(outline.quote, Some("p1"));
        assert_eq!(outline.languages.len(), 3);

        assert_eq!(outline.sections[0].header, vec!["ivory"]);
        assert_eq!(outline.sections[0].pager, vec![HIDDEN_CLASS]);
        assert_eq!(outline.sections[4].header, vec!["black"]);
        assert!(outline.sections[4].pager.is_empty());
        assert_eq!(outline.sections[8].header, vec![HIDDEN_CLASS, "black"]);
    }

    #[test]
    fn test_outline_serializes() {
        let page = PageDocument::parse(
            r##"
[[blocks]]
id = "intro"

[[blocks]]
id = "p1"
title = "Hello"

[[pager]]
label = "Start"
href = "#p1"
"##,
        )
        .unwrap();
        let value = serde_json::to_value(outline(&page)).unwrap();
        assert_eq!(value["blocks"], 2);
        assert_eq!(value["sections"][0]["id"], "p1");
        assert_eq!(value["sections"][0]["label"], "Start");
        assert!(value["quote"].is_null());
    }
}
