//! Expansion of HTML table rows into a rectangular text grid.
//!
//! `colspan` repeats a cell's text across the covered columns and `rowspan`
//! carries it down into the following rows of the same section, so every
//! row of the grid lists one entry per visual column.

use std::collections::VecDeque;

use scraper::{ElementRef, Node};

/// One `<td>`/`<th>` cell as read from the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawCell {
    pub text: String,
    pub colspan: usize,
    pub rowspan: usize,
    pub is_header: bool,
}

impl RawCell {
    pub fn from_element(element: ElementRef<'_>) -> Self {
        Self {
            text: displayed_text(element),
            colspan: span_attr(element, "colspan"),
            rowspan: span_attr(element, "rowspan"),
            is_header: element.value().name() == "th",
        }
    }
}

/// Cells of one `<tr>`, in markup order.
pub(crate) type RawRow = Vec<RawCell>;

/// Pending rowspan: column it occupies, its text and how many rows remain.
type Carry = (usize, String, usize);

/// Expands spans of one table section into rows of cell text.
pub(crate) fn expand_spans(rows: &[RawRow]) -> Vec<Vec<String>> {
    let mut grid = Vec::with_capacity(rows.len());
    let mut carried: VecDeque<Carry> = VecDeque::new();

    for row in rows {
        let mut texts = Vec::new();
        let mut next_carried = VecDeque::new();
        let mut index = 0usize;

        for cell in row {
            take_carried(&mut carried, &mut next_carried, &mut texts, &mut index, false);
            for _ in 0..cell.colspan {
                texts.push(cell.text.clone());
                if cell.rowspan > 1 {
                    next_carried.push_back((index, cell.text.clone(), cell.rowspan - 1));
                }
                index += 1;
            }
        }
        take_carried(&mut carried, &mut next_carried, &mut texts, &mut index, true);

        grid.push(texts);
        carried = next_carried;
    }

    // Rowspans reaching past the last row still produce rows of their own.
    while !carried.is_empty() {
        let mut texts = Vec::new();
        let mut next_carried = VecDeque::new();
        let mut index = 0usize;
        take_carried(&mut carried, &mut next_carried, &mut texts, &mut index, true);
        grid.push(texts);
        carried = next_carried;
    }

    grid
}

/// Moves carried cells into the current row: those whose column has been
/// reached, or every remaining one when `drain` is set.
fn take_carried(
    carried: &mut VecDeque<Carry>,
    next_carried: &mut VecDeque<Carry>,
    texts: &mut Vec<String>,
    index: &mut usize,
    drain: bool,
) {
    while let Some((column, _, _)) = carried.front() {
        if !drain && *column > *index {
            break;
        }
        let Some((column, text, remaining)) = carried.pop_front() else {
            break;
        };
        texts.push(text.clone());
        if remaining > 1 {
            next_carried.push_back((column, text, remaining - 1));
        }
        *index += 1;
    }
}

/// True when the element's inline `style` sets `display: none`.
pub(crate) fn is_hidden(element: ElementRef<'_>) -> bool {
    element.value().attr("style").is_some_and(|style| {
        let compact: String = style.chars().filter(|c| !c.is_whitespace()).collect();
        compact.to_ascii_lowercase().contains("display:none")
    })
}

/// Normalized text of an element, leaving out hidden descendants.
pub(crate) fn displayed_text(element: ElementRef<'_>) -> String {
    let mut parts = Vec::new();
    collect_displayed(element, &mut parts);
    normalize_text(parts.into_iter())
}

/// True when some displayed text node holds a non-whitespace character.
pub(crate) fn has_displayed_text(element: ElementRef<'_>) -> bool {
    let mut parts = Vec::new();
    collect_displayed(element, &mut parts);
    parts.iter().any(|part| !part.trim().is_empty())
}

fn collect_displayed<'a>(element: ElementRef<'a>, parts: &mut Vec<&'a str>) {
    for node in element.children() {
        match node.value() {
            Node::Text(text) => parts.push(&**text),
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(node)
                    && !is_hidden(child)
                {
                    collect_displayed(child, parts);
                }
            }
            _ => {}
        }
    }
}

/// Joins text nodes, trims, and collapses inner whitespace runs to one space.
pub(crate) fn normalize_text<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    let joined: String = parts.collect();
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn span_attr(element: ElementRef<'_>, name: &str) -> usize {
    element
        .value()
        .attr(name)
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|span| *span > 0)
        .unwrap_or(1)
}
