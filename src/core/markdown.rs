//! Line-oriented Markdown model shared by the body checks.
//!
//! Only what the checks need: ATX headings, `## ` sections and fenced code
//! blocks. Lines inside fences or inside the front-matter block are never
//! treated as headings.

use crate::core::frontmatter;

/// One physical line of a document with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number.
    pub number: usize,
    pub text: &'a str,
    /// Inside a fence (fence delimiters included) or the front-matter block.
    pub literal: bool,
    /// Opening delimiter of a fenced code block.
    pub fence_open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub line_number: usize,
    pub level: usize,
    /// Full heading line, trimmed (e.g. `## Usage`).
    pub line: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Heading line, e.g. `## Related Patterns`.
    pub title: String,
    pub start_line: usize,
    /// Heading line through the line before the next `## ` heading.
    pub text: String,
}

impl Section {
    /// Length in characters, heading included.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Text after the heading line.
    pub fn body(&self) -> &str {
        match self.text.find('\n') {
            Some(pos) => &self.text[pos + 1..],
            None => "",
        }
    }

    /// First non-blank line after the heading, trimmed.
    pub fn first_line(&self) -> Option<&str> {
        self.body()
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
    }

    pub fn subsection_count(&self) -> usize {
        headings(&self.text)
            .iter()
            .filter(|h| h.level == 3)
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// 0-based index of the opening fence line within the scanned text.
    pub open_index: usize,
    /// 0-based index of the closing fence line.
    pub close_index: usize,
}

impl CodeBlock {
    /// Newlines between the opening and closing fence markers.
    pub fn newline_count(&self) -> usize {
        self.close_index - self.open_index
    }
}

fn fence_marker(line: &str) -> Option<&'static str> {
    let trimmed = line.trim_start();
    if trimmed.starts_with("```") {
        Some("```")
    } else if trimmed.starts_with("~~~") {
        Some("~~~")
    } else {
        None
    }
}

/// Heading level of an ATX heading line, if it is one.
pub fn heading_level(line: &str) -> Option<usize> {
    let level = line.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let rest = &line[level..];
    if rest.is_empty() || rest.starts_with(' ') || rest.starts_with('\t') {
        Some(level)
    } else {
        None
    }
}

/// Classify every line of `content`. A leading front-matter block is literal.
pub fn scan(content: &str) -> Vec<Line<'_>> {
    let frontmatter_end = frontmatter::split(content)
        .map(|s| s.body_start_line - 1)
        .unwrap_or(0);

    let mut out = Vec::new();
    let mut open: Option<&'static str> = None;
    for (idx, text) in content.split('\n').enumerate() {
        let number = idx + 1;
        if number <= frontmatter_end {
            out.push(Line {
                number,
                text,
                literal: true,
                fence_open: false,
            });
            continue;
        }

        let marker = fence_marker(text);
        let (literal, fence_open) = match (open, marker) {
            (None, Some(m)) => {
                open = Some(m);
                (true, true)
            }
            (Some(current), Some(m)) if current == m => {
                open = None;
                (true, false)
            }
            (Some(_), _) => (true, false),
            (None, None) => (false, false),
        };
        out.push(Line {
            number,
            text,
            literal,
            fence_open,
        });
    }
    out
}

pub fn headings(content: &str) -> Vec<Heading> {
    scan(content)
        .into_iter()
        .filter(|line| !line.literal)
        .filter_map(|line| {
            heading_level(line.text).map(|level| Heading {
                line_number: line.number,
                level,
                line: line.text.trim().to_string(),
            })
        })
        .collect()
}

/// Split `content` into `## ` sections. Text before the first one is dropped.
pub fn sections(content: &str) -> Vec<Section> {
    let lines = scan(content);
    let starts: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.literal && heading_level(line.text) == Some(2))
        .map(|(idx, _)| idx)
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(n, &start)| {
            let end = starts.get(n + 1).copied().unwrap_or(lines.len());
            let text = lines[start..end]
                .iter()
                .map(|line| line.text)
                .collect::<Vec<_>>()
                .join("\n");
            Section {
                title: lines[start].text.trim().to_string(),
                start_line: lines[start].number,
                text,
            }
        })
        .collect()
}

/// Closed fenced code blocks in `text`. An unclosed fence yields nothing.
pub fn code_blocks(text: &str) -> Vec<CodeBlock> {
    let mut out = Vec::new();
    let mut open: Option<(usize, &'static str)> = None;
    for (idx, line) in text.split('\n').enumerate() {
        let Some(marker) = fence_marker(line) else {
            continue;
        };
        match open {
            None => open = Some((idx, marker)),
            Some((start, current)) if current == marker => {
                out.push(CodeBlock {
                    open_index: start,
                    close_index: idx,
                });
                open = None;
            }
            Some(_) => {}
        }
    }
    out
}

/// `## ` headings whose next non-blank line is another `## ` heading, as
/// `(line_number, heading line)`.
pub fn find_empty_headings(content: &str) -> Vec<(usize, String)> {
    let lines = scan(content);
    let is_h2 = |line: &Line<'_>| !line.literal && heading_level(line.text) == Some(2);

    let mut out = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        if !is_h2(line) {
            continue;
        }
        let next = lines[idx + 1..]
            .iter()
            .find(|candidate| !candidate.text.trim().is_empty());
        if next.is_some_and(is_h2) {
            out.push((line.number, line.text.to_string()));
        }
    }
    out
}

/// Drop empty `## ` headings. Returns the new content and how many were removed.
pub fn remove_empty_headings(content: &str) -> (String, usize) {
    let empty: Vec<usize> = find_empty_headings(content)
        .into_iter()
        .map(|(number, _)| number)
        .collect();
    if empty.is_empty() {
        return (content.to_string(), 0);
    }

    let kept = content
        .split('\n')
        .enumerate()
        .filter(|(idx, _)| !empty.contains(&(idx + 1)))
        .map(|(_, line)| line)
        .collect::<Vec<_>>()
        .join("\n");
    (kept, empty.len())
}
